//! Builder functions for [`LayoutTree`] values.
//!
//! ```
//! use declayout::{Alignment, HorizontalAlignment, LayoutTree, Size, VerticalAlignment, dsl};
//!
//! let card: LayoutTree = dsl::z_stack(
//!     Alignment::CENTER,
//!     [
//!         dsl::shape(declayout::ShapeKind::Capsule { style: Default::default() }),
//!         dsl::h_stack(
//!             VerticalAlignment::Center,
//!             [dsl::fixed(24.0, 24.0), dsl::spacer(), dsl::fixed(60.0, 16.0)],
//!         )
//!         .with_spacing(8.0),
//!     ],
//! );
//! let placed = card.resolve(Size::new(200.0, 40.0), Alignment::TOP_LEADING).unwrap();
//! assert_eq!(placed.len(), 6);
//! # let _ = HorizontalAlignment::Center;
//! ```

use crate::{
    foundation::core::{Alignment, HorizontalAlignment, Size, VerticalAlignment},
    shape::node::ShapeKind,
    tree::model::{LayoutTree, TreeNode},
};

/// Leaf with a fixed intrinsic size.
pub fn fixed(width: f64, height: f64) -> LayoutTree {
    LayoutTree::new(TreeNode::Fixed { width, height })
}

/// Leaf shrinking from `ideal` down to `min`.
pub fn compressible(ideal: Size, min: Size) -> LayoutTree {
    LayoutTree::new(TreeNode::Compressible { ideal, min })
}

/// Spacer with no minimum length.
pub fn spacer() -> LayoutTree {
    spacer_min(0.0)
}

/// Spacer with a minimum main-axis length.
pub fn spacer_min(min_length: f64) -> LayoutTree {
    LayoutTree::new(TreeNode::Spacer { min_length })
}

/// Shape leaf filling its proposal.
pub fn shape(shape: ShapeKind) -> LayoutTree {
    LayoutTree::new(TreeNode::Shape { shape })
}

/// Overlay container.
pub fn z_stack(
    alignment: Alignment,
    children: impl IntoIterator<Item = LayoutTree>,
) -> LayoutTree {
    LayoutTree::new(TreeNode::ZStack {
        alignment,
        children: children.into_iter().collect(),
    })
}

/// Horizontal container with no spacing.
pub fn h_stack(
    alignment: VerticalAlignment,
    children: impl IntoIterator<Item = LayoutTree>,
) -> LayoutTree {
    LayoutTree::new(TreeNode::HStack {
        alignment,
        spacing: 0.0,
        children: children.into_iter().collect(),
    })
}

/// Vertical container with no spacing.
pub fn v_stack(
    alignment: HorizontalAlignment,
    children: impl IntoIterator<Item = LayoutTree>,
) -> LayoutTree {
    LayoutTree::new(TreeNode::VStack {
        alignment,
        spacing: 0.0,
        children: children.into_iter().collect(),
    })
}

impl LayoutTree {
    /// Replace the layout priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Set the gap between neighbours of a directional container.
    ///
    /// Other node kinds are returned unchanged.
    pub fn with_spacing(mut self, gap: f64) -> Self {
        if let TreeNode::HStack { spacing, .. } | TreeNode::VStack { spacing, .. } =
            &mut self.node
        {
            *spacing = gap;
        }
        self
    }
}
