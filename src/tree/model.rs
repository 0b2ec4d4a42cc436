use crate::{
    foundation::core::{
        Alignment, HorizontalAlignment, Size, VerticalAlignment, sanitize_proposal,
    },
    foundation::error::{LayoutError, LayoutResult},
    foundation::settings::validate_spacing,
    layout::align::AlignKind,
    layout::geometry::ContentGeometry,
    layout::leaf::{CompressibleNode, Spacer, validate_extent},
    layout::node::SizableNode,
    layout::stack::{Axis, stack_layout},
    layout::zstack::overlay_layout,
    shape::node::{ShapeKind, ShapeNode},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declarative description of a layout hierarchy.
///
/// A tree can be:
/// - built programmatically (see [`crate::dsl`])
/// - serialized/deserialized via Serde (JSON)
///
/// It holds no layout state; every query recomputes from the description.
pub struct LayoutTree {
    /// Layout priority of this node inside a directional parent.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub priority: f64,
    /// What this node is.
    #[serde(flatten)]
    pub node: TreeNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Node variants of a [`LayoutTree`].
pub enum TreeNode {
    /// Fixed intrinsic size.
    Fixed {
        /// Reported width.
        width: f64,
        /// Reported height.
        height: f64,
    },
    /// Shrinks from `ideal` down to `min`.
    Compressible {
        /// Preferred size.
        ideal: Size,
        /// Smallest accepted size.
        min: Size,
    },
    /// Flexible filler.
    Spacer {
        /// Minimum main-axis length.
        #[serde(default)]
        min_length: f64,
    },
    /// Shape filling its proposal.
    Shape {
        /// Outline to draw.
        shape: ShapeKind,
    },
    /// Overlay container.
    ZStack {
        /// Shared alignment of every child.
        #[serde(default)]
        alignment: Alignment,
        /// Children in paint order.
        #[serde(default)]
        children: Vec<LayoutTree>,
    },
    /// Horizontal directional container.
    HStack {
        /// Cross-axis alignment.
        #[serde(default)]
        alignment: VerticalAlignment,
        /// Gap between neighbours.
        #[serde(default)]
        spacing: f64,
        /// Children left to right.
        #[serde(default)]
        children: Vec<LayoutTree>,
    },
    /// Vertical directional container.
    VStack {
        /// Cross-axis alignment.
        #[serde(default)]
        alignment: HorizontalAlignment,
        /// Gap between neighbours.
        #[serde(default)]
        spacing: f64,
        /// Children top to bottom.
        #[serde(default)]
        children: Vec<LayoutTree>,
    },
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl LayoutTree {
    /// Wrap a node with priority 0.
    pub fn new(node: TreeNode) -> Self {
        Self {
            priority: 0.0,
            node,
        }
    }

    /// Parse and validate a tree from JSON.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let tree: Self = serde_json::from_str(json)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Stable snake_case name of the node variant.
    pub fn kind_name(&self) -> &'static str {
        match self.node {
            TreeNode::Fixed { .. } => "fixed",
            TreeNode::Compressible { .. } => "compressible",
            TreeNode::Spacer { .. } => "spacer",
            TreeNode::Shape { .. } => "shape",
            TreeNode::ZStack { .. } => "z_stack",
            TreeNode::HStack { .. } => "h_stack",
            TreeNode::VStack { .. } => "v_stack",
        }
    }

    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[LayoutTree] {
        match &self.node {
            TreeNode::ZStack { children, .. }
            | TreeNode::HStack { children, .. }
            | TreeNode::VStack { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Check the whole tree, returning the first violation found in pre-order.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.priority.is_nan() {
            return Err(LayoutError::validation(format!(
                "{} priority is NaN",
                self.kind_name()
            )));
        }
        match &self.node {
            TreeNode::Fixed { width, height } => {
                validate_extent("fixed size", Size::new(*width, *height))?;
            }
            TreeNode::Compressible { ideal, min } => {
                CompressibleNode::new(*ideal, *min)?;
            }
            TreeNode::Spacer { min_length } => {
                Spacer::new(*min_length)?;
            }
            TreeNode::Shape { shape } => {
                if let ShapeKind::RoundedRectangle { corner_size, .. } = shape {
                    validate_extent("corner size", *corner_size)?;
                }
            }
            TreeNode::ZStack { alignment, .. } => {
                AlignKind::try_from(alignment.vertical)?;
            }
            TreeNode::HStack {
                alignment, spacing, ..
            } => {
                AlignKind::try_from(*alignment)?;
                validate_spacing(*spacing)?;
            }
            TreeNode::VStack { spacing, .. } => {
                validate_spacing(*spacing)?;
            }
        }
        self.children().iter().try_for_each(LayoutTree::validate)
    }

    /// Lay out this node's children inside `target`; leaves yield no frames.
    pub(crate) fn children_geometry(&self, target: Size) -> LayoutResult<ContentGeometry> {
        match &self.node {
            TreeNode::ZStack {
                alignment,
                children,
            } => {
                let vertical = AlignKind::try_from(alignment.vertical)?;
                Ok(overlay_layout(
                    children,
                    target,
                    alignment.horizontal.into(),
                    vertical,
                ))
            }
            TreeNode::HStack {
                alignment,
                spacing,
                children,
            } => {
                let cross = AlignKind::try_from(*alignment)?;
                validate_spacing(*spacing)?;
                Ok(stack_layout(
                    children,
                    Axis::Horizontal,
                    target,
                    cross,
                    *spacing,
                ))
            }
            TreeNode::VStack {
                alignment,
                spacing,
                children,
            } => {
                validate_spacing(*spacing)?;
                Ok(stack_layout(
                    children,
                    Axis::Vertical,
                    target,
                    (*alignment).into(),
                    *spacing,
                ))
            }
            _ => Ok(ContentGeometry::empty()),
        }
    }
}

impl SizableNode for LayoutTree {
    fn layout_size(&self, fitting: Size) -> Size {
        match &self.node {
            TreeNode::Fixed { width, height } => Size::new(*width, *height),
            TreeNode::Compressible { ideal, min } => CompressibleNode {
                ideal: *ideal,
                min: *min,
                priority: self.priority,
            }
            .layout_size(fitting),
            TreeNode::Spacer { min_length } => Spacer {
                min_length: *min_length,
            }
            .layout_size(fitting),
            TreeNode::Shape { shape } => ShapeNode::new(*shape).layout_size(fitting),
            // An invalid container cannot size itself; the node contract says zero.
            _ => self
                .children_geometry(sanitize_proposal(fitting))
                .map(|g| g.ideal_size)
                .unwrap_or(Size::ZERO),
        }
    }

    fn is_spacer(&self) -> bool {
        matches!(self.node, TreeNode::Spacer { .. })
    }

    fn layout_priority(&self) -> f64 {
        self.priority
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/model.rs"]
mod tests;
