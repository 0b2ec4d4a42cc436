//! declayout is a layout negotiation engine for declarative user interfaces.
//!
//! A parent proposes a size to each child, each child answers with the size it wants, and the
//! parent turns the answers into frames. Everything is a pure function of its inputs: no layout
//! state is cached between queries.
//!
//! # Building blocks
//!
//! 1. **Nodes**: anything implementing [`SizableNode`] (leaves such as [`FixedNode`],
//!    [`CompressibleNode`], [`Spacer`] and [`ShapeNode`], or containers).
//! 2. **Algorithms**: [`compute_overlay_layout`] stacks nodes on top of each other and
//!    [`compute_stack_layout`] lines them up along an [`Axis`].
//! 3. **Containers**: [`ZStack`], [`HStack`] and [`VStack`] own their children and are nodes
//!    themselves, so they nest.
//! 4. **Trees**: [`LayoutTree`] is a serializable description built with [`dsl`] or loaded from
//!    JSON, resolved into absolute frames by [`LayoutTree::resolve`].
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs give bit-identical frames; see [`fingerprint_geometry`].
//! - **Unsnapped geometry**: the screen scale is a hint only; snapping is the caller's choice
//!   ([`ContentGeometry::snapped`]).
//!
//! For a longer walkthrough, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod layout;
mod shape;
mod tree;

/// Standalone documentation of the layout model and its rules.
pub mod guide;

pub use foundation::core::{
    Alignment, BezPath, Frame, HorizontalAlignment, Point, Rect, Size, UNBOUNDED, UNBOUNDED_SIZE,
    Vec2, VerticalAlignment, flip_size, validate_target_size,
};
pub use foundation::error::{LayoutError, LayoutResult};
pub use foundation::settings::{DEFAULT_SCREEN_SCALE, LayoutSettings};
pub use layout::fingerprint::{GeometryFingerprint, fingerprint_geometry};
pub use layout::geometry::ContentGeometry;
pub use layout::leaf::{CompressibleNode, FixedNode, Spacer};
pub use layout::node::{AxisFlipped, SizableNode};
pub use layout::stack::{Axis, HStack, VStack, compute_stack_layout};
pub use layout::zstack::{ZStack, compute_overlay_layout, compute_overlay_layout_scaled};
pub use shape::node::{ShapeKind, ShapeNode};
pub use shape::outline::{
    Capsule, Circle, PATH_TOLERANCE, Rectangle, RoundedCornerStyle, RoundedRectangle, Shape,
};
pub use tree::dsl;
pub use tree::model::{LayoutTree, TreeNode};
pub use tree::resolve::PlacedNode;
