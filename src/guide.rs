//! # declayout guide (v0.1.0)
//!
//! A standalone walkthrough of how layout negotiation works in this crate and which rules every
//! algorithm follows. If you only need the API, the crate root docs and [`crate::dsl`] are enough.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`SizableNode`](crate::SizableNode): answers "what size do you want if offered this much?"
//! - [`ContentGeometry`](crate::ContentGeometry): the ideal size of a container's content plus
//!   one frame per child, in input order
//! - [`Alignment`](crate::Alignment): a horizontal and a vertical component; the two baseline
//!   variants exist for completeness and are rejected by every layout here
//! - [`LayoutTree`](crate::LayoutTree): a serializable hierarchy resolved into
//!   [`PlacedNode`](crate::PlacedNode)s
//!
//! Frames use a top-left origin with y growing downward. A [`Frame`](crate::Frame) stores an
//! origin and the size the node reported, bit for bit; edges are derived from them. Sizes are
//! `f64` points and are never rounded by the algorithms.
//!
//! ---
//!
//! ## Proposals
//!
//! A proposal is a [`Size`](crate::Size). A component equal to [`UNBOUNDED`](crate::UNBOUNDED)
//! means "take what you need". Public entry points reject a proposal with a negative or NaN
//! component with [`LayoutError::MalformedConstraint`](crate::LayoutError::MalformedConstraint)
//! before any node is queried. Nested containers clamp what they forward instead, so a node deep
//! in a tree never sees a malformed proposal.
//!
//! A node may answer with more than it was offered. Containers keep such answers; content then
//! overflows and alignment offsets go negative.
//!
//! ---
//!
//! ## Overlay
//!
//! [`compute_overlay_layout`](crate::compute_overlay_layout) offers every node the whole target
//! and positions each answer with the shared alignment:
//!
//! ```text
//! x = 0 | (target.w - w) / 2 | target.w - w     (leading | center | trailing)
//! y = 0 | (target.h - h) / 2 | target.h - h     (top | center | bottom)
//! ```
//!
//! The ideal size is the per-axis maximum of the answers (zero when there are no nodes). Nodes are
//! queried exactly once each, in input order.
//!
//! ---
//!
//! ## Directional stacks
//!
//! [`compute_stack_layout`](crate::compute_stack_layout) lines nodes up along an
//! [`Axis`](crate::Axis). The main axis is negotiated in three steps:
//!
//! 1. spacers reserve their minimum length;
//! 2. the other nodes are sized by descending priority; siblings of equal priority are offered
//!    an equal share of what is left and anything a node leaves unused carries over;
//! 3. leftover space is split equally among the spacers.
//!
//! The vertical stack runs the horizontal algorithm through
//! [`AxisFlipped`](crate::AxisFlipped) and flips the frames back. Flipping twice is the identity,
//! which is what makes this sound.
//!
//! ---
//!
//! ## Shapes
//!
//! [`ShapeNode`](crate::ShapeNode) fills whatever it is offered. Once a frame is known,
//! [`Shape::path_in`](crate::Shape::path_in) on [`Frame::to_rect`](crate::Frame::to_rect)
//! returns the outline as a
//! [`BezPath`](crate::BezPath), ready for any kurbo-based renderer.
//!
//! ---
//!
//! ## Screen scale
//!
//! [`ZStack`](crate::ZStack) and [`LayoutSettings`](crate::LayoutSettings) carry a screen scale
//! (default [`DEFAULT_SCREEN_SCALE`](crate::DEFAULT_SCREEN_SCALE)). No algorithm applies it.
//! Callers that want device-pixel alignment call
//! [`ContentGeometry::snapped`](crate::ContentGeometry::snapped) explicitly.
//!
//! ---
//!
//! ## Determinism
//!
//! Every operation is a pure function of its inputs and is safe to run from many threads at once.
//! [`fingerprint_geometry`](crate::fingerprint_geometry) hashes the exact bits of a geometry so
//! fixtures can pin results across platforms.
