use std::sync::Arc;

use crate::foundation::core::{Size, flip_size};

/// Capability contract for anything that takes part in layout.
///
/// Layout algorithms only ever query a node; they never mutate it. Answers
/// must be a pure function of the node's own state and the proposal.
pub trait SizableNode {
    /// Size the node wants when offered `fitting`.
    ///
    /// Either dimension of `fitting` may be [`crate::UNBOUNDED`]. The result may
    /// exceed the proposal; handling overflow is the caller's job. A node that
    /// cannot size itself meaningfully returns a zero size.
    fn layout_size(&self, fitting: Size) -> Size;

    /// Whether this node is a pure flexible filler with no intrinsic content.
    fn is_spacer(&self) -> bool {
        false
    }

    /// Ranking used when space is contested; higher is sized first.
    fn layout_priority(&self) -> f64 {
        0.0
    }

    /// Present this node with its width and height swapped.
    fn axis_flipped(self) -> AxisFlipped<Self>
    where
        Self: Sized,
    {
        AxisFlipped::new(self)
    }
}

impl<T: SizableNode + ?Sized> SizableNode for &T {
    fn layout_size(&self, fitting: Size) -> Size {
        (**self).layout_size(fitting)
    }

    fn is_spacer(&self) -> bool {
        (**self).is_spacer()
    }

    fn layout_priority(&self) -> f64 {
        (**self).layout_priority()
    }
}

impl<T: SizableNode + ?Sized> SizableNode for Box<T> {
    fn layout_size(&self, fitting: Size) -> Size {
        (**self).layout_size(fitting)
    }

    fn is_spacer(&self) -> bool {
        (**self).is_spacer()
    }

    fn layout_priority(&self) -> f64 {
        (**self).layout_priority()
    }
}

impl<T: SizableNode + ?Sized> SizableNode for Arc<T> {
    fn layout_size(&self, fitting: Size) -> Size {
        (**self).layout_size(fitting)
    }

    fn is_spacer(&self) -> bool {
        (**self).is_spacer()
    }

    fn layout_priority(&self) -> f64 {
        (**self).layout_priority()
    }
}

/// Transparent wrapper that swaps width and height on the way in and out.
///
/// Lets an algorithm written for a horizontal main axis serve the vertical
/// case. Wrapping twice answers every query exactly like the bare node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFlipped<N> {
    inner: N,
}

impl<N> AxisFlipped<N> {
    /// Wrap `inner`.
    pub fn new(inner: N) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped node.
    pub fn get_ref(&self) -> &N {
        &self.inner
    }

    /// Unwrap the node.
    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: SizableNode> SizableNode for AxisFlipped<N> {
    fn layout_size(&self, fitting: Size) -> Size {
        flip_size(self.inner.layout_size(flip_size(fitting)))
    }

    fn is_spacer(&self) -> bool {
        self.inner.is_spacer()
    }

    fn layout_priority(&self) -> f64 {
        self.inner.layout_priority()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/node.rs"]
mod tests;
