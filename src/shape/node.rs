use crate::{
    foundation::core::{BezPath, Frame, Rect, Size},
    layout::node::SizableNode,
    shape::outline::{Capsule, Circle, Rectangle, RoundedCornerStyle, RoundedRectangle, Shape},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Serializable choice among the built-in shapes.
pub enum ShapeKind {
    /// See [`Rectangle`].
    Rectangle,
    /// See [`Circle`].
    Circle,
    /// See [`RoundedRectangle`].
    RoundedRectangle {
        /// Horizontal and vertical corner radii.
        corner_size: Size,
        /// Corner drawing style.
        #[serde(default)]
        style: RoundedCornerStyle,
    },
    /// See [`Capsule`].
    Capsule {
        /// Corner drawing style.
        #[serde(default)]
        style: RoundedCornerStyle,
    },
}

impl Shape for ShapeKind {
    fn path_in(&self, rect: Rect) -> BezPath {
        match *self {
            ShapeKind::Rectangle => Rectangle.path_in(rect),
            ShapeKind::Circle => Circle.path_in(rect),
            ShapeKind::RoundedRectangle { corner_size, style } => {
                RoundedRectangle::new(corner_size, style).path_in(rect)
            }
            ShapeKind::Capsule { style } => Capsule { style }.path_in(rect),
        }
    }
}

/// A shape taking part in layout.
///
/// Shapes have no intrinsic size: they fill whatever they are offered. An
/// unbounded proposal dimension resolves to zero.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeNode {
    /// Which outline to draw in the resolved frame.
    #[serde(flatten)]
    pub kind: ShapeKind,
    /// Layout priority.
    #[serde(default)]
    pub priority: f64,
}

impl ShapeNode {
    /// A shape node with priority 0.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            priority: 0.0,
        }
    }

    /// Replace the layout priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Outline for a frame produced by a layout pass.
    pub fn path_in(&self, frame: Frame) -> BezPath {
        self.kind.path_in(frame.to_rect())
    }
}

impl SizableNode for ShapeNode {
    fn layout_size(&self, fitting: Size) -> Size {
        fn fill(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }
        Size::new(fill(fitting.width), fill(fitting.height))
    }

    fn layout_priority(&self) -> f64 {
        self.priority
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/node.rs"]
mod tests;
