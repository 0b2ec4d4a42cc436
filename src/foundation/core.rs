use crate::foundation::error::{LayoutError, LayoutResult};

pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// A node's placement in its parent's coordinate space (origin top-left).
///
/// The size is stored exactly as the node reported it; edges are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Top-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl Frame {
    /// Zero-sized frame at the origin.
    pub const ZERO: Self = Self::new(Point::ORIGIN, Size::ZERO);

    /// Frame from an origin and a size.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Like [`Frame::new`], accepting anything convertible (e.g. tuples).
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Self {
        Self::new(origin.into(), size.into())
    }

    /// Width of the frame.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the frame.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Right edge, `origin.x + width`.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge, `origin.y + height`.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Edge-based rectangle for path building and unions.
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Same size, origin moved by `offset`.
    pub fn translated(self, offset: Vec2) -> Self {
        Self::new(self.origin + offset, self.size)
    }
}

/// Sentinel for an unconstrained proposal dimension.
pub const UNBOUNDED: f64 = f64::INFINITY;

/// A proposal that constrains neither axis.
pub const UNBOUNDED_SIZE: Size = Size::new(UNBOUNDED, UNBOUNDED);

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Horizontal alignment of content inside a container.
pub enum HorizontalAlignment {
    /// Align to the leading (left) edge.
    Leading,
    /// Center horizontally.
    #[default]
    Center,
    /// Align to the trailing (right) edge.
    Trailing,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Vertical alignment of content inside a container.
///
/// The baseline variants are declared for completeness; overlay and horizontal
/// stack layouts reject them with [`LayoutError::UnsupportedAlignment`].
pub enum VerticalAlignment {
    /// Align to the top edge.
    Top,
    /// Center vertically.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
    /// Align the first text baselines.
    FirstBaseline,
    /// Align the last text baselines.
    LastBaseline,
}

impl VerticalAlignment {
    /// Whether this is one of the text baseline variants.
    pub fn is_baseline(self) -> bool {
        matches!(self, Self::FirstBaseline | Self::LastBaseline)
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
/// Two-axis alignment descriptor.
pub struct Alignment {
    /// Horizontal component.
    #[serde(default)]
    pub horizontal: HorizontalAlignment,
    /// Vertical component.
    #[serde(default)]
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Top-leading corner.
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    /// Top edge, horizontally centered.
    pub const TOP: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Top);
    /// Top-trailing corner.
    pub const TOP_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
    /// Leading edge, vertically centered.
    pub const LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Center);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Trailing edge, vertically centered.
    pub const TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Center);
    /// Bottom-leading corner.
    pub const BOTTOM_LEADING: Self =
        Self::new(HorizontalAlignment::Leading, VerticalAlignment::Bottom);
    /// Bottom edge, horizontally centered.
    pub const BOTTOM: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Bottom);
    /// Bottom-trailing corner.
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    /// Build an alignment from its two components.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Swap width and height.
pub fn flip_size(size: Size) -> Size {
    Size::new(size.height, size.width)
}

/// Swap the x/y roles of a frame (origin and size).
pub(crate) fn flip_frame(frame: Frame) -> Frame {
    Frame::new(Point::new(frame.origin.y, frame.origin.x), flip_size(frame.size))
}

/// Reject a target size with a negative or NaN component.
///
/// Infinite components are allowed; they mean "unbounded".
pub fn validate_target_size(size: Size) -> LayoutResult<()> {
    for (axis, v) in [("width", size.width), ("height", size.height)] {
        if v.is_nan() {
            return Err(LayoutError::malformed_constraint(format!(
                "target {axis} is NaN"
            )));
        }
        if v < 0.0 {
            return Err(LayoutError::malformed_constraint(format!(
                "target {axis} must be >= 0 (got {v})"
            )));
        }
    }
    Ok(())
}

/// Clamp a proposal so that nested containers never see a malformed target.
pub(crate) fn sanitize_proposal(size: Size) -> Size {
    fn axis(v: f64) -> f64 {
        if v.is_nan() { 0.0 } else { v.max(0.0) }
    }
    Size::new(axis(size.width), axis(size.height))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
