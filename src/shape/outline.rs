use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect, Size, Vec2};

/// Flattening tolerance used when converting curves to path elements.
pub const PATH_TOLERANCE: f64 = 0.1;

/// A shape that can outline itself inside any frame.
pub trait Shape {
    /// Outline of the shape fitted into `rect`.
    fn path_in(&self, rect: Rect) -> BezPath;
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// How rounded corners are drawn.
///
/// Both styles produce the same outline here; the distinction is carried for
/// rendering backends that can draw continuous (squircle) corners.
pub enum RoundedCornerStyle {
    /// Circular or elliptical arcs.
    #[default]
    Circular,
    /// Continuous-curvature corners.
    Continuous,
}

/// The frame itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn path_in(&self, rect: Rect) -> BezPath {
        let rect = rect.abs();
        if is_degenerate(rect) {
            return BezPath::new();
        }
        rect.to_path(PATH_TOLERANCE)
    }
}

/// Largest circle centred in the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Circle;

impl Shape for Circle {
    fn path_in(&self, rect: Rect) -> BezPath {
        let rect = rect.abs();
        if is_degenerate(rect) {
            return BezPath::new();
        }
        let radius = rect.width().min(rect.height()) / 2.0;
        kurbo::Circle::new(rect.center(), radius).to_path(PATH_TOLERANCE)
    }
}

/// Rectangle with elliptical corners of `corner_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRectangle {
    /// Horizontal and vertical corner radii.
    pub corner_size: Size,
    /// Corner drawing style.
    pub style: RoundedCornerStyle,
}

impl RoundedRectangle {
    /// Corners with independent horizontal and vertical radii.
    pub fn new(corner_size: Size, style: RoundedCornerStyle) -> Self {
        Self { corner_size, style }
    }

    /// Circular corners of `radius`.
    pub fn with_corner_radius(radius: f64, style: RoundedCornerStyle) -> Self {
        Self::new(Size::new(radius, radius), style)
    }
}

impl Shape for RoundedRectangle {
    /// Empty when the frame cannot fit two corners along either axis.
    fn path_in(&self, rect: Rect) -> BezPath {
        let rect = rect.abs();
        if is_degenerate(rect)
            || rect.width() < self.corner_size.width * 2.0
            || rect.height() < self.corner_size.height * 2.0
        {
            return BezPath::new();
        }
        rounded_outline(rect, self.corner_size.width, self.corner_size.height)
    }
}

/// Rectangle whose shorter sides are fully rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capsule {
    /// Corner drawing style.
    pub style: RoundedCornerStyle,
}

impl Shape for Capsule {
    fn path_in(&self, rect: Rect) -> BezPath {
        let rect = rect.abs();
        if is_degenerate(rect) {
            return BezPath::new();
        }
        let radius = rect.width().min(rect.height()) / 2.0;
        rounded_outline(rect, radius, radius)
    }
}

fn is_degenerate(rect: Rect) -> bool {
    !(rect.width() > 0.0 && rect.height() > 0.0)
}

// Clockwise from the top edge; each side is a line followed by a corner arc.
fn rounded_outline(rect: Rect, rx: f64, ry: f64) -> BezPath {
    if rx <= 0.0 || ry <= 0.0 {
        return rect.to_path(PATH_TOLERANCE);
    }
    let radii = Vec2::new(rx, ry);
    let corners = [
        (Point::new(rect.x1 - rx, rect.y0), Point::new(rect.x1 - rx, rect.y0 + ry), -FRAC_PI_2),
        (Point::new(rect.x1, rect.y1 - ry), Point::new(rect.x1 - rx, rect.y1 - ry), 0.0),
        (Point::new(rect.x0 + rx, rect.y1), Point::new(rect.x0 + rx, rect.y1 - ry), FRAC_PI_2),
        (Point::new(rect.x0, rect.y0 + ry), Point::new(rect.x0 + rx, rect.y0 + ry), PI),
    ];

    let mut path = BezPath::new();
    path.move_to((rect.x0 + rx, rect.y0));
    for (start, center, start_angle) in corners {
        path.line_to(start);
        let arc = kurbo::Arc {
            center,
            radii,
            start_angle,
            sweep_angle: FRAC_PI_2,
            x_rotation: 0.0,
        };
        path.extend(arc.append_iter(PATH_TOLERANCE));
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/shape/outline.rs"]
mod tests;
