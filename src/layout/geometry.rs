use crate::foundation::{
    core::{Frame, Point, Rect, Size, Vec2},
    error::LayoutResult,
    math::snap_to_grid,
    settings::validate_screen_scale,
};

/// Result of one layout pass: the container's ideal size plus one frame per
/// input node, index-aligned with the input.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentGeometry {
    /// Size the container would like to be after sizing its children.
    pub ideal_size: Size,
    /// `frames[i]` belongs to input node `i`.
    pub frames: Vec<Frame>,
}

impl ContentGeometry {
    /// Assemble a geometry value.
    pub fn new(ideal_size: Size, frames: Vec<Frame>) -> Self {
        Self { ideal_size, frames }
    }

    /// Geometry of a container with no children.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame of input node `index`, if any.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        self.frames.get(index).copied()
    }

    /// Union of all frames, `None` when there are none.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.frames.iter();
        let first = it.next()?.to_rect();
        Some(it.fold(first, |acc, f| acc.union(f.to_rect())))
    }

    /// Move every frame by `offset`; the ideal size is unchanged.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            ideal_size: self.ideal_size,
            frames: self.frames.iter().map(|f| f.translated(offset)).collect(),
        }
    }

    /// Snap every frame edge to the device pixel grid of `screen_scale`;
    /// sizes are recomputed from the snapped edges.
    ///
    /// Layout algorithms never call this; it exists for rendering steps that
    /// want pixel-aligned frames.
    pub fn snapped(&self, screen_scale: f64) -> LayoutResult<Self> {
        validate_screen_scale(screen_scale)?;
        let snap = |v: f64| snap_to_grid(v, screen_scale);
        Ok(Self {
            ideal_size: Size::new(snap(self.ideal_size.width), snap(self.ideal_size.height)),
            frames: self
                .frames
                .iter()
                .map(|f| {
                    let (x0, y0) = (snap(f.min_x()), snap(f.min_y()));
                    let (x1, y1) = (snap(f.max_x()), snap(f.max_y()));
                    Frame::new(Point::new(x0, y0), Size::new(x1 - x0, y1 - y0))
                })
                .collect(),
        })
    }
}
