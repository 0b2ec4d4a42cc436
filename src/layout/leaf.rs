use crate::{
    foundation::core::Size,
    foundation::error::{LayoutError, LayoutResult},
    layout::node::SizableNode,
};

/// A node with one intrinsic size that ignores the proposal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FixedNode {
    /// The size reported for every proposal.
    pub size: Size,
    /// Layout priority.
    #[serde(default)]
    pub priority: f64,
}

impl FixedNode {
    /// A fixed node of `width` by `height` with priority 0.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            priority: 0.0,
        }
    }

    /// Replace the layout priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }
}

impl SizableNode for FixedNode {
    fn layout_size(&self, _fitting: Size) -> Size {
        self.size
    }

    fn layout_priority(&self) -> f64 {
        self.priority
    }
}

/// A node that shrinks from its ideal size down to a minimum when offered less.
///
/// Per axis the answer is `clamp(fitting, min, ideal)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompressibleNode {
    /// Preferred size; never exceeded.
    pub ideal: Size,
    /// Smallest size the node accepts.
    pub min: Size,
    /// Layout priority.
    #[serde(default)]
    pub priority: f64,
}

impl CompressibleNode {
    /// Build a compressible node, checking `0 <= min <= ideal` per axis.
    pub fn new(ideal: Size, min: Size) -> LayoutResult<Self> {
        let node = Self {
            ideal,
            min,
            priority: 0.0,
        };
        node.validate()?;
        Ok(node)
    }

    /// Replace the layout priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    pub(crate) fn validate(&self) -> LayoutResult<()> {
        validate_extent("compressible ideal", self.ideal)?;
        validate_extent("compressible min", self.min)?;
        if self.min.width > self.ideal.width || self.min.height > self.ideal.height {
            return Err(LayoutError::validation(format!(
                "compressible min {:?} exceeds ideal {:?}",
                self.min, self.ideal
            )));
        }
        Ok(())
    }
}

impl SizableNode for CompressibleNode {
    fn layout_size(&self, fitting: Size) -> Size {
        Size::new(
            fitting.width.min(self.ideal.width).max(self.min.width),
            fitting.height.min(self.ideal.height).max(self.min.height),
        )
    }

    fn layout_priority(&self) -> f64 {
        self.priority
    }
}

/// Flexible filler that absorbs the slack of a directional stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spacer {
    /// Minimum length along the stack's main axis.
    #[serde(default)]
    pub min_length: f64,
}

impl Spacer {
    /// A spacer with a minimum length, which must be finite and >= 0.
    pub fn new(min_length: f64) -> LayoutResult<Self> {
        let spacer = Self { min_length };
        spacer.validate()?;
        Ok(spacer)
    }

    pub(crate) fn validate(&self) -> LayoutResult<()> {
        if !self.min_length.is_finite() || self.min_length < 0.0 {
            return Err(LayoutError::validation(format!(
                "spacer min_length must be finite and >= 0 (got {})",
                self.min_length
            )));
        }
        Ok(())
    }
}

impl SizableNode for Spacer {
    fn layout_size(&self, _fitting: Size) -> Size {
        Size::new(self.min_length, self.min_length)
    }

    fn is_spacer(&self) -> bool {
        true
    }
}

pub(crate) fn validate_extent(what: &str, size: Size) -> LayoutResult<()> {
    if !size.width.is_finite() || !size.height.is_finite() {
        return Err(LayoutError::validation(format!(
            "{what} must be finite (got {size:?})"
        )));
    }
    if size.width < 0.0 || size.height < 0.0 {
        return Err(LayoutError::validation(format!(
            "{what} must be >= 0 (got {size:?})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/leaf.rs"]
mod tests;
