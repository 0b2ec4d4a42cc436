use crate::foundation::error::{LayoutError, LayoutResult};

/// Screen scale assumed when the caller gives none.
pub const DEFAULT_SCREEN_SCALE: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Caller-facing layout configuration.
///
/// Neither field changes how the overlay algorithm computes geometry:
/// `screen_scale` is a hint carried for downstream pixel snapping
/// (see [`crate::ContentGeometry::snapped`]), and `spacing` is the default
/// gap used by directional stacks.
pub struct LayoutSettings {
    /// Device pixels per layout unit. Must be finite and > 0.
    #[serde(default = "default_screen_scale")]
    pub screen_scale: f64,
    /// Gap between neighbours in directional stacks. Must be finite and >= 0.
    #[serde(default)]
    pub spacing: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            screen_scale: DEFAULT_SCREEN_SCALE,
            spacing: 0.0,
        }
    }
}

impl LayoutSettings {
    /// Check every field, returning the first violation.
    pub fn validate(&self) -> LayoutResult<()> {
        validate_screen_scale(self.screen_scale)?;
        validate_spacing(self.spacing)?;
        Ok(())
    }
}

fn default_screen_scale() -> f64 {
    DEFAULT_SCREEN_SCALE
}

pub(crate) fn validate_screen_scale(scale: f64) -> LayoutResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(LayoutError::validation(format!(
            "screen_scale must be finite and > 0 (got {scale})"
        )));
    }
    Ok(())
}

pub(crate) fn validate_spacing(spacing: f64) -> LayoutResult<()> {
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(LayoutError::validation(format!(
            "spacing must be finite and >= 0 (got {spacing})"
        )));
    }
    Ok(())
}
