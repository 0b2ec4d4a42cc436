use crate::{
    foundation::core::{
        Alignment, Frame, Point, Size, sanitize_proposal, validate_target_size,
    },
    foundation::error::LayoutResult,
    foundation::settings::{DEFAULT_SCREEN_SCALE, LayoutSettings, validate_screen_scale},
    layout::align::{AlignKind, align_offset},
    layout::geometry::ContentGeometry,
    layout::node::SizableNode,
};

/// Lay every node on top of the others inside `target_size`.
///
/// Each node is offered the full target size, then positioned by the shared
/// `alignment`. The ideal size is the per-axis maximum of the node sizes.
///
/// Fails with [`crate::LayoutError::MalformedConstraint`] for a negative or
/// NaN target and with [`crate::LayoutError::UnsupportedAlignment`] for a
/// baseline vertical alignment; no node is queried in either case.
///
/// See [`compute_overlay_layout_scaled`] for the variant taking a screen
/// scale hint.
#[tracing::instrument(level = "debug", skip(nodes), fields(nodes = nodes.len()))]
pub fn compute_overlay_layout<N: SizableNode>(
    nodes: &[N],
    target_size: Size,
    alignment: Alignment,
) -> LayoutResult<ContentGeometry> {
    validate_target_size(target_size)?;
    let vertical = AlignKind::try_from(alignment.vertical)?;
    Ok(overlay_layout(
        nodes,
        target_size,
        alignment.horizontal.into(),
        vertical,
    ))
}

/// [`compute_overlay_layout`] with an optional screen scale hint.
///
/// `None` means [`DEFAULT_SCREEN_SCALE`]. The hint must be finite and
/// positive ([`crate::LayoutError::Validation`] otherwise) but is never
/// applied: the returned geometry is identical for every valid hint.
#[tracing::instrument(
    level = "debug",
    skip(nodes, scale_hint),
    fields(nodes = nodes.len(), screen_scale = tracing::field::Empty)
)]
pub fn compute_overlay_layout_scaled<N: SizableNode>(
    nodes: &[N],
    target_size: Size,
    alignment: Alignment,
    scale_hint: Option<f64>,
) -> LayoutResult<ContentGeometry> {
    let screen_scale = scale_hint.unwrap_or(DEFAULT_SCREEN_SCALE);
    validate_screen_scale(screen_scale)?;
    tracing::Span::current().record("screen_scale", screen_scale);
    validate_target_size(target_size)?;
    let vertical = AlignKind::try_from(alignment.vertical)?;
    Ok(overlay_layout(
        nodes,
        target_size,
        alignment.horizontal.into(),
        vertical,
    ))
}

pub(crate) fn overlay_layout<N: SizableNode>(
    nodes: &[N],
    target: Size,
    horizontal: AlignKind,
    vertical: AlignKind,
) -> ContentGeometry {
    let mut ideal = Size::ZERO;
    let frames = nodes
        .iter()
        .map(|node| {
            let size = node.layout_size(target);
            let origin = Point::new(
                align_offset(target.width, size.width, horizontal),
                align_offset(target.height, size.height, vertical),
            );
            ideal = Size::new(ideal.width.max(size.width), ideal.height.max(size.height));
            Frame::new(origin, size)
        })
        .collect();
    ContentGeometry::new(ideal, frames)
}

/// Overlay container: owns its children and a validated alignment.
///
/// A `ZStack` is itself a [`SizableNode`] reporting its ideal size, so stacks
/// nest freely.
#[derive(Clone, Debug)]
pub struct ZStack<N> {
    nodes: Vec<N>,
    alignment: Alignment,
    horizontal: AlignKind,
    vertical: AlignKind,
    screen_scale: f64,
}

impl<N> ZStack<N> {
    /// Build an overlay; a baseline vertical alignment is rejected here.
    pub fn new(nodes: Vec<N>, alignment: Alignment) -> LayoutResult<Self> {
        let vertical = AlignKind::try_from(alignment.vertical)?;
        Ok(Self {
            nodes,
            alignment,
            horizontal: alignment.horizontal.into(),
            vertical,
            screen_scale: DEFAULT_SCREEN_SCALE,
        })
    }

    /// Set the screen scale hint carried for downstream pixel snapping.
    pub fn with_screen_scale(mut self, screen_scale: f64) -> LayoutResult<Self> {
        validate_screen_scale(screen_scale)?;
        self.screen_scale = screen_scale;
        Ok(self)
    }

    /// Apply the relevant fields of `settings`.
    pub fn with_settings(self, settings: &LayoutSettings) -> LayoutResult<Self> {
        settings.validate()?;
        self.with_screen_scale(settings.screen_scale)
    }

    /// Children in paint order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Shared alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Screen scale hint (never applied to geometry by this type).
    pub fn screen_scale(&self) -> f64 {
        self.screen_scale
    }
}

impl<N: SizableNode> ZStack<N> {
    /// Geometry of the children fitting `target_size`.
    #[tracing::instrument(level = "debug", skip(self), fields(nodes = self.nodes.len()))]
    pub fn content_layout(&self, target_size: Size) -> LayoutResult<ContentGeometry> {
        validate_target_size(target_size)?;
        Ok(overlay_layout(
            &self.nodes,
            target_size,
            self.horizontal,
            self.vertical,
        ))
    }
}

impl<N: SizableNode> SizableNode for ZStack<N> {
    fn layout_size(&self, fitting: Size) -> Size {
        overlay_layout(
            &self.nodes,
            sanitize_proposal(fitting),
            self.horizontal,
            self.vertical,
        )
        .ideal_size
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/zstack.rs"]
mod tests;
