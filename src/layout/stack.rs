use crate::{
    foundation::core::{
        Alignment, Frame, HorizontalAlignment, Point, Size, VerticalAlignment, flip_frame,
        flip_size, sanitize_proposal, validate_target_size,
    },
    foundation::error::LayoutResult,
    foundation::settings::{LayoutSettings, validate_spacing},
    layout::align::{AlignKind, align_offset},
    layout::geometry::ContentGeometry,
    layout::node::{AxisFlipped, SizableNode},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Main axis of a directional stack.
pub enum Axis {
    /// Children run left to right.
    Horizontal,
    /// Children run top to bottom.
    Vertical,
}

/// Distribute `target_size` along `axis` among `nodes`.
///
/// Only the cross-axis component of `cross_alignment` is used: the vertical
/// component for [`Axis::Horizontal`], the horizontal one for
/// [`Axis::Vertical`]. Sizing order and slack rules:
///
/// - spacers reserve their minimum length first;
/// - other nodes are sized in descending `layout_priority`, ties in input
///   order; nodes of equal priority are offered an equal share of what is
///   left, and whatever a node does not take carries over to the next;
/// - remaining slack is split equally among spacers (none when the main axis
///   is unbounded).
///
/// Children are packed from the origin with `spacing` between neighbours and
/// aligned on the cross axis within the stack's ideal cross size.
#[tracing::instrument(level = "debug", skip(nodes), fields(nodes = nodes.len()))]
pub fn compute_stack_layout<N: SizableNode>(
    nodes: &[N],
    axis: Axis,
    target_size: Size,
    cross_alignment: Alignment,
    spacing: f64,
) -> LayoutResult<ContentGeometry> {
    validate_target_size(target_size)?;
    validate_spacing(spacing)?;
    let cross = match axis {
        Axis::Horizontal => AlignKind::try_from(cross_alignment.vertical)?,
        Axis::Vertical => AlignKind::from(cross_alignment.horizontal),
    };
    Ok(stack_layout(nodes, axis, target_size, cross, spacing))
}

pub(crate) fn stack_layout<N: SizableNode>(
    nodes: &[N],
    axis: Axis,
    target: Size,
    cross: AlignKind,
    spacing: f64,
) -> ContentGeometry {
    match axis {
        Axis::Horizontal => distribute_main_axis(nodes, target, cross, spacing),
        Axis::Vertical => {
            let flipped: Vec<AxisFlipped<&N>> = nodes.iter().map(AxisFlipped::new).collect();
            let g = distribute_main_axis(&flipped, flip_size(target), cross, spacing);
            ContentGeometry::new(
                flip_size(g.ideal_size),
                g.frames.into_iter().map(flip_frame).collect(),
            )
        }
    }
}

// Main axis is width, cross axis is height.
fn distribute_main_axis<N: SizableNode>(
    nodes: &[N],
    target: Size,
    cross: AlignKind,
    spacing: f64,
) -> ContentGeometry {
    if nodes.is_empty() {
        return ContentGeometry::empty();
    }

    let gaps = spacing * (nodes.len() - 1) as f64;
    let spacer: Vec<bool> = nodes.iter().map(|n| n.is_spacer()).collect();
    let mut sizes = vec![Size::ZERO; nodes.len()];
    let mut remaining = (target.width - gaps).max(0.0);

    let spacer_count = spacer.iter().filter(|s| **s).count();
    for (idx, node) in nodes.iter().enumerate().filter(|(i, _)| spacer[*i]) {
        let min = node.layout_size(Size::new(0.0, target.height)).width;
        sizes[idx] = Size::new(min, 0.0);
        remaining -= min;
    }

    let priority: Vec<f64> = nodes.iter().map(|n| n.layout_priority()).collect();
    let mut order: Vec<usize> = (0..nodes.len()).filter(|&i| !spacer[i]).collect();
    order.sort_by(|&a, &b| priority[b].total_cmp(&priority[a]));

    for group in order.chunk_by(|&a, &b| priority[a] == priority[b]) {
        for (k, &idx) in group.iter().enumerate() {
            let share = remaining.max(0.0) / (group.len() - k) as f64;
            let size = nodes[idx].layout_size(Size::new(share, target.height));
            sizes[idx] = size;
            remaining -= size.width;
        }
    }

    if remaining < 0.0 {
        tracing::debug!(overflow = -remaining, "stack content overflows its main axis");
    }

    let slack = remaining.max(0.0);
    if spacer_count > 0 && slack.is_finite() {
        let share = slack / spacer_count as f64;
        for (idx, size) in sizes.iter_mut().enumerate() {
            if spacer[idx] {
                size.width += share;
            }
        }
    }

    let cross_ideal = sizes
        .iter()
        .zip(&spacer)
        .filter(|(_, s)| !**s)
        .fold(0.0f64, |acc, (size, _)| acc.max(size.height));
    let main_ideal = sizes.iter().map(|s| s.width).sum::<f64>() + gaps;

    let mut x = 0.0;
    let frames = sizes
        .iter()
        .zip(&spacer)
        .map(|(&size, &is_spacer)| {
            let size = if is_spacer {
                Size::new(size.width, cross_ideal)
            } else {
                size
            };
            let y = align_offset(cross_ideal, size.height, cross);
            let frame = Frame::new(Point::new(x, y), size);
            x += size.width + spacing;
            frame
        })
        .collect();

    ContentGeometry::new(Size::new(main_ideal, cross_ideal), frames)
}

#[derive(Clone, Debug)]
struct StackCore<N> {
    nodes: Vec<N>,
    axis: Axis,
    cross: AlignKind,
    spacing: f64,
}

impl<N> StackCore<N> {
    fn with_spacing(mut self, spacing: f64) -> LayoutResult<Self> {
        validate_spacing(spacing)?;
        self.spacing = spacing;
        Ok(self)
    }
}

impl<N: SizableNode> StackCore<N> {
    fn content_layout(&self, target: Size) -> LayoutResult<ContentGeometry> {
        validate_target_size(target)?;
        Ok(stack_layout(
            &self.nodes,
            self.axis,
            target,
            self.cross,
            self.spacing,
        ))
    }

    fn ideal_size(&self, fitting: Size) -> Size {
        stack_layout(
            &self.nodes,
            self.axis,
            sanitize_proposal(fitting),
            self.cross,
            self.spacing,
        )
        .ideal_size
    }
}

/// Horizontal stack: children left to right, aligned vertically.
#[derive(Clone, Debug)]
pub struct HStack<N> {
    core: StackCore<N>,
    alignment: VerticalAlignment,
}

impl<N> HStack<N> {
    /// Build a horizontal stack; baseline alignment is rejected.
    pub fn new(nodes: Vec<N>, alignment: VerticalAlignment) -> LayoutResult<Self> {
        Ok(Self {
            core: StackCore {
                nodes,
                axis: Axis::Horizontal,
                cross: AlignKind::try_from(alignment)?,
                spacing: 0.0,
            },
            alignment,
        })
    }

    /// Set the gap between neighbours.
    pub fn with_spacing(mut self, spacing: f64) -> LayoutResult<Self> {
        self.core = self.core.with_spacing(spacing)?;
        Ok(self)
    }

    /// Apply the relevant fields of `settings`.
    pub fn with_settings(self, settings: &LayoutSettings) -> LayoutResult<Self> {
        settings.validate()?;
        self.with_spacing(settings.spacing)
    }

    /// Children in input order.
    pub fn nodes(&self) -> &[N] {
        &self.core.nodes
    }

    /// Cross-axis alignment.
    pub fn alignment(&self) -> VerticalAlignment {
        self.alignment
    }

    /// Gap between neighbours.
    pub fn spacing(&self) -> f64 {
        self.core.spacing
    }
}

impl<N: SizableNode> HStack<N> {
    /// Geometry of the children fitting `target_size`.
    #[tracing::instrument(level = "debug", skip(self), fields(nodes = self.core.nodes.len()))]
    pub fn content_layout(&self, target_size: Size) -> LayoutResult<ContentGeometry> {
        self.core.content_layout(target_size)
    }
}

impl<N: SizableNode> SizableNode for HStack<N> {
    fn layout_size(&self, fitting: Size) -> Size {
        self.core.ideal_size(fitting)
    }
}

/// Vertical stack: children top to bottom, aligned horizontally.
#[derive(Clone, Debug)]
pub struct VStack<N> {
    core: StackCore<N>,
    alignment: HorizontalAlignment,
}

impl<N> VStack<N> {
    /// Build a vertical stack.
    pub fn new(nodes: Vec<N>, alignment: HorizontalAlignment) -> Self {
        Self {
            core: StackCore {
                nodes,
                axis: Axis::Vertical,
                cross: alignment.into(),
                spacing: 0.0,
            },
            alignment,
        }
    }

    /// Set the gap between neighbours.
    pub fn with_spacing(mut self, spacing: f64) -> LayoutResult<Self> {
        self.core = self.core.with_spacing(spacing)?;
        Ok(self)
    }

    /// Apply the relevant fields of `settings`.
    pub fn with_settings(self, settings: &LayoutSettings) -> LayoutResult<Self> {
        settings.validate()?;
        self.with_spacing(settings.spacing)
    }

    /// Children in input order.
    pub fn nodes(&self) -> &[N] {
        &self.core.nodes
    }

    /// Cross-axis alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Gap between neighbours.
    pub fn spacing(&self) -> f64 {
        self.core.spacing
    }
}

impl<N: SizableNode> VStack<N> {
    /// Geometry of the children fitting `target_size`.
    #[tracing::instrument(level = "debug", skip(self), fields(nodes = self.core.nodes.len()))]
    pub fn content_layout(&self, target_size: Size) -> LayoutResult<ContentGeometry> {
        self.core.content_layout(target_size)
    }
}

impl<N: SizableNode> SizableNode for VStack<N> {
    fn layout_size(&self, fitting: Size) -> Size {
        self.core.ideal_size(fitting)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stack.rs"]
mod tests;
