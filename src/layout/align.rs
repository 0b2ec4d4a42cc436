use crate::foundation::{
    core::{HorizontalAlignment, VerticalAlignment},
    error::LayoutError,
};

/// Axis-agnostic alignment used by every stack algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AlignKind {
    Start,
    Center,
    End,
}

/// Offset of `content` inside `container` along one axis.
///
/// Not clamped: content larger than its container gets a negative offset for
/// `Center`/`End`, keeping the overflow symmetric or trailing.
pub(crate) fn align_offset(container: f64, content: f64, align: AlignKind) -> f64 {
    match align {
        AlignKind::Start => 0.0,
        AlignKind::Center => (container - content) / 2.0,
        AlignKind::End => container - content,
    }
}

impl From<HorizontalAlignment> for AlignKind {
    fn from(value: HorizontalAlignment) -> Self {
        match value {
            HorizontalAlignment::Leading => AlignKind::Start,
            HorizontalAlignment::Center => AlignKind::Center,
            HorizontalAlignment::Trailing => AlignKind::End,
        }
    }
}

impl TryFrom<VerticalAlignment> for AlignKind {
    type Error = LayoutError;

    fn try_from(value: VerticalAlignment) -> Result<Self, Self::Error> {
        match value {
            VerticalAlignment::Top => Ok(AlignKind::Start),
            VerticalAlignment::Center => Ok(AlignKind::Center),
            VerticalAlignment::Bottom => Ok(AlignKind::End),
            VerticalAlignment::FirstBaseline | VerticalAlignment::LastBaseline => {
                Err(LayoutError::UnsupportedAlignment(value))
            }
        }
    }
}
