use tincture_markup::Segment;

use crate::text::StyledText;

/// How [`Renderer::convert_segments`](crate::Renderer::convert_segments)
/// treats text segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConvertMode {
    /// Keep text as [`RenderSegment::Text`]; it is styled at render time.
    #[default]
    Simple,
    /// Style text now and merge runs of it into single
    /// [`RenderSegment::Rendered`] values, for templates rendered many times.
    PreRender,
}

/// A segment ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderSegment {
    Text {
        content: String,
        styles: Vec<String>,
    },
    Placeholder {
        format: String,
        raw: String,
        index: usize,
        styles: Vec<String>,
    },
    /// Text that has already been styled.
    Rendered(StyledText),
}

impl RenderSegment {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, RenderSegment::Placeholder { .. })
    }
}

impl From<Segment> for RenderSegment {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Text { content, styles } => RenderSegment::Text { content, styles },
            Segment::Placeholder {
                format,
                raw,
                index,
                styles,
            } => RenderSegment::Placeholder {
                format,
                raw,
                index,
                styles,
            },
        }
    }
}
