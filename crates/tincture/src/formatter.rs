//! Parse once, format many times.

use std::fmt;
use std::sync::Arc;

use tincture_markup::{NoopSink, Parser, WarningSink};
use tincture_render::{
    ConvertMode, FormatArg, FormatFunction, PrintfFormat, RenderSegment, Renderer, StyledText,
    Styles,
};

/// A format string parsed and pre-styled once, ready to be formatted with
/// different arguments.
///
/// Construction parses the input and styles every text segment up front,
/// so markup and missing-style warnings for text are reported once, at
/// construction. Each call to [`format`](Self::format) only formats the
/// placeholders.
///
/// ```rust
/// use console::Color;
/// use tincture::{args, StyleAttributes, StyleFormatter, Styles};
///
/// let styles = Styles::new().add("n", StyleAttributes::new().fg(Color::Cyan));
/// let formatter = StyleFormatter::new("Found <n>%d</n> files in %@", &styles);
///
/// assert_eq!(formatter.format(&args![3, "src"]).to_plain(), "Found 3 files in src");
/// assert_eq!(formatter.format(&args![0, "docs"]).to_plain(), "Found 0 files in docs");
/// assert_eq!(formatter.literal().to_plain(), "Found %d files in %@");
/// ```
#[derive(Clone)]
pub struct StyleFormatter {
    segments: Vec<RenderSegment>,
    styles: Styles,
    sink: Arc<dyn WarningSink + Send + Sync>,
    format_fn: Arc<dyn FormatFunction + Send + Sync>,
}

impl StyleFormatter {
    /// Builds a formatter that discards warnings and formats with
    /// [`PrintfFormat`]. Use [`Tincture::formatter`](crate::Tincture::formatter)
    /// to keep them.
    pub fn new(input: &str, styles: &Styles) -> Self {
        Self::with_parts(
            input,
            styles.clone(),
            Arc::new(NoopSink),
            Arc::new(PrintfFormat),
        )
    }

    pub(crate) fn with_parts(
        input: &str,
        styles: Styles,
        sink: Arc<dyn WarningSink + Send + Sync>,
        format_fn: Arc<dyn FormatFunction + Send + Sync>,
    ) -> Self {
        let parsed = Parser::new(&sink).parse(input);
        let segments =
            Renderer::new(&*sink).convert_segments(parsed, ConvertMode::PreRender, &styles);

        Self {
            segments,
            styles,
            sink,
            format_fn,
        }
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&*self.sink).with_format(&*self.format_fn)
    }

    /// Substitutes `args` into the placeholders.
    pub fn format(&self, args: &[FormatArg]) -> StyledText {
        self.renderer()
            .render_formatted(&self.segments, args, &self.styles)
    }

    /// Renders with every placeholder shown as written.
    pub fn literal(&self) -> StyledText {
        self.renderer().render_literal(&self.segments, &self.styles)
    }

    /// The converted segments: pre-styled text and placeholders.
    pub fn segments(&self) -> &[RenderSegment] {
        &self.segments
    }

    /// Number of arguments `format` reads: one past the highest
    /// placeholder index.
    pub fn arg_count(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                RenderSegment::Placeholder { index, .. } => Some(index + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Debug for StyleFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleFormatter")
            .field("segments", &self.segments)
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}
