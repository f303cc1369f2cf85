use std::fmt;
use std::sync::Arc;

use tincture_markup::{NoopSink, Parser, Segment, WarningSink};
use tincture_render::{
    ConvertMode, FormatArg, FormatFunction, PrintfFormat, Renderer, StyledText, Styles,
};

use crate::formatter::StyleFormatter;

/// Everything a render needs: the style registry, where warnings go, and
/// how placeholder arguments are formatted.
///
/// Build one at startup and pass it (or clones of it) to wherever strings
/// are styled. Clones share the sink and format function.
///
/// ```rust
/// use std::sync::Arc;
/// use tincture::{args, CollectingSink, StyleAttributes, Styles, Tincture, Warning};
///
/// let sink = Arc::new(CollectingSink::new());
/// let tincture = Tincture::new(Styles::new().add("em", StyleAttributes::new().italic()))
///     .with_sink(sink.clone());
///
/// let text = tincture.format("<em>%@</em> <strong>%d</strong>", &args!["hi", 2]);
/// assert_eq!(text.to_plain(), "hi 2");
/// assert_eq!(sink.take(), vec![Warning::NoStyle { name: "strong".into() }]);
/// ```
#[derive(Clone)]
pub struct Tincture {
    styles: Styles,
    sink: Arc<dyn WarningSink + Send + Sync>,
    format_fn: Arc<dyn FormatFunction + Send + Sync>,
}

impl Default for Tincture {
    fn default() -> Self {
        Self::new(Styles::new())
    }
}

impl Tincture {
    /// Uses `styles`, discards warnings and formats with [`PrintfFormat`].
    ///
    /// Route warnings with [`with_sink`](Self::with_sink), for example to
    /// [`TracingSink`](tincture_markup::TracingSink).
    pub fn new(styles: Styles) -> Self {
        Self {
            styles,
            sink: Arc::new(NoopSink),
            format_fn: Arc::new(PrintfFormat),
        }
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_sink<S>(mut self, sink: S) -> Self
    where
        S: WarningSink + Send + Sync + 'static,
    {
        self.sink = Arc::new(sink);
        self
    }

    pub fn with_format<F>(mut self, format_fn: F) -> Self
    where
        F: FormatFunction + Send + Sync + 'static,
    {
        self.format_fn = Arc::new(format_fn);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&*self.sink).with_format(&*self.format_fn)
    }

    /// Parses `input` into segments, reporting markup problems.
    pub fn parse(&self, input: &str) -> Vec<Segment> {
        Parser::new(&self.sink).parse(input)
    }

    /// Renders `input` with placeholders shown as written.
    pub fn styled(&self, input: &str) -> StyledText {
        let renderer = self.renderer();
        let segments = renderer.convert_segments(self.parse(input), ConvertMode::Simple, &self.styles);
        renderer.render_literal(&segments, &self.styles)
    }

    /// Renders `input` with `args` substituted into its placeholders.
    pub fn format(&self, input: &str, args: &[FormatArg]) -> StyledText {
        let renderer = self.renderer();
        let segments = renderer.convert_segments(self.parse(input), ConvertMode::Simple, &self.styles);
        renderer.render_formatted(&segments, args, &self.styles)
    }

    /// Parses and pre-renders `input` for repeated formatting.
    pub fn formatter(&self, input: &str) -> StyleFormatter {
        StyleFormatter::with_parts(
            input,
            self.styles.clone(),
            Arc::clone(&self.sink),
            Arc::clone(&self.format_fn),
        )
    }
}

impl fmt::Debug for Tincture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tincture")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}
