use crate::placeholder::resolve_placeholders;
use crate::segment::Segment;
use crate::sink::{NoopSink, WarningSink};
use crate::tag::scan_tags;

/// Runs the tag scanner and the placeholder resolver in sequence.
///
/// The parser holds nothing but its sink, so one instance can parse any
/// number of inputs.
///
/// # Example
///
/// ```rust
/// use tincture_markup::{CollectingSink, Parser, Segment};
///
/// let sink = CollectingSink::new();
/// let segments = Parser::new(&sink).parse("<b>%@</b> wins");
///
/// assert_eq!(
///     segments,
///     vec![
///         Segment::placeholder("%@", "%@", 0, &["b"]),
///         Segment::text(" wins", &[]),
///     ]
/// );
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser<S = NoopSink> {
    sink: S,
}

impl<S: WarningSink> Parser<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn parse(&self, input: &str) -> Vec<Segment> {
        let segments = scan_tags(input, &self.sink);
        resolve_placeholders(segments, &self.sink)
    }
}

/// Parses `input`, discarding warnings.
pub fn parse(input: &str) -> Vec<Segment> {
    Parser::new(NoopSink).parse(input)
}
