/// A parsed chunk of a styled format string.
///
/// The tag scanner only produces [`Segment::Text`]; the placeholder resolver
/// splits text segments further into text and [`Segment::Placeholder`]s.
///
/// `styles` is the active style list at that point of the input, outer tag
/// first and inner tag last. Later entries win when styles conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text.
    Text { content: String, styles: Vec<String> },

    /// A resolved `%` specifier.
    Placeholder {
        /// Conversion spec with the explicit index removed, e.g. `%04d`.
        format: String,
        /// The specifier exactly as written, e.g. `%2$04d`.
        raw: String,
        /// Zero-based position in the argument list.
        index: usize,
        styles: Vec<String>,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>, styles: &[&str]) -> Self {
        Segment::Text {
            content: content.into(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn placeholder(
        format: impl Into<String>,
        raw: impl Into<String>,
        index: usize,
        styles: &[&str],
    ) -> Self {
        Segment::Placeholder {
            format: format.into(),
            raw: raw.into(),
            index,
            styles: styles.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn styles(&self) -> &[String] {
        match self {
            Segment::Text { styles, .. } | Segment::Placeholder { styles, .. } => styles,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segment::Placeholder { .. })
    }
}

/// Pushes a text segment unless `content` is empty.
pub(crate) fn push_text(segments: &mut Vec<Segment>, content: &str, styles: &[String]) {
    if content.is_empty() {
        return;
    }
    segments.push(Segment::Text {
        content: content.to_string(),
        styles: styles.to_vec(),
    });
}
