//! Splits text segments into literal text and `%` placeholders.
//!
//! # Argument numbering
//!
//! Explicit specifiers (`%2$d`) name their argument directly. Implicit ones
//! (`%d`) take the lowest index not yet handed out that no explicit
//! specifier has claimed *so far in the pass*. Explicit claims accumulate
//! across every segment of one input, so
//!
//! ```text
//! %1$d %d %4$d %d %d
//!   0   1   3   2   4
//! ```

use std::collections::HashSet;

use crate::format_spec::FormatSpec;
use crate::segment::{push_text, Segment};
use crate::sink::WarningSink;
use crate::warning::Warning;

/// Hands out argument indices for one pass over one input.
#[derive(Debug, Default)]
pub(crate) struct IndexCounter {
    next_implicit: usize,
    explicit: HashSet<usize>,
}

impl IndexCounter {
    fn claim_explicit(&mut self, index: usize) -> usize {
        self.explicit.insert(index);
        index
    }

    fn next_implicit(&mut self) -> usize {
        let mut index = self.next_implicit;
        while self.explicit.contains(&index) {
            index += 1;
        }
        self.next_implicit = index + 1;
        index
    }
}

/// Resolves `%` specifiers inside every [`Segment::Text`].
///
/// Placeholder segments pass through unchanged, so running this twice is
/// harmless once no `%` is left in the text. `%%` becomes a literal `%`;
/// specifiers that do not parse are reported as
/// [`Warning::UnknownFormat`] and dropped.
///
/// ```rust
/// use tincture_markup::{resolve_placeholders, NoopSink, Segment};
///
/// let segments = resolve_placeholders(vec![Segment::text("Hi %@!", &["b"])], &NoopSink);
/// assert_eq!(
///     segments,
///     vec![
///         Segment::text("Hi ", &["b"]),
///         Segment::placeholder("%@", "%@", 0, &["b"]),
///         Segment::text("!", &["b"]),
///     ]
/// );
/// ```
pub fn resolve_placeholders<S: WarningSink + ?Sized>(
    segments: Vec<Segment>,
    sink: &S,
) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());
    let mut counter = IndexCounter::default();

    for segment in segments {
        match segment {
            Segment::Text { content, styles } => {
                split_text(&content, &styles, &mut counter, &mut result, sink);
            }
            placeholder @ Segment::Placeholder { .. } => result.push(placeholder),
        }
    }

    result
}

fn split_text<S: WarningSink + ?Sized>(
    text: &str,
    styles: &[String],
    counter: &mut IndexCounter,
    out: &mut Vec<Segment>,
    sink: &S,
) {
    let mut pos = 0;

    while pos < text.len() {
        let Some(offset) = text[pos..].find('%') else {
            push_text(out, &text[pos..], styles);
            break;
        };
        let percent = pos + offset;
        push_text(out, &text[pos..percent], styles);

        let after_percent = percent + 1;
        if text[after_percent..].starts_with('%') {
            push_text(out, "%", styles);
            pos = after_percent + 1;
            continue;
        }

        let Some(end) = scan_specifier(text, percent) else {
            // No conversion character before the end: keep the `%` and
            // rescan what follows it as ordinary text.
            push_text(out, "%", styles);
            pos = after_percent;
            continue;
        };
        let raw = &text[percent..end];
        pos = end;

        let Some(spec) = FormatSpec::parse(raw) else {
            sink.warning(Warning::UnknownFormat {
                format: raw.to_string(),
            });
            continue;
        };

        let (format, index) = match spec.explicit_index {
            Some(explicit) => (strip_index(raw), counter.claim_explicit(explicit)),
            None => (raw.to_string(), counter.next_implicit()),
        };

        out.push(Segment::Placeholder {
            format,
            raw: raw.to_string(),
            index,
            styles: styles.to_vec(),
        });
    }
}

/// Finds the end (exclusive) of the specifier starting at `percent`: just
/// past the first ASCII letter or `@`.
fn scan_specifier(text: &str, percent: usize) -> Option<usize> {
    text[percent + 1..]
        .char_indices()
        .find(|(_, c)| c.is_ascii_alphabetic() || *c == '@')
        .map(|(offset, c)| percent + 1 + offset + c.len_utf8())
}

/// `%2$04d` → `%04d`
fn strip_index(raw: &str) -> String {
    match raw.split_once('$') {
        Some((_, rest)) => format!("%{rest}"),
        None => raw.to_string(),
    }
}
