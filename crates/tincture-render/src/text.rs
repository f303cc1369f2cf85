//! Text with per-range style attributes.
//!
//! A [`StyledText`] is a `String` plus a list of attribute runs that tile it
//! exactly: every byte belongs to one run, runs are never empty, and two
//! neighbouring runs never carry equal attributes. Every mutation restores
//! these properties, so equal-looking values compare equal.
//!
//! ```rust
//! use tincture_render::{StyleAttributes, StyledText};
//!
//! let mut text = StyledText::plain("Hello world");
//! text.update(0..5, |attrs| attrs.bold = Some(true));
//!
//! let runs: Vec<_> = text.runs().map(|(s, _)| s).collect();
//! assert_eq!(runs, vec!["Hello", " world"]);
//! assert_eq!(text.to_plain(), "Hello world");
//! ```

use std::fmt;
use std::ops::Range;

use crate::style::StyleAttributes;
use crate::util::floor_char_boundary;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Run {
    len: usize,
    attributes: StyleAttributes,
}

/// A string with styled runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    runs: Vec<Run>,
}

impl StyledText {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `text` with no attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, StyleAttributes::new())
    }

    /// Wraps `text` with a single set of attributes.
    pub fn styled(text: impl Into<String>, attributes: StyleAttributes) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                len: text.len(),
                attributes,
            }]
        };
        Self { text, runs }
    }

    /// Concatenates every item, in order.
    pub fn concat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = StyledText>,
    {
        let mut result = StyledText::new();
        for item in items {
            result.append(&item);
        }
        result
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over `(text, attributes)` pairs in order.
    pub fn runs(&self) -> impl Iterator<Item = (&str, &StyleAttributes)> + '_ {
        let mut start = 0;
        self.runs.iter().map(move |run| {
            let slice = &self.text[start..start + run.len];
            start += run.len;
            (slice, &run.attributes)
        })
    }

    /// Attributes of the run containing byte `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&StyleAttributes> {
        let mut end = 0;
        for run in &self.runs {
            end += run.len;
            if index < end {
                return Some(&run.attributes);
            }
        }
        None
    }

    /// Byte range of the first occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<Range<usize>> {
        self.text
            .find(needle)
            .map(|start| start..start + needle.len())
    }

    /// Appends `other`, merging the seam if the attributes match.
    pub fn append(&mut self, other: &StyledText) {
        self.text.push_str(&other.text);
        for run in &other.runs {
            self.push_run(run.len, run.attributes.clone());
        }
    }

    /// Appends `text` with the given attributes.
    pub fn push_str(&mut self, text: &str, attributes: StyleAttributes) {
        self.text.push_str(text);
        self.push_run(text.len(), attributes);
    }

    fn push_run(&mut self, len: usize, attributes: StyleAttributes) {
        if len == 0 {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.attributes == attributes => last.len += len,
            _ => self.runs.push(Run { len, attributes }),
        }
    }

    /// Calls `f` on the attributes of every byte in `range`.
    ///
    /// The range is clamped to the text and both ends are moved down to the
    /// nearest character boundary. Runs are split at the range ends and
    /// coalesced again afterwards.
    pub fn update<F>(&mut self, range: Range<usize>, mut f: F)
    where
        F: FnMut(&mut StyleAttributes),
    {
        let end = floor_char_boundary(&self.text, range.end);
        let start = floor_char_boundary(&self.text, range.start.min(end));
        if start >= end {
            return;
        }

        self.split_at(start);
        self.split_at(end);

        let mut run_start = 0;
        for run in &mut self.runs {
            let run_end = run_start + run.len;
            if run_start >= start && run_end <= end {
                f(&mut run.attributes);
            }
            run_start = run_end;
        }

        self.coalesce();
    }

    /// Ensures a run boundary exists at byte `at`.
    fn split_at(&mut self, at: usize) {
        let mut run_start = 0;
        for i in 0..self.runs.len() {
            let run_end = run_start + self.runs[i].len;
            if at > run_start && at < run_end {
                let tail = Run {
                    len: run_end - at,
                    attributes: self.runs[i].attributes.clone(),
                };
                self.runs[i].len = at - run_start;
                self.runs.insert(i + 1, tail);
                return;
            }
            run_start = run_end;
        }
    }

    fn coalesce(&mut self) {
        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            self.push_run(run.len, run.attributes);
        }
    }

    /// Renders with ANSI escape codes regardless of the terminal.
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for (text, attributes) in self.runs() {
            if attributes.is_empty() {
                out.push_str(text);
            } else {
                let style = attributes.to_console_style().force_styling(true);
                out.push_str(&style.apply_to(text).to_string());
            }
        }
        out
    }

    /// The text without any styling.
    pub fn to_plain(&self) -> String {
        self.text.clone()
    }
}

/// Writes ANSI codes only when `console` detects color support.
impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (text, attributes) in self.runs() {
            if attributes.is_empty() {
                f.write_str(text)?;
            } else {
                write!(f, "{}", attributes.to_console_style().apply_to(text))?;
            }
        }
        Ok(())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> StyleAttributes {
        StyleAttributes::new().bold()
    }

    fn run_texts(text: &StyledText) -> Vec<&str> {
        text.runs().map(|(s, _)| s).collect()
    }

    mod construction {
        use super::*;

        #[test]
        fn plain_has_one_run() {
            let text = StyledText::plain("abc");
            assert_eq!(run_texts(&text), vec!["abc"]);
            assert_eq!(text.len(), 3);
        }

        #[test]
        fn empty_has_no_runs() {
            let text = StyledText::plain("");
            assert!(text.is_empty());
            assert_eq!(text.runs().count(), 0);
            assert_eq!(text, StyledText::new());
        }

        #[test]
        fn concat_joins_in_order() {
            let text = StyledText::concat(vec![
                StyledText::plain("a"),
                StyledText::styled("b", bold()),
                StyledText::plain("c"),
            ]);
            assert_eq!(text.as_str(), "abc");
            assert_eq!(run_texts(&text), vec!["a", "b", "c"]);
        }
    }

    mod appending {
        use super::*;

        #[test]
        fn equal_attributes_merge() {
            let mut text = StyledText::styled("ab", bold());
            text.append(&StyledText::styled("cd", bold()));
            assert_eq!(run_texts(&text), vec!["abcd"]);
        }

        #[test]
        fn different_attributes_stay_apart() {
            let mut text = StyledText::styled("ab", bold());
            text.append(&StyledText::plain("cd"));
            assert_eq!(run_texts(&text), vec!["ab", "cd"]);
        }

        #[test]
        fn empty_append_is_a_no_op() {
            let mut text = StyledText::plain("x");
            text.append(&StyledText::new());
            assert_eq!(text, StyledText::plain("x"));
        }
    }

    mod updating {
        use super::*;

        #[test]
        fn middle_of_run_splits_in_three() {
            let mut text = StyledText::plain("abcdef");
            text.update(2..4, |a| a.bold = Some(true));
            assert_eq!(run_texts(&text), vec!["ab", "cd", "ef"]);
            assert_eq!(text.attributes_at(2), Some(&bold()));
            assert_eq!(text.attributes_at(4), Some(&StyleAttributes::new()));
        }

        #[test]
        fn full_range_keeps_one_run() {
            let mut text = StyledText::plain("abc");
            text.update(0..3, |a| a.italic = Some(true));
            assert_eq!(run_texts(&text), vec!["abc"]);
        }

        #[test]
        fn neighbours_recoalesce() {
            let mut text = StyledText::plain("abcdef");
            text.update(0..3, |a| a.bold = Some(true));
            text.update(3..6, |a| a.bold = Some(true));
            assert_eq!(run_texts(&text), vec!["abcdef"]);
        }

        #[test]
        fn range_is_clamped() {
            let mut text = StyledText::plain("abc");
            text.update(1..99, |a| a.dim = Some(true));
            assert_eq!(run_texts(&text), vec!["a", "bc"]);
        }

        #[test]
        fn empty_range_is_a_no_op() {
            let mut text = StyledText::plain("abc");
            text.update(2..2, |a| a.dim = Some(true));
            assert_eq!(text, StyledText::plain("abc"));
        }

        #[test]
        fn range_snaps_to_char_boundaries() {
            let mut text = StyledText::plain("héllo");
            // Byte 2 is inside 'é'.
            text.update(2..5, |a| a.bold = Some(true));
            assert_eq!(run_texts(&text), vec!["h", "éll", "o"]);
        }
    }

    mod output {
        use super::*;

        #[test]
        fn plain_output_drops_styles() {
            let text = StyledText::styled("hi", bold());
            assert_eq!(text.to_plain(), "hi");
        }

        #[test]
        fn ansi_output_wraps_styled_runs() {
            let mut text = StyledText::plain("a");
            text.push_str("b", bold());
            let ansi = text.to_ansi();
            assert!(ansi.starts_with('a'));
            assert!(ansi.contains("\u{1b}[1m"));
            assert!(ansi.contains('b'));
        }

        #[test]
        fn unstyled_ansi_output_is_plain() {
            assert_eq!(StyledText::plain("abc").to_ansi(), "abc");
        }

        #[test]
        fn find_returns_byte_range() {
            let text = StyledText::plain("say hello");
            assert_eq!(text.find("hello"), Some(4..9));
            assert_eq!(text.find("bye"), None);
        }
    }
}
