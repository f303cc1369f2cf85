//! Tag scanner for `<name>...</name>` style scopes.
//!
//! The scanner walks the input once, keeping an explicit stack of open tag
//! names. Every run of text between tags becomes a [`Segment::Text`] carrying
//! a snapshot of that stack (outer tag first). Tags themselves never appear
//! in the output, except malformed ones, which are kept as literal text.
//!
//! # Recovery
//!
//! | Input | Warning | Result |
//! |-------|---------|--------|
//! | `a<b` (no `>`) | `UnclosedTag` | `<b` kept as text, scanning stops |
//! | `<a b>` (space, newline or `"`) | `UnclosedTag` | `<a b>` kept as text |
//! | `<>` or `</>` | `EmptyTag` | dropped, stack unchanged |
//! | `</x>` with no open `x` | `UnopenedMarkup` | dropped, stack unchanged |
//! | `<a><b></a>` | `UnclosedMarkup` for `b` | `b` and `a` both popped |
//! | `<a>` never closed | `UnclosedMarkup` at end of input | |

use crate::segment::{push_text, Segment};
use crate::sink::WarningSink;
use crate::warning::Warning;

/// Characters that make a `<...>` candidate malformed.
const INVALID_TAG_CHARS: [char; 3] = [' ', '\n', '"'];

/// Splits `input` into text segments annotated with their active styles.
///
/// Only [`Segment::Text`] values are produced. Structural problems are
/// reported to `sink` and never stop the scan.
///
/// ```rust
/// use tincture_markup::{scan_tags, NoopSink, Segment};
///
/// let segments = scan_tags("<red><blue>1</blue>2</red>", &NoopSink);
/// assert_eq!(
///     segments,
///     vec![
///         Segment::text("1", &["red", "blue"]),
///         Segment::text("2", &["red"]),
///     ]
/// );
/// ```
pub fn scan_tags<S: WarningSink + ?Sized>(input: &str, sink: &S) -> Vec<Segment> {
    TagScanner::new(input, sink).run()
}

struct TagScanner<'a, S: ?Sized> {
    input: &'a str,
    pos: usize,
    stack: Vec<String>,
    segments: Vec<Segment>,
    sink: &'a S,
    /// Last `(byte, char)` offset pair handed out by `char_index`.
    counted: (usize, usize),
}

impl<'a, S: WarningSink + ?Sized> TagScanner<'a, S> {
    fn new(input: &'a str, sink: &'a S) -> Self {
        Self {
            input,
            pos: 0,
            stack: Vec::new(),
            segments: Vec::new(),
            sink,
            counted: (0, 0),
        }
    }

    fn run(mut self) -> Vec<Segment> {
        let input = self.input;

        while self.pos < input.len() {
            let Some(open_offset) = input[self.pos..].find('<') else {
                self.push_text(&input[self.pos..]);
                break;
            };
            let open = self.pos + open_offset;

            let Some(close_offset) = input[open + 1..].find('>') else {
                let index = self.char_index(open);
                self.sink.warning(Warning::UnclosedTag { index });
                self.push_text(&input[self.pos..open]);
                self.push_text(&input[open..]);
                break;
            };
            let close = open + 1 + close_offset;

            self.push_text(&input[self.pos..open]);
            self.pos = close + 1;

            let tag = &input[open..=close];
            if tag.contains(INVALID_TAG_CHARS) {
                let index = self.char_index(open);
                self.sink.warning(Warning::UnclosedTag { index });
                self.push_text(tag);
                continue;
            }

            let body = &input[open + 1..close];
            let (closing, name) = match body.strip_prefix('/') {
                Some(name) => (true, name),
                None => (false, body),
            };

            if name.is_empty() {
                let index = self.char_index(open);
                self.sink.warning(Warning::EmptyTag { index });
            } else if closing {
                self.close_tag(name, open);
            } else {
                self.stack.push(name.to_string());
            }
        }

        let end = self.char_index(input.len());
        for tag in self.stack.drain(..) {
            self.sink.warning(Warning::UnclosedMarkup { tag, index: end });
        }

        self.segments
    }

    fn close_tag(&mut self, name: &str, open: usize) {
        let index = self.char_index(open);

        let Some(found) = self.stack.iter().rposition(|tag| tag == name) else {
            self.sink.warning(Warning::UnopenedMarkup {
                tag: name.to_string(),
                index,
            });
            return;
        };

        // Everything opened after the matched tag is implicitly closed.
        for tag in self.stack.drain(found + 1..) {
            self.sink.warning(Warning::UnclosedMarkup { tag, index });
        }
        self.stack.pop();
    }

    fn push_text(&mut self, text: &str) {
        push_text(&mut self.segments, text, &self.stack);
    }

    /// Converts a byte offset into a character offset, counting on from the
    /// previous call. Offsets must not decrease between calls.
    fn char_index(&mut self, byte: usize) -> usize {
        let (from_byte, from_char) = self.counted;
        let index = from_char + self.input[from_byte..byte].chars().count();
        self.counted = (byte, index);
        index
    }
}
