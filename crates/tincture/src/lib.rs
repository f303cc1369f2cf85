//! # Tincture - Styled Format Strings for the Terminal
//!
//! Tincture renders printf-style format strings that carry nested
//! `<tag>...</tag>` markup. Tag names refer to styles in a [`Styles`]
//! registry; placeholders like `%d`, `%-8@` or `%2$.3f` are filled from an
//! argument list. The result is a [`StyledText`] that prints as ANSI escape
//! sequences or as plain text.
//!
//! Malformed input never fails. Unclosed tags, unknown specifiers, missing
//! styles and missing arguments are recovered from and reported as
//! [`Warning`]s to a [`WarningSink`]. The free functions below discard them;
//! use [`Tincture`] with a sink such as [`TracingSink`] or
//! [`CollectingSink`] to keep them.
//!
//! ## Core Concepts
//!
//! - [`styled_string`] / [`styled_format`]: one-shot rendering
//! - [`StyleFormatter`]: parse once, format many times
//! - [`Tincture`]: styles, warning sink and format function bundled together
//! - [`Styles`]: name to style registry, built in code or loaded from YAML
//! - [`args!`]: builds the argument list from mixed values
//!
//! ## Quick Start
//!
//! ```rust
//! use console::Color;
//! use tincture::{args, styled_format, styled_string, StyleAttributes, Styles};
//!
//! let styles = Styles::new()
//!     .add("title", StyleAttributes::new().bold())
//!     .add("count", StyleAttributes::new().fg(Color::Cyan));
//!
//! let text = styled_format("<title>Report</title>: <count>%d</count> items", &styles, &args![42]);
//! assert_eq!(text.to_plain(), "Report: 42 items");
//! println!("{text}");
//!
//! let literal = styled_string("<title>%1$@</title>", &styles);
//! assert_eq!(literal.to_plain(), "%1$@");
//! ```
//!
//! ## Markup
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `<name>text</name>` | apply style `name` to `text` |
//! | `<a><b>x</b></a>` | nested: `x` gets `a` then `b`, inner wins on conflict |
//! | `<a b>` | not a tag (space, newline or `"` inside): kept as text |
//! | `%%` | literal `%` |
//!
//! ## Placeholders
//!
//! `%[index$][flags][width][.precision]conversion`, where conversion is one
//! of `@ d i f e E g G x X o c s b h`. Explicit indices
//! are 1-based and may be mixed with implicit ones; implicit placeholders
//! take the lowest index not yet claimed.
//!
//! ```rust
//! use tincture::{args, styled_format, Styles};
//!
//! let text = styled_format("%2$@ %1$5.1f|%-4d|%x", &Styles::new(), &args![3.14159, "pi", 7, 255]);
//! assert_eq!(text.to_plain(), "pi   3.1|7   |ff");
//! ```

mod config;
mod formatter;

pub use config::Tincture;
pub use formatter::StyleFormatter;

// Parsing layer
pub use tincture_markup::{
    parse, resolve_placeholders, scan_tags, ChannelSink, CollectingSink, Conversion, Flags,
    FnSink, FormatSpec, NoopSink, Parser, Segment, TracingSink, Warning, WarningKind, WarningSink,
    MAX_FIELD,
};

// Rendering layer
pub use tincture_render::{
    parse_shorthand, parse_stylesheet, rgb_to_ansi256, ColorDef, ConvertMode, FnStyle, FormatArg,
    FormatFunction, PrintfFormat, RenderSegment, Renderer, Style, StyleAttributes,
    StyleDefinition, StyleValidationError, StyleValue, StyledText, Styles, StylesheetError,
};

/// Builds a `Vec<FormatArg>` from values of mixed types.
///
/// ```rust
/// use tincture::{args, FormatArg};
///
/// assert_eq!(
///     args![1, "two", 3.0, 'x'],
///     vec![
///         FormatArg::Int(1),
///         FormatArg::Str("two".into()),
///         FormatArg::Float(3.0),
///         FormatArg::Char('x'),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::FormatArg::from($arg)),*]
    };
}

/// Renders `input` with placeholders left as written.
///
/// Warnings are discarded.
pub fn styled_string(input: &str, styles: &Styles) -> StyledText {
    let renderer = Renderer::new(&NoopSink);
    let segments = renderer.convert_segments(
        parse(input),
        ConvertMode::Simple,
        styles,
    );
    renderer.render_literal(&segments, styles)
}

/// Renders `input` with `args` substituted into its placeholders.
///
/// Warnings are discarded.
pub fn styled_format(input: &str, styles: &Styles, args: &[FormatArg]) -> StyledText {
    let renderer = Renderer::new(&NoopSink);
    let segments = renderer.convert_segments(
        parse(input),
        ConvertMode::Simple,
        styles,
    );
    renderer.render_formatted(&segments, args, styles)
}
