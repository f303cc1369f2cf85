//! Structured warnings emitted while parsing and rendering.
//!
//! Nothing in this workspace fails on malformed input. Every recovery the
//! scanner, resolver or renderer performs is reported as a [`Warning`] to a
//! [`WarningSink`](crate::WarningSink), and parsing carries on.

use thiserror::Error;

/// A non-fatal observation made while processing a format string.
///
/// `index` fields are character offsets (Unicode scalar values) into the
/// original input string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Warning {
    /// A `<` with no usable closing `>`: either none follows, or the
    /// candidate tag contains a space, newline or double quote.
    #[error("unclosed tag at index: {index}")]
    UnclosedTag { index: usize },

    /// A closing tag whose name is not on the style stack.
    #[error("unopened markup {tag} at index: {index}")]
    UnopenedMarkup { tag: String, index: usize },

    /// An opened tag that was never closed, either because an outer tag
    /// closed first or because the input ended.
    #[error("unclosed markup {tag} at index: {index}")]
    UnclosedMarkup { tag: String, index: usize },

    /// `<>` or `</>`.
    #[error("empty tag at index: {index}")]
    EmptyTag { index: usize },

    /// A `%` specifier that does not match the supported grammar.
    /// The whole specifier is dropped from the output.
    #[error("unknown format: {format}")]
    UnknownFormat { format: String },

    /// A style name with no entry in the style registry.
    #[error("no style found for string: {name}")]
    NoStyle { name: String },

    /// A placeholder whose argument index is past the end of the
    /// argument list. `format` is the raw specifier text.
    #[error("missing argument at index {index} in format: {format}")]
    MissingArgument { format: String, index: usize },
}

/// Coarse classification of a [`Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// Structural problems in the `<tag>` markup.
    Markup,
    /// Problems with a `%` format specifier.
    Format,
    /// Problems found while rendering (missing style or argument).
    Render,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::Markup => "markup",
            WarningKind::Format => "format",
            WarningKind::Render => "render",
        }
    }
}

impl Warning {
    /// Returns which stage of the pipeline produced this warning.
    pub fn kind(&self) -> WarningKind {
        match self {
            Warning::UnclosedTag { .. }
            | Warning::UnopenedMarkup { .. }
            | Warning::UnclosedMarkup { .. }
            | Warning::EmptyTag { .. } => WarningKind::Markup,
            Warning::UnknownFormat { .. } => WarningKind::Format,
            Warning::NoStyle { .. } | Warning::MissingArgument { .. } => WarningKind::Render,
        }
    }

    /// Character offset into the input, for warnings that carry one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Warning::UnclosedTag { index }
            | Warning::UnopenedMarkup { index, .. }
            | Warning::UnclosedMarkup { index, .. }
            | Warning::EmptyTag { index }
            | Warning::MissingArgument { index, .. } => Some(*index),
            Warning::UnknownFormat { .. } | Warning::NoStyle { .. } => None,
        }
    }
}
