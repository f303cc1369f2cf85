//! Markup and placeholder parser for styled format strings.
//!
//! Input mixes nested `<name>...</name>` style scopes with printf-style
//! placeholders (`%@`, `%d`, `%2$04d`, ...). Parsing produces a flat list of
//! [`Segment`]s, each carrying the names of the styles active at that point.
//! This crate knows nothing about what a style *does*; rendering lives in
//! `tincture-render`.
//!
//! # Example
//!
//! ```rust
//! use tincture_markup::{parse, Segment};
//!
//! let segments = parse("Hello <bold>%@</bold>, you have <red>%d</red> new");
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::text("Hello ", &[]),
//!         Segment::placeholder("%@", "%@", 0, &["bold"]),
//!         Segment::text(", you have ", &[]),
//!         Segment::placeholder("%d", "%d", 1, &["red"]),
//!         Segment::text(" new", &[]),
//!     ]
//! );
//! ```
//!
//! # Pipeline
//!
//! 1. [`scan_tags`] turns the raw string into [`Segment::Text`] values with
//!    their style stacks.
//! 2. [`resolve_placeholders`] splits those into text and
//!    [`Segment::Placeholder`] values, assigning argument indices.
//!
//! [`Parser`] runs both. Neither step fails: malformed input is recovered
//! from and reported as a [`Warning`] through a [`WarningSink`].
//!
//! # Tag names
//!
//! Anything between `<` and `>` that contains no space, newline or double
//! quote is a tag name. Names are case-sensitive and are not otherwise
//! validated.

mod format_spec;
mod parser;
mod placeholder;
mod segment;
mod sink;
mod tag;
mod warning;

pub use format_spec::{Conversion, Flags, FormatSpec, MAX_FIELD};
pub use parser::{parse, Parser};
pub use placeholder::resolve_placeholders;
pub use segment::Segment;
pub use sink::{ChannelSink, CollectingSink, FnSink, NoopSink, TracingSink, WarningSink};
pub use tag::scan_tags;
pub use warning::{Warning, WarningKind};
