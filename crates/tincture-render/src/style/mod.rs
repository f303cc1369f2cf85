//! Named styles and how they are applied.
//!
//! A [`Style`] knows how to decorate a byte range of a [`StyledText`]. Styles
//! are collected under names in a [`Styles`] registry, either in code or from
//! a YAML stylesheet:
//!
//! ```rust
//! use console::Color;
//! use tincture_render::{StyleAttributes, Styles};
//!
//! let styles = Styles::new()
//!     .add("title", StyleAttributes::new().fg(Color::Cyan).bold())
//!     .add("heading", "title");
//! assert!(styles.get("heading").is_some());
//!
//! let from_yaml = Styles::from_yaml("title: cyan bold\nheading: title\n").unwrap();
//! assert!(from_yaml.get("heading").is_some());
//! ```

mod attributes;
mod color;
mod error;
mod registry;
mod stylesheet;
mod value;

use std::fmt;
use std::ops::Range;

use crate::text::StyledText;

pub use attributes::{parse_shorthand, StyleAttributes};
pub use color::ColorDef;
pub use error::{StyleValidationError, StylesheetError};
pub use registry::Styles;
pub use stylesheet::{parse_stylesheet, StyleDefinition};
pub use value::StyleValue;

/// Something that can decorate a range of styled text.
///
/// Implementations must only touch `range`; the renderer always passes the
/// full extent of the piece being styled.
pub trait Style: fmt::Debug + Send + Sync {
    fn apply(&self, range: Range<usize>, target: &mut StyledText);
}

/// A [`Style`] backed by a closure.
///
/// ```rust
/// use tincture_render::{FnStyle, Style, StyledText};
///
/// let shout = FnStyle::new(|range, text: &mut StyledText| {
///     text.update(range, |attrs| attrs.bold = Some(true));
/// });
/// let mut text = StyledText::plain("hey");
/// shout.apply(0..3, &mut text);
/// assert_eq!(text.attributes_at(0).and_then(|a| a.bold), Some(true));
/// ```
pub struct FnStyle<F>(F);

impl<F> FnStyle<F>
where
    F: Fn(Range<usize>, &mut StyledText) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        FnStyle(f)
    }
}

impl<F> fmt::Debug for FnStyle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnStyle")
    }
}

impl<F> Style for FnStyle<F>
where
    F: Fn(Range<usize>, &mut StyledText) + Send + Sync,
{
    fn apply(&self, range: Range<usize>, target: &mut StyledText) {
        (self.0)(range, target)
    }
}
