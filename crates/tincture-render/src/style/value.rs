//! Registry entries: a concrete style or an alias to another name.

use std::ops::Range;
use std::sync::Arc;

use super::{FnStyle, Style, StyleAttributes};
use crate::text::StyledText;

/// A registry value that is either a concrete style or an alias.
///
/// Aliases allow layering: semantic names (`timestamp`) point at
/// presentation names (`muted`), which hold the actual attributes.
///
/// ```rust
/// use tincture_render::{StyleAttributes, Styles};
///
/// let styles = Styles::new()
///     .add("muted", StyleAttributes::new().dim())
///     .add("disabled", "muted")
///     .add("timestamp", "disabled");
/// assert!(styles.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub enum StyleValue {
    Concrete(Arc<dyn Style>),
    Alias(String),
}

impl From<StyleAttributes> for StyleValue {
    fn from(attributes: StyleAttributes) -> Self {
        StyleValue::Concrete(Arc::new(attributes))
    }
}

impl<F> From<FnStyle<F>> for StyleValue
where
    F: Fn(Range<usize>, &mut StyledText) + Send + Sync + 'static,
{
    fn from(style: FnStyle<F>) -> Self {
        StyleValue::Concrete(Arc::new(style))
    }
}

impl From<Arc<dyn Style>> for StyleValue {
    fn from(style: Arc<dyn Style>) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}
