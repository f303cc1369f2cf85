//! YAML stylesheets.
//!
//! A stylesheet is a mapping from style name to one of:
//!
//! ```yaml
//! # Full definition
//! header:
//!   fg: cyan
//!   bg: "#202020"
//!   bold: true
//!
//! # Shorthand: attribute names and at most one color
//! warning: "yellow italic"
//! strong: bold
//!
//! # Alias: any single word that is not a color or attribute
//! disabled: muted
//! ```
//!
//! Parsing happens in two phases: YAML into [`StyleDefinition`]s, then
//! definitions into a validated [`Styles`] registry.

use super::attributes::{parse_shorthand, StyleAttributes};
use super::error::StylesheetError;
use super::registry::Styles;

/// One parsed stylesheet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDefinition {
    Alias(String),
    Attributes(StyleAttributes),
}

impl StyleDefinition {
    pub fn parse(value: &serde_yaml::Value, style_name: &str) -> Result<Self, StylesheetError> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s, style_name),
            serde_yaml::Value::Mapping(map) => Ok(StyleDefinition::Attributes(
                StyleAttributes::parse_mapping(map, style_name)?,
            )),
            _ => Err(StylesheetError::InvalidDefinition {
                style: style_name.to_string(),
                message: format!("Expected string or mapping, got {:?}", value),
                path: None,
            }),
        }
    }

    /// A string with spaces or a leading `#` is shorthand. A single word is
    /// shorthand if it names a color or attribute, and an alias otherwise.
    fn parse_string(s: &str, style_name: &str) -> Result<Self, StylesheetError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(StylesheetError::InvalidDefinition {
                style: style_name.to_string(),
                message: "Empty style definition".to_string(),
                path: None,
            });
        }

        if s.contains(' ') || s.starts_with('#') {
            return parse_shorthand(s, style_name).map(StyleDefinition::Attributes);
        }

        Ok(parse_shorthand(s, style_name)
            .map(StyleDefinition::Attributes)
            .unwrap_or_else(|_| StyleDefinition::Alias(s.to_string())))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, StyleDefinition::Alias(_))
    }
}

/// Parses a YAML stylesheet into a validated registry.
///
/// An empty document yields an empty registry.
pub fn parse_stylesheet(yaml: &str) -> Result<Styles, StylesheetError> {
    let root: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            path: None,
            message: e.to_string(),
        })?;

    if root.is_null() {
        return Ok(Styles::new());
    }

    let mapping = root.as_mapping().ok_or_else(|| StylesheetError::Parse {
        path: None,
        message: "Stylesheet must be a YAML mapping".to_string(),
    })?;

    let mut styles = Styles::new();
    for (key, value) in mapping {
        let name = key.as_str().ok_or_else(|| StylesheetError::Parse {
            path: None,
            message: format!("Style name must be a string, got {:?}", key),
        })?;

        match StyleDefinition::parse(value, name)? {
            StyleDefinition::Alias(target) => styles.insert(name, target),
            StyleDefinition::Attributes(attrs) => styles.insert(name, attrs),
        }
    }

    styles
        .validate()
        .map_err(|source| StylesheetError::AliasError { source, path: None })?;

    Ok(styles)
}
