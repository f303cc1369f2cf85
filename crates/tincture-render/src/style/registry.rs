//! Style registry for managing named styles.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use super::error::{StyleValidationError, StylesheetError};
use super::stylesheet::parse_stylesheet;
use super::value::StyleValue;
use super::Style;

/// A collection of named styles.
///
/// Names are case-sensitive. Values are concrete styles or aliases to other
/// names, so stylesheets can layer semantic names over visual ones. A
/// registry is an immutable snapshot once built: renderers only read it, and
/// every concrete style is `Send + Sync`.
///
/// ```rust
/// use console::Color;
/// use tincture_render::{StyleAttributes, Styles};
///
/// let styles = Styles::new()
///     .add("error", StyleAttributes::new().fg(Color::Red).bold())
///     .add("dim", StyleAttributes::new().dim())
///     .add("muted", "dim");
///
/// assert!(styles.get("muted").is_some());
/// assert!(styles.get("Muted").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: BTreeMap<String, StyleValue>,
}

impl Styles {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style. Returns self for chaining.
    ///
    /// The value is a concrete style ([`StyleAttributes`](crate::StyleAttributes),
    /// [`FnStyle`](crate::FnStyle) or an `Arc<dyn Style>`) or a `&str`/`String`
    /// alias. An existing entry with the same name is replaced.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a named style in place.
    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) {
        self.styles.insert(name.to_string(), value.into());
    }

    /// Resolves `name` to a concrete style, following aliases.
    ///
    /// Returns `None` if the name is unknown, an alias dangles, or aliases
    /// form a cycle. Use [`validate`](Self::validate) to find out which.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Style>> {
        let mut current = name;
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(current) {
                return None;
            }
            match self.styles.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(next) => current = next,
            }
        }
    }

    /// Returns true if a value is registered under `name`, resolvable or not.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Checks that every alias resolves to a concrete style.
    ///
    /// Aliases are checked in name order and the first problem is returned.
    ///
    /// ```rust
    /// use tincture_render::{StyleAttributes, StyleValidationError, Styles};
    ///
    /// let styles = Styles::new()
    ///     .add("visual", StyleAttributes::new().bold())
    ///     .add("semantic", "visual");
    /// assert!(styles.validate().is_ok());
    ///
    /// let broken = Styles::new().add("orphan", "missing");
    /// assert_eq!(
    ///     broken.validate(),
    ///     Err(StyleValidationError::UnresolvedAlias {
    ///         from: "orphan".into(),
    ///         to: "missing".into(),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for (name, value) in &self.styles {
            if let StyleValue::Alias(target) = value {
                self.validate_alias_chain(name, target)?;
            }
        }
        Ok(())
    }

    fn validate_alias_chain(&self, name: &str, target: &str) -> Result<(), StyleValidationError> {
        let mut current = target;
        let mut path = vec![name.to_string()];

        loop {
            let Some(value) = self.styles.get(current) else {
                return Err(StyleValidationError::UnresolvedAlias {
                    from: path.last().cloned().unwrap_or_default(),
                    to: current.to_string(),
                });
            };

            let seen = path.iter().any(|p| p == current);
            path.push(current.to_string());
            if seen {
                return Err(StyleValidationError::CycleDetected { path });
            }

            match value {
                StyleValue::Concrete(_) => return Ok(()),
                StyleValue::Alias(next) => current = next,
            }
        }
    }

    /// Layers `other` on top of `self`. Entries in `other` replace entries
    /// with the same name.
    pub fn merge(mut self, other: Styles) -> Self {
        self.styles.extend(other.styles);
        self
    }

    /// Parses a YAML stylesheet. Aliases are validated before returning.
    ///
    /// ```rust
    /// use tincture_render::Styles;
    ///
    /// let styles = Styles::from_yaml(r#"
    /// header:
    ///   fg: cyan
    ///   bold: true
    /// muted:
    ///   dim: true
    /// warning: "yellow italic"
    /// disabled: muted
    /// "#).unwrap();
    ///
    /// assert_eq!(styles.len(), 4);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        parse_stylesheet(yaml)
    }

    /// Reads and parses a YAML stylesheet file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| StylesheetError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        parse_stylesheet(&yaml).map_err(|e| e.with_path(path))
    }
}
