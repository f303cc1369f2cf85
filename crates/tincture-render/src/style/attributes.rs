//! Style attributes and their merge rule.
//!
//! [`StyleAttributes`] is both the per-run state of a
//! [`StyledText`](crate::StyledText) and the most common [`Style`]: applying
//! it merges its fields onto whatever the range already carries.
//!
//! # Merging
//!
//! All fields are `Option`. `Some` values in the incoming attributes replace
//! the existing ones, `None` values preserve them. Applying `<red><blue>`
//! therefore yields blue text, while `<bold><red>` yields bold red text: later
//! styles win on conflicts and everything else accumulates.

use std::ops::Range;

use console::Style as ConsoleStyle;

use super::color::ColorDef;
use super::error::StylesheetError;
use super::Style;
use crate::text::StyledText;

/// Visual attributes for a range of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    /// Foreground (text) color.
    pub fg: Option<ColorDef>,
    /// Background color.
    pub bg: Option<ColorDef>,
    pub bold: Option<bool>,
    /// Dimmed/faded text.
    pub dim: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    /// Blinking text (limited terminal support).
    pub blink: Option<bool>,
    /// Swap fg/bg colors.
    pub reverse: Option<bool>,
    pub hidden: Option<bool>,
    pub strikethrough: Option<bool>,
}

macro_rules! flag_builders {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self) -> Self {
                self.$name = Some(true);
                self
            }
        )*
    };
}

impl StyleAttributes {
    /// Creates empty attributes (all `None`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: impl Into<ColorDef>) -> Self {
        self.fg = Some(color.into());
        self
    }

    pub fn bg(mut self, color: impl Into<ColorDef>) -> Self {
        self.bg = Some(color.into());
        self
    }

    flag_builders!(
        bold,
        dim,
        italic,
        underline,
        /// Not every terminal honors blinking.
        blink,
        reverse,
        hidden,
        strikethrough,
    );

    /// The boolean field named `name` (`bold`, `dim`, ...), if there is one.
    fn flag_mut(&mut self, name: &str) -> Option<&mut Option<bool>> {
        Some(match name {
            "bold" => &mut self.bold,
            "dim" => &mut self.dim,
            "italic" => &mut self.italic,
            "underline" => &mut self.underline,
            "blink" => &mut self.blink,
            "reverse" => &mut self.reverse,
            "hidden" => &mut self.hidden,
            "strikethrough" => &mut self.strikethrough,
            _ => return None,
        })
    }

    /// Merges `other` onto `self`: `Some` values in `other` win.
    pub fn merge(&self, other: &StyleAttributes) -> StyleAttributes {
        StyleAttributes {
            fg: other.fg.clone().or_else(|| self.fg.clone()),
            bg: other.bg.clone().or_else(|| self.bg.clone()),
            bold: other.bold.or(self.bold),
            dim: other.dim.or(self.dim),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            blink: other.blink.or(self.blink),
            reverse: other.reverse.or(self.reverse),
            hidden: other.hidden.or(self.hidden),
            strikethrough: other.strikethrough.or(self.strikethrough),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == StyleAttributes::default()
    }

    /// Converts to a `console` style. Flags set to `Some(false)` are left off.
    pub fn to_console_style(&self) -> ConsoleStyle {
        let flags: [(Option<bool>, fn(ConsoleStyle) -> ConsoleStyle); 8] = [
            (self.bold, ConsoleStyle::bold),
            (self.dim, ConsoleStyle::dim),
            (self.italic, ConsoleStyle::italic),
            (self.underline, ConsoleStyle::underlined),
            (self.blink, ConsoleStyle::blink),
            (self.reverse, ConsoleStyle::reverse),
            (self.hidden, ConsoleStyle::hidden),
            (self.strikethrough, ConsoleStyle::strikethrough),
        ];

        let mut style = ConsoleStyle::new();
        if let Some(fg) = &self.fg {
            style = style.fg(fg.to_console_color());
        }
        if let Some(bg) = &self.bg {
            style = style.bg(bg.to_console_color());
        }
        for (flag, enable) in flags {
            if flag == Some(true) {
                style = enable(style);
            }
        }
        style
    }

    /// Parses attributes from a YAML mapping such as
    /// `{ fg: cyan, bold: true }`.
    pub fn parse_mapping(
        map: &serde_yaml::Mapping,
        style_name: &str,
    ) -> Result<Self, StylesheetError> {
        let invalid = |message: String| StylesheetError::InvalidDefinition {
            style: style_name.to_string(),
            message,
            path: None,
        };
        let color = |value: &serde_yaml::Value| {
            ColorDef::parse_value(value).map_err(|value| StylesheetError::InvalidColor {
                style: style_name.to_string(),
                value,
                path: None,
            })
        };

        let mut attrs = StyleAttributes::new();
        for (key, value) in map {
            let key = key
                .as_str()
                .ok_or_else(|| invalid(format!("Non-string key in style definition: {:?}", key)))?;

            match key {
                "fg" => attrs.fg = Some(color(value)?),
                "bg" => attrs.bg = Some(color(value)?),
                _ => {
                    let slot = attrs.flag_mut(key).ok_or_else(|| {
                        StylesheetError::UnknownAttribute {
                            style: style_name.to_string(),
                            attribute: key.to_string(),
                            path: None,
                        }
                    })?;
                    *slot = Some(value.as_bool().ok_or_else(|| {
                        invalid(format!("'{}' must be a boolean, got {:?}", key, value))
                    })?);
                }
            }
        }
        Ok(attrs)
    }
}

impl Style for StyleAttributes {
    fn apply(&self, range: Range<usize>, target: &mut StyledText) {
        target.update(range, |attrs| *attrs = attrs.merge(self));
    }
}

/// Parses a shorthand string into attributes.
///
/// Shorthand is space-separated attribute names plus at most one color:
///
/// - `"bold"` → bold
/// - `"cyan"` → fg: cyan
/// - `"yellow italic"` → fg: yellow, italic
pub fn parse_shorthand(s: &str, style_name: &str) -> Result<StyleAttributes, StylesheetError> {
    let invalid = |value: String| StylesheetError::InvalidShorthand {
        style: style_name.to_string(),
        value,
        path: None,
    };

    let mut attrs = StyleAttributes::new();
    for part in s.split_whitespace() {
        let word = part.to_lowercase();
        if let Some(slot) = attrs.flag_mut(&word) {
            *slot = Some(true);
        } else if attrs.fg.is_some() {
            return Err(invalid(format!(
                "Multiple colors in shorthand: already have fg, got '{}'",
                part
            )));
        } else {
            attrs.fg = Some(ColorDef::parse_string(part).map_err(invalid)?);
        }
    }

    if attrs.is_empty() {
        return Err(invalid(format!("Empty or invalid shorthand: '{}'", s)));
    }
    Ok(attrs)
}
