//! Color values for style attributes.
//!
//! Accepted forms:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (the 8 base ANSI colors)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"`
//! - RGB tuple: `[255, 107, 53]`
//!
//! ```rust
//! use tincture_render::ColorDef;
//!
//! let hex = ColorDef::parse_string("#ff6b35").unwrap();
//! assert_eq!(hex, ColorDef::Rgb(255, 107, 53));
//!
//! let palette = ColorDef::parse_value(&serde_yaml::Value::Number(208.into())).unwrap();
//! assert_eq!(palette, ColorDef::Color256(208));
//! ```

use console::Color;

use crate::util::rgb_to_ansi256;

/// The eight base ANSI colors in palette order.
const BASE_COLORS: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// A color as written in a style definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// True color RGB, mapped to the nearest palette entry on output.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color from a YAML value: a string, a palette index or an
    /// `[r, g, b]` sequence.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .ok_or_else(|| format!("Invalid color palette index: {}", n))?;
                let index = u8::try_from(index)
                    .map_err(|_| format!("Color palette index {} out of range (0-255)", index))?;
                Ok(ColorDef::Color256(index))
            }
            serde_yaml::Value::Sequence(seq) => Self::parse_rgb_tuple(seq),
            _ => Err(format!("Invalid color value: {:?}", value)),
        }
    }

    /// Parses a named color, a `bright_` variant or a `#` hex code.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        Self::parse_named(s)
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let invalid = || format!("Invalid hex: {}", hex);
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(ColorDef::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Base names resolve to [`ColorDef::Named`]; `bright_` names resolve to
    /// palette entries 8-15.
    fn parse_named(name: &str) -> Result<Self, String> {
        let lower = name.to_lowercase();
        let (base, bright) = match lower.strip_prefix("bright_") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        let base = match base {
            "gray" | "grey" if !bright => "white",
            other => other,
        };

        let Some(offset) = BASE_COLORS.iter().position(|(n, _)| *n == base) else {
            return Err(format!("Unknown color name: {}", name));
        };
        Ok(if bright {
            ColorDef::Color256(8 + offset as u8)
        } else {
            ColorDef::Named(BASE_COLORS[offset].1)
        })
    }

    fn parse_rgb_tuple(seq: &[serde_yaml::Value]) -> Result<Self, String> {
        let channels = seq
            .iter()
            .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| format!("RGB channels must be integers 0-255: {:?}", seq))?;

        match channels[..] {
            [r, g, b] => Ok(ColorDef::Rgb(r, g, b)),
            _ => Err(format!("RGB tuple needs 3 channels, got {}", channels.len())),
        }
    }

    pub fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

impl From<Color> for ColorDef {
    fn from(color: Color) -> Self {
        ColorDef::Named(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    mod strings {
        use super::*;

        #[test]
        fn named_colors() {
            assert_eq!(
                ColorDef::parse_string("red").unwrap(),
                ColorDef::Named(Color::Red)
            );
            assert_eq!(
                ColorDef::parse_string("cyan").unwrap(),
                ColorDef::Named(Color::Cyan)
            );
        }

        #[test]
        fn named_colors_ignore_case_and_whitespace() {
            assert_eq!(
                ColorDef::parse_string("  Blue ").unwrap(),
                ColorDef::Named(Color::Blue)
            );
        }

        #[test]
        fn gray_is_white() {
            assert_eq!(
                ColorDef::parse_string("grey").unwrap(),
                ColorDef::Named(Color::White)
            );
        }

        #[test]
        fn bright_variants_use_palette() {
            assert_eq!(
                ColorDef::parse_string("bright_red").unwrap(),
                ColorDef::Color256(9)
            );
            assert_eq!(
                ColorDef::parse_string("Bright_White").unwrap(),
                ColorDef::Color256(15)
            );
            assert!(ColorDef::parse_string("bright_orange").is_err());
            assert!(ColorDef::parse_string("bright_grey").is_err());
        }

        #[test]
        fn hex_six_digits() {
            assert_eq!(
                ColorDef::parse_string("#ff6b35").unwrap(),
                ColorDef::Rgb(255, 107, 53)
            );
        }

        #[test]
        fn hex_three_digits_expand() {
            assert_eq!(
                ColorDef::parse_string("#fa0").unwrap(),
                ColorDef::Rgb(255, 170, 0)
            );
        }

        #[test]
        fn bad_hex() {
            assert!(ColorDef::parse_string("#ff").is_err());
            assert!(ColorDef::parse_string("#gggggg").is_err());
            assert!(ColorDef::parse_string("#ééé").is_err());
        }

        #[test]
        fn unknown_name() {
            assert!(ColorDef::parse_string("purple").is_err());
        }
    }

    mod values {
        use super::*;

        #[test]
        fn palette_index() {
            assert_eq!(
                ColorDef::parse_value(&Value::Number(42.into())).unwrap(),
                ColorDef::Color256(42)
            );
            assert!(ColorDef::parse_value(&Value::Number(256.into())).is_err());
        }

        #[test]
        fn rgb_tuple() {
            let seq = Value::Sequence(vec![
                Value::Number(1.into()),
                Value::Number(2.into()),
                Value::Number(3.into()),
            ]);
            assert_eq!(ColorDef::parse_value(&seq).unwrap(), ColorDef::Rgb(1, 2, 3));
        }

        #[test]
        fn rgb_tuple_wrong_length() {
            let seq = Value::Sequence(vec![Value::Number(1.into())]);
            assert!(ColorDef::parse_value(&seq).is_err());
        }

        #[test]
        fn other_types_fail() {
            assert!(ColorDef::parse_value(&Value::Bool(true)).is_err());
        }
    }

    #[test]
    fn console_conversion() {
        assert_eq!(ColorDef::Named(Color::Red).to_console_color(), Color::Red);
        assert_eq!(ColorDef::Color256(9).to_console_color(), Color::Color256(9));
        assert_eq!(
            ColorDef::Rgb(255, 0, 0).to_console_color(),
            Color::Color256(196)
        );
    }
}
