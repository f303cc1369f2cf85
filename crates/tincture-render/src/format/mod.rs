//! Placeholder arguments and the function that formats them.
//!
//! The renderer hands each placeholder's format text (index already
//! stripped, e.g. `%04d`) and its argument to a [`FormatFunction`]. The
//! default is [`PrintfFormat`]; any `Fn(&str, &FormatArg) -> String` closure
//! works too.

mod printf;

use std::fmt;

pub use printf::PrintfFormat;

/// Formats one argument according to one conversion specifier.
///
/// Implementations must not fail. An argument whose type does not fit the
/// conversion should be coerced or shown in its natural form.
pub trait FormatFunction {
    fn format(&self, spec: &str, arg: &FormatArg) -> String;
}

impl<F> FormatFunction for F
where
    F: Fn(&str, &FormatArg) -> String,
{
    fn format(&self, spec: &str, arg: &FormatArg) -> String {
        self(spec, arg)
    }
}

/// A single placeholder argument.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Char(char),
    Bool(bool),
}

impl FormatArg {
    /// The value as an integer, truncating floats and parsing strings.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            FormatArg::Int(v) => Some(i128::from(*v)),
            FormatArg::UInt(v) => Some(i128::from(*v)),
            FormatArg::Float(v) if v.is_finite() => Some(v.trunc() as i128),
            FormatArg::Float(_) => None,
            FormatArg::Bool(b) => Some(i128::from(*b)),
            FormatArg::Char(c) => Some(i128::from(u32::from(*c))),
            FormatArg::Str(s) => {
                let s = s.trim();
                s.parse::<i128>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .map(|v| v.trunc() as i128)
                })
            }
        }
    }

    /// The value as a float, parsing strings.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FormatArg::Int(v) => Some(*v as f64),
            FormatArg::UInt(v) => Some(*v as f64),
            FormatArg::Float(v) => Some(*v),
            FormatArg::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FormatArg::Char(c) => Some(f64::from(u32::from(*c))),
            FormatArg::Str(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Truthiness for `%b`: numbers are true when non-zero, strings when
    /// non-empty, characters always.
    pub fn as_bool(&self) -> bool {
        match self {
            FormatArg::Bool(b) => *b,
            FormatArg::Int(v) => *v != 0,
            FormatArg::UInt(v) => *v != 0,
            FormatArg::Float(v) => *v != 0.0,
            FormatArg::Str(s) => !s.is_empty(),
            FormatArg::Char(_) => true,
        }
    }
}

/// The natural string form, as used by `%@` and `%s`.
impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Int(v) => write!(f, "{v}"),
            FormatArg::UInt(v) => write!(f, "{v}"),
            FormatArg::Float(v) => write!(f, "{v}"),
            FormatArg::Str(s) => f.write_str(s),
            FormatArg::Char(c) => write!(f, "{c}"),
            FormatArg::Bool(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for FormatArg {
                fn from(v: $t) -> Self {
                    FormatArg::$variant(v as $target)
                }
            }
        )*
    };
}

from_int!(Int, i64: i8, i16, i32, i64, isize);
from_int!(UInt, u64: u8, u16, u32, u64, usize);

impl From<f32> for FormatArg {
    fn from(v: f32) -> Self {
        FormatArg::Float(f64::from(v))
    }
}

impl From<f64> for FormatArg {
    fn from(v: f64) -> Self {
        FormatArg::Float(v)
    }
}

impl From<bool> for FormatArg {
    fn from(v: bool) -> Self {
        FormatArg::Bool(v)
    }
}

impl From<char> for FormatArg {
    fn from(v: char) -> Self {
        FormatArg::Char(v)
    }
}

impl From<&str> for FormatArg {
    fn from(v: &str) -> Self {
        FormatArg::Str(v.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(v: String) -> Self {
        FormatArg::Str(v)
    }
}

impl From<&String> for FormatArg {
    fn from(v: &String) -> Self {
        FormatArg::Str(v.clone())
    }
}
