//! printf-style formatting of a single argument.
//!
//! | Conversion | Output |
//! |------------|--------|
//! | `d` `i` | signed decimal |
//! | `x` `X` `o` `h` | unsigned hex / octal (`h` is lowercase hex) |
//! | `f` | fixed-point, precision defaults to 6 |
//! | `e` `E` | scientific, exponent has a sign and at least two digits |
//! | `g` `G` | shortest of `f`/`e` with trailing zeros removed |
//! | `c` | single character, from a char or a code point |
//! | `b` | `true` / `false` |
//! | `s` `@` | natural string form; precision truncates |
//!
//! Flags `-`, `+`, space, `#` and `0` and field width apply as in C. Negative
//! integers shown in hex or octal use their 64-bit two's complement.

use tincture_markup::{Conversion, FormatSpec};

use super::{FormatArg, FormatFunction};

const DEFAULT_FLOAT_PRECISION: usize = 6;

/// The default [`FormatFunction`].
///
/// ```rust
/// use tincture_render::{FormatArg, FormatFunction, PrintfFormat};
///
/// assert_eq!(PrintfFormat.format("%04d", &FormatArg::Int(7)), "0007");
/// assert_eq!(PrintfFormat.format("%.2f", &FormatArg::Float(3.14159)), "3.14");
/// assert_eq!(PrintfFormat.format("%-6@|", &FormatArg::from("ab")), "ab    |");
/// ```
///
/// A specifier that does not parse (which the resolver never hands out)
/// yields the argument's natural form.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintfFormat;

impl FormatFunction for PrintfFormat {
    fn format(&self, spec: &str, arg: &FormatArg) -> String {
        match FormatSpec::parse(spec) {
            Some(spec) => format_arg(&spec, arg),
            None => arg.to_string(),
        }
    }
}

fn format_arg(spec: &FormatSpec, arg: &FormatArg) -> String {
    match spec.conversion {
        Conversion::Object | Conversion::Str => format_string(spec, arg.to_string()),
        Conversion::Bool => format_string(spec, arg.as_bool().to_string()),
        Conversion::Char => format_char(spec, arg),
        Conversion::Decimal | Conversion::Integer => match arg.as_integer() {
            Some(value) => format_signed(spec, value),
            None => format_string(spec, arg.to_string()),
        },
        Conversion::Hex { .. } | Conversion::Octal | Conversion::HexHash => {
            match arg.as_integer() {
                Some(value) => format_unsigned(spec, value),
                None => format_string(spec, arg.to_string()),
            }
        }
        Conversion::Float | Conversion::Exponent { .. } | Conversion::General { .. } => {
            match arg.as_float() {
                Some(value) => format_float(spec, value),
                None => format_string(spec, arg.to_string()),
            }
        }
    }
}

fn format_string(spec: &FormatSpec, text: String) -> String {
    let text = match spec.precision {
        Some(max) => text.chars().take(max).collect(),
        None => text,
    };
    pad(text, spec)
}

fn format_char(spec: &FormatSpec, arg: &FormatArg) -> String {
    let c = match arg {
        FormatArg::Char(c) => Some(*c),
        FormatArg::Str(s) => s.chars().next(),
        other => other
            .as_integer()
            .and_then(|v| u32::try_from(v).ok())
            .and_then(char::from_u32),
    };
    match c {
        Some(c) => pad(c.to_string(), spec),
        None => format_string(spec, arg.to_string()),
    }
}

fn format_signed(spec: &FormatSpec, value: i128) -> String {
    let mut digits = value.unsigned_abs().to_string();
    apply_integer_precision(&mut digits, spec.precision);
    let sign = sign_for(spec, value < 0);
    assemble(spec, sign, "", &digits, spec.precision.is_none())
}

fn format_unsigned(spec: &FormatSpec, value: i128) -> String {
    let bits = if value < 0 {
        value as i64 as u64
    } else {
        u64::try_from(value).unwrap_or(u64::MAX)
    };

    let (mut digits, prefix) = match spec.conversion {
        Conversion::Hex { upper: true } => (format!("{bits:X}"), "0X"),
        Conversion::Octal => (format!("{bits:o}"), "0"),
        _ => (format!("{bits:x}"), "0x"),
    };
    apply_integer_precision(&mut digits, spec.precision);

    let prefix = match spec.conversion {
        _ if !spec.flags.alternate || bits == 0 => "",
        Conversion::Octal if digits.starts_with('0') => "",
        _ => prefix,
    };
    assemble(spec, "", prefix, &digits, spec.precision.is_none())
}

/// Precision on integers is a minimum digit count; `.0` with a zero value
/// prints no digits at all.
fn apply_integer_precision(digits: &mut String, precision: Option<usize>) {
    let Some(precision) = precision else {
        return;
    };
    if precision == 0 && digits == "0" {
        digits.clear();
    } else if digits.len() < precision {
        digits.insert_str(0, &"0".repeat(precision - digits.len()));
    }
}

fn format_float(spec: &FormatSpec, value: f64) -> String {
    let upper = matches!(
        spec.conversion,
        Conversion::Exponent { upper: true } | Conversion::General { upper: true }
    );
    let sign = sign_for(spec, value.is_sign_negative() && !value.is_nan());

    if !value.is_finite() {
        let body = match (value.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        return assemble(spec, sign, "", body, false);
    }

    let magnitude = value.abs();
    let precision = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
    let alternate = spec.flags.alternate;

    let body = match spec.conversion {
        Conversion::Exponent { .. } => exponential(magnitude, precision, alternate, upper),
        Conversion::General { .. } => general(magnitude, precision, alternate, upper),
        _ => fixed(magnitude, precision, alternate),
    };
    assemble(spec, sign, "", &body, true)
}

fn fixed(value: f64, precision: usize, alternate: bool) -> String {
    let mut body = format!("{value:.precision$}");
    if alternate && precision == 0 {
        body.push('.');
    }
    body
}

fn exponential(value: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let (mut mantissa, exponent) = split_exponent(value, precision);
    if alternate && precision == 0 {
        mantissa.push('.');
    }
    let e = if upper { 'E' } else { 'e' };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{exp_sign}{:02}", exponent.unsigned_abs())
}

/// `%g`: scientific when the exponent is below -4 or not below the
/// precision, fixed otherwise. Trailing zeros go unless `#` is set.
fn general(value: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let precision = precision.max(1);
    let (_, exponent) = split_exponent(value, precision - 1);

    let use_exponent = exponent < -4 || exponent >= precision as i32;
    let body = if use_exponent {
        exponential(value, precision - 1, alternate, upper)
    } else {
        let decimals = usize::try_from(precision as i32 - 1 - exponent).unwrap_or(0);
        fixed(value, decimals, alternate)
    };

    if alternate {
        body
    } else {
        strip_trailing_zeros(&body)
    }
}

/// Mantissa digits and decimal exponent of `value` rounded to `precision`
/// fractional digits in scientific notation.
fn split_exponent(value: f64, precision: usize) -> (String, i32) {
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

fn strip_trailing_zeros(body: &str) -> String {
    let (number, exponent) = match body.find(['e', 'E']) {
        Some(at) => body.split_at(at),
        None => (body, ""),
    };
    if !number.contains('.') {
        return body.to_string();
    }
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{number}{exponent}")
}

fn sign_for(spec: &FormatSpec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.flags.plus_sign {
        "+"
    } else if spec.flags.space_sign {
        " "
    } else {
        ""
    }
}

/// Joins sign, prefix and digits, then pads to the field width. Zero padding
/// goes between the prefix and the digits.
fn assemble(spec: &FormatSpec, sign: &str, prefix: &str, digits: &str, zero_ok: bool) -> String {
    let width = spec.width.unwrap_or(0);
    let len = sign.len() + prefix.len() + digits.chars().count();
    if len >= width {
        return format!("{sign}{prefix}{digits}");
    }

    let fill = width - len;
    if spec.flags.left_align {
        format!("{sign}{prefix}{digits}{}", " ".repeat(fill))
    } else if spec.flags.zero_pad && zero_ok {
        format!("{sign}{prefix}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{sign}{prefix}{digits}", " ".repeat(fill))
    }
}

fn pad(text: String, spec: &FormatSpec) -> String {
    let width = spec.width.unwrap_or(0);
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let fill = " ".repeat(width - len);
    if spec.flags.left_align {
        text + &fill
    } else {
        fill + &text
    }
}
