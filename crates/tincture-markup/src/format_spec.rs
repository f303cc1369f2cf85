//! Grammar for a single `%` conversion specifier.
//!
//! ```text
//! spec  := '%' [digits '$'] flags [digits] ['.' [digits]] conv
//! flags := ('-' | '+' | '#' | '0' | ' ')*
//! conv  := '@' | 'd' | 'i' | 'f' | 'e' | 'E' | 'g' | 'G'
//!        | 'x' | 'X' | 'o' | 'c' | 's' | 'b' | 'h'
//! ```
//!
//! Only what is needed to find the conversion character and the explicit
//! argument index is validated. The parsed flags, width and precision are
//! kept so a formatting function can honor them.

/// The conversion character that ends a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `%@`: the argument's natural string form.
    Object,
    /// `%d`
    Decimal,
    /// `%i`
    Integer,
    /// `%f`
    Float,
    /// `%e` / `%E`
    Exponent { upper: bool },
    /// `%g` / `%G`
    General { upper: bool },
    /// `%x` / `%X`
    Hex { upper: bool },
    /// `%o`
    Octal,
    /// `%c`
    Char,
    /// `%s`
    Str,
    /// `%b`: boolean.
    Bool,
    /// `%h`: lowercase hexadecimal.
    HexHash,
}

impl Conversion {
    pub fn from_char(c: char) -> Option<Self> {
        let conversion = match c {
            '@' => Conversion::Object,
            'd' => Conversion::Decimal,
            'i' => Conversion::Integer,
            'f' => Conversion::Float,
            'e' => Conversion::Exponent { upper: false },
            'E' => Conversion::Exponent { upper: true },
            'g' => Conversion::General { upper: false },
            'G' => Conversion::General { upper: true },
            'x' => Conversion::Hex { upper: false },
            'X' => Conversion::Hex { upper: true },
            'o' => Conversion::Octal,
            'c' => Conversion::Char,
            's' => Conversion::Str,
            'b' => Conversion::Bool,
            'h' => Conversion::HexHash,
            _ => return None,
        };
        Some(conversion)
    }

    pub fn as_char(&self) -> char {
        match self {
            Conversion::Object => '@',
            Conversion::Decimal => 'd',
            Conversion::Integer => 'i',
            Conversion::Float => 'f',
            Conversion::Exponent { upper: false } => 'e',
            Conversion::Exponent { upper: true } => 'E',
            Conversion::General { upper: false } => 'g',
            Conversion::General { upper: true } => 'G',
            Conversion::Hex { upper: false } => 'x',
            Conversion::Hex { upper: true } => 'X',
            Conversion::Octal => 'o',
            Conversion::Char => 'c',
            Conversion::Str => 's',
            Conversion::Bool => 'b',
            Conversion::HexHash => 'h',
        }
    }

    /// True for conversions that take a numeric argument.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Conversion::Decimal
                | Conversion::Integer
                | Conversion::Float
                | Conversion::Exponent { .. }
                | Conversion::General { .. }
                | Conversion::Hex { .. }
                | Conversion::Octal
                | Conversion::HexHash
        )
    }
}

/// Flag characters between the index and the width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// `-`
    pub left_align: bool,
    /// `+`
    pub plus_sign: bool,
    /// ` `
    pub space_sign: bool,
    /// `#`
    pub alternate: bool,
    /// `0`
    pub zero_pad: bool,
}

/// Largest width or precision a specifier may carry.
pub const MAX_FIELD: usize = u16::MAX as usize;

/// A parsed conversion specifier such as `%2$-08.3f`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    /// Zero-based argument index from a `N$` prefix.
    pub explicit_index: Option<usize>,
    pub flags: Flags,
    pub width: Option<usize>,
    /// `.` alone means a precision of zero.
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

impl FormatSpec {
    /// Parses a complete specifier, including its leading `%`.
    ///
    /// Returns `None` if anything is left over after the conversion
    /// character, if the conversion character is unsupported, or if an
    /// explicit index is zero or does not fit in `usize`, or if the width or
    /// precision exceeds [`MAX_FIELD`].
    ///
    /// ```rust
    /// use tincture_markup::{Conversion, FormatSpec};
    ///
    /// let spec = FormatSpec::parse("%2$04d").unwrap();
    /// assert_eq!(spec.explicit_index, Some(1));
    /// assert!(spec.flags.zero_pad);
    /// assert_eq!(spec.width, Some(4));
    /// assert_eq!(spec.conversion, Conversion::Decimal);
    ///
    /// assert!(FormatSpec::parse("%z").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut cursor = Cursor::new(text.strip_prefix('%')?);

        let mut explicit_index = None;
        let before_index = cursor.pos;
        match cursor.digits() {
            Some(number) if cursor.eat(b'$') => {
                explicit_index = Some(number?.checked_sub(1)?);
            }
            // Not an index: the digits belong to the flags or width.
            _ => cursor.pos = before_index,
        }

        let mut flags = Flags::default();
        while let Some(byte) = cursor.peek() {
            match byte {
                b'-' => flags.left_align = true,
                b'+' => flags.plus_sign = true,
                b' ' => flags.space_sign = true,
                b'#' => flags.alternate = true,
                b'0' => flags.zero_pad = true,
                _ => break,
            }
            cursor.pos += 1;
        }

        let width = match cursor.digits() {
            Some(width) => Some(width.filter(|w| *w <= MAX_FIELD)?),
            None => None,
        };

        let precision = if cursor.eat(b'.') {
            match cursor.digits() {
                Some(precision) => Some(precision.filter(|p| *p <= MAX_FIELD)?),
                None => Some(0),
            }
        } else {
            None
        };

        let conversion = Conversion::from_char(char::from(cursor.next()?))?;
        if !cursor.is_at_end() {
            return None;
        }

        Some(Self {
            explicit_index,
            flags,
            width,
            precision,
            conversion,
        })
    }
}

/// Byte cursor over the specifier body. Every accepted token is ASCII, so
/// any multi-byte character simply fails to match.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Consumes a run of ASCII digits.
    ///
    /// Returns `None` if there are no digits, `Some(None)` if they overflow.
    fn digits(&mut self) -> Option<Option<usize>> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if start == self.pos {
            return None;
        }
        let mut value: usize = 0;
        for byte in &self.bytes[start..self.pos] {
            let digit = usize::from(byte - b'0');
            let next = value.checked_mul(10).and_then(|v| v.checked_add(digit));
            match next {
                Some(next) => value = next,
                None => return Some(None),
            }
        }
        Some(Some(value))
    }
}
