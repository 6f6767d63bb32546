//! Text formatting of vectors as `<c0, c1, ...>`.
//!
//! Components are written with a [`NumberFormat`], a subset of the .NET standard numeric format
//! strings, and the separators of a [`Locale`]. Components are separated by the locale's group
//! separator followed by a space.
//!
//! ```
//! use shadervec::{Float2, Locale, VectorFormat};
//!
//! let v = Float2::new(1234.5, -0.3);
//! assert_eq!(v.to_string(), "<1234.5, -0.3>");
//! assert_eq!(format!("{v:.1}"), "<1234.5, -0.3>");
//!
//! let german = VectorFormat::new()
//!     .with_number("N2".parse().unwrap())
//!     .with_locale(Locale::new(',', '.'));
//! assert_eq!(v.format_with(&german), "<1.234,50. -0,30>");
//! ```

use crate::locale::Locale;
use crate::vector::{Float2, Float3, Float4};
use core::fmt;
use core::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("`{format}` is not a supported numeric format string")]
    InvalidFormatString { format: String },
    #[error("formatted vector does not fit in a buffer of {capacity} bytes")]
    BufferTooSmall { capacity: usize },
}

/// How each component is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// `G[n]`, `R` or the empty string. Without a precision, the shortest digits that round-trip,
    /// in exponential notation for exponents below -4 or at least 9. With one, `n` significant
    /// digits, in exponential notation for exponents below -4 or at least `n`.
    General { precision: Option<u8> },
    /// `F[n]`: `n` decimals, 2 by default.
    Fixed { decimals: u8 },
    /// `E[n]` or `e[n]`: one integer digit, `n` decimals (6 by default) and a signed exponent of at
    /// least three digits.
    Exponential { decimals: u8, uppercase: bool },
    /// `N[n]`: like `F[n]` with the integer digits grouped by thousands.
    Number { decimals: u8 },
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::General { precision: None }
    }
}

impl FromStr for NumberFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        let invalid = || {
            tracing::debug!(format = s, "rejected numeric format string");
            FormatError::InvalidFormatString {
                format: s.to_owned(),
            }
        };

        let mut chars = s.chars();
        let Some(kind) = chars.next() else {
            return Ok(Self::default());
        };
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else if digits.len() <= 2 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(digits.parse::<u8>().map_err(|_| invalid())?)
        } else {
            return Err(invalid());
        };

        Ok(match kind {
            'G' | 'g' => Self::General {
                precision: precision.filter(|&p| p > 0),
            },
            'R' | 'r' if precision.is_none() => Self::General { precision: None },
            'F' | 'f' => Self::Fixed {
                decimals: precision.unwrap_or(2),
            },
            'E' | 'e' => Self::Exponential {
                decimals: precision.unwrap_or(6),
                uppercase: kind == 'E',
            },
            'N' | 'n' => Self::Number {
                decimals: precision.unwrap_or(2),
            },
            _ => return Err(invalid()),
        })
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::General { precision: None } => f.write_str("G"),
            Self::General {
                precision: Some(precision),
            } => write!(f, "G{precision}"),
            Self::Fixed { decimals } => write!(f, "F{decimals}"),
            Self::Exponential {
                decimals,
                uppercase,
            } => write!(f, "{}{decimals}", if uppercase { 'E' } else { 'e' }),
            Self::Number { decimals } => write!(f, "N{decimals}"),
        }
    }
}

impl NumberFormat {
    /// Writes a finite, non-negative `value` with `.` as the decimal point and no grouping.
    fn magnitude(self, value: f32) -> String {
        match self {
            Self::General { precision } => match precision.filter(|&p| p > 0) {
                Some(precision) => general(value, precision),
                None => shortest(value),
            },
            Self::Fixed { decimals } | Self::Number { decimals } => {
                format!("{:.*}", usize::from(decimals), value)
            }
            Self::Exponential {
                decimals,
                uppercase,
            } => {
                let scientific = format!("{:.*e}", usize::from(decimals), value);
                match split_exponent(&scientific) {
                    Some((mantissa, exponent)) => {
                        exponential(mantissa, exponent, if uppercase { 'E' } else { 'e' }, 3)
                    }
                    None => scientific,
                }
            }
        }
    }
}

/// Significant digits needed to round-trip any `f32`.
const ROUND_TRIP_DIGITS: i32 = 9;

fn shortest(value: f32) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = split_exponent(&scientific) else {
        return scientific;
    };
    if exponent < -4 || exponent >= ROUND_TRIP_DIGITS {
        exponential(mantissa, exponent, 'E', 2)
    } else {
        value.to_string()
    }
}

fn general(value: f32, precision: u8) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let scientific = format!("{:.*e}", usize::from(precision) - 1, value);
    let Some((mantissa, exponent)) = split_exponent(&scientific) else {
        return scientific;
    };
    if exponent < -4 || exponent >= i32::from(precision) {
        exponential(trim_fraction(mantissa), exponent, 'E', 2)
    } else {
        let decimals = (i32::from(precision) - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

/// Splits Rust's `1.5e-3` notation into mantissa and exponent.
fn split_exponent(scientific: &str) -> Option<(&str, i32)> {
    let (mantissa, exponent) = scientific.split_once('e')?;
    Some((mantissa, exponent.parse().ok()?))
}

fn exponential(mantissa: &str, exponent: i32, marker: char, min_digits: usize) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{mantissa}{marker}{sign}{:0min_digits$}",
        exponent.unsigned_abs()
    )
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Formatting configuration: a [`NumberFormat`] for the components and a [`Locale`] for the
/// separators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorFormat {
    pub number: NumberFormat,
    pub locale: Locale,
}

impl VectorFormat {
    /// General number format with invariant separators.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, number: NumberFormat) -> Self {
        self.number = number;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    fn write_component(&self, out: &mut impl fmt::Write, value: f32) -> fmt::Result {
        if value.is_nan() {
            return out.write_str("NaN");
        }
        if value.is_sign_negative() {
            out.write_char(self.locale.negative_sign)?;
        }
        if value.is_infinite() {
            return out.write_str("Infinity");
        }

        let magnitude = self.number.magnitude(value.abs());
        let (integer, fraction) = match magnitude.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (magnitude.as_str(), None),
        };
        if matches!(self.number, NumberFormat::Number { .. }) {
            for (i, digit) in integer.chars().enumerate() {
                if i > 0 && (integer.len() - i) % 3 == 0 {
                    out.write_char(self.locale.group_separator)?;
                }
                out.write_char(digit)?;
            }
        } else {
            out.write_str(integer)?;
        }
        if let Some(fraction) = fraction {
            out.write_char(self.locale.decimal_separator)?;
            out.write_str(fraction)?;
        }
        Ok(())
    }

    fn write_vector(&self, out: &mut impl fmt::Write, components: &[f32]) -> fmt::Result {
        out.write_char('<')?;
        for (i, &component) in components.iter().enumerate() {
            if i > 0 {
                out.write_char(self.locale.group_separator)?;
                out.write_char(' ')?;
            }
            self.write_component(out, component)?;
        }
        out.write_char('>')
    }
}

/// A vector paired with a [`VectorFormat`], formatted when displayed.
#[derive(Copy, Clone, Debug)]
pub struct Formatted<'a> {
    components: &'a [f32],
    format: &'a VectorFormat,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format.write_vector(f, self.components)
    }
}

/// Writes into a byte slice, failing once it is full.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let rest = &mut self.buf[self.len..];
        if s.len() > rest.len() {
            let fits = rest.len();
            rest.copy_from_slice(&s.as_bytes()[..fits]);
            self.len += fits;
            return Err(fmt::Error);
        }
        rest[..s.len()].copy_from_slice(s.as_bytes());
        self.len += s.len();
        Ok(())
    }
}

fn try_format(
    components: &[f32],
    buf: &mut [u8],
    format: &VectorFormat,
) -> Result<usize, FormatError> {
    let mut writer = SliceWriter { buf, len: 0 };
    match format.write_vector(&mut writer, components) {
        Ok(()) => Ok(writer.len),
        Err(fmt::Error) => {
            let capacity = writer.buf.len();
            writer.buf[..writer.len].fill(0);
            tracing::debug!(capacity, "formatted vector does not fit the buffer");
            Err(FormatError::BufferTooSmall { capacity })
        }
    }
}

macro_rules! impl_format {
    ($($vec:ident),+) => {
        $(
            impl $vec {
                /// Formats the vector with the given number format and separators.
                pub fn format_with(&self, format: &VectorFormat) -> String {
                    self.display_with(format).to_string()
                }

                /// Pairs the vector with `format` for use with `{}`.
                pub fn display_with<'a>(&'a self, format: &'a VectorFormat) -> Formatted<'a> {
                    Formatted {
                        components: self.as_array(),
                        format,
                    }
                }

                /// Formats into `buf`, returning the number of UTF-8 bytes written.
                ///
                /// If the text does not fit, `buf` is left zeroed and
                /// [`FormatError::BufferTooSmall`] is returned.
                pub fn try_format(&self, buf: &mut [u8], format: &VectorFormat) -> Result<usize, FormatError> {
                    try_format(self.as_array(), buf, format)
                }
            }

            /// Invariant formatting. A precision (`{:.2}`) selects that many fixed decimals.
            impl fmt::Display for $vec {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let number = match f.precision() {
                        Some(decimals) => NumberFormat::Fixed {
                            decimals: u8::try_from(decimals).unwrap_or(u8::MAX),
                        },
                        None => NumberFormat::default(),
                    };
                    VectorFormat::new()
                        .with_number(number)
                        .write_vector(f, self.as_array())
                }
            }
        )+
    };
}

impl_format!(Float2, Float3, Float4);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with(number: &str) -> VectorFormat {
        VectorFormat::new().with_number(number.parse().unwrap())
    }

    #[test]
    fn display_is_invariant_general() {
        assert_eq!(Float2::new(1.5, -2.25).to_string(), "<1.5, -2.25>");
        assert_eq!(Float3::new(0.0, 100.0, 0.1).to_string(), "<0, 100, 0.1>");
        assert_eq!(Float4::ONE.to_string(), "<1, 1, 1, 1>");
        assert_eq!(format!("{:.2}", Float2::new(1.0, 2.5)), "<1.00, 2.50>");
    }

    #[test]
    fn non_finite_components() {
        let v = Float3::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(v.to_string(), "<NaN, Infinity, -Infinity>");
    }

    #[test]
    fn general_switches_to_exponent_for_large_and_small_magnitudes() {
        assert_eq!(Float2::new(1e10, 1e-10).to_string(), "<1E+10, 1E-10>");
        assert_eq!(
            Float2::new(f32::MAX, f32::MIN_POSITIVE).to_string(),
            "<3.4028235E+38, 1.1754944E-38>"
        );
        assert_eq!(
            Float4::new(1e8, 1e9, 0.0001, 0.00001).to_string(),
            "<100000000, 1E+09, 0.0001, 1E-05>"
        );
        assert_eq!(
            Float2::new(-1.5e20, 0.0).format_with(&with("R")),
            "<-1.5E+20, 0>"
        );
    }

    #[test]
    fn parses_format_strings() {
        assert_eq!("".parse(), Ok(NumberFormat::General { precision: None }));
        assert_eq!("R".parse(), Ok(NumberFormat::General { precision: None }));
        assert_eq!("G0".parse(), Ok(NumberFormat::General { precision: None }));
        assert_eq!(
            "g4".parse(),
            Ok(NumberFormat::General { precision: Some(4) })
        );
        assert_eq!("F".parse(), Ok(NumberFormat::Fixed { decimals: 2 }));
        assert_eq!(
            "e3".parse(),
            Ok(NumberFormat::Exponential {
                decimals: 3,
                uppercase: false
            })
        );
        assert_eq!("N0".parse(), Ok(NumberFormat::Number { decimals: 0 }));
        for bad in ["X", "F-1", "F100", "R2", "G 2"] {
            assert_eq!(
                bad.parse::<NumberFormat>(),
                Err(FormatError::InvalidFormatString {
                    format: bad.to_owned()
                })
            );
        }
    }

    #[test]
    fn format_strings_display_back() {
        for s in ["G", "G7", "F3", "E6", "e2", "N0"] {
            assert_eq!(s.parse::<NumberFormat>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn number_formats() {
        let v = Float2::new(1234.5678, -0.000_012_5);
        assert_eq!(v.format_with(&with("F")), "<1234.57, -0.00>");
        assert_eq!(v.format_with(&with("F0")), "<1235, -0>");
        assert_eq!(v.format_with(&with("N1")), "<1,234.6, -0.0>");
        assert_eq!(v.format_with(&with("E")), "<1.234568E+003, -1.250000E-005>");
        assert_eq!(v.format_with(&with("e2")), "<1.23e+003, -1.25e-005>");
        assert_eq!(v.format_with(&with("G3")), "<1.23E+03, -1.25E-05>");
        assert_eq!(Float2::new(9.99, 0.5).format_with(&with("G2")), "<10, 0.5>");
        assert_eq!(Float2::new(123.0, 0.0).format_with(&with("G5")), "<123, 0>");
    }

    #[test]
    fn locale_separators() {
        let v = Float3::new(1.5, -2.25, 1_000_000.0);
        let german = VectorFormat::new().with_locale(Locale::new(',', '.'));
        assert_eq!(v.format_with(&german), "<1,5. -2,25. 1000000>");

        let french = with("N2").with_locale(Locale::new(',', '\u{a0}'));
        assert_eq!(
            v.format_with(&french),
            "<1,50\u{a0} -2,25\u{a0} 1\u{a0}000\u{a0}000,00>"
        );

        let sign = Locale::INVARIANT.with_negative_sign('\u{2212}');
        let minus = VectorFormat::new().with_locale(sign);
        assert_eq!(Float2::new(-1.0, 1.0).format_with(&minus), "<\u{2212}1, 1>");
    }

    #[test]
    fn display_with_borrows() {
        let v = Float2::new(0.5, 4.0);
        let format = with("F1");
        assert_eq!(format!("[{}]", v.display_with(&format)), "[<0.5, 4.0>]");
    }

    #[test]
    fn try_format_reports_bytes_written() {
        let mut buf = [0u8; 32];
        let written = Float2::new(1.5, -2.25)
            .try_format(&mut buf, &VectorFormat::default())
            .unwrap();
        assert_eq!(&buf[..written], b"<1.5, -2.25>");

        let french = VectorFormat::new().with_locale(Locale::new(',', '\u{a0}'));
        let written = Float2::new(1.0, 2.0).try_format(&mut buf, &french).unwrap();
        assert_eq!(written, "<1\u{a0} 2>".len());
    }

    #[test]
    fn try_format_zeroes_an_undersized_buffer() {
        for capacity in 0..12 {
            let mut buf = vec![0xAA; capacity];
            assert_eq!(
                Float2::new(1.5, -2.25).try_format(&mut buf, &VectorFormat::default()),
                Err(FormatError::BufferTooSmall { capacity })
            );
            assert!(buf.iter().all(|&b| b == 0), "capacity {capacity}: {buf:?}");
        }
    }
}
