//! Counter targets: numbers, or display strings such as `"$1.7M+"`.
//!
//! A decorated string is split into three parts: the literal text before
//! the number, the numeric run itself, and the literal text after it.
//! Only the numeric run is animated; the decoration is kept verbatim so the
//! caller can put it back around the formatted value.

use crate::counter::format::MAX_DECIMALS;
use crate::error::ParseError;

/// A parsed counter target: numeric magnitude plus literal decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedTarget {
    /// Text before the numeric run (e.g. `"$"`).
    pub prefix: String,
    /// The numeric magnitude (e.g. `1.7`).
    pub magnitude: f64,
    /// Text after the numeric run (e.g. `"M+"`).
    pub suffix: String,
    /// Number of fractional digits written in the input.
    pub decimals: u32,
}

impl DecoratedTarget {
    /// Parse a decorated display string.
    ///
    /// Grouping commas inside the numeric run are accepted and dropped
    /// (`"80,000+"` is `80000`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoDigits`] when the input has no digit,
    /// [`ParseError::NotFinite`] when the digits overflow `f64`, and
    /// [`ParseError::TooManyDecimals`] when more than [`MAX_DECIMALS`]
    /// fractional digits are written.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let bytes = input.as_bytes();
        let first_digit =
            bytes
                .iter()
                .position(u8::is_ascii_digit)
                .ok_or_else(|| ParseError::NoDigits {
                    input: input.to_string(),
                })?;

        let mut start = first_digit;
        let leading_dot = start > 0 && bytes[start - 1] == b'.';
        if leading_dot {
            start -= 1;
        }
        if start > 0 && bytes[start - 1] == b'-' {
            start -= 1;
        }

        let mut end = first_digit;
        let mut seen_dot = leading_dot;
        while end < bytes.len() {
            match bytes[end] {
                b'0'..=b'9' => end += 1,
                b',' if !seen_dot && digit_at(bytes, end + 1) => end += 1,
                b'.' if !seen_dot && digit_at(bytes, end + 1) => {
                    seen_dot = true;
                    end += 1;
                }
                _ => break,
            }
        }

        let run = &input[start..end];
        let mut digits: String = run.chars().filter(|c| *c != ',').collect();
        if let Some(rest) = digits.strip_prefix("-.") {
            digits = format!("-0.{rest}");
        } else if let Some(rest) = digits.strip_prefix('.') {
            digits = format!("0.{rest}");
        }

        let magnitude = digits
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::NotFinite {
                input: input.to_string(),
            })?;

        let decimals = run
            .split_once('.')
            .map_or(0, |(_, frac)| u32::try_from(frac.len()).unwrap_or(u32::MAX));
        if decimals > MAX_DECIMALS {
            return Err(ParseError::TooManyDecimals {
                decimals,
                max: MAX_DECIMALS,
            });
        }

        Ok(Self {
            prefix: input[..start].to_string(),
            magnitude,
            suffix: input[end..].to_string(),
            decimals,
        })
    }
}

fn digit_at(bytes: &[u8], index: usize) -> bool {
    bytes.get(index).is_some_and(u8::is_ascii_digit)
}

/// What a counter animates toward, as supplied by content or a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterTarget {
    /// A plain number, rendered without decoration.
    Number(f64),
    /// A display string whose decoration is preserved (e.g. `"960+"`).
    Decorated(String),
}

impl CounterTarget {
    /// Resolve into a magnitude plus decoration.
    ///
    /// For a plain number the decimals are inferred from its shortest
    /// decimal representation (`3.9` has one, `960.0` has none), capped at
    /// [`MAX_DECIMALS`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when a decorated string has no usable
    /// number, or when a plain number is not finite.
    pub fn resolve(&self) -> Result<DecoratedTarget, ParseError> {
        match self {
            Self::Number(value) => {
                if !value.is_finite() {
                    return Err(ParseError::NotFinite {
                        input: value.to_string(),
                    });
                }
                Ok(DecoratedTarget {
                    prefix: String::new(),
                    magnitude: *value,
                    suffix: String::new(),
                    decimals: inferred_decimals(*value),
                })
            }
            Self::Decorated(text) => DecoratedTarget::parse(text),
        }
    }
}

fn inferred_decimals(value: f64) -> u32 {
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, frac)| u32::try_from(frac.len()).unwrap_or(u32::MAX))
        .min(MAX_DECIMALS)
}

impl From<f64> for CounterTarget {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CounterTarget {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for CounterTarget {
    fn from(value: &str) -> Self {
        Self::Decorated(value.to_string())
    }
}

impl From<String> for CounterTarget {
    fn from(value: String) -> Self {
        Self::Decorated(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_currency_and_multiplier_decoration() {
        let parsed = DecoratedTarget::parse("$1.7M+").unwrap();
        assert_eq!(parsed.prefix, "$");
        assert!((parsed.magnitude - 1.7).abs() < f64::EPSILON);
        assert_eq!(parsed.suffix, "M+");
        assert_eq!(parsed.decimals, 1);
    }

    #[test]
    fn should_parse_trailing_plus() {
        let parsed = DecoratedTarget::parse("960+").unwrap();
        assert!((parsed.magnitude - 960.0).abs() < f64::EPSILON);
        assert_eq!(parsed.prefix, "");
        assert_eq!(parsed.suffix, "+");
        assert_eq!(parsed.decimals, 0);
    }

    #[test]
    fn should_parse_percentage() {
        let parsed = DecoratedTarget::parse("100%").unwrap();
        assert!((parsed.magnitude - 100.0).abs() < f64::EPSILON);
        assert_eq!(parsed.suffix, "%");
    }

    #[test]
    fn should_drop_grouping_commas() {
        let parsed = DecoratedTarget::parse("80,000+").unwrap();
        assert!((parsed.magnitude - 80_000.0).abs() < f64::EPSILON);
        assert_eq!(parsed.suffix, "+");
    }

    #[test]
    fn should_keep_trailing_comma_in_suffix() {
        let parsed = DecoratedTarget::parse("12, maybe").unwrap();
        assert!((parsed.magnitude - 12.0).abs() < f64::EPSILON);
        assert_eq!(parsed.suffix, ", maybe");
    }

    #[test]
    fn should_parse_negative_number() {
        let parsed = DecoratedTarget::parse("-42 pts").unwrap();
        assert!((parsed.magnitude + 42.0).abs() < f64::EPSILON);
        assert_eq!(parsed.prefix, "");
        assert_eq!(parsed.suffix, " pts");
    }

    #[test]
    fn should_parse_leading_dot_fraction() {
        let parsed = DecoratedTarget::parse(".5x").unwrap();
        assert!((parsed.magnitude - 0.5).abs() < f64::EPSILON);
        assert_eq!(parsed.decimals, 1);
        assert_eq!(parsed.suffix, "x");
    }

    #[test]
    fn should_stop_at_second_number() {
        let parsed = DecoratedTarget::parse("2018-2020").unwrap();
        assert!((parsed.magnitude - 2018.0).abs() < f64::EPSILON);
        assert_eq!(parsed.suffix, "-2020");
    }

    #[test]
    fn should_keep_multibyte_decoration() {
        let parsed = DecoratedTarget::parse("€3.25 → ↑").unwrap();
        assert_eq!(parsed.prefix, "€");
        assert_eq!(parsed.decimals, 2);
        assert_eq!(parsed.suffix, " → ↑");
    }

    #[test]
    fn should_return_no_digits_error_for_text_without_number() {
        let result = DecoratedTarget::parse("N/A");
        assert_eq!(
            result,
            Err(ParseError::NoDigits {
                input: "N/A".to_string()
            })
        );
    }

    #[test]
    fn should_return_no_digits_error_for_empty_input() {
        assert!(matches!(
            DecoratedTarget::parse(""),
            Err(ParseError::NoDigits { .. })
        ));
    }

    #[test]
    fn should_return_not_finite_error_on_overflow() {
        let huge = "9".repeat(400);
        assert!(matches!(
            DecoratedTarget::parse(&huge),
            Err(ParseError::NotFinite { .. })
        ));
    }

    #[test]
    fn should_infer_decimals_for_plain_number() {
        let resolved = CounterTarget::from(3.9).resolve().unwrap();
        assert_eq!(resolved.decimals, 1);

        let resolved = CounterTarget::from(960_i64).resolve().unwrap();
        assert_eq!(resolved.decimals, 0);
    }

    #[test]
    fn should_reject_fraction_longer_than_display_limit() {
        let long = format!("1.{}", "0".repeat(70_000));
        assert_eq!(
            DecoratedTarget::parse(&long),
            Err(ParseError::TooManyDecimals {
                decimals: 70_000,
                max: MAX_DECIMALS,
            })
        );

        let widest = format!("0.{}1%", "0".repeat(19));
        assert_eq!(DecoratedTarget::parse(&widest).unwrap().decimals, 20);
    }

    #[test]
    fn should_cap_inferred_decimals_for_tiny_plain_number() {
        let resolved = CounterTarget::from(1e-300).resolve().unwrap();
        assert_eq!(resolved.decimals, MAX_DECIMALS);
    }

    #[test]
    fn should_reject_non_finite_plain_number() {
        let result = CounterTarget::from(f64::NAN).resolve();
        assert!(matches!(result, Err(ParseError::NotFinite { .. })));
    }
}
