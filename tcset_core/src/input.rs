//! Text-to-number coercion for form fields.
//!
//! The bench calculator never surfaced bad input: anything it could not read
//! became zero. `InputPolicy::Lenient` keeps that behavior; `Strict` turns it
//! into typed errors.

use crate::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Unparseable text reads as 0; negative measurements are accepted.
    #[default]
    Lenient,
    /// Unparseable text and negative measurements are errors.
    Strict,
}

/// Read a number the way a browser `parseFloat(text) || 0` does: skip leading
/// whitespace, take the longest numeric prefix, and fall back to 0 when there
/// is none or the value is not finite.
///
/// `"12.5abc"` reads as 12.5, `"abc"` and `""` as 0. `"-0"` reads as 0.
pub fn parse_lenient(text: &str) -> f64 {
    let s = text.trim_start();
    let end = numeric_prefix_len(s);
    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map_or(0.0, |v| v + 0.0)
}

/// Parse the whole (trimmed) text as a finite number.
pub fn parse_strict(field: &'static str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::InvalidNumber {
            field,
            input: text.to_string(),
        }
        .into()),
    }
}

/// Parse a form field under `policy`.
pub fn parse_number(field: &'static str, text: &str, policy: InputPolicy) -> Result<f64> {
    match policy {
        InputPolicy::Strict => parse_strict(field, text),
        InputPolicy::Lenient => {
            let v = parse_lenient(text);
            if text.trim().parse::<f64>().map_or(true, |exact| exact != v) {
                tracing::warn!(field, input = text, value = v, "coerced unreadable input");
            }
            Ok(v)
        }
    }
}

/// Length in bytes of the longest prefix of `s` shaped like a decimal float:
/// `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least one digit
/// in the mantissa. Returns 0 when there is no such prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if i < b.len() && b[i] == b'.' {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_lengths() {
        assert_eq!(numeric_prefix_len("12.5abc"), 4);
        assert_eq!(numeric_prefix_len("-.5"), 3);
        assert_eq!(numeric_prefix_len("5."), 2);
        assert_eq!(numeric_prefix_len("."), 0);
        assert_eq!(numeric_prefix_len("1e3x"), 3);
        assert_eq!(numeric_prefix_len("1e+x"), 1);
        assert_eq!(numeric_prefix_len("+"), 0);
    }

    #[test]
    fn strict_rejects_trailing_garbage() {
        let err = parse_strict("shield", "0.02in").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CalcError>(),
            Some(&CalcError::InvalidNumber {
                field: "shield",
                input: "0.02in".to_string()
            })
        );
    }

    #[test]
    fn strict_rejects_non_finite() {
        assert!(parse_strict("desired", "inf").is_err());
        assert!(parse_strict("desired", "NaN").is_err());
    }

    #[test]
    fn lenient_negative_zero_is_positive_zero() {
        for text in ["-0", "-0.0", " -0e5xyz"] {
            let v = parse_lenient(text);
            assert_eq!(v, 0.0);
            assert!(v.is_sign_positive(), "{text:?} kept its sign");
        }
    }
}
