//! Loose numeric recognition.
//!
//! Accepts the same class of strings as a JavaScript unary-plus coercion:
//! decimal literals with optional sign, fraction, leading or trailing point
//! and exponent, plus unsigned `0x`, `0o` and `0b` radix literals. Trailing
//! whitespace is ignored. Results that are not finite have no JSON
//! representation and are rejected.

use serde_json::Number;

/// Largest integer magnitude that survives a round trip through `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whitespace and line terminators as understood by JavaScript string
/// coercion.
pub(crate) fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parse `raw` as a loosely formatted number.
///
/// Returns `None` for blank input, for anything outside the accepted
/// grammar, and for values that overflow to infinity.
///
/// # Examples
///
/// ```
/// use deepenv::value::parse_loose_number;
///
/// assert_eq!(parse_loose_number("100.").unwrap().as_i64(), Some(100));
/// assert_eq!(parse_loose_number(".1").unwrap().as_f64(), Some(0.1));
/// assert!(parse_loose_number("100..").is_none());
/// ```
#[must_use]
pub fn parse_loose_number(raw: &str) -> Option<Number> {
    let s = raw.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return None;
    }

    let value = match radix_literal(s) {
        Some((radix, digits)) => parse_radix(digits, radix)?,
        None if is_decimal_literal(s) => s.parse::<f64>().ok()?,
        None => return None,
    };

    to_json_number(value)
}

/// Split off a `0x`/`0o`/`0b` prefix, returning the radix and digits.
fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    })
}

/// Check the decimal grammar: `[+-]? (d+ .? d* | . d+) ([eE] [+-]? d+)?`.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[allow(clippy::cast_possible_truncation)]
fn to_json_number(value: f64) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        // Integral and exactly representable; also folds -0 into 0.
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}
