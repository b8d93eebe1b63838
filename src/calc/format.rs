//! Conversion between numbers and the text shown on the display.

use super::error::CalcError;

/// Integers below this magnitude are printed without a fractional part.
const INTEGER_LIMIT: f64 = 1e15;
/// Non-zero magnitudes below this are printed in scientific notation.
const SMALL_LIMIT: f64 = 1e-6;

/// Render a result for the display and the history log.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "Error".to_string();
    }
    // Also folds negative zero into "0".
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if n.fract() == 0.0 && abs < INTEGER_LIMIT {
        format!("{}", n as i64)
    } else if abs >= INTEGER_LIMIT || abs < SMALL_LIMIT {
        format_scientific(n)
    } else {
        let s = format!("{:.10}", n);
        trim_fraction(&s).to_string()
    }
}

fn format_scientific(n: f64) -> String {
    let s = format!("{:.9e}", n);
    match s.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{}", trim_fraction(mantissa), exponent),
        None => s,
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Parse display or clipboard text into a finite number.
///
/// Surrounding whitespace is ignored. `inf`, `NaN` and friends are rejected
/// even though `f64::from_str` accepts them.
pub fn parse_number(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    let looks_numeric = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !looks_numeric {
        return Err(CalcError::parse(text));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::parse(text)),
    }
}
