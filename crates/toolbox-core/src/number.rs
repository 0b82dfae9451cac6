//! Text rendering for `f64` values shown to tool callers.
//!
//! Integral values keep a trailing `.0`, very large or very small magnitudes
//! switch to exponent form with a signed, two-digit exponent, and non-finite
//! values print as `nan`, `inf` and `-inf`.

/// Magnitudes in `[LOWER, UPPER)` are printed positionally.
const POSITIONAL_LOWER: f64 = 1e-4;
const POSITIONAL_UPPER: f64 = 1e16;

/// Render `value` as the shortest text that reads back to the same `f64`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    if !(POSITIONAL_LOWER..POSITIONAL_UPPER).contains(&value.abs()) {
        return exponent_form(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn exponent_form(value: f64) -> String {
    // `{:e}` already picks the shortest mantissa, e.g. `1.5e-5`
    let text = format!("{value:e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_fraction() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(32.0), "32.0");
        assert_eq!(format_number(-40.0), "-40.0");
    }

    #[test]
    fn fractional_values_are_shortest() {
        assert_eq!(format_number(40.7128), "40.7128");
        assert_eq!(format_number(-74.006), "-74.006");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e-5), "1.5e-05");
        assert_eq!(format_number(-2.5e300), "-2.5e+300");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
