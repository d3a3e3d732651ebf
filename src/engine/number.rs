//! Conversion between display strings and numbers
//!
//! Results are shown in the shortest decimal form that round-trips to the
//! same `f64`, so `0.1 + 0.2` displays as `0.30000000000000004`. Very large
//! and very small magnitudes switch to exponent form (`1e+21`, `1e-7`).

/// Magnitudes at or above this use exponent notation
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitudes below this (other than zero) use exponent notation
const EXPONENT_LOWER: f64 = 1e-6;

/// Format a value for the display buffer and history entries
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // Covers -0.0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        format!("{}", value)
    } else {
        exponent_form(value)
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Parse a display buffer back into a number.
///
/// Accepts everything [`format_number`] produces, plus partially typed
/// entries such as `"5."`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Whether the user can keep typing into `text`.
///
/// `Infinity`, `-Infinity` and `NaN` only reach the display as results;
/// typing after them starts a fresh entry. Anything typed is always
/// editable, even a run of digits too long to parse to a finite value.
pub fn is_editable(text: &str) -> bool {
    !matches!(text, "Infinity" | "-Infinity" | "NaN")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(9999899900001.0), "9999899900001");
    }

    #[test]
    fn test_floating_point_artifacts_are_kept() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(5.2), "5.2");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_partial_entries() {
        assert_eq!(parse_number("0."), Some(0.0));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e+21"), Some(1e21));
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_is_editable() {
        assert!(is_editable("12.5"));
        assert!(is_editable("-3"));
        assert!(!is_editable("Infinity"));
        assert!(!is_editable("NaN"));
        assert!(!is_editable("-Infinity"));
        // Typed entries stay editable even when they overflow f64
        assert!(is_editable(&"9".repeat(400)));
    }
}
