//! Display text for the accumulator.

/// Format the accumulator for the display.
///
/// Whole-number display only: the fractional part is dropped (toward zero)
/// while the stored value keeps it. No decimal point, no grouping. Values
/// that are not finite are shown as `Infinity`, `-Infinity` or `NaN`.
pub fn format_value(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let whole = n.trunc();
    if whole == 0.0 {
        // covers -0.0 and anything in (-1, 1)
        return "0".to_string();
    }
    format!("{:.0}", whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(78.0), "78");
        assert_eq!(format_value(-12.0), "-12");
    }

    #[test]
    fn test_truncates_fraction() {
        assert_eq!(format_value(2.5), "2");
        assert_eq!(format_value(7.0 / 3.0), "2");
        assert_eq!(format_value(-2.9), "-2");
        assert_eq!(format_value(0.999), "0");
        assert_eq!(format_value(-0.5), "0");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_large_values_have_no_separators() {
        assert_eq!(format_value(1e20), "100000000000000000000");
        assert!(!format_value(123456789.0).contains(','));
    }
}
