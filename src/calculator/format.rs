//! Result formatting for display.

/// Format a result in its natural form.
///
/// Whole numbers keep a trailing `.0` (`14.0`). No exponent notation is
/// used, so the text reads back as the same number when typed onto.
/// Overflowed results show as `Infinity` or `-Infinity`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    // -0.0 shows as 0.0
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 {
        format!("{value}.0")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_result;
    use crate::calculator::evaluate;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(format_result(14.0), "14.0");
        assert_eq!(format_result(-3.0), "-3.0");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(format_result(0.25), "0.25");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_result(-0.0), "0.0");
    }

    #[test]
    fn test_large_magnitudes_are_written_out() {
        assert_eq!(format_result(1e20), "100000000000000000000.0");
        assert_eq!(
            evaluate(&format_result(1e20)).map(format_result),
            Ok(format_result(1e20))
        );
    }

    #[test]
    fn test_small_magnitudes_are_written_out() {
        let value = evaluate("1/10000000").unwrap();
        assert_eq!(format_result(value), "0.0000001");
        assert_eq!(evaluate(&format_result(value)), Ok(value));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_overflow_shows_infinity() {
        let huge = format!("1{}", "0".repeat(200));
        let value = evaluate(&format!("{huge} * {huge}")).unwrap();
        assert_eq!(format_result(value), "Infinity");
    }
}
