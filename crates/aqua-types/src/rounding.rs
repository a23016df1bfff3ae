/// Round `value` to `decimals` places, halves to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Render a measurement the way the published alerts always have: integral
/// values keep one decimal (`2.0`), everything else uses the shortest form.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.133_333, 1), 2.1);
        assert_eq!(round_to(56.125_9, 2), 56.13);
        assert_eq!(round_to(-0.044, 2), -0.04);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(-0.5, 0), 0.0);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(3.2), "3.2");
        assert_eq!(format_decimal(0.02), "0.02");
        assert_eq!(format_decimal(2.0), "2.0");
        assert_eq!(format_decimal(20.0), "20.0");
    }
}
