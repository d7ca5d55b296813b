//! Currency helpers for weekly charge arithmetic
//!
//! All schedule amounts are weekly charges in pounds, displayed to whole
//! pence. Sums are rounded once at the aggregation boundary, not per item.

/// Round an amount to 2 decimal places (whole pence).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compare two amounts within half a penny.
///
/// Used wherever a stored value is checked against a recomputed one, so
/// float noise from summation never reads as drift.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.005
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_to_nearest_penny() {
        assert_eq!(round2(4.248), 4.25);
        assert_eq!(round2(2.344), 2.34);
        // 0.125 is exact in binary, so the tie rounds away from zero.
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn test_round2_exact_values_unchanged() {
        assert_eq!(round2(317.02), 317.02);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_approx_eq_tolerance() {
        assert!(approx_eq(533.83, 533.8300000001));
        assert!(approx_eq(10.0, 10.004));
        assert!(!approx_eq(10.0, 10.01));
    }
}
