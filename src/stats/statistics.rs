//! Small descriptive-statistics helpers
//!
//! These follow spreadsheet conventions: the standard deviation is the
//! sample (n - 1) estimate and is NaN when fewer than two samples exist.

/// Arithmetic mean, NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;

    variance.sqrt()
}

/// Round to `places` decimal places; NaN passes through
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 8.0, 12.0]), 10.0);
        assert_eq!(mean(&[7.0]), 7.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[10.0, 8.0, 12.0]), 2.0);
        assert_eq!(sample_std_dev(&[5.0, 5.0]), 0.0);
        assert!(sample_std_dev(&[5.0]).is_nan());
        assert!(sample_std_dev(&[]).is_nan());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(66.666_666, 2), 66.67);
        assert_eq!(round_to(8.5, 2), 8.5);
        assert_eq!(round_to(1.004, 2), 1.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }
}
