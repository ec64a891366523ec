//! Conversions between today's money and nominal year-N money

use crate::error::ConfigurationError;

/// Nominal year-`years` cost of a today's-money `value`: `value * (1 + rate)^years`
pub fn apply_inflation(value: f64, annual_inflation_rate: f64, years: u32) -> f64 {
    value * (1.0 + annual_inflation_rate).powi(years as i32)
}

/// Real (today's money) value of a nominal amount received in `years` years.
///
/// Inverse of [`apply_inflation`]. A rate of exactly `-1` has no inverse and is
/// reported as [`ConfigurationError::DegenerateDiscountRate`].
pub fn discount_to_present_value(
    future_value: f64,
    annual_inflation_rate: f64,
    years: u32,
) -> Result<f64, ConfigurationError> {
    let factor = (1.0 + annual_inflation_rate).powi(years as i32);
    if factor == 0.0 || !factor.is_finite() {
        return Err(ConfigurationError::DegenerateDiscountRate(annual_inflation_rate));
    }
    Ok(future_value / factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply_inflation() {
        // 100 today costs ~121.90 in 10 years at 2%
        assert_relative_eq!(apply_inflation(100.0, 0.02, 10), 121.899441999, max_relative = 1e-9);
        assert_eq!(apply_inflation(100.0, 0.02, 0), 100.0);
    }

    #[test]
    fn test_zero_inflation_is_identity() {
        assert_eq!(apply_inflation(1234.5, 0.0, 40), 1234.5);
        assert_eq!(discount_to_present_value(1234.5, 0.0, 40), Ok(1234.5));
    }

    #[test]
    fn test_round_trip() {
        let nominal = apply_inflation(30_000.0, 0.035, 17);
        let real = discount_to_present_value(nominal, 0.035, 17).unwrap();
        assert_relative_eq!(real, 30_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_rate_is_an_error() {
        assert_eq!(
            discount_to_present_value(500.0, -1.0, 3),
            Err(ConfigurationError::DegenerateDiscountRate(-1.0))
        );
    }

    #[test]
    fn test_degenerate_rate_at_year_zero_is_identity() {
        // (1 + -1)^0 == 1, nothing to divide by zero
        assert_eq!(discount_to_present_value(500.0, -1.0, 0), Ok(500.0));
    }
}
