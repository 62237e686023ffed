//! Extrema reductions over channel sequences

use crate::{ConversionError, Result};

/// Maximum of a non-empty sequence
///
/// # Errors
///
/// Returns [`ConversionError::EmptyInput`] if `values` is empty
pub fn max_of(values: &[f64]) -> Result<f64> {
    reduce(values, f64::max)
}

/// Minimum of a non-empty sequence
///
/// # Errors
///
/// Returns [`ConversionError::EmptyInput`] if `values` is empty
pub fn min_of(values: &[f64]) -> Result<f64> {
    reduce(values, f64::min)
}

fn reduce(values: &[f64], pick: fn(f64, f64) -> f64) -> Result<f64> {
    let (first, rest) = values.split_first().ok_or(ConversionError::EmptyInput)?;
    Ok(rest.iter().copied().fold(*first, pick))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrema_of_channels() {
        let values = [1.0, 30.0 / 255.0, 8.0 / 255.0];
        assert_eq!(max_of(&values).unwrap(), 1.0);
        assert_eq!(min_of(&values).unwrap(), 8.0 / 255.0);
    }

    #[test]
    fn test_extrema_single_and_negative() {
        assert_eq!(max_of(&[0.5]).unwrap(), 0.5);
        assert_eq!(min_of(&[0.5]).unwrap(), 0.5);
        assert_eq!(max_of(&[-3.0, -1.0, -2.0]).unwrap(), -1.0);
        assert_eq!(min_of(&[-3.0, -1.0, -2.0]).unwrap(), -3.0);
    }

    #[test]
    fn test_extrema_empty() {
        assert!(matches!(max_of(&[]), Err(ConversionError::EmptyInput)));
        assert!(matches!(min_of(&[]), Err(ConversionError::EmptyInput)));
    }
}
