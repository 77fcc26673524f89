use crate::core::{Result, Sequence, SequenceRequest};
use crate::utils::validation::{validate_positive_count, warn_if_non_finite};

/// Builds the `count`-term arithmetic sequence whose terms add up to `sum`
/// and step by `common_difference`.
///
/// From `sum = count * first + common_difference * count * (count - 1) / 2`:
///
/// ```text
/// first = (sum - common_difference * count * (count - 1) / 2) / count
/// ```
///
/// Fails with [`SequenceError::InvalidArgument`](crate::SequenceError::InvalidArgument)
/// when `count <= 0`.
pub fn calculate(count: i64, sum: f64, common_difference: f64) -> Result<Sequence> {
    let terms = validate_positive_count(count)?;
    warn_if_non_finite("sum", sum);
    warn_if_non_finite("common_difference", common_difference);

    let n = count as f64;
    let first = (sum - common_difference * n * (n - 1.0) / 2.0) / n;
    tracing::debug!(count, sum, common_difference, first, "derived first term");

    let values = (0..terms)
        .map(|i| first + i as f64 * common_difference)
        .collect();

    Ok(Sequence::new(values))
}

impl SequenceRequest {
    pub fn calculate(&self) -> Result<Sequence> {
        calculate(self.count, self.sum, self.common_difference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SequenceError;

    #[test]
    fn test_odd_numbers_summing_to_25() {
        let sequence = calculate(5, 25.0, 2.0).unwrap();
        assert_eq!(sequence.values(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_consecutive_integers() {
        let sequence = calculate(4, 10.0, 1.0).unwrap();
        assert_eq!(sequence.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_single_element_ignores_difference() {
        for diff in [0.0, 3.5, -100.0, 1e6] {
            let sequence = calculate(1, 7.0, diff).unwrap();
            assert_eq!(sequence.values(), &[7.0]);
        }
    }

    #[test]
    fn test_zero_difference_splits_evenly() {
        let sequence = calculate(3, 6.0, 0.0).unwrap();
        assert_eq!(sequence.values(), &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_negative_difference_descends() {
        let sequence = calculate(4, 10.0, -1.0).unwrap();
        assert_eq!(sequence.values(), &[4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_fractional_first_term() {
        let sequence = calculate(2, 1.0, 0.5).unwrap();
        assert_eq!(sequence.values(), &[0.25, 0.75]);
    }

    #[test]
    fn test_non_positive_count_is_rejected() {
        for count in [0, -1, -42, i64::MIN] {
            match calculate(count, 10.0, 1.0) {
                Err(SequenceError::InvalidArgument { message }) => {
                    assert_eq!(message, "Number of elements must be positive");
                }
                other => panic!("expected InvalidArgument for {count}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_request_delegates_to_calculate() {
        let request = SequenceRequest::new(5, 25.0, 2.0);
        assert_eq!(
            request.calculate().unwrap(),
            calculate(5, 25.0, 2.0).unwrap()
        );
    }

    #[test]
    fn test_non_finite_inputs_are_passed_through() {
        let sequence = calculate(2, f64::INFINITY, 1.0).unwrap();
        assert_eq!(sequence.len(), 2);
        assert!(sequence.values().iter().all(|v| v.is_infinite()));

        let sequence = calculate(1, f64::NAN, 0.0).unwrap();
        assert!(sequence.values()[0].is_nan());
    }
}
