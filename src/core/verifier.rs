use crate::core::{Sequence, VerificationReport};

/// Absolute tolerance for both the sum and the step comparison.
///
/// Only meaningful for moderate magnitudes; sums or steps in the billions can
/// fail verification on rounding alone.
pub const TOLERANCE: f64 = 1e-9;

fn within_tolerance(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < TOLERANCE
}

/// Checks that `values` adds up to `expected_sum` and that every adjacent
/// pair differs by `expected_diff`. With fewer than two values only the sum
/// is checked.
pub fn verify_values(values: &[f64], expected_sum: f64, expected_diff: f64) -> bool {
    let actual_sum: f64 = values.iter().sum();
    let sum_matches = within_tolerance(actual_sum, expected_sum);

    if values.len() < 2 {
        return sum_matches;
    }

    let diff_matches = values
        .windows(2)
        .all(|pair| within_tolerance(pair[1] - pair[0], expected_diff));

    sum_matches && diff_matches
}

pub fn verify(sequence: &Sequence, expected_sum: f64, expected_diff: f64) -> bool {
    verify_values(sequence.values(), expected_sum, expected_diff)
}

/// Runs [`verify`] and keeps the numbers the verification block displays.
pub fn verification_report(
    sequence: &Sequence,
    expected_sum: f64,
    expected_diff: f64,
) -> VerificationReport {
    let valid = verify(sequence, expected_sum, expected_diff);
    if !valid {
        tracing::warn!(
            actual_sum = sequence.total(),
            expected_sum,
            expected_diff,
            "sequence failed verification"
        );
    }

    VerificationReport {
        actual_sum: sequence.total(),
        expected_sum,
        expected_difference: expected_diff,
        valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::calculate;

    #[test]
    fn test_accepts_matching_sequence() {
        assert!(verify_values(&[1.0, 3.0, 5.0, 7.0, 9.0], 25.0, 2.0));
    }

    #[test]
    fn test_rejects_wrong_sum() {
        assert!(!verify_values(&[1.0, 3.0, 5.0], 10.0, 2.0));
    }

    #[test]
    fn test_rejects_uneven_step() {
        // sums to 9 but steps are 2 then 4
        assert!(!verify_values(&[1.0, 2.0, 6.0], 9.0, 2.0));
        assert!(!verify_values(&[1.0, 3.0, 5.0, 8.0], 17.0, 2.0));
    }

    #[test]
    fn test_single_value_only_checks_sum() {
        assert!(verify_values(&[7.0], 7.0, 123.0));
        assert!(!verify_values(&[7.0], 8.0, 0.0));
    }

    #[test]
    fn test_empty_values_check_sum_against_zero() {
        assert!(verify_values(&[], 0.0, 1.0));
        assert!(!verify_values(&[], 1.0, 1.0));
    }

    #[test]
    fn test_tolerance_is_absolute() {
        assert!(verify_values(&[1.0 + 1e-10, 2.0], 3.0, 1.0));
        assert!(!verify_values(&[1.0 + 1e-8, 2.0], 3.0, 1.0));
    }

    #[test]
    fn test_report_carries_display_values() {
        let sequence = calculate(5, 25.0, 2.0).unwrap();
        let report = verification_report(&sequence, 25.0, 2.0);
        assert!(report.valid);
        assert_eq!(report.actual_sum, 25.0);
        assert_eq!(report.expected_sum, 25.0);
        assert_eq!(report.expected_difference, 2.0);
    }

    #[test]
    fn test_report_flags_mismatch() {
        let sequence = Sequence::new(vec![1.0, 2.0]);
        let report = verification_report(&sequence, 3.0, 5.0);
        assert!(!report.valid);
    }
}
