use crate::utils::error::{Result, SequenceError};

/// Accepts `count >= 1` and hands it back as a length.
pub fn validate_positive_count(count: i64) -> Result<usize> {
    if count <= 0 {
        tracing::debug!(count, "rejecting non-positive element count");
        return Err(SequenceError::invalid_argument(
            "Number of elements must be positive",
        ));
    }

    usize::try_from(count).map_err(|_| {
        SequenceError::invalid_argument(format!(
            "Number of elements must not exceed {}",
            usize::MAX
        ))
    })
}

/// NaN and infinities are allowed through, only logged.
pub fn warn_if_non_finite(field_name: &str, value: f64) {
    if !value.is_finite() {
        tracing::warn!("{} is not a finite number: {}", field_name, value);
    }
}
