use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SequenceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SequenceError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Process exit status the driver terminates with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SequenceError::InvalidArgument { .. } => 1,
            SequenceError::IoError(_) | SequenceError::SerializationError(_) => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SequenceError::InvalidArgument { .. } => {
                "Pass a positive integer to -n/--num-elements"
            }
            SequenceError::IoError(_) => "Check that standard output is writable",
            SequenceError::SerializationError(_) => "Retry with --output text",
        }
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_bare_message() {
        let err = SequenceError::invalid_argument("Number of elements must be positive");
        assert_eq!(err.to_string(), "Number of elements must be positive");
        assert_eq!(format!("Error: {}", err), "Error: Number of elements must be positive");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SequenceError = io.into();
        assert!(matches!(err, SequenceError::IoError(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
