use std::fmt::Display;

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add a simple string context to the error with a specific error variant
    fn dive_launch_err(self, msg: impl Display) -> std::result::Result<T, DiveError>;

    #[allow(dead_code)]
    fn dive_usage_err(self, msg: impl Display) -> std::result::Result<T, DiveError>;
}

impl<T, E: Display> ErrorContext<T> for std::result::Result<T, E> {
    fn dive_launch_err(self, msg: impl Display) -> std::result::Result<T, DiveError> {
        self.map_err(|e| DiveError::Launch(format!("{msg}: {e}")))
    }

    fn dive_usage_err(self, msg: impl Display) -> std::result::Result<T, DiveError> {
        self.map_err(|e| DiveError::Usage(format!("{msg}: {e}")))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiveError {
    /// The command was invoked with an unsupported argument shape
    #[error("Usage error: {0}")]
    Usage(String),

    /// The OS could not service a request to open a resource
    #[error("Launch error: {0}")]
    Launch(String),
}
