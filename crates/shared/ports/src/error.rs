use thiserror::Error;

/// User-facing text of the injected network failure
pub const NETWORK_ERROR_MESSAGE: &str = "Network error – please try again";

/// The one failure a simulated remote call can signal
///
/// Timeouts, validation and server errors are not told apart: every failure
/// is transient and the caller may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("{message}")]
    Transient {
        /// Operation that failed, for logs
        operation: &'static str,
        message: String,
    },
}

impl NetworkError {
    pub fn transient(operation: &'static str) -> Self {
        NetworkError::Transient {
            operation,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            NetworkError::Transient { operation, .. } => operation,
        }
    }

    /// Text to show in a notification
    pub fn user_message(&self) -> &str {
        match self {
            NetworkError::Transient { message, .. } => message,
        }
    }
}

pub type NetworkResult<T> = std::result::Result<T, NetworkError>;
