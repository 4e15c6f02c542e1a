use thiserror::Error;

/// Errors loading the static fixture files
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse fixture {file}: {error}")]
    Parse { file: &'static str, error: String },
}

/// Invalid latency/failure settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkConfigError {
    #[error("Minimum delay {min_ms}ms exceeds maximum delay {max_ms}ms")]
    InvertedDelay { min_ms: u128, max_ms: u128 },

    #[error("Error rate must be within [0, 1], got {0}")]
    ErrorRateOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
