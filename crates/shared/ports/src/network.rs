use std::time::Duration;

/// What happens to one simulated remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOutcome {
    /// How long the caller is suspended before the result arrives
    pub latency: Duration,
    /// Whether the call fails with a network error after the latency
    pub fail: bool,
}

impl CallOutcome {
    pub fn success(latency: Duration) -> Self {
        Self {
            latency,
            fail: false,
        }
    }

    pub fn failure(latency: Duration) -> Self {
        Self {
            latency,
            fail: true,
        }
    }
}

/// Port for the simulated network between UI and backend
///
/// Implementations decide, per call, the artificial latency and whether the
/// call fails:
/// - Random latency and failure rate for the live demo
/// - Scripted outcomes for deterministic tests
pub trait NetworkSimulator: Send + Sync {
    /// Draw the outcome of the next call
    fn next_call(&self) -> CallOutcome;

    /// Get the simulator's name/identifier for debugging
    fn name(&self) -> &str {
        "NetworkSimulator"
    }
}
