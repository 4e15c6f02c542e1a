use athlete_core::Timestamp;
use athlete_ports::Clock;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// Frozen clock for deterministic tests
///
/// Time only moves through [`FixedClock::advance`] or
/// [`FixedClock::set_time`]. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current_time: Arc<RwLock<Timestamp>>,
}

impl FixedClock {
    /// Freeze time at the current wall-clock instant
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(time: Timestamp) -> Self {
        Self {
            current_time: Arc::new(RwLock::new(time)),
        }
    }

    /// Advance the frozen time by a specified duration
    pub fn advance(&self, duration: Duration) {
        *self.current_time.write() += duration;
    }

    /// Explicitly set the frozen time
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
