//! Network simulators - decide latency and failure of every mock call

use athlete_ports::{CallOutcome, NetworkSimulator};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::NetworkConfigError;

/// Default lower bound of the artificial latency
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(400);
/// Default upper bound of the artificial latency
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(800);
/// Default probability that a call fails
pub const DEFAULT_ERROR_RATE: f64 = 0.10;

/// Latency range and failure probability of the simulated network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyProfile {
    min_delay: Duration,
    max_delay: Duration,
    error_rate: f64,
}

impl LatencyProfile {
    pub fn new(
        min_delay: Duration,
        max_delay: Duration,
        error_rate: f64,
    ) -> Result<Self, NetworkConfigError> {
        if min_delay > max_delay {
            return Err(NetworkConfigError::InvertedDelay {
                min_ms: min_delay.as_millis(),
                max_ms: max_delay.as_millis(),
            });
        }
        if !(0.0..=1.0).contains(&error_rate) {
            return Err(NetworkConfigError::ErrorRateOutOfRange(error_rate));
        }
        Ok(Self {
            min_delay,
            max_delay,
            error_rate,
        })
    }

    /// Convenience constructor taking milliseconds
    pub fn from_millis(
        min_ms: u64,
        max_ms: u64,
        error_rate: f64,
    ) -> Result<Self, NetworkConfigError> {
        Self::new(
            Duration::from_millis(min_ms),
            Duration::from_millis(max_ms),
            error_rate,
        )
    }

    /// No delay and no failures
    pub fn instant() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            error_rate: 0.0,
        }
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            error_rate: DEFAULT_ERROR_RATE,
        }
    }
}

/// Uniform latency with independent random failures per call
pub struct RandomNetwork {
    profile: LatencyProfile,
    /// Random generator seed for reproducibility
    rng: Mutex<StdRng>,
}

impl RandomNetwork {
    /// Create a simulator seeded from OS entropy
    pub fn new(profile: LatencyProfile) -> Self {
        Self {
            profile,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create with a specific seed for reproducible runs
    pub fn with_seed(profile: LatencyProfile, seed: u64) -> Self {
        Self {
            profile,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn profile(&self) -> &LatencyProfile {
        &self.profile
    }
}

impl NetworkSimulator for RandomNetwork {
    fn next_call(&self) -> CallOutcome {
        let mut rng = self.rng.lock();
        let latency = if self.profile.min_delay == self.profile.max_delay {
            self.profile.min_delay
        } else {
            rng.gen_range(self.profile.min_delay..=self.profile.max_delay)
        };
        let fail = rng.gen_bool(self.profile.error_rate);

        CallOutcome { latency, fail }
    }

    fn name(&self) -> &str {
        "RandomNetwork"
    }
}

/// Replays a queue of outcomes, then repeats a fallback outcome
///
/// Counts calls so tests can assert whether the network was touched.
pub struct ScriptedNetwork {
    script: Mutex<VecDeque<CallOutcome>>,
    fallback: CallOutcome,
    calls: AtomicUsize,
}

impl ScriptedNetwork {
    /// Every call gets the same outcome
    pub fn always(outcome: CallOutcome) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call succeeds after `latency`
    pub fn succeeding(latency: Duration) -> Self {
        Self::always(CallOutcome::success(latency))
    }

    /// Every call fails after `latency`
    pub fn failing(latency: Duration) -> Self {
        Self::always(CallOutcome::failure(latency))
    }

    /// Queue an outcome ahead of the fallback
    pub fn then(self, outcome: CallOutcome) -> Self {
        self.script.lock().push_back(outcome);
        self
    }

    /// Queue an outcome on a shared simulator
    pub fn push(&self, outcome: CallOutcome) {
        self.script.lock().push_back(outcome);
    }

    /// Number of calls drawn so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NetworkSimulator for ScriptedNetwork {
    fn next_call(&self) -> CallOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script.lock().pop_front().unwrap_or(self.fallback)
    }

    fn name(&self) -> &str {
        "ScriptedNetwork"
    }
}
