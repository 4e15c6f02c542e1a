use athlete_core::Timestamp;
use athlete_ports::Clock;
use chrono::Utc;

/// Wall-clock time, used by the demo binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_system_clock_tracks_wall_time() {
        let clock = SystemClock::new();
        let before = Utc::now();
        let observed = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let later = clock.now();

        assert!(observed >= before);
        assert!(later - observed >= Duration::milliseconds(9));
    }
}
