use athlete_core::Timestamp;

/// Source of "now" for everything time-dependent in the game
///
/// Trade timestamps, acknowledgement ids, challenge deadlines, notification
/// expiry and the session countdown all read the time through this port, so
/// tests can freeze and step it.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Name shown in logs
    fn name(&self) -> &str {
        "Clock"
    }
}
