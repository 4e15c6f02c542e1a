//! Athlete Clock Infrastructure
//!
//! Provides time abstractions for the live demo and for tests:
//!
//! - [`SystemClock`]: wall-clock time
//! - [`FixedClock`]: frozen time that only moves when advanced explicitly
//!
//! ## Usage
//!
//! ```ignore
//! use athlete_clock::{Clock, FixedClock};
//! use chrono::Duration;
//!
//! let clock = FixedClock::starting_at(start);
//! clock.advance(Duration::seconds(3));
//! assert_eq!(clock.now() - start, Duration::seconds(3));
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use athlete_ports::Clock;
