//! Athlete Ports
//!
//! Port definitions (traits) for the Athlete Game simulation.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;
mod network;

pub use clock::Clock;
pub use error::{NETWORK_ERROR_MESSAGE, NetworkError, NetworkResult};
pub use network::{CallOutcome, NetworkSimulator};
