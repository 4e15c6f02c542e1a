//! Athlete Mock API
//!
//! Simulated backend of the Athlete Game. All data comes from static JSON
//! fixtures; a [`NetworkSimulator`](athlete_ports::NetworkSimulator) decides
//! how long each call takes and whether it fails.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use athlete_mock_api::{Fixtures, LatencyProfile, MockApi, RandomNetwork};
//!
//! let network = RandomNetwork::with_seed(LatencyProfile::default(), 42);
//! let api = MockApi::new(Fixtures::embedded()?, Arc::new(network), Arc::new(SystemClock));
//!
//! match api.get_assets().await {
//!     Ok(assets) => show(assets),
//!     Err(e) => notify(e.user_message()),
//! }
//! ```

pub mod api;
pub mod error;
pub mod fixtures;
pub mod network;

// Re-export main types
pub use api::MockApi;
pub use error::{FixtureError, NetworkConfigError, Result};
pub use fixtures::Fixtures;
pub use network::{
    DEFAULT_ERROR_RATE, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY, LatencyProfile, RandomNetwork,
    ScriptedNetwork,
};
