//! Configuration loading for the game
//!
//! Supports a JSON configuration file for:
//! - Base path the app is served under
//! - Mock network latency, failure rate and seed
//! - Fixture directory overriding the embedded fixtures
//! - Notification lifetime, session countdown and trade desk buffer
//!
//! Environment variables override file values:
//!
//! ```text
//! ATHLETE_BASE_PATH    base path, e.g. /athlete/
//! ATHLETE_SEED         seed for the mock network
//! ATHLETE_ERROR_RATE   failure probability in [0, 1]
//! ```

use athlete_mock_api::{
    DEFAULT_ERROR_RATE, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY, LatencyProfile, NetworkConfigError,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ENV_BASE_PATH: &str = "ATHLETE_BASE_PATH";
pub const ENV_SEED: &str = "ATHLETE_SEED";
pub const ENV_ERROR_RATE: &str = "ATHLETE_ERROR_RATE";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid network settings: {0}")]
    Network(#[from] NetworkConfigError),
}

/// Root configuration of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// URL prefix the app is served under, always with leading and trailing `/`
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Mock network behaviour
    #[serde(default)]
    pub network: NetworkSettings,

    /// Directory with fixture files; embedded fixtures when absent
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,

    /// How long a notification stays visible
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,

    /// Start window shown on the join screen
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u64,

    /// Command buffer of the trade desk
    #[serde(default = "default_desk_capacity")]
    pub desk_capacity: usize,

    /// Season calendar shown on the dashboard
    #[serde(default)]
    pub season: SeasonConfig,
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_notification_ttl_ms() -> u64 {
    3_000
}

fn default_countdown_secs() -> u64 {
    45
}

fn default_desk_capacity() -> usize {
    athlete_portfolio::DEFAULT_DESK_CAPACITY
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            network: NetworkSettings::default(),
            fixtures_dir: None,
            notification_ttl_ms: default_notification_ttl_ms(),
            countdown_secs: default_countdown_secs(),
            desk_capacity: default_desk_capacity(),
            season: SeasonConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.base_path = normalize_base_path(&config.base_path);
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_BASE_PATH) {
            self.base_path = normalize_base_path(&base);
        }
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_SEED,
                value: raw.clone(),
            })?;
            self.network.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_ERROR_RATE) {
            let rate: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_ERROR_RATE,
                value: raw.clone(),
            })?;
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidEnv {
                    var: ENV_ERROR_RATE,
                    value: raw,
                });
            }
            self.network.error_rate = rate;
        }
        Ok(self)
    }

    /// Join a route onto the base path
    ///
    /// ```rust,ignore
    /// config.base_path = "/athlete/".into();
    /// assert_eq!(config.route("/app/portfolio"), "/athlete/app/portfolio");
    /// ```
    pub fn route(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path.trim_start_matches('/'))
    }

    pub fn notification_ttl(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.notification_ttl_ms as i64)
    }

    pub fn countdown(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.countdown_secs as i64)
    }
}

/// Latency window, failure rate and seed of the mock network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    #[serde(default = "default_error_rate")]
    pub error_rate: f64,

    /// Fixed seed for reproducible runs; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_min_delay_ms() -> u64 {
    DEFAULT_MIN_DELAY.as_millis() as u64
}

fn default_max_delay_ms() -> u64 {
    DEFAULT_MAX_DELAY.as_millis() as u64
}

fn default_error_rate() -> f64 {
    DEFAULT_ERROR_RATE
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            error_rate: default_error_rate(),
            seed: None,
        }
    }
}

impl NetworkSettings {
    /// Validated latency profile
    pub fn profile(&self) -> Result<LatencyProfile, ConfigError> {
        Ok(LatencyProfile::new(
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
            self.error_rate,
        )?)
    }
}

/// Position in the current season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonConfig {
    pub week: u32,
    pub total_weeks: u32,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            week: 7,
            total_weeks: 12,
        }
    }
}

/// Normalize a base path to start and end with `/`
///
/// Blank input means the root.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.network.min_delay_ms, 400);
        assert_eq!(config.network.max_delay_ms, 800);
        assert_eq!(config.network.error_rate, 0.10);
        assert_eq!(config.notification_ttl_ms, 3_000);
        assert_eq!(config.countdown_secs, 45);
        assert_eq!(config.desk_capacity, 64);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = GameConfig::from_json(
            r#"{
                "base_path": "athlete",
                "network": { "error_rate": 0.0, "seed": 7 },
                "fixtures_dir": "./fixtures"
            }"#,
        )
        .unwrap();

        assert_eq!(config.base_path, "/athlete/");
        assert_eq!(config.network.error_rate, 0.0);
        assert_eq!(config.network.seed, Some(7));
        assert_eq!(config.network.max_delay_ms, 800);
        assert_eq!(config.fixtures_dir, Some(PathBuf::from("./fixtures")));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("  "), "/");
        assert_eq!(normalize_base_path("game"), "/game/");
        assert_eq!(normalize_base_path("/game"), "/game/");
        assert_eq!(normalize_base_path("game/"), "/game/");
        assert_eq!(normalize_base_path("/apps/game/"), "/apps/game/");
    }

    #[test]
    fn test_route() {
        let mut config = GameConfig::default();
        assert_eq!(config.route("/app/portfolio"), "/app/portfolio");
        assert_eq!(config.route(""), "/");

        config.base_path = normalize_base_path("/athlete");
        assert_eq!(config.route("/app/portfolio"), "/athlete/app/portfolio");
        assert_eq!(config.route("session/DEMO24"), "/athlete/session/DEMO24");
    }

    #[test]
    fn test_env_overrides() {
        let config = GameConfig::default()
            .with_overrides(env(&[
                (ENV_BASE_PATH, "demo"),
                (ENV_SEED, "42"),
                (ENV_ERROR_RATE, "0.25"),
            ]))
            .unwrap();

        assert_eq!(config.base_path, "/demo/");
        assert_eq!(config.network.seed, Some(42));
        assert_eq!(config.network.error_rate, 0.25);
    }

    #[test]
    fn test_invalid_env_values() {
        let seed = GameConfig::default().with_overrides(env(&[(ENV_SEED, "forty-two")]));
        assert_eq!(
            seed,
            Err(ConfigError::InvalidEnv {
                var: ENV_SEED,
                value: "forty-two".to_string(),
            })
        );

        let rate = GameConfig::default().with_overrides(env(&[(ENV_ERROR_RATE, "1.5")]));
        assert!(matches!(rate, Err(ConfigError::InvalidEnv { var, .. }) if var == ENV_ERROR_RATE));
    }

    #[test]
    fn test_network_profile() {
        let settings = NetworkSettings::default();
        let profile = settings.profile().unwrap();
        assert_eq!(profile.min_delay(), Duration::from_millis(400));
        assert_eq!(profile.error_rate(), 0.10);

        let inverted = NetworkSettings {
            min_delay_ms: 900,
            ..NetworkSettings::default()
        };
        assert!(matches!(inverted.profile(), Err(ConfigError::Network(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_file("/nonexistent/athlete.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
