//! Athlete Game
//!
//! The state container a UI drives through a whole game:
//!
//! - **Session**: join with code and nickname, start countdown, quiz progress
//! - **Portfolio**: load, reprice and trade through the single-writer desk
//! - **Challenge**: one decision per weekly challenge before its deadline
//! - **Leaderboard**: unlocked by a registered email
//! - **Notifications**: success/error/info toasts that expire on their own
//!
//! ## Architecture
//!
//! ```text
//!                      ┌──────────────────────────────┐
//!   UI actions ──────► │          GameStore           │
//!                      │  QuizProgress  ChallengeState│
//!                      │  LeaderboardGate  Notifier   │
//!                      └───────┬──────────────┬───────┘
//!                              │ reads        │ trades
//!                              ▼              ▼
//!                      ┌─────────────┐  ┌─────────────┐
//!                      │   MockApi   │◄─│  TradeDesk  │
//!                      └──────┬──────┘  └─────────────┘
//!                             │
//!                  Fixtures + NetworkSimulator + Clock
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use athlete_game::{GameConfig, GameStore};
//!
//! let config = GameConfig::default().with_env_overrides()?;
//! let mut store = GameStore::from_config(config, Arc::new(SystemClock::new()))?;
//!
//! store.join_session("DEMO24", "Sam", None).await?;
//! store.load_portfolio().await?;
//! store.trade("AAPL", dec!(2), Side::Buy).await?;
//! ```

pub mod challenge;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod notification;
pub mod quiz;
pub mod store;

// Re-export main types
pub use challenge::ChallengeState;
pub use config::{ConfigError, GameConfig, NetworkSettings, SeasonConfig, normalize_base_path};
pub use error::{GameError, Result};
pub use leaderboard::{LeaderboardGate, Standing, check_email, standings, validate_email};
pub use notification::{Notification, NotificationKind, Notifier};
pub use quiz::{Answer, Countdown, Player, QuizProgress, QuizStep};
pub use store::{ChallengeSummary, Dashboard, GameStore, QuizSummary};
