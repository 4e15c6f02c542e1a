//! Athlete Portfolio
//!
//! Owns the player's portfolio state:
//! - **Pre-trade checks**: positive quantity and price, affordable buys,
//!   covered sells
//! - **Reducer**: applies executed trades with weighted-average cost basis
//! - **Trade Desk**: single writer that executes trades through the mock
//!   API and applies them in order
//!
//! ## Architecture
//!
//! ```text
//! TradeRequest ──► TradeDesk ──► check_trade ──► MockApi::execute_trade
//!                                                        │ TradeAck
//!                                                        ▼
//!                  TradeReceipt ◄── apply_trade ◄── TradeRecord
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use athlete_portfolio::{TradeDesk, TradeRequest};
//!
//! let desk = TradeDesk::spawn(api, portfolio, 64);
//!
//! let receipt = desk
//!     .submit(TradeRequest::new(TradeIntent::buy("AAPL", dec!(5)), dec!(189.5)))
//!     .await?;
//! ```

pub mod desk;
pub mod error;
pub mod reducer;
pub mod validation;

// Re-export main types
pub use desk::{DEFAULT_DESK_CAPACITY, TradeDesk, TradeReceipt, TradeRequest};
pub use error::{Result, TradeError};
pub use reducer::{apply_trade, mark_to_market};
pub use validation::check_trade;
