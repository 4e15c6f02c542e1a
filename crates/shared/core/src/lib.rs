//! Athlete Core Domain
//!
//! Pure domain types for the Athlete Game trading simulation.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod content;
pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use content::{
    Ack, AnswerAck, Asset, Challenge, ChallengeStatus, LeaderboardEntry, LeaderboardKind, Message,
    MessageStatus, Question, Session, TradeAck,
};
pub use entities::{Holding, Portfolio, PortfolioSummary, Side, TradeIntent, TradeRecord};
pub use values::{Cash, Price, Quantity, Symbol, Timestamp};
