//! Read-only records served by the mock API fixtures

mod ack;
mod asset;
mod challenge;
mod leaderboard;
mod message;
mod session;

pub use ack::{Ack, AnswerAck, TradeAck};
pub use asset::Asset;
pub use challenge::{Challenge, ChallengeStatus};
pub use leaderboard::{LeaderboardEntry, LeaderboardKind};
pub use message::{Message, MessageStatus};
pub use session::{Question, Session};
