use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Quantity value - uses Decimal so fractional shares stay exact
pub type Quantity = Decimal;

/// Cash amount in the simulated account currency
pub type Cash = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Ticker symbol of a tradeable asset
pub type Symbol = String;
