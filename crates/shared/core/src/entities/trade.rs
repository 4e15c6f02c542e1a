use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Price, Quantity, Symbol, Timestamp};

/// What the player wants to trade, before a price is attached
///
/// Transient input; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeIntent {
    pub symbol: Symbol,
    pub qty: Quantity,
    pub side: Side,
}

impl TradeIntent {
    pub fn new(symbol: impl Into<Symbol>, qty: Quantity, side: Side) -> Self {
        Self {
            symbol: symbol.into(),
            qty,
            side,
        }
    }

    pub fn buy(symbol: impl Into<Symbol>, qty: Quantity) -> Self {
        Self::new(symbol, qty, Side::Buy)
    }

    pub fn sell(symbol: impl Into<Symbol>, qty: Quantity) -> Self {
        Self::new(symbol, qty, Side::Sell)
    }

    /// Cash moved by this intent at the given price, `None` when it does not
    /// fit in a `Decimal`
    pub fn checked_notional(&self, price: Price) -> Option<Decimal> {
        self.qty.checked_mul(price)
    }
}

/// An executed trade as it appears in the portfolio history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,

    #[serde(rename = "type")]
    pub side: Side,

    pub symbol: Symbol,
    pub qty: Quantity,
    pub price: Price,

    /// Execution time
    pub ts: Timestamp,

    /// Learning note shown next to the trade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl TradeRecord {
    /// Create a record for an intent filled at `price`
    pub fn filled(id: impl Into<String>, intent: &TradeIntent, price: Price, ts: Timestamp) -> Self {
        Self {
            id: id.into(),
            side: intent.side,
            symbol: intent.symbol.clone(),
            qty: intent.qty,
            price,
            ts,
            rationale: None,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Returns the notional value of the trade (price * qty)
    pub fn notional(&self) -> Decimal {
        self.price * self.qty
    }

    pub fn intent(&self) -> TradeIntent {
        TradeIntent::new(self.symbol.clone(), self.qty, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_history_entry_format() {
        let json = r#"{
            "id": "h1",
            "type": "BUY",
            "symbol": "AAPL",
            "qty": 5,
            "price": 182.3,
            "ts": "2025-01-06T09:30:00Z",
            "rationale": "Earnings beat"
        }"#;
        let record: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.side, Side::Buy);
        assert_eq!(record.notional(), dec!(911.5));
        assert_eq!(record.ts, Utc.with_ymd_and_hms(2025, 1, 6, 9, 30, 0).unwrap());
        assert_eq!(record.rationale.as_deref(), Some("Earnings beat"));
    }

    #[test]
    fn test_filled_copies_intent() {
        let intent = TradeIntent::sell("TSLA", dec!(2));
        let ts = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
        let record = TradeRecord::filled("t1", &intent, dec!(250), ts);
        assert_eq!(record.intent(), intent);
        assert_eq!(record.notional(), dec!(500));
        assert!(record.rationale.is_none());
    }
}
