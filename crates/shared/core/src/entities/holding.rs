use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Symbol};

/// A position in one asset symbol
///
/// `qty` is never negative; a holding whose quantity reaches zero is removed
/// from the portfolio rather than kept around empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: Symbol,

    /// Units held
    pub qty: Quantity,

    /// Quantity-weighted average purchase price (cost basis per unit)
    pub avg_price: Price,

    /// Last known market price, used for valuation
    pub market_price: Price,
}

impl Holding {
    /// Open a new holding at the given fill price
    pub fn opened(symbol: impl Into<Symbol>, qty: Quantity, price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            qty,
            avg_price: price,
            market_price: price,
        }
    }

    /// Total amount paid for the units currently held
    pub fn cost_basis(&self) -> Decimal {
        self.qty * self.avg_price
    }

    /// Current value at market price
    pub fn market_value(&self) -> Decimal {
        self.qty * self.market_price
    }

    /// Unrealized profit/loss at market price
    pub fn unrealized_pnl(&self) -> Decimal {
        (self.market_price - self.avg_price) * self.qty
    }

    /// Unrealized profit/loss relative to the average price, in percent
    pub fn pnl_percent(&self) -> Decimal {
        if self.avg_price.is_zero() {
            return Decimal::ZERO;
        }
        (self.market_price - self.avg_price) / self.avg_price * Decimal::ONE_HUNDRED
    }
}
