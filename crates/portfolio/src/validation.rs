//! Pre-trade checks
//!
//! The same checks guard the reducer and are available to callers that want
//! to reject an intent before spending a network round trip on it.

use athlete_core::{Portfolio, Price, Side, TradeIntent};
use rust_decimal::Decimal;

use crate::error::{Result, TradeError};

/// Check that `intent` can be filled at `price` against `portfolio`
///
/// - quantity and price must be positive
/// - a buy must be affordable with the available cash
/// - a sell must be covered by the quantity held
/// - the notional and the resulting cash must be representable
pub fn check_trade(portfolio: &Portfolio, intent: &TradeIntent, price: Price) -> Result<()> {
    if intent.qty <= Decimal::ZERO {
        return Err(TradeError::InvalidQuantity(intent.qty));
    }
    if price <= Decimal::ZERO {
        return Err(TradeError::InvalidPrice {
            symbol: intent.symbol.clone(),
            price,
        });
    }

    let notional = intent
        .checked_notional(price)
        .ok_or(TradeError::InvalidQuantity(intent.qty))?;

    match intent.side {
        Side::Buy => {
            let required = notional;
            if required > portfolio.cash {
                return Err(TradeError::InsufficientCash {
                    required,
                    available: portfolio.cash,
                });
            }
        }
        Side::Sell => {
            let held = portfolio.held_qty(&intent.symbol);
            if held < intent.qty {
                return Err(TradeError::InsufficientHoldings {
                    symbol: intent.symbol.clone(),
                    held,
                    requested: intent.qty,
                });
            }
            if portfolio.cash.checked_add(notional).is_none() {
                return Err(TradeError::InvalidQuantity(intent.qty));
            }
        }
    }

    Ok(())
}
