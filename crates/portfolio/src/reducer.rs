//! Portfolio State Reducer
//!
//! Applies confirmed trades to a portfolio:
//! - **Buy**: weighted-average cost basis, cash decreases by the notional
//! - **Sell**: quantity decreases, cost basis unchanged, holding removed
//!   when it reaches exactly zero, cash increases by the notional
//!
//! Invalid trades are rejected with a [`TradeError`] and leave the portfolio
//! untouched. The reducer never talks to the network.

use athlete_core::{Asset, Holding, Portfolio, Side, TradeRecord};
use log::debug;
use rust_decimal::Decimal;

use crate::error::{Result, TradeError};
use crate::validation::check_trade;

/// Apply an executed trade to the portfolio and append it to the history
pub fn apply_trade(portfolio: &mut Portfolio, trade: &TradeRecord) -> Result<()> {
    check_trade(portfolio, &trade.intent(), trade.price)?;

    let overflow = || TradeError::InvalidQuantity(trade.qty);
    let notional = trade.qty.checked_mul(trade.price).ok_or_else(overflow)?;

    match trade.side {
        Side::Buy => {
            let cash = portfolio.cash.checked_sub(notional).ok_or_else(overflow)?;
            if let Some(holding) = portfolio.holding_mut(&trade.symbol) {
                // Adding to position - weighted average
                let total_cost = holding
                    .qty
                    .checked_mul(holding.avg_price)
                    .and_then(|cost| cost.checked_add(notional))
                    .ok_or_else(overflow)?;
                let total_qty = holding.qty.checked_add(trade.qty).ok_or_else(overflow)?;
                let avg_price = total_cost.checked_div(total_qty).ok_or_else(overflow)?;
                holding.qty = total_qty;
                holding.avg_price = avg_price;
            } else {
                portfolio
                    .holdings
                    .push(Holding::opened(trade.symbol.clone(), trade.qty, trade.price));
            }
            portfolio.cash = cash;
        }
        Side::Sell => {
            let cash = portfolio.cash.checked_add(notional).ok_or_else(overflow)?;
            let Some(holding) = portfolio.holding_mut(&trade.symbol) else {
                return Err(TradeError::InsufficientHoldings {
                    symbol: trade.symbol.clone(),
                    held: Decimal::ZERO,
                    requested: trade.qty,
                });
            };
            holding.qty -= trade.qty;
            if holding.qty.is_zero() {
                portfolio.holdings.retain(|h| h.symbol != trade.symbol);
            }
            portfolio.cash = cash;
        }
    }

    debug!(
        "Applied {} {} {} @ {}: cash={}",
        trade.side, trade.qty, trade.symbol, trade.price, portfolio.cash
    );
    portfolio.history.push(trade.clone());
    Ok(())
}

/// Refresh market prices of held symbols from the asset list
///
/// Returns how many holdings were repriced. Holdings without a listed asset
/// keep their last price.
pub fn mark_to_market(portfolio: &mut Portfolio, assets: &[Asset]) -> usize {
    let mut repriced = 0;
    for holding in &mut portfolio.holdings {
        if let Some(asset) = assets.iter().find(|a| a.symbol == holding.symbol) {
            holding.market_price = asset.price;
            repriced += 1;
        }
    }
    repriced
}
