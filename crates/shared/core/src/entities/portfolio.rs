use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Holding, TradeRecord};
use crate::values::{Cash, Quantity};

/// Simulated trading account of one player
///
/// Holdings keep insertion order. Cash is expected to stay non-negative;
/// the trade reducer refuses trades that would break that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub cash: Cash,

    #[serde(default)]
    pub holdings: Vec<Holding>,

    #[serde(default)]
    pub history: Vec<TradeRecord>,
}

impl Portfolio {
    /// Create an empty portfolio funded with `cash`
    pub fn with_cash(cash: Cash) -> Self {
        Self {
            cash,
            ..Default::default()
        }
    }

    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }

    pub fn holding_mut(&mut self, symbol: &str) -> Option<&mut Holding> {
        self.holdings.iter_mut().find(|h| h.symbol == symbol)
    }

    /// Quantity held for `symbol` (zero when there is no holding)
    pub fn held_qty(&self, symbol: &str) -> Quantity {
        self.holding(symbol).map(|h| h.qty).unwrap_or(Decimal::ZERO)
    }

    /// Sum of all holdings at market price
    pub fn market_value(&self) -> Decimal {
        self.holdings.iter().map(Holding::market_value).sum()
    }

    /// Sum of all holdings at cost basis
    pub fn cost_basis(&self) -> Decimal {
        self.holdings.iter().map(Holding::cost_basis).sum()
    }

    /// Unrealized P&L across all holdings
    pub fn pnl(&self) -> Decimal {
        self.market_value() - self.cost_basis()
    }

    /// Unrealized P&L relative to cost basis, in percent (zero without cost)
    pub fn pnl_percent(&self) -> Decimal {
        let cost = self.cost_basis();
        if cost.is_zero() {
            return Decimal::ZERO;
        }
        self.pnl() / cost * Decimal::ONE_HUNDRED
    }

    /// Cash plus market value of holdings
    pub fn net_worth(&self) -> Decimal {
        self.cash + self.market_value()
    }

    /// Trade history, newest first; same-instant trades by latest applied
    pub fn recent_history(&self) -> Vec<&TradeRecord> {
        let mut history: Vec<&TradeRecord> = self.history.iter().rev().collect();
        history.sort_by(|a, b| b.ts.cmp(&a.ts));
        history
    }

    /// Headline figures for dashboards
    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary {
            cash: self.cash,
            market_value: self.market_value(),
            cost_basis: self.cost_basis(),
            pnl: self.pnl(),
            pnl_percent: self.pnl_percent().round_dp(2),
            net_worth: self.net_worth(),
            holdings: self.holdings.len(),
        }
    }
}

/// Snapshot of the portfolio figures shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub cash: Cash,
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub pnl: Decimal,
    /// Rounded to two decimal places
    pub pnl_percent: Decimal,
    pub net_worth: Decimal,
    pub holdings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Side;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sample() -> Portfolio {
        Portfolio {
            cash: dec!(1000),
            holdings: vec![
                Holding {
                    symbol: "AAPL".to_string(),
                    qty: dec!(10),
                    avg_price: dec!(100),
                    market_price: dec!(110),
                },
                Holding {
                    symbol: "SAP".to_string(),
                    qty: dec!(2),
                    avg_price: dec!(200),
                    market_price: dec!(150),
                },
            ],
            history: Vec::new(),
        }
    }

    #[test]
    fn test_figures() {
        let portfolio = sample();
        assert_eq!(portfolio.market_value(), dec!(1400));
        assert_eq!(portfolio.cost_basis(), dec!(1400));
        assert_eq!(portfolio.pnl(), Decimal::ZERO);
        assert_eq!(portfolio.net_worth(), dec!(2400));
        assert_eq!(portfolio.held_qty("AAPL"), dec!(10));
        assert_eq!(portfolio.held_qty("TSLA"), Decimal::ZERO);
    }

    #[test]
    fn test_pnl_percent_without_cost_is_zero() {
        let portfolio = Portfolio::with_cash(dec!(500));
        assert_eq!(portfolio.pnl_percent(), Decimal::ZERO);
        let summary = portfolio.summary();
        assert_eq!(summary.net_worth, dec!(500));
        assert_eq!(summary.holdings, 0);
    }

    #[test]
    fn test_summary_rounds_percent() {
        let mut portfolio = sample();
        portfolio.holdings[0].market_price = dec!(110.333);
        let summary = portfolio.summary();
        // 3.33 gain on 1400 cost
        assert_eq!(summary.pnl, dec!(3.33));
        assert_eq!(summary.pnl_percent, dec!(0.24));
    }

    #[test]
    fn test_recent_history_newest_first() {
        let mut portfolio = sample();
        for (id, day) in [("a", 1), ("b", 3), ("c", 2)] {
            portfolio.history.push(TradeRecord {
                id: id.to_string(),
                side: Side::Buy,
                symbol: "AAPL".to_string(),
                qty: dec!(1),
                price: dec!(100),
                ts: Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0).unwrap(),
                rationale: None,
            });
        }
        let ids: Vec<&str> = portfolio
            .recent_history()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
