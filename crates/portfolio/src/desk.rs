//! Trade Desk
//!
//! A single task owns every portfolio mutation. Callers send commands over a
//! bounded channel and await the reply; submissions are processed strictly
//! one after another, including their network round trip, so two trades can
//! never both pass the cash check against the same balance.
//!
//! ```text
//! TradeDesk (clone) ──┐
//! TradeDesk (clone) ──┼──► mpsc ──► DeskWorker ──► MockApi::execute_trade
//! TradeDesk (clone) ──┘                 │
//!                                       ▼
//!                              apply_trade (write lock)
//!                                       │
//!            snapshot() ◄── RwLock<Portfolio> (read lock)
//! ```

use athlete_core::{Asset, Cash, Holding, Portfolio, Price, TradeIntent, TradeRecord};
use athlete_mock_api::MockApi;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc, oneshot};

use crate::error::{Result, TradeError};
use crate::reducer::{apply_trade, mark_to_market};
use crate::validation::check_trade;

/// Default command buffer of a desk
pub const DEFAULT_DESK_CAPACITY: usize = 64;

/// A trade to submit, with the price it is quoted at
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRequest {
    pub intent: TradeIntent,
    pub price: Price,
    pub rationale: Option<String>,
}

impl TradeRequest {
    pub fn new(intent: TradeIntent, price: Price) -> Self {
        Self {
            intent,
            price,
            rationale: None,
        }
    }

    /// Attach the reasoning shown next to the trade in the history
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// Result of a trade the desk has executed and applied
#[derive(Debug, Clone, PartialEq)]
pub struct TradeReceipt {
    pub trade: TradeRecord,
    pub cash_after: Cash,
    /// Holding of the traded symbol after the fill, `None` once sold out
    pub holding_after: Option<Holding>,
}

#[derive(Debug)]
enum DeskCommand {
    Submit {
        request: TradeRequest,
        response: oneshot::Sender<Result<TradeReceipt>>,
    },
    Replace {
        portfolio: Portfolio,
        response: oneshot::Sender<()>,
    },
    MarkToMarket {
        assets: Vec<Asset>,
        response: oneshot::Sender<usize>,
    },
}

/// Handle to the desk task
///
/// Cheap to clone. The desk shuts down once every handle is dropped.
#[derive(Clone)]
pub struct TradeDesk {
    sender: mpsc::Sender<DeskCommand>,
    state: Arc<RwLock<Portfolio>>,
}

impl TradeDesk {
    /// Spawn the desk on the current tokio runtime
    pub fn spawn(api: MockApi, initial: Portfolio, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let state = Arc::new(RwLock::new(initial));

        let worker = DeskWorker {
            api,
            state: Arc::clone(&state),
        };
        tokio::spawn(worker.run(receiver));

        Self { sender, state }
    }

    /// Execute a trade and apply it to the portfolio
    ///
    /// Rejected intents never reach the network. On any error the portfolio
    /// is left exactly as it was.
    pub async fn submit(&self, request: TradeRequest) -> Result<TradeReceipt> {
        let (tx, rx) = oneshot::channel();
        self.send(DeskCommand::Submit {
            request,
            response: tx,
        })
        .await?;
        rx.await.map_err(|_| TradeError::DeskClosed)?
    }

    /// Replace the whole portfolio, e.g. after a fresh load
    pub async fn replace(&self, portfolio: Portfolio) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(DeskCommand::Replace {
            portfolio,
            response: tx,
        })
        .await?;
        rx.await.map_err(|_| TradeError::DeskClosed)
    }

    /// Reprice holdings from the asset list; returns how many were repriced
    pub async fn mark_to_market(&self, assets: Vec<Asset>) -> Result<usize> {
        let (tx, rx) = oneshot::channel();
        self.send(DeskCommand::MarkToMarket {
            assets,
            response: tx,
        })
        .await?;
        rx.await.map_err(|_| TradeError::DeskClosed)
    }

    /// Copy of the current portfolio
    pub async fn snapshot(&self) -> Portfolio {
        self.state.read().await.clone()
    }

    async fn send(&self, command: DeskCommand) -> Result<()> {
        self.sender
            .send(command)
            .await
            .map_err(|_| TradeError::DeskClosed)
    }
}

struct DeskWorker {
    api: MockApi,
    state: Arc<RwLock<Portfolio>>,
}

impl DeskWorker {
    async fn run(self, mut receiver: mpsc::Receiver<DeskCommand>) {
        info!("Trade desk started");

        while let Some(command) = receiver.recv().await {
            match command {
                DeskCommand::Submit { request, response } => {
                    let result = self.execute(request).await;
                    if let Err(e) = &result {
                        warn!("Trade rejected: {}", e);
                    }
                    let _ = response.send(result);
                }
                DeskCommand::Replace {
                    portfolio,
                    response,
                } => {
                    *self.state.write().await = portfolio;
                    let _ = response.send(());
                }
                DeskCommand::MarkToMarket { assets, response } => {
                    let repriced = mark_to_market(&mut *self.state.write().await, &assets);
                    let _ = response.send(repriced);
                }
            }
        }

        info!("Trade desk stopped");
    }

    async fn execute(&self, request: TradeRequest) -> Result<TradeReceipt> {
        let TradeRequest {
            intent,
            price,
            rationale,
        } = request;

        check_trade(&*self.state.read().await, &intent, price)?;

        let ack = self
            .api
            .execute_trade(&intent.symbol, intent.qty, intent.side)
            .await?;

        let mut trade = TradeRecord::filled(ack.trade_id, &intent, price, self.api.clock().now());
        if let Some(rationale) = rationale {
            trade = trade.with_rationale(rationale);
        }

        let mut portfolio = self.state.write().await;
        apply_trade(&mut portfolio, &trade)?;
        debug!("Trade {} applied, cash={}", trade.id, portfolio.cash);

        Ok(TradeReceipt {
            cash_after: portfolio.cash,
            holding_after: portfolio.holding(&trade.symbol).cloned(),
            trade,
        })
    }
}
