use athlete_clock::SystemClock;
use athlete_core::{
    Ack, AnswerAck, Asset, Challenge, LeaderboardEntry, LeaderboardKind, Message, Portfolio,
    Quantity, Session, Side, TradeAck,
};
use athlete_ports::{Clock, NetworkError, NetworkResult, NetworkSimulator};
use log::{debug, warn};
use std::sync::Arc;
use tokio::time::sleep;

use crate::error::Result;
use crate::fixtures::Fixtures;
use crate::network::{LatencyProfile, RandomNetwork};

/// Fixture-backed stand-in for the game backend
///
/// Every operation first suspends the caller for the latency drawn from the
/// [`NetworkSimulator`], then either fails with [`NetworkError`] or returns
/// a copy of the fixture data. Nothing is ever written back: submitting a
/// trade or an answer only produces an acknowledgement.
#[derive(Clone)]
pub struct MockApi {
    fixtures: Arc<Fixtures>,
    network: Arc<dyn NetworkSimulator>,
    clock: Arc<dyn Clock>,
}

impl MockApi {
    /// Create an API over the given fixtures, network and clock
    pub fn new(
        fixtures: Fixtures,
        network: Arc<dyn NetworkSimulator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        debug!("MockApi using {} and {}", network.name(), clock.name());
        Self {
            fixtures: Arc::new(fixtures),
            network,
            clock,
        }
    }

    /// Embedded fixtures, default latency profile, wall-clock time
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            Fixtures::embedded()?,
            Arc::new(RandomNetwork::new(LatencyProfile::default())),
            Arc::new(SystemClock::new()),
        ))
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Clock used for acknowledgement ids
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Simulate one round trip: wait, then maybe fail
    async fn round_trip(&self, operation: &'static str) -> NetworkResult<()> {
        let outcome = self.network.next_call();
        debug!(
            "{} via {}: latency={}ms fail={}",
            operation,
            self.network.name(),
            outcome.latency.as_millis(),
            outcome.fail
        );

        sleep(outcome.latency).await;

        if outcome.fail {
            warn!("{} failed with injected network error", operation);
            return Err(NetworkError::transient(operation));
        }
        Ok(())
    }

    /// Session fixture, answered under the requested join code
    pub async fn get_session(&self, code: &str) -> NetworkResult<Session> {
        self.round_trip("get_session").await?;
        let mut session = self.fixtures.session.clone();
        session.code = code.to_string();
        Ok(session)
    }

    /// Ranking for `kind`; empty when the fixture has no such ranking
    pub async fn get_leaderboard(
        &self,
        kind: LeaderboardKind,
    ) -> NetworkResult<Vec<LeaderboardEntry>> {
        self.round_trip("get_leaderboard").await?;
        Ok(self.fixtures.leaderboard(kind))
    }

    pub async fn get_assets(&self) -> NetworkResult<Vec<Asset>> {
        self.round_trip("get_assets").await?;
        Ok(self.fixtures.assets.clone())
    }

    pub async fn get_portfolio(&self) -> NetworkResult<Portfolio> {
        self.round_trip("get_portfolio").await?;
        Ok(self.fixtures.portfolio.clone())
    }

    pub async fn get_challenge(&self) -> NetworkResult<Challenge> {
        self.round_trip("get_challenge").await?;
        Ok(self.fixtures.challenge.clone())
    }

    pub async fn get_messages(&self) -> NetworkResult<Vec<Message>> {
        self.round_trip("get_messages").await?;
        Ok(self.fixtures.messages.clone())
    }

    /// Acknowledge a quiz answer, grading it when the question has a
    /// correct option
    pub async fn submit_answer(
        &self,
        session_code: &str,
        question_id: &str,
        answer: &str,
    ) -> NetworkResult<AnswerAck> {
        self.round_trip("submit_answer").await?;
        let correct = self
            .fixtures
            .session
            .question(question_id)
            .map(|q| q.is_correct(answer))
            .unwrap_or(true);
        debug!(
            "Answer for {}/{} recorded: correct={}",
            session_code, question_id, correct
        );
        Ok(AnswerAck {
            success: true,
            correct,
        })
    }

    pub async fn submit_challenge(&self, action: &str) -> NetworkResult<Ack> {
        self.round_trip("submit_challenge").await?;
        debug!("Challenge decision recorded: {}", action);
        Ok(Ack::ok())
    }

    /// Acknowledge a trade; no server-side portfolio is touched
    pub async fn execute_trade(
        &self,
        symbol: &str,
        qty: Quantity,
        side: Side,
    ) -> NetworkResult<TradeAck> {
        self.round_trip("execute_trade").await?;
        let trade_id = format!("t{}", self.clock.now_millis());
        debug!("Trade {} acknowledged: {} {} {}", trade_id, side, qty, symbol);
        Ok(TradeAck {
            success: true,
            trade_id,
        })
    }

    pub async fn submit_email(&self, email: &str) -> NetworkResult<Ack> {
        self.round_trip("submit_email").await?;
        debug!("Email registered: {}", email);
        Ok(Ack::ok())
    }
}
