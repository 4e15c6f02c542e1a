//! Game store - the state behind every screen
//!
//! Each action calls the mock API, waits for its latency, and only then
//! touches state. A failed action leaves state as it was and raises an error
//! notification carrying the user-facing message; successful submissions
//! raise a success notification.

use athlete_core::{
    Asset, ChallengeStatus, LeaderboardEntry, LeaderboardKind, Message, Portfolio,
    PortfolioSummary, Quantity, Side, Timestamp, TradeIntent, TradeRecord,
};
use athlete_mock_api::{Fixtures, MockApi, RandomNetwork};
use athlete_portfolio::{TradeDesk, TradeError, TradeReceipt, TradeRequest};
use athlete_ports::{Clock, NetworkSimulator};
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::challenge::ChallengeState;
use crate::config::{GameConfig, SeasonConfig};
use crate::error::{GameError, Result};
use crate::leaderboard::{LeaderboardGate, check_email};
use crate::notification::{Notification, Notifier};
use crate::quiz::{Countdown, Player, QuizProgress, QuizStep};

/// Challenge line of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeSummary {
    pub id: String,
    pub title: String,
    pub status: ChallengeStatus,
    pub submitted: bool,
    pub expired: bool,
}

/// Quiz line of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
    pub finished: bool,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub portfolio: PortfolioSummary,
    pub challenge: Option<ChallengeSummary>,
    pub quiz: Option<QuizSummary>,
    pub season: SeasonConfig,
}

pub struct GameStore {
    config: GameConfig,
    api: MockApi,
    desk: TradeDesk,
    player: Option<Player>,
    quiz: Option<QuizProgress>,
    countdown: Option<Countdown>,
    assets: Vec<Asset>,
    challenge: Option<ChallengeState>,
    gate: LeaderboardGate,
    notifier: Notifier,
}

impl GameStore {
    /// Create a store over an existing API
    ///
    /// Spawns the trade desk, so this must run inside a tokio runtime.
    pub fn new(config: GameConfig, api: MockApi) -> Self {
        let desk = TradeDesk::spawn(api.clone(), Portfolio::default(), config.desk_capacity);
        let notifier = Notifier::new(config.notification_ttl());

        Self {
            config,
            api,
            desk,
            player: None,
            quiz: None,
            countdown: None,
            assets: Vec::new(),
            challenge: None,
            gate: LeaderboardGate::default(),
            notifier,
        }
    }

    /// Build fixtures, network and API from configuration
    pub fn from_config(config: GameConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let fixtures = match &config.fixtures_dir {
            Some(dir) => {
                info!("Loading fixtures from {}", dir.display());
                Fixtures::from_dir(dir)?
            }
            None => Fixtures::embedded()?,
        };

        let profile = config.network.profile()?;
        let network: Arc<dyn NetworkSimulator> = match config.network.seed {
            Some(seed) => Arc::new(RandomNetwork::with_seed(profile, seed)),
            None => Arc::new(RandomNetwork::new(profile)),
        };
        info!(
            "Mock network: {}-{}ms, error rate {}",
            config.network.min_delay_ms, config.network.max_delay_ms, config.network.error_rate
        );

        let api = MockApi::new(fixtures, network, clock);
        Ok(Self::new(config, api))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn quiz(&self) -> Option<&QuizProgress> {
        self.quiz.as_ref()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn challenge(&self) -> Option<&ChallengeState> {
        self.challenge.as_ref()
    }

    pub fn leaderboard_gate(&self) -> &LeaderboardGate {
        &self.gate
    }

    /// Current time of the injected clock
    pub fn now(&self) -> Timestamp {
        self.api.clock().now()
    }

    /// Raise an error notification for a failed action
    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            warn!("Action failed: {}", e);
            let now = self.now();
            self.notifier.error(e.user_message(), now);
        }
        result
    }

    fn celebrate(&mut self, message: &str) {
        let now = self.now();
        self.notifier.success(message, now);
    }

    // ------------------------------------------------------------------
    // Session & quiz
    // ------------------------------------------------------------------

    /// Join a session: validate the input, then load the session
    pub async fn join_session(
        &mut self,
        code: &str,
        nickname: &str,
        email: Option<&str>,
    ) -> Result<()> {
        let result = self.try_join_session(code, nickname, email).await;
        self.report(result)
    }

    async fn try_join_session(
        &mut self,
        code: &str,
        nickname: &str,
        email: Option<&str>,
    ) -> Result<()> {
        let player = Player::join(code, nickname, email)?;
        let session = self.api.get_session(&player.session_code).await?;

        info!(
            "{} joined session {} ({} questions)",
            player.nickname,
            session.code,
            session.questions.len()
        );
        self.countdown = Some(Countdown::new(self.now(), self.config.countdown()));
        self.quiz = Some(QuizProgress::new(session));
        self.player = Some(player);
        Ok(())
    }

    /// Time left before the joined session starts
    pub fn countdown_remaining(&self, now: Timestamp) -> Option<chrono::Duration> {
        self.countdown.map(|c| c.remaining(now))
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Submit an answer for the current question
    ///
    /// Returns whether the answer was graded correct.
    pub async fn submit_answer(&mut self, option: &str) -> Result<bool> {
        let result = self.try_submit_answer(option).await;
        let result = self.report(result);
        if result.is_ok() {
            self.celebrate("Answer saved!");
        }
        result
    }

    async fn try_submit_answer(&mut self, option: &str) -> Result<bool> {
        let quiz = self.quiz.as_ref().ok_or(GameError::NotJoined)?;
        let question_id = quiz.check_answer(option)?.id.clone();
        let code = quiz.session().code.clone();

        let ack = self.api.submit_answer(&code, &question_id, option).await?;

        let quiz = self.quiz.as_mut().ok_or(GameError::NotJoined)?;
        quiz.record(option, ack.correct)?;
        Ok(ack.correct)
    }

    /// Move to the next question, or finish after the last one
    pub fn next_question(&mut self) -> Result<QuizStep> {
        let result = match self.quiz.as_mut() {
            Some(quiz) => quiz.advance(),
            None => Err(GameError::NotJoined),
        };
        self.report(result)
    }

    // ------------------------------------------------------------------
    // Portfolio
    // ------------------------------------------------------------------

    /// Load portfolio and assets, hand the portfolio to the trade desk and
    /// reprice it
    pub async fn load_portfolio(&mut self) -> Result<PortfolioSummary> {
        let result = self.try_load_portfolio().await;
        self.report(result)
    }

    async fn try_load_portfolio(&mut self) -> Result<PortfolioSummary> {
        let (portfolio, assets) =
            tokio::try_join!(self.api.get_portfolio(), self.api.get_assets())?;

        self.desk.replace(portfolio).await?;
        self.desk.mark_to_market(assets.clone()).await?;
        self.assets = assets;

        Ok(self.desk.snapshot().await.summary())
    }

    /// Trade at the current asset price
    pub async fn trade(&mut self, symbol: &str, qty: Quantity, side: Side) -> Result<TradeReceipt> {
        let result = self.try_trade(symbol, qty, side).await;
        let result = self.report(result);
        if result.is_ok() {
            self.celebrate(match side {
                Side::Buy => "Purchase successful!",
                Side::Sell => "Sale successful!",
            });
        }
        result
    }

    async fn try_trade(&mut self, symbol: &str, qty: Quantity, side: Side) -> Result<TradeReceipt> {
        let price = self
            .assets
            .iter()
            .find(|a| a.symbol == symbol)
            .map(|a| a.price)
            .ok_or_else(|| TradeError::UnknownAsset(symbol.to_string()))?;

        let request = TradeRequest::new(TradeIntent::new(symbol, qty, side), price);
        Ok(self.desk.submit(request).await?)
    }

    pub async fn portfolio(&self) -> Portfolio {
        self.desk.snapshot().await
    }

    /// Trade history, newest first
    pub async fn history(&self) -> Vec<TradeRecord> {
        self.desk
            .snapshot()
            .await
            .recent_history()
            .into_iter()
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Challenge
    // ------------------------------------------------------------------

    pub async fn load_challenge(&mut self) -> Result<()> {
        let result = self.try_load_challenge().await;
        self.report(result)
    }

    async fn try_load_challenge(&mut self) -> Result<()> {
        let challenge = self.api.get_challenge().await?;
        match self.challenge.as_mut() {
            Some(state) => state.refresh(challenge),
            None => self.challenge = Some(ChallengeState::new(challenge)),
        }
        Ok(())
    }

    /// Submit the decision for the loaded challenge
    pub async fn submit_challenge(&mut self, action: &str) -> Result<()> {
        let result = self.try_submit_challenge(action).await;
        let result = self.report(result);
        if result.is_ok() {
            self.celebrate("Challenge submitted successfully!");
        }
        result
    }

    async fn try_submit_challenge(&mut self, action: &str) -> Result<()> {
        let now = self.now();
        self.challenge
            .as_ref()
            .ok_or(GameError::ChallengeNotLoaded)?
            .check_submission(action, now)?;

        self.api.submit_challenge(action).await?;

        let now = self.now();
        self.challenge
            .as_mut()
            .ok_or(GameError::ChallengeNotLoaded)?
            .submit(action, now)
    }

    // ------------------------------------------------------------------
    // Leaderboard & messages
    // ------------------------------------------------------------------

    /// Register an email to unlock the leaderboard
    pub async fn submit_email(&mut self, email: &str) -> Result<()> {
        let result = self.try_submit_email(email).await;
        let result = self.report(result);
        if result.is_ok() {
            self.celebrate("Email saved!");
        }
        result
    }

    async fn try_submit_email(&mut self, email: &str) -> Result<()> {
        let email = check_email(email)?;
        self.api.submit_email(email).await?;
        self.gate.unlock(email);
        Ok(())
    }

    /// Ranking for `kind`; requires a registered email
    pub async fn load_leaderboard(&mut self, kind: LeaderboardKind) -> Result<Vec<LeaderboardEntry>> {
        let result = match self.gate.ensure_unlocked() {
            Ok(()) => self.api.get_leaderboard(kind).await.map_err(GameError::from),
            Err(e) => Err(e),
        };
        self.report(result)
    }

    /// Messenger preview, ordered by scheduled time
    pub async fn load_messages(&mut self) -> Result<Vec<Message>> {
        let result = self.api.get_messages().await.map_err(GameError::from);
        let mut messages = self.report(result)?;
        messages.sort_by(|a, b| a.scheduled.cmp(&b.scheduled));
        Ok(messages)
    }

    // ------------------------------------------------------------------
    // Dashboard & notifications
    // ------------------------------------------------------------------

    pub async fn dashboard(&self) -> Dashboard {
        let now = self.now();
        Dashboard {
            portfolio: self.desk.snapshot().await.summary(),
            challenge: self.challenge.as_ref().map(|state| {
                let challenge = state.challenge();
                ChallengeSummary {
                    id: challenge.id.clone(),
                    title: challenge.title.clone(),
                    status: challenge.status,
                    submitted: state.is_submitted(),
                    expired: challenge.is_expired(now),
                }
            }),
            quiz: self.quiz.as_ref().map(|quiz| QuizSummary {
                answered: quiz.answers().len(),
                correct: quiz.correct_count(),
                total: quiz.total(),
                finished: quiz.is_finished(),
            }),
            season: self.config.season,
        }
    }

    /// Live notifications, dropping expired ones first
    pub fn notifications(&mut self) -> Vec<Notification> {
        let now = self.now();
        self.notifier.expire(now);
        self.notifier.active(now).into_iter().cloned().collect()
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        self.notifier.dismiss(id)
    }
}
