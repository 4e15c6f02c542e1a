//! Game errors

use athlete_mock_api::FixtureError;
use athlete_portfolio::TradeError;
use athlete_ports::NetworkError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Trade error: {0}")]
    Trade(#[from] TradeError),

    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    // Session
    #[error("Session code is required")]
    SessionCodeRequired,

    #[error("Nickname is required")]
    NicknameRequired,

    #[error("No session joined")]
    NotJoined,

    // Quiz
    #[error("Option {option:?} does not belong to question {question_id}")]
    UnknownOption { question_id: String, option: String },

    #[error("Question {0} already answered")]
    AlreadyAnswered(String),

    #[error("Question {0} not answered yet")]
    AnswerRequired(String),

    #[error("Quiz already finished")]
    QuizFinished,

    // Challenge
    #[error("No challenge loaded")]
    ChallengeNotLoaded,

    #[error("No action selected")]
    ActionRequired,

    #[error("Unknown challenge action: {0}")]
    UnknownAction(String),

    #[error("Challenge {0} has expired")]
    ChallengeExpired(String),

    #[error("Challenge {0} is not active")]
    ChallengeInactive(String),

    #[error("Challenge {0} already submitted")]
    ChallengeAlreadySubmitted(String),

    // Leaderboard
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Leaderboard is locked until an email is submitted")]
    LeaderboardLocked,
}

impl GameError {
    /// Injected network failure; the same action may succeed when retried
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GameError::Network(_) | GameError::Trade(TradeError::Network(_))
        )
    }

    /// Text to show in a notification
    pub fn user_message(&self) -> String {
        match self {
            GameError::Network(e) => e.user_message().to_string(),
            GameError::Trade(e) => e.user_message(),
            GameError::Fixture(_) | GameError::Config(_) => {
                "Something went wrong – please reload".to_string()
            }
            GameError::SessionCodeRequired => "Please enter a session code".to_string(),
            GameError::NicknameRequired => "Please enter a nickname".to_string(),
            GameError::NotJoined => "Please join a session first".to_string(),
            GameError::UnknownOption { .. } => "Please pick one of the options".to_string(),
            GameError::AlreadyAnswered(_) => "You already answered this question".to_string(),
            GameError::AnswerRequired(_) => "Please answer the question first".to_string(),
            GameError::QuizFinished => "The quiz is over".to_string(),
            GameError::ChallengeNotLoaded => "The challenge is not available".to_string(),
            GameError::ActionRequired | GameError::UnknownAction(_) => {
                "Please select an action".to_string()
            }
            GameError::ChallengeExpired(_) => "This challenge has expired".to_string(),
            GameError::ChallengeInactive(_) => "This challenge is not active".to_string(),
            GameError::ChallengeAlreadySubmitted(_) => {
                "You already submitted this challenge".to_string()
            }
            GameError::EmailRequired => "Please enter your email".to_string(),
            GameError::InvalidEmail(_) => "Please enter a valid email address".to_string(),
            GameError::LeaderboardLocked => {
                "Please enter your email to see the leaderboard".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
