//! Static fixture data served by the mock API
//!
//! The default fixtures are compiled into the crate. A directory holding the
//! same six files can replace them at startup:
//!
//! ```text
//! session.json  leaderboard.json  assets.json
//! portfolio.json  challenge.json  messages.json
//! ```

use athlete_core::{
    Asset, Challenge, LeaderboardEntry, LeaderboardKind, Message, Portfolio, Session,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FixtureError, Result};

const SESSION_FILE: &str = "session.json";
const LEADERBOARD_FILE: &str = "leaderboard.json";
const ASSETS_FILE: &str = "assets.json";
const PORTFOLIO_FILE: &str = "portfolio.json";
const CHALLENGE_FILE: &str = "challenge.json";
const MESSAGES_FILE: &str = "messages.json";

/// Messages are wrapped in an object in the fixture file
#[derive(Debug, Deserialize)]
struct MessagesFile {
    #[serde(default)]
    messages: Vec<Message>,
}

/// All canned data the mock API can return
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub session: Session,
    /// Rankings keyed by leaderboard name ("week", "overall")
    pub leaderboards: HashMap<String, Vec<LeaderboardEntry>>,
    pub assets: Vec<Asset>,
    pub portfolio: Portfolio,
    pub challenge: Challenge,
    pub messages: Vec<Message>,
}

impl Fixtures {
    /// Fixtures bundled with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_sources(embedded_source)
    }

    /// Load the six fixture files from a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::from_sources(|file| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|e| FixtureError::Io {
                path: path.display().to_string(),
                error: e.to_string(),
            })
        })
    }

    fn from_sources<F>(mut read: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> Result<String>,
    {
        let messages: MessagesFile = parse(MESSAGES_FILE, &read(MESSAGES_FILE)?)?;

        Ok(Self {
            session: parse(SESSION_FILE, &read(SESSION_FILE)?)?,
            leaderboards: parse(LEADERBOARD_FILE, &read(LEADERBOARD_FILE)?)?,
            assets: parse(ASSETS_FILE, &read(ASSETS_FILE)?)?,
            portfolio: parse(PORTFOLIO_FILE, &read(PORTFOLIO_FILE)?)?,
            challenge: parse(CHALLENGE_FILE, &read(CHALLENGE_FILE)?)?,
            messages: messages.messages,
        })
    }

    /// Ranking for `kind`, empty when the fixture has none
    pub fn leaderboard(&self, kind: LeaderboardKind) -> Vec<LeaderboardEntry> {
        self.leaderboards
            .get(kind.as_str())
            .cloned()
            .unwrap_or_default()
    }

    pub fn asset(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }
}

fn embedded_source(file: &'static str) -> Result<String> {
    let content = match file {
        SESSION_FILE => include_str!("../data/session.json"),
        LEADERBOARD_FILE => include_str!("../data/leaderboard.json"),
        ASSETS_FILE => include_str!("../data/assets.json"),
        PORTFOLIO_FILE => include_str!("../data/portfolio.json"),
        CHALLENGE_FILE => include_str!("../data/challenge.json"),
        MESSAGES_FILE => include_str!("../data/messages.json"),
        other => {
            return Err(FixtureError::Io {
                path: other.to_string(),
                error: "no embedded fixture with this name".to_string(),
            });
        }
    };
    Ok(content.to_string())
}

fn parse<T: DeserializeOwned>(file: &'static str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| FixtureError::Parse {
        file,
        error: e.to_string(),
    })
}
