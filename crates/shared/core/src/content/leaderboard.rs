use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which ranking to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardKind {
    /// Current week only
    #[default]
    Week,
    /// Whole season
    Overall,
}

impl LeaderboardKind {
    /// Key of this ranking in the leaderboard fixture
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardKind::Week => "week",
            LeaderboardKind::Overall => "overall",
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(LeaderboardKind::Week),
            "overall" => Ok(LeaderboardKind::Overall),
            other => Err(format!("unknown leaderboard: {}", other)),
        }
    }
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub score: i64,
    /// Rank movement since the last update; absent for new entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
}

impl LeaderboardEntry {
    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }

    /// Player level derived from the score: one level per 10 points, from 5
    pub fn level(&self) -> i64 {
        self.score.div_euclid(10) + 5
    }
}
