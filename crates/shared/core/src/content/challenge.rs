use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Active,
    #[default]
    Inactive,
    Closed,
}

/// The weekly real-case challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub brief: String,
    /// Possible reactions the player can pick from
    pub actions: Vec<String>,
    #[serde(default)]
    pub status: ChallengeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
}

impl Challenge {
    pub fn is_active(&self) -> bool {
        self.status == ChallengeStatus::Active
    }

    /// A challenge without deadline never expires
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.deadline.is_some_and(|deadline| deadline < now)
    }

    pub fn has_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}
