use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Scheduled,
}

/// A broadcast message of the messenger preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub title: String,
    /// Free-form category, e.g. "reminder" or "results"
    #[serde(rename = "type")]
    pub kind: String,
    pub status: MessageStatus,
    pub scheduled: Timestamp,
    pub preview: String,
}

impl Message {
    pub fn is_sent(&self) -> bool {
        self.status == MessageStatus::Sent
    }
}
