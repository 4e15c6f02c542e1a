use serde::{Deserialize, Serialize};

/// Plain acknowledgement of a submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Acknowledgement of a quiz answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerAck {
    pub success: bool,
    pub correct: bool,
}

/// Acknowledgement of a simulated trade execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeAck {
    pub success: bool,
    pub trade_id: String,
}
