//! Trade errors

use athlete_core::{Cash, Price, Quantity, Symbol};
use athlete_ports::NetworkError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(Quantity),

    #[error("Invalid price for {symbol}: {price}")]
    InvalidPrice { symbol: Symbol, price: Price },

    #[error("Insufficient cash: required={required}, available={available}")]
    InsufficientCash { required: Cash, available: Cash },

    #[error("Insufficient holdings of {symbol}: held={held}, requested={requested}")]
    InsufficientHoldings {
        symbol: Symbol,
        held: Quantity,
        requested: Quantity,
    },

    #[error("Unknown asset: {0}")]
    UnknownAsset(Symbol),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Trade desk is closed")]
    DeskClosed,
}

impl TradeError {
    /// Text to show in a notification
    pub fn user_message(&self) -> String {
        match self {
            TradeError::InvalidQuantity(_) => "Please enter a valid quantity".to_string(),
            TradeError::InvalidPrice { .. } | TradeError::UnknownAsset(_) => {
                "This asset cannot be traded right now".to_string()
            }
            TradeError::InsufficientCash { .. } => "Not enough cash".to_string(),
            TradeError::InsufficientHoldings { .. } => "Not enough holdings".to_string(),
            TradeError::Network(e) => e.user_message().to_string(),
            TradeError::DeskClosed => "Trading is unavailable – please reload".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TradeError>;
