use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Symbol};

/// A tradeable asset listed on the market tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: Symbol,
    pub name: String,
    pub price: Price,
    /// Daily change in percent
    pub change: Decimal,
}

impl Asset {
    pub fn is_up(&self) -> bool {
        !self.change.is_sign_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_is_up() {
        let mut asset = Asset {
            symbol: "SAP".to_string(),
            name: "SAP SE".to_string(),
            price: dec!(182.4),
            change: dec!(0.8),
        };
        assert!(asset.is_up());

        asset.change = dec!(0);
        assert!(asset.is_up());

        asset.change = dec!(-2.1);
        assert!(!asset.is_up());
    }
}
