use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{Holding, Transaction};
use crate::trading::TradeError;

/// A requested buy or sell, as received from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub symbol: String,
    pub quantity: i64,
    /// Execution price per share.
    pub price: Decimal,
}

impl TradeRequest {
    /// Validates the request shape and returns the canonical (trimmed,
    /// upper-cased) symbol.
    pub fn validate(&self) -> Result<String, TradeError> {
        let symbol = self.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(TradeError::InvalidTrade("symbol is required".to_string()));
        }
        if self.quantity < 1 {
            return Err(TradeError::InvalidTrade(
                "quantity must be at least 1".to_string(),
            ));
        }
        if self.price <= Decimal::ZERO {
            return Err(TradeError::InvalidTrade(
                "price must be a positive number".to_string(),
            ));
        }
        Ok(symbol)
    }

    /// Total value of the trade at the execution price.
    pub fn total_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// Result of a successful buy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyOutcome {
    pub holding: Holding,
    pub transaction: Transaction,
    /// Derived trading balance after the purchase.
    pub available_balance: Decimal,
}

/// Result of a successful sell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellOutcome {
    /// `None` when the sell closed the position.
    pub holding: Option<Holding>,
    pub transaction: Transaction,
    /// Derived trading balance after the sale.
    pub available_balance: Decimal,
    /// Realized against the average cost basis before the sale.
    pub profit_loss: Decimal,
}
