use rust_decimal::Decimal;
use thiserror::Error;

/// Business-rule rejections for buy/sell execution.
///
/// Each variant carries the structured data the caller needs to render a
/// precise message; none of them is retried.
#[derive(Debug, Error, PartialEq)]
pub enum TradeError {
    #[error("Invalid trade: {0}")]
    InvalidTrade(String),

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Not enough quantity to sell: owned {owned_quantity}")]
    InsufficientQuantity { owned_quantity: i64 },

    #[error("No open position for {0}")]
    NoSuchPosition(String),
}
