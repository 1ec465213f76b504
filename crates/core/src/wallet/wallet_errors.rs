use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections for cash wallet operations.
#[derive(Debug, Error, PartialEq)]
pub enum WalletError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient cash balance: available {available}")]
    InsufficientCash { available: Decimal },

    #[error("Wallet is not active")]
    WalletInactive,
}
