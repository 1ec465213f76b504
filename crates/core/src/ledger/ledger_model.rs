use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// An open position: one per (user, symbol) while any shares are held.
///
/// `average_cost` is the weighted-average cost basis per share, recomputed on
/// every additional buy. The row is deleted outright when a sell brings
/// `quantity` to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub user_id: String,
    /// Upper-cased ticker, unique per user.
    pub symbol: String,
    pub quantity: i64,
    pub average_cost: Decimal,
    /// Timestamp of the most recent contributing buy (overwritten, not
    /// historical).
    pub purchase_date: DateTime<Utc>,
}

impl Holding {
    pub fn new(
        user_id: &str,
        symbol: &str,
        quantity: i64,
        average_cost: Decimal,
        purchase_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            symbol: symbol.to_string(),
            quantity,
            average_cost,
            purchase_date,
        }
    }

    /// Capital currently committed to this position.
    pub fn cost_basis(&self) -> Decimal {
        Decimal::from(self.quantity) * self.average_cost
    }
}

/// Which side of the book a ledger transaction sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSide {
    Buy,
    Sell,
}

impl TransactionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionSide::Buy => "buy",
            TransactionSide::Sell => "sell",
        }
    }
}

impl fmt::Display for TransactionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TransactionSide::Buy),
            "sell" => Ok(TransactionSide::Sell),
            other => Err(format!("unknown transaction side: {}", other)),
        }
    }
}

/// Immutable record of one executed buy or sell.
///
/// Appended on every trade, never mutated or deleted afterwards. `price` is
/// the execution price per share, not the post-trade average.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub side: TransactionSide,
    pub quantity: i64,
    pub price: Decimal,
    pub transaction_date: DateTime<Utc>,
    /// Sells only: `(sell_price - average_cost_before_sale) * quantity`.
    pub profit_loss: Option<Decimal>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: &str,
        symbol: &str,
        side: TransactionSide,
        quantity: i64,
        price: Decimal,
        transaction_date: DateTime<Utc>,
        profit_loss: Option<Decimal>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            symbol: symbol.to_string(),
            side,
            quantity,
            price,
            transaction_date,
            profit_loss,
        }
    }
}

/// The holding mutation carried alongside a ledger transaction.
///
/// Passed to `LedgerRepositoryTrait::record_trade` so the storage layer can
/// persist the position change and the transaction as one atomic write.
#[derive(Debug, Clone)]
pub enum PositionUpdate {
    /// Create or replace the holding row for (user, symbol).
    Upsert(Holding),
    /// Remove the holding entirely (position closed).
    Close { holding_id: String },
}
