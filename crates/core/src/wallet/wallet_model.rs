use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The deposit/withdraw cash wallet.
///
/// Deliberately disconnected from the derived trading balance: cash movements
/// here do not change the simulated starting capital trades are checked
/// against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashWallet {
    pub id: String,
    pub user_id: String,
    pub balance: Decimal,
    pub currency: String,
    pub status: WalletStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CashWallet {
    /// An empty active USD wallet for a user who has none yet.
    pub fn new(user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            balance: Decimal::ZERO,
            currency: "USD".to_string(),
            status: WalletStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletStatus {
    Active,
    Suspended,
    Closed,
}

impl WalletStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletStatus::Active => "active",
            WalletStatus::Suspended => "suspended",
            WalletStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WalletStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(WalletStatus::Active),
            "suspended" => Ok(WalletStatus::Suspended),
            "closed" => Ok(WalletStatus::Closed),
            other => Err(format!("unknown wallet status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashTransactionKind {
    Deposit,
    Withdrawal,
}

impl CashTransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CashTransactionKind::Deposit => "deposit",
            CashTransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl FromStr for CashTransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(CashTransactionKind::Deposit),
            "withdrawal" => Ok(CashTransactionKind::Withdrawal),
            other => Err(format!("unknown cash transaction kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashTransactionStatus {
    Completed,
    Failed,
}

impl CashTransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CashTransactionStatus::Completed => "completed",
            CashTransactionStatus::Failed => "failed",
        }
    }
}

impl FromStr for CashTransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(CashTransactionStatus::Completed),
            "failed" => Ok(CashTransactionStatus::Failed),
            other => Err(format!("unknown cash transaction status: {}", other)),
        }
    }
}

/// Audit row for one cash movement, carrying the balance it left behind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashTransaction {
    pub id: String,
    pub user_id: String,
    pub kind: CashTransactionKind,
    pub amount: Decimal,
    pub status: CashTransactionStatus,
    pub balance_after: Decimal,
    pub created_at: DateTime<Utc>,
}

impl CashTransaction {
    pub fn completed(
        user_id: &str,
        kind: CashTransactionKind,
        amount: Decimal,
        balance_after: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind,
            amount,
            status: CashTransactionStatus::Completed,
            balance_after,
            created_at,
        }
    }
}

/// Combined balance view returned to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOverview {
    /// Simulated starting capital.
    pub base_balance: Decimal,
    /// Capital committed to open holdings.
    pub invested: Decimal,
    /// `base_balance - invested`; what buys are checked against.
    pub trading_balance: Decimal,
    /// Cash wallet balance (separate ledger, not spendable on trades).
    pub cash_balance: Decimal,
    pub currency: String,
}
