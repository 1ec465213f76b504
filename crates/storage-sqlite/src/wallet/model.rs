use diesel::prelude::*;
use std::str::FromStr;

use papertrade_core::wallet::{
    CashTransaction, CashTransactionKind, CashTransactionStatus, CashWallet, WalletStatus,
};

use crate::errors::StorageError;
use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for cash wallets.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_wallets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashWalletDB {
    pub id: String,
    pub user_id: String,
    pub balance: String,
    pub currency: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&CashWallet> for CashWalletDB {
    fn from(wallet: &CashWallet) -> Self {
        Self {
            id: wallet.id.clone(),
            user_id: wallet.user_id.clone(),
            balance: wallet.balance.to_string(),
            currency: wallet.currency.clone(),
            status: wallet.status.as_str().to_string(),
            created_at: format_datetime(&wallet.created_at),
            updated_at: format_datetime(&wallet.updated_at),
        }
    }
}

impl TryFrom<CashWalletDB> for CashWallet {
    type Error = StorageError;

    fn try_from(db: CashWalletDB) -> Result<Self, Self::Error> {
        Ok(CashWallet {
            balance: parse_decimal(&db.balance, "cash_wallets.balance")?,
            status: WalletStatus::from_str(&db.status).map_err(StorageError::Decode)?,
            created_at: parse_datetime(&db.created_at, "cash_wallets.created_at")?,
            updated_at: parse_datetime(&db.updated_at, "cash_wallets.updated_at")?,
            id: db.id,
            user_id: db.user_id,
            currency: db.currency,
        })
    }
}

/// Database model for cash transactions.
#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashTransactionDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub amount: String,
    pub status: String,
    pub balance_after: String,
    pub created_at: String,
}

impl From<&CashTransaction> for CashTransactionDB {
    fn from(tx: &CashTransaction) -> Self {
        Self {
            id: tx.id.clone(),
            user_id: tx.user_id.clone(),
            kind: tx.kind.as_str().to_string(),
            amount: tx.amount.to_string(),
            status: tx.status.as_str().to_string(),
            balance_after: tx.balance_after.to_string(),
            created_at: format_datetime(&tx.created_at),
        }
    }
}

impl TryFrom<CashTransactionDB> for CashTransaction {
    type Error = StorageError;

    fn try_from(db: CashTransactionDB) -> Result<Self, Self::Error> {
        Ok(CashTransaction {
            kind: CashTransactionKind::from_str(&db.kind).map_err(StorageError::Decode)?,
            amount: parse_decimal(&db.amount, "cash_transactions.amount")?,
            status: CashTransactionStatus::from_str(&db.status).map_err(StorageError::Decode)?,
            balance_after: parse_decimal(&db.balance_after, "cash_transactions.balance_after")?,
            created_at: parse_datetime(&db.created_at, "cash_transactions.created_at")?,
            id: db.id,
            user_id: db.user_id,
        })
    }
}
