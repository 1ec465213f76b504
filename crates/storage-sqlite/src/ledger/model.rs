use diesel::prelude::*;
use std::str::FromStr;

use papertrade_core::ledger::{Holding, Transaction, TransactionSide};

use crate::errors::StorageError;
use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for holdings.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub quantity: i64,
    pub average_cost: String,
    pub purchase_date: String,
}

impl From<&Holding> for HoldingDB {
    fn from(holding: &Holding) -> Self {
        Self {
            id: holding.id.clone(),
            user_id: holding.user_id.clone(),
            symbol: holding.symbol.clone(),
            quantity: holding.quantity,
            average_cost: holding.average_cost.to_string(),
            purchase_date: format_datetime(&holding.purchase_date),
        }
    }
}

impl TryFrom<HoldingDB> for Holding {
    type Error = StorageError;

    fn try_from(db: HoldingDB) -> Result<Self, Self::Error> {
        Ok(Holding {
            average_cost: parse_decimal(&db.average_cost, "holdings.average_cost")?,
            purchase_date: parse_datetime(&db.purchase_date, "holdings.purchase_date")?,
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            quantity: db.quantity,
        })
    }
}

/// Database model for ledger transactions.
#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub side: String,
    pub quantity: i64,
    pub price: String,
    pub transaction_date: String,
    pub profit_loss: Option<String>,
}

impl From<&Transaction> for TransactionDB {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            user_id: tx.user_id.clone(),
            symbol: tx.symbol.clone(),
            side: tx.side.as_str().to_string(),
            quantity: tx.quantity,
            price: tx.price.to_string(),
            transaction_date: format_datetime(&tx.transaction_date),
            profit_loss: tx.profit_loss.map(|pl| pl.to_string()),
        }
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        Ok(Transaction {
            side: TransactionSide::from_str(&db.side).map_err(StorageError::Decode)?,
            price: parse_decimal(&db.price, "transactions.price")?,
            transaction_date: parse_datetime(&db.transaction_date, "transactions.transaction_date")?,
            profit_loss: db
                .profit_loss
                .as_deref()
                .map(|pl| parse_decimal(pl, "transactions.profit_loss"))
                .transpose()?,
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            quantity: db.quantity,
        })
    }
}
