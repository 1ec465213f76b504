use diesel::prelude::*;
use std::sync::Arc;

use papertrade_core::ledger::{
    Holding, LedgerRepositoryTrait, PositionUpdate, Transaction,
};
use papertrade_core::Result;

use super::model::{HoldingDB, TransactionDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{holdings, transactions};

/// Repository for the trade ledger: holdings plus the append-only transaction
/// history.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn find_holding(&self, user_id: &str, symbol: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let holding_db = holdings::table
            .filter(holdings::user_id.eq(user_id))
            .filter(holdings::symbol.eq(symbol))
            .select(HoldingDB::as_select())
            .first::<HoldingDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        holding_db
            .map(|db| Holding::try_from(db).map_err(Into::into))
            .transpose()
    }

    fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let holdings_db = holdings::table
            .filter(holdings::user_id.eq(user_id))
            .select(HoldingDB::as_select())
            .order(holdings::symbol.asc())
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        holdings_db
            .into_iter()
            .map(|db| Holding::try_from(db).map_err(Into::into))
            .collect()
    }

    fn record_trade(&self, update: PositionUpdate, transaction: &Transaction) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        // The position change and the ledger entry are one logical write; a
        // crash between them must not be observable.
        conn.immediate_transaction::<_, StorageError, _>(|conn| {
            match update {
                PositionUpdate::Upsert(holding) => {
                    diesel::replace_into(holdings::table)
                        .values(HoldingDB::from(&holding))
                        .execute(conn)?;
                }
                PositionUpdate::Close { holding_id } => {
                    diesel::delete(holdings::table.find(holding_id)).execute(conn)?;
                }
            }

            diesel::insert_into(transactions::table)
                .values(TransactionDB::from(transaction))
                .execute(conn)?;

            Ok(())
        })
        .map_err(Into::into)
    }

    fn list_transactions(&self, user_id: &str, symbol: Option<&str>) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .select(TransactionDB::as_select())
            .order(transactions::transaction_date.desc())
            .into_boxed();
        if let Some(symbol) = symbol {
            query = query.filter(transactions::symbol.eq(symbol));
        }

        let transactions_db = query
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;

        transactions_db
            .into_iter()
            .map(|db| Transaction::try_from(db).map_err(Into::into))
            .collect()
    }
}
