use diesel::prelude::*;
use std::sync::Arc;

use papertrade_core::wallet::{CashTransaction, CashWallet, CashWalletRepositoryTrait};
use papertrade_core::Result;

use super::model::{CashTransactionDB, CashWalletDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{cash_transactions, cash_wallets};

/// Repository for the cash wallet and its audit rows.
pub struct CashWalletRepository {
    pool: Arc<DbPool>,
}

impl CashWalletRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CashWalletRepositoryTrait for CashWalletRepository {
    fn find_wallet(&self, user_id: &str) -> Result<Option<CashWallet>> {
        let mut conn = get_connection(&self.pool)?;

        let wallet_db = cash_wallets::table
            .filter(cash_wallets::user_id.eq(user_id))
            .select(CashWalletDB::as_select())
            .first::<CashWalletDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        wallet_db
            .map(|db| CashWallet::try_from(db).map_err(Into::into))
            .transpose()
    }

    fn create_wallet(&self, wallet: CashWallet) -> Result<CashWallet> {
        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(cash_wallets::table)
            .values(CashWalletDB::from(&wallet))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(wallet)
    }

    fn apply_cash_transaction(
        &self,
        wallet: &CashWallet,
        transaction: &CashTransaction,
    ) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        // Balance update and audit row are one logical write.
        conn.immediate_transaction::<_, StorageError, _>(|conn| {
            diesel::update(cash_wallets::table.find(&wallet.id))
                .set(CashWalletDB::from(wallet))
                .execute(conn)?;

            diesel::insert_into(cash_transactions::table)
                .values(CashTransactionDB::from(transaction))
                .execute(conn)?;

            Ok(())
        })
        .map_err(Into::into)
    }

    fn list_cash_transactions(&self, user_id: &str) -> Result<Vec<CashTransaction>> {
        let mut conn = get_connection(&self.pool)?;

        let transactions_db = cash_transactions::table
            .filter(cash_transactions::user_id.eq(user_id))
            .select(CashTransactionDB::as_select())
            .order(cash_transactions::created_at.desc())
            .load::<CashTransactionDB>(&mut conn)
            .map_err(StorageError::from)?;

        transactions_db
            .into_iter()
            .map(|db| CashTransaction::try_from(db).map_err(Into::into))
            .collect()
    }
}
