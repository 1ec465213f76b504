use diesel::prelude::*;
use std::sync::Arc;

use papertrade_core::portfolio::performance::{PortfolioSnapshot, SnapshotRepositoryTrait};
use papertrade_core::Result;

use super::model::PortfolioSnapshotDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::portfolio_snapshots;

/// Repository for daily portfolio snapshots.
pub struct SnapshotRepository {
    pool: Arc<DbPool>,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl SnapshotRepositoryTrait for SnapshotRepository {
    fn upsert_snapshot(&self, snapshot: PortfolioSnapshot) -> Result<PortfolioSnapshot> {
        let mut conn = get_connection(&self.pool)?;

        // The id is "user_YYYY-MM-DD", so replace-by-key makes the daily
        // sweep idempotent.
        diesel::replace_into(portfolio_snapshots::table)
            .values(PortfolioSnapshotDB::from(&snapshot))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(snapshot)
    }

    fn get_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let snapshots_db = portfolio_snapshots::table
            .filter(portfolio_snapshots::user_id.eq(user_id))
            .select(PortfolioSnapshotDB::as_select())
            .order(portfolio_snapshots::snapshot_date.asc())
            .load::<PortfolioSnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;

        snapshots_db
            .into_iter()
            .map(|db| PortfolioSnapshot::try_from(db).map_err(Into::into))
            .collect()
    }
}
