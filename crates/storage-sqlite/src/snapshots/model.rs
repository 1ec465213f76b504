use diesel::prelude::*;

use papertrade_core::portfolio::performance::PortfolioSnapshot;

use crate::errors::StorageError;
use crate::utils::{format_date, format_datetime, parse_date, parse_datetime, parse_decimal};

/// Database model for daily portfolio snapshots.
#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolio_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioSnapshotDB {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: String,
    pub portfolio_value: String,
    pub calculated_at: String,
}

impl From<&PortfolioSnapshot> for PortfolioSnapshotDB {
    fn from(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            id: snapshot.id.clone(),
            user_id: snapshot.user_id.clone(),
            snapshot_date: format_date(&snapshot.snapshot_date),
            portfolio_value: snapshot.portfolio_value.to_string(),
            calculated_at: format_datetime(&snapshot.calculated_at),
        }
    }
}

impl TryFrom<PortfolioSnapshotDB> for PortfolioSnapshot {
    type Error = StorageError;

    fn try_from(db: PortfolioSnapshotDB) -> Result<Self, Self::Error> {
        Ok(PortfolioSnapshot {
            snapshot_date: parse_date(&db.snapshot_date, "portfolio_snapshots.snapshot_date")?,
            portfolio_value: parse_decimal(
                &db.portfolio_value,
                "portfolio_snapshots.portfolio_value",
            )?,
            calculated_at: parse_datetime(
                &db.calculated_at,
                "portfolio_snapshots.calculated_at",
            )?,
            id: db.id,
            user_id: db.user_id,
        })
    }
}
