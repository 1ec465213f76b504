use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// End-of-day portfolio value for one user, one row per day.
///
/// Written by the daily snapshot sweep; re-running the sweep on the same day
/// overwrites that day's value rather than appending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// "user-id_YYYY-MM-DD", stable across re-runs on the same day.
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub portfolio_value: Decimal,
    pub calculated_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    pub fn new(
        user_id: &str,
        snapshot_date: NaiveDate,
        portfolio_value: Decimal,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("{}_{}", user_id, snapshot_date.format("%Y-%m-%d")),
            user_id: user_id.to_string(),
            snapshot_date,
            portfolio_value,
            calculated_at,
        }
    }
}
