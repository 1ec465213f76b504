use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::portfolio::performance::performance_model::PortfolioSnapshot;
use crate::Result;

/// Trait defining the contract for snapshot persistence.
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Insert or replace the snapshot for (user, date).
    fn upsert_snapshot(&self, snapshot: PortfolioSnapshot) -> Result<PortfolioSnapshot>;

    /// Snapshots for a user, date ascending, for charting.
    fn get_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>>;
}

/// Trait defining the contract for performance tracking.
#[async_trait]
pub trait PerformanceServiceTrait: Send + Sync {
    /// Current portfolio value: quantity x (quote, or cost basis when the
    /// quote is unavailable) over all open holdings.
    async fn calculate_portfolio_value(&self, user_id: &str) -> Result<Decimal>;

    /// Record today's snapshot for one user.
    async fn record_daily_snapshot(&self, user_id: &str) -> Result<PortfolioSnapshot>;

    /// Record today's snapshot for every user; per-user failures are logged
    /// and skipped. Returns the number of snapshots written.
    async fn record_all_snapshots(&self) -> Result<usize>;

    fn get_performance_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>>;
}
