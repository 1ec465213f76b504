use chrono::Utc;
use log::{info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::ledger::LedgerRepositoryTrait;
use crate::portfolio::performance::performance_model::PortfolioSnapshot;
use crate::portfolio::performance::performance_traits::{
    PerformanceServiceTrait, SnapshotRepositoryTrait,
};
use crate::quotes::QuoteProviderTrait;
use crate::users::UserRepositoryTrait;
use crate::Result;

/// Daily portfolio-value snapshots across all users.
pub struct PerformanceService {
    ledger: Arc<dyn LedgerRepositoryTrait>,
    quotes: Arc<dyn QuoteProviderTrait>,
    snapshots: Arc<dyn SnapshotRepositoryTrait>,
    users: Arc<dyn UserRepositoryTrait>,
}

impl PerformanceService {
    pub fn new(
        ledger: Arc<dyn LedgerRepositoryTrait>,
        quotes: Arc<dyn QuoteProviderTrait>,
        snapshots: Arc<dyn SnapshotRepositoryTrait>,
        users: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            ledger,
            quotes,
            snapshots,
            users,
        }
    }
}

#[async_trait::async_trait]
impl PerformanceServiceTrait for PerformanceService {
    async fn calculate_portfolio_value(&self, user_id: &str) -> Result<Decimal> {
        let holdings = self.ledger.get_holdings(user_id)?;
        if holdings.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let symbols: Vec<String> = holdings.iter().map(|h| h.symbol.clone()).collect();
        let prices = self.quotes.get_quotes(&symbols).await;

        Ok(holdings
            .iter()
            .map(|h| {
                let price = prices.get(&h.symbol).copied().unwrap_or(h.average_cost);
                Decimal::from(h.quantity) * price
            })
            .sum())
    }

    async fn record_daily_snapshot(&self, user_id: &str) -> Result<PortfolioSnapshot> {
        let value = self.calculate_portfolio_value(user_id).await?;
        let now = Utc::now();
        self.snapshots.upsert_snapshot(PortfolioSnapshot::new(
            user_id,
            now.date_naive(),
            value,
            now,
        ))
    }

    async fn record_all_snapshots(&self) -> Result<usize> {
        let user_ids = self.users.list_user_ids()?;
        let mut written = 0;
        for user_id in &user_ids {
            match self.record_daily_snapshot(user_id).await {
                Ok(snapshot) => {
                    written += 1;
                    info!(
                        "saved snapshot for user {}: {}",
                        user_id, snapshot.portfolio_value
                    );
                }
                Err(e) => warn!("snapshot failed for user {}: {}", user_id, e),
            }
        }
        Ok(written)
    }

    fn get_performance_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>> {
        self.snapshots.get_history(user_id)
    }
}
