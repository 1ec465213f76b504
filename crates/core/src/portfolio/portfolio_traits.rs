use async_trait::async_trait;

use crate::portfolio::portfolio_model::{PortfolioSummary, PositionValuation};
use crate::Result;

/// Trait defining the contract for portfolio valuation queries.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Value every open holding against the latest quotes and aggregate.
    ///
    /// Never fails on missing quotes; affected holdings fall back to cost
    /// basis with `price_stale` set. An empty portfolio yields zeros.
    async fn get_portfolio(&self, user_id: &str) -> Result<PortfolioSummary>;

    /// Value a single open position.
    async fn get_position(&self, user_id: &str, symbol: &str) -> Result<PositionValuation>;
}
