use async_trait::async_trait;

use crate::trading::trading_model::{BuyOutcome, SellOutcome, TradeRequest};
use crate::Result;

/// Trait defining the contract for trade execution.
#[async_trait]
pub trait TradingServiceTrait: Send + Sync {
    /// Execute a buy: merge into the weighted-average position and append a
    /// buy transaction. Fails without mutating anything when the total cost
    /// exceeds the derived trading balance.
    async fn execute_buy(&self, user_id: &str, request: TradeRequest) -> Result<BuyOutcome>;

    /// Execute a sell: reduce or close the position and append a sell
    /// transaction carrying the realized profit/loss. Fails without mutating
    /// anything when no position exists or the owned quantity is too small.
    async fn execute_sell(&self, user_id: &str, request: TradeRequest) -> Result<SellOutcome>;
}
