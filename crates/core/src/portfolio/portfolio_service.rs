use rust_decimal::Decimal;
use std::sync::Arc;

use crate::constants::BASE_WALLET_BALANCE;
use crate::ledger::{Holding, LedgerRepositoryTrait};
use crate::portfolio::portfolio_errors::PortfolioError;
use crate::portfolio::portfolio_model::{GainLoss, PortfolioSummary, PositionValuation};
use crate::portfolio::portfolio_traits::PortfolioServiceTrait;
use crate::quotes::QuoteProviderTrait;
use crate::wallet::invested_capital;
use crate::Result;

/// Read-side aggregation of holdings, live quotes and the trade ledger.
pub struct PortfolioService {
    ledger: Arc<dyn LedgerRepositoryTrait>,
    quotes: Arc<dyn QuoteProviderTrait>,
}

impl PortfolioService {
    pub fn new(ledger: Arc<dyn LedgerRepositoryTrait>, quotes: Arc<dyn QuoteProviderTrait>) -> Self {
        Self { ledger, quotes }
    }

    fn value_holding(holding: &Holding, quote: Option<Decimal>) -> PositionValuation {
        let invested = holding.cost_basis();
        // Fall back to cost basis when no live quote is available, but say so:
        // a stale price silently presented as live misstates real P&L.
        let (current_price, price_stale) = match quote {
            Some(price) => (price, false),
            None => (holding.average_cost, true),
        };
        let current_value = Decimal::from(holding.quantity) * current_price;

        PositionValuation {
            symbol: holding.symbol.clone(),
            quantity: holding.quantity,
            average_cost: holding.average_cost,
            invested,
            current_price,
            current_value,
            gain_loss: GainLoss::from_invested(invested, current_value),
            price_stale,
        }
    }
}

#[async_trait::async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio(&self, user_id: &str) -> Result<PortfolioSummary> {
        let holdings = self.ledger.get_holdings(user_id)?;
        let symbols: Vec<String> = holdings.iter().map(|h| h.symbol.clone()).collect();
        let prices = self.quotes.get_quotes(&symbols).await;

        let valuations: Vec<PositionValuation> = holdings
            .iter()
            .map(|h| Self::value_holding(h, prices.get(&h.symbol).copied()))
            .collect();

        let total_invested: Decimal = valuations.iter().map(|v| v.invested).sum();
        let total_current_value: Decimal = valuations.iter().map(|v| v.current_value).sum();

        Ok(PortfolioSummary {
            wallet_balance: BASE_WALLET_BALANCE - invested_capital(&holdings),
            total_invested,
            total_current_value,
            total_gain_loss: GainLoss::from_invested(total_invested, total_current_value),
            holdings: valuations,
            transactions: self.ledger.list_transactions(user_id, None)?,
        })
    }

    async fn get_position(&self, user_id: &str, symbol: &str) -> Result<PositionValuation> {
        let symbol = symbol.trim().to_uppercase();
        let holding = self
            .ledger
            .find_holding(user_id, &symbol)?
            .ok_or_else(|| PortfolioError::PositionNotFound(symbol.clone()))?;

        let quote = self.quotes.get_quote(&symbol).await;
        Ok(Self::value_holding(&holding, quote))
    }
}
