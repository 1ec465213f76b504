use chrono::Utc;
use dashmap::DashMap;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::constants::BASE_WALLET_BALANCE;
use crate::ledger::{Holding, LedgerRepositoryTrait, PositionUpdate, Transaction, TransactionSide};
use crate::trading::trading_errors::TradeError;
use crate::trading::trading_model::{BuyOutcome, SellOutcome, TradeRequest};
use crate::trading::trading_traits::TradingServiceTrait;
use crate::wallet::invested_capital;
use crate::Result;

type PositionKey = (String, String);

/// Executes simulated trades against the ledger store.
///
/// Concurrent trades on the same (user, symbol) are serialized with a keyed
/// async mutex held across the whole read-compute-write cycle; the
/// weighted-average recomputation is not safe under lost updates. Reads
/// (balance, portfolio) never take these locks.
pub struct TradingService {
    ledger: Arc<dyn LedgerRepositoryTrait>,
    position_locks: DashMap<PositionKey, Arc<Mutex<()>>>,
}

impl TradingService {
    pub fn new(ledger: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self {
            ledger,
            position_locks: DashMap::new(),
        }
    }

    fn position_lock(&self, user_id: &str, symbol: &str) -> Arc<Mutex<()>> {
        self.position_locks
            .entry((user_id.to_string(), symbol.to_string()))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[async_trait::async_trait]
impl TradingServiceTrait for TradingService {
    async fn execute_buy(&self, user_id: &str, request: TradeRequest) -> Result<BuyOutcome> {
        let symbol = request.validate()?;
        let total_cost = request.total_value();

        let lock = self.position_lock(user_id, &symbol);
        let _guard = lock.lock().await;

        let holdings = self.ledger.get_holdings(user_id)?;
        let available = BASE_WALLET_BALANCE - invested_capital(&holdings);
        if total_cost > available {
            return Err(TradeError::InsufficientFunds {
                required: total_cost,
                available,
            }
            .into());
        }

        let now = Utc::now();
        let holding = match holdings.into_iter().find(|h| h.symbol == symbol) {
            Some(existing) => {
                // Merge into the weighted average; the ledger transaction
                // still records the execution price.
                let new_quantity = existing.quantity + request.quantity;
                let new_average =
                    (existing.cost_basis() + total_cost) / Decimal::from(new_quantity);
                Holding {
                    quantity: new_quantity,
                    average_cost: new_average,
                    purchase_date: now,
                    ..existing
                }
            }
            None => Holding::new(user_id, &symbol, request.quantity, request.price, now),
        };

        let transaction = Transaction::new(
            user_id,
            &symbol,
            TransactionSide::Buy,
            request.quantity,
            request.price,
            now,
            None,
        );

        self.ledger
            .record_trade(PositionUpdate::Upsert(holding.clone()), &transaction)?;

        debug!(
            "buy executed: user={} {}x{} @ {}",
            user_id, request.quantity, symbol, request.price
        );

        Ok(BuyOutcome {
            holding,
            transaction,
            available_balance: available - total_cost,
        })
    }

    async fn execute_sell(&self, user_id: &str, request: TradeRequest) -> Result<SellOutcome> {
        let symbol = request.validate()?;

        let lock = self.position_lock(user_id, &symbol);
        let _guard = lock.lock().await;

        let holdings = self.ledger.get_holdings(user_id)?;
        let invested_before = invested_capital(&holdings);
        let holding = holdings
            .into_iter()
            .find(|h| h.symbol == symbol)
            .ok_or_else(|| TradeError::NoSuchPosition(symbol.clone()))?;

        if holding.quantity < request.quantity {
            return Err(TradeError::InsufficientQuantity {
                owned_quantity: holding.quantity,
            }
            .into());
        }

        // Realized P&L is computed against the average cost basis before the
        // position is mutated.
        let profit_loss =
            (request.price - holding.average_cost) * Decimal::from(request.quantity);
        let released_basis = holding.average_cost * Decimal::from(request.quantity);

        let now = Utc::now();
        let (update, remaining) = if holding.quantity == request.quantity {
            (
                PositionUpdate::Close {
                    holding_id: holding.id.clone(),
                },
                None,
            )
        } else {
            // Remaining shares keep the prior average cost.
            let reduced = Holding {
                quantity: holding.quantity - request.quantity,
                ..holding
            };
            (PositionUpdate::Upsert(reduced.clone()), Some(reduced))
        };

        let transaction = Transaction::new(
            user_id,
            &symbol,
            TransactionSide::Sell,
            request.quantity,
            request.price,
            now,
            Some(profit_loss),
        );

        self.ledger.record_trade(update, &transaction)?;

        debug!(
            "sell executed: user={} {}x{} @ {} (pl {})",
            user_id, request.quantity, symbol, request.price, profit_loss
        );

        Ok(SellOutcome {
            holding: remaining,
            transaction,
            available_balance: BASE_WALLET_BALANCE - (invested_before - released_basis),
            profit_loss,
        })
    }
}
