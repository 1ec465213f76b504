use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::BASE_WALLET_BALANCE;
use crate::errors::Error;
use crate::ledger::{Holding, LedgerRepositoryTrait, PositionUpdate, Transaction};
use crate::trading::{TradeError, TradeRequest, TradingService, TradingServiceTrait};
use crate::Result;

// --- Mock ledger repository ---
//
// Applies `record_trade` to in-memory state so tests can assert on the
// resulting holdings and the append-only transaction log.
#[derive(Default)]
struct MockLedgerRepository {
    holdings: Mutex<Vec<Holding>>,
    transactions: Mutex<Vec<Transaction>>,
    fail_writes: Mutex<bool>,
}

impl MockLedgerRepository {
    fn holdings_snapshot(&self) -> Vec<Holding> {
        self.holdings.lock().unwrap().clone()
    }

    fn transactions_snapshot(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }
}

impl LedgerRepositoryTrait for MockLedgerRepository {
    fn find_holding(&self, user_id: &str, symbol: &str) -> Result<Option<Holding>> {
        Ok(self
            .holdings
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.user_id == user_id && h.symbol == symbol)
            .cloned())
    }

    fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>> {
        Ok(self
            .holdings
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    fn record_trade(&self, update: PositionUpdate, transaction: &Transaction) -> Result<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(Error::Database(crate::errors::DatabaseError::QueryFailed(
                "simulated write failure".to_string(),
            )));
        }
        let mut holdings = self.holdings.lock().unwrap();
        match update {
            PositionUpdate::Upsert(holding) => {
                holdings.retain(|h| h.id != holding.id);
                holdings.push(holding);
            }
            PositionUpdate::Close { holding_id } => {
                holdings.retain(|h| h.id != holding_id);
            }
        }
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    fn list_transactions(&self, user_id: &str, symbol: Option<&str>) -> Result<Vec<Transaction>> {
        let mut txs: Vec<Transaction> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && symbol.map_or(true, |s| t.symbol == s))
            .cloned()
            .collect();
        txs.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
        Ok(txs)
    }
}

fn service() -> (TradingService, Arc<MockLedgerRepository>) {
    let ledger = Arc::new(MockLedgerRepository::default());
    (TradingService::new(ledger.clone()), ledger)
}

fn buy(symbol: &str, quantity: i64, price: Decimal) -> TradeRequest {
    TradeRequest {
        symbol: symbol.to_string(),
        quantity,
        price,
    }
}

const USER: &str = "user-1";

#[tokio::test]
async fn buy_creates_new_holding_at_execution_price() {
    let (svc, ledger) = service();

    let outcome = svc.execute_buy(USER, buy("aapl", 10, dec!(5))).await.unwrap();

    assert_eq!(outcome.holding.symbol, "AAPL");
    assert_eq!(outcome.holding.quantity, 10);
    assert_eq!(outcome.holding.average_cost, dec!(5));
    assert_eq!(outcome.available_balance, dec!(9950));
    assert_eq!(outcome.transaction.price, dec!(5));
    assert!(outcome.transaction.profit_loss.is_none());
    assert_eq!(ledger.holdings_snapshot().len(), 1);
    assert_eq!(ledger.transactions_snapshot().len(), 1);
}

#[tokio::test]
async fn repeated_buys_merge_into_weighted_average() {
    let (svc, ledger) = service();

    svc.execute_buy(USER, buy("AAPL", 10, dec!(10))).await.unwrap();
    let outcome = svc.execute_buy(USER, buy("AAPL", 10, dec!(20))).await.unwrap();

    assert_eq!(outcome.holding.quantity, 20);
    assert_eq!(outcome.holding.average_cost, dec!(15));
    // One holding, two ledger entries at their execution prices.
    assert_eq!(ledger.holdings_snapshot().len(), 1);
    let txs = ledger.transactions_snapshot();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].price, dec!(10));
    assert_eq!(txs[1].price, dec!(20));
}

#[tokio::test]
async fn weighted_average_is_exact_over_many_partial_buys() {
    let (svc, _ledger) = service();

    // 3 @ 1.10 + 7 @ 2.30 + 5 @ 0.70 = total cost 22.90 over 15 shares.
    svc.execute_buy(USER, buy("AAPL", 3, dec!(1.10))).await.unwrap();
    svc.execute_buy(USER, buy("AAPL", 7, dec!(2.30))).await.unwrap();
    let outcome = svc.execute_buy(USER, buy("AAPL", 5, dec!(0.70))).await.unwrap();

    assert_eq!(outcome.holding.quantity, 15);
    assert_eq!(
        outcome.holding.average_cost,
        dec!(22.90) / Decimal::from(15)
    );
    assert_eq!(outcome.holding.cost_basis(), dec!(22.90));
}

#[tokio::test]
async fn buy_rejected_when_total_cost_exceeds_balance() {
    let (svc, ledger) = service();

    let err = svc
        .execute_buy(USER, buy("AAPL", 10, dec!(1001)))
        .await
        .unwrap_err();

    match err {
        Error::Trade(TradeError::InsufficientFunds {
            required,
            available,
        }) => {
            assert_eq!(required, dec!(10010));
            assert_eq!(available, BASE_WALLET_BALANCE);
        }
        other => panic!("expected InsufficientFunds, got {:?}", other),
    }
    assert!(ledger.holdings_snapshot().is_empty());
    assert!(ledger.transactions_snapshot().is_empty());
}

#[tokio::test]
async fn balance_check_accounts_for_capital_already_invested() {
    let (svc, _ledger) = service();

    svc.execute_buy(USER, buy("AAPL", 10, dec!(900))).await.unwrap();

    // 9000 invested, 1000 left; a 1001 purchase must fail.
    let err = svc
        .execute_buy(USER, buy("MSFT", 1, dec!(1001)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Trade(TradeError::InsufficientFunds { .. })
    ));

    let ok = svc.execute_buy(USER, buy("MSFT", 1, dec!(1000))).await.unwrap();
    assert_eq!(ok.available_balance, Decimal::ZERO);
}

#[tokio::test]
async fn partial_sell_keeps_average_and_reduces_quantity() {
    let (svc, _ledger) = service();

    svc.execute_buy(USER, buy("AAPL", 10, dec!(10))).await.unwrap();
    svc.execute_buy(USER, buy("AAPL", 10, dec!(20))).await.unwrap();

    let outcome = svc.execute_sell(USER, buy("AAPL", 5, dec!(25))).await.unwrap();

    assert_eq!(outcome.profit_loss, dec!(50));
    let remaining = outcome.holding.expect("position should stay open");
    assert_eq!(remaining.quantity, 15);
    assert_eq!(remaining.average_cost, dec!(15));
    assert_eq!(outcome.transaction.profit_loss, Some(dec!(50)));
}

#[tokio::test]
async fn full_sell_closes_the_position() {
    let (svc, ledger) = service();

    svc.execute_buy(USER, buy("AAPL", 10, dec!(10))).await.unwrap();
    let outcome = svc.execute_sell(USER, buy("AAPL", 10, dec!(12))).await.unwrap();

    assert!(outcome.holding.is_none());
    assert_eq!(outcome.profit_loss, dec!(20));
    assert!(ledger.find_holding(USER, "AAPL").unwrap().is_none());
    // Ledger history survives the close.
    assert_eq!(ledger.transactions_snapshot().len(), 2);
    // All capital released.
    assert_eq!(outcome.available_balance, BASE_WALLET_BALANCE);
}

#[tokio::test]
async fn sell_more_than_owned_is_rejected_without_mutation() {
    let (svc, ledger) = service();

    svc.execute_buy(USER, buy("AAPL", 5, dec!(10))).await.unwrap();
    let err = svc
        .execute_sell(USER, buy("AAPL", 6, dec!(10)))
        .await
        .unwrap_err();

    match err {
        Error::Trade(TradeError::InsufficientQuantity { owned_quantity }) => {
            assert_eq!(owned_quantity, 5)
        }
        other => panic!("expected InsufficientQuantity, got {:?}", other),
    }
    assert_eq!(ledger.find_holding(USER, "AAPL").unwrap().unwrap().quantity, 5);
    assert_eq!(ledger.transactions_snapshot().len(), 1);
}

#[tokio::test]
async fn sell_without_position_is_rejected() {
    let (svc, _ledger) = service();

    let err = svc
        .execute_sell(USER, buy("AAPL", 1, dec!(10)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Trade(TradeError::NoSuchPosition(ref s)) if s == "AAPL"
    ));
}

#[tokio::test]
async fn invalid_requests_are_rejected_up_front() {
    let (svc, ledger) = service();

    for request in [
        buy("   ", 1, dec!(10)),
        buy("AAPL", 0, dec!(10)),
        buy("AAPL", -3, dec!(10)),
        buy("AAPL", 1, Decimal::ZERO),
        buy("AAPL", 1, dec!(-1)),
    ] {
        let err = svc.execute_buy(USER, request).await.unwrap_err();
        assert!(matches!(err, Error::Trade(TradeError::InvalidTrade(_))));
    }
    assert!(ledger.transactions_snapshot().is_empty());
}

#[tokio::test]
async fn symbol_is_normalized_before_matching() {
    let (svc, _ledger) = service();

    svc.execute_buy(USER, buy("aapl ", 10, dec!(10))).await.unwrap();
    let outcome = svc.execute_buy(USER, buy(" AAPL", 10, dec!(20))).await.unwrap();

    assert_eq!(outcome.holding.symbol, "AAPL");
    assert_eq!(outcome.holding.quantity, 20);
}

#[tokio::test]
async fn storage_failure_propagates_as_database_error() {
    let (svc, ledger) = service();
    *ledger.fail_writes.lock().unwrap() = true;

    let err = svc.execute_buy(USER, buy("AAPL", 1, dec!(10))).await.unwrap_err();
    assert!(matches!(err, Error::Database(_)));
}

#[tokio::test]
async fn replaying_the_ledger_reconstructs_the_holding() {
    let (svc, ledger) = service();

    svc.execute_buy(USER, buy("AAPL", 10, dec!(10))).await.unwrap();
    svc.execute_buy(USER, buy("AAPL", 10, dec!(20))).await.unwrap();
    svc.execute_sell(USER, buy("AAPL", 5, dec!(25))).await.unwrap();

    // Replay oldest-first: quantity and weighted average must match the
    // holding row the engine maintained incrementally.
    let mut txs = ledger.list_transactions(USER, Some("AAPL")).unwrap();
    txs.reverse();
    let mut quantity = 0i64;
    let mut basis = Decimal::ZERO;
    for tx in &txs {
        match tx.side {
            crate::ledger::TransactionSide::Buy => {
                quantity += tx.quantity;
                basis += Decimal::from(tx.quantity) * tx.price;
            }
            crate::ledger::TransactionSide::Sell => {
                let avg = basis / Decimal::from(quantity);
                quantity -= tx.quantity;
                basis -= avg * Decimal::from(tx.quantity);
            }
        }
    }

    let holding = ledger.find_holding(USER, "AAPL").unwrap().unwrap();
    assert_eq!(holding.quantity, quantity);
    assert_eq!(holding.cost_basis(), basis);
}
