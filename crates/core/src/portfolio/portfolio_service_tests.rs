use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Error;
use crate::ledger::{
    Holding, LedgerRepositoryTrait, PositionUpdate, Transaction, TransactionSide,
};
use crate::portfolio::{PortfolioError, PortfolioService, PortfolioServiceTrait};
use crate::quotes::QuoteProviderTrait;
use crate::Result;

// --- Mock ledger ---
#[derive(Default)]
struct MockLedger {
    holdings: Mutex<Vec<Holding>>,
    transactions: Mutex<Vec<Transaction>>,
}

impl LedgerRepositoryTrait for MockLedger {
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

    fn record_trade(&self, _update: PositionUpdate, _transaction: &Transaction) -> Result<()> {
        unimplemented!()
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

// --- Stub quote provider with a fixed price table ---
struct StubQuotes {
    prices: HashMap<String, Decimal>,
}

impl StubQuotes {
    fn new(prices: &[(&str, Decimal)]) -> Self {
        Self {
            prices: prices
                .iter()
                .map(|(s, p)| (s.to_string(), *p))
                .collect(),
        }
    }
}

#[async_trait]
impl QuoteProviderTrait for StubQuotes {
    async fn get_quote(&self, symbol: &str) -> Option<Decimal> {
        self.prices.get(symbol).copied()
    }

    async fn get_quotes(&self, symbols: &[String]) -> HashMap<String, Decimal> {
        symbols
            .iter()
            .filter_map(|s| self.prices.get(s).map(|p| (s.clone(), *p)))
            .collect()
    }
}

const USER: &str = "user-1";

fn service(
    holdings: Vec<Holding>,
    transactions: Vec<Transaction>,
    prices: &[(&str, Decimal)],
) -> PortfolioService {
    let ledger = MockLedger::default();
    *ledger.holdings.lock().unwrap() = holdings;
    *ledger.transactions.lock().unwrap() = transactions;
    PortfolioService::new(Arc::new(ledger), Arc::new(StubQuotes::new(prices)))
}

fn holding(symbol: &str, quantity: i64, average_cost: Decimal) -> Holding {
    Holding::new(USER, symbol, quantity, average_cost, Utc::now())
}

#[tokio::test]
async fn empty_portfolio_returns_zeros_not_an_error() {
    let svc = service(Vec::new(), Vec::new(), &[]);

    let summary = svc.get_portfolio(USER).await.unwrap();
    assert_eq!(summary.total_invested, Decimal::ZERO);
    assert_eq!(summary.total_current_value, Decimal::ZERO);
    assert_eq!(summary.total_gain_loss.dollar, Decimal::ZERO);
    assert_eq!(summary.total_gain_loss.percent, Decimal::ZERO);
    assert!(summary.holdings.is_empty());
    assert!(summary.transactions.is_empty());
    assert_eq!(summary.wallet_balance, dec!(10000));
}

#[tokio::test]
async fn live_quotes_drive_current_value_and_gain_loss() {
    let svc = service(
        vec![holding("AAPL", 10, dec!(15))],
        Vec::new(),
        &[("AAPL", dec!(20))],
    );

    let summary = svc.get_portfolio(USER).await.unwrap();
    assert_eq!(summary.total_invested, dec!(150));
    assert_eq!(summary.total_current_value, dec!(200));
    assert_eq!(summary.total_gain_loss.dollar, dec!(50));
    // 50 / 150 * 100
    assert_eq!(
        summary.total_gain_loss.percent,
        dec!(50) / dec!(150) * dec!(100)
    );

    let position = &summary.holdings[0];
    assert!(!position.price_stale);
    assert_eq!(position.current_price, dec!(20));
}

#[tokio::test]
async fn missing_quote_falls_back_to_cost_basis_and_is_flagged_stale() {
    let svc = service(
        vec![
            holding("AAPL", 10, dec!(15)),
            holding("MSFT", 2, dec!(100)),
        ],
        Vec::new(),
        &[("AAPL", dec!(20))],
    );

    let summary = svc.get_portfolio(USER).await.unwrap();

    let msft = summary
        .holdings
        .iter()
        .find(|v| v.symbol == "MSFT")
        .unwrap();
    assert!(msft.price_stale);
    assert_eq!(msft.current_price, dec!(100));
    assert_eq!(msft.current_value, dec!(200));
    assert_eq!(msft.gain_loss.dollar, Decimal::ZERO);

    let aapl = summary
        .holdings
        .iter()
        .find(|v| v.symbol == "AAPL")
        .unwrap();
    assert!(!aapl.price_stale);

    // The stale symbol contributes its cost basis to the totals.
    assert_eq!(summary.total_invested, dec!(350));
    assert_eq!(summary.total_current_value, dec!(400));
}

#[tokio::test]
async fn wallet_balance_reflects_invested_capital() {
    let svc = service(
        vec![holding("AAPL", 10, dec!(5))],
        Vec::new(),
        &[("AAPL", dec!(500))],
    );

    let summary = svc.get_portfolio(USER).await.unwrap();
    // Balance derives from cost basis, not from the live valuation.
    assert_eq!(summary.wallet_balance, dec!(9950));
}

#[tokio::test]
async fn transactions_are_returned_most_recent_first() {
    let now = Utc::now();
    let older = Transaction::new(
        USER,
        "AAPL",
        TransactionSide::Buy,
        10,
        dec!(10),
        now - Duration::days(1),
        None,
    );
    let newer = Transaction::new(
        USER,
        "AAPL",
        TransactionSide::Sell,
        5,
        dec!(12),
        now,
        Some(dec!(10)),
    );

    let svc = service(Vec::new(), vec![older.clone(), newer.clone()], &[]);
    let summary = svc.get_portfolio(USER).await.unwrap();

    assert_eq!(summary.transactions.len(), 2);
    assert_eq!(summary.transactions[0].id, newer.id);
    assert_eq!(summary.transactions[1].id, older.id);
}

#[tokio::test]
async fn get_position_values_one_symbol() {
    let svc = service(
        vec![holding("AAPL", 10, dec!(15))],
        Vec::new(),
        &[("AAPL", dec!(20))],
    );

    let position = svc.get_position(USER, "aapl").await.unwrap();
    assert_eq!(position.symbol, "AAPL");
    assert_eq!(position.gain_loss.dollar, dec!(50));
}

#[tokio::test]
async fn get_position_for_unknown_symbol_is_not_found() {
    let svc = service(Vec::new(), Vec::new(), &[]);

    let err = svc.get_position(USER, "AAPL").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Portfolio(PortfolioError::PositionNotFound(ref s)) if s == "AAPL"
    ));
}
