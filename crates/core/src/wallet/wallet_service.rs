use chrono::Utc;
use dashmap::DashMap;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::constants::BASE_WALLET_BALANCE;
use crate::ledger::{Holding, LedgerRepositoryTrait};
use crate::wallet::wallet_errors::WalletError;
use crate::wallet::wallet_model::{
    CashTransaction, CashTransactionKind, CashWallet, WalletOverview, WalletStatus,
};
use crate::wallet::wallet_traits::{CashWalletRepositoryTrait, WalletServiceTrait};
use crate::Result;

/// Capital committed to open holdings.
///
/// The buy precondition and `get_trading_balance` MUST share this formula;
/// computing it two ways is how derived balances drift.
pub fn invested_capital(holdings: &[Holding]) -> Decimal {
    holdings.iter().map(Holding::cost_basis).sum()
}

/// Wallet operations: the derived trading balance plus the separate cash
/// wallet ledger.
pub struct WalletService {
    ledger: Arc<dyn LedgerRepositoryTrait>,
    cash_repository: Arc<dyn CashWalletRepositoryTrait>,
    cash_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl WalletService {
    pub fn new(
        ledger: Arc<dyn LedgerRepositoryTrait>,
        cash_repository: Arc<dyn CashWalletRepositoryTrait>,
    ) -> Self {
        Self {
            ledger,
            cash_repository,
            cash_locks: DashMap::new(),
        }
    }

    fn cash_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.cash_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn active_wallet(&self, user_id: &str) -> Result<CashWallet> {
        let wallet = self.get_cash_wallet(user_id)?;
        if wallet.status != WalletStatus::Active {
            return Err(WalletError::WalletInactive.into());
        }
        Ok(wallet)
    }
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(WalletError::InvalidAmount("amount must be positive".to_string()).into());
    }
    Ok(())
}

#[async_trait::async_trait]
impl WalletServiceTrait for WalletService {
    fn get_trading_balance(&self, user_id: &str) -> Result<Decimal> {
        let holdings = self.ledger.get_holdings(user_id)?;
        Ok(BASE_WALLET_BALANCE - invested_capital(&holdings))
    }

    fn get_overview(&self, user_id: &str) -> Result<WalletOverview> {
        let holdings = self.ledger.get_holdings(user_id)?;
        let invested = invested_capital(&holdings);
        let cash = self.get_cash_wallet(user_id)?;
        Ok(WalletOverview {
            base_balance: BASE_WALLET_BALANCE,
            invested,
            trading_balance: BASE_WALLET_BALANCE - invested,
            cash_balance: cash.balance,
            currency: cash.currency,
        })
    }

    fn get_cash_wallet(&self, user_id: &str) -> Result<CashWallet> {
        if let Some(wallet) = self.cash_repository.find_wallet(user_id)? {
            return Ok(wallet);
        }
        debug!("creating cash wallet for user {}", user_id);
        self.cash_repository
            .create_wallet(CashWallet::new(user_id, Utc::now()))
    }

    async fn deposit(&self, user_id: &str, amount: Decimal) -> Result<CashTransaction> {
        validate_amount(amount)?;
        let lock = self.cash_lock(user_id);
        let _guard = lock.lock().await;

        let mut wallet = self.active_wallet(user_id)?;
        let now = Utc::now();
        wallet.balance += amount;
        wallet.updated_at = now;

        let transaction = CashTransaction::completed(
            user_id,
            CashTransactionKind::Deposit,
            amount,
            wallet.balance,
            now,
        );
        self.cash_repository
            .apply_cash_transaction(&wallet, &transaction)?;
        Ok(transaction)
    }

    async fn withdraw(&self, user_id: &str, amount: Decimal) -> Result<CashTransaction> {
        validate_amount(amount)?;
        let lock = self.cash_lock(user_id);
        let _guard = lock.lock().await;

        let mut wallet = self.active_wallet(user_id)?;
        if amount > wallet.balance {
            return Err(WalletError::InsufficientCash {
                available: wallet.balance,
            }
            .into());
        }
        let now = Utc::now();
        wallet.balance -= amount;
        wallet.updated_at = now;

        let transaction = CashTransaction::completed(
            user_id,
            CashTransactionKind::Withdrawal,
            amount,
            wallet.balance,
            now,
        );
        self.cash_repository
            .apply_cash_transaction(&wallet, &transaction)?;
        Ok(transaction)
    }

    fn list_cash_transactions(&self, user_id: &str) -> Result<Vec<CashTransaction>> {
        self.cash_repository.list_cash_transactions(user_id)
    }
}
