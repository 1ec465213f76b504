use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::wallet::wallet_model::{CashTransaction, CashWallet, WalletOverview};
use crate::Result;

/// Trait defining the contract for cash wallet persistence.
pub trait CashWalletRepositoryTrait: Send + Sync {
    fn find_wallet(&self, user_id: &str) -> Result<Option<CashWallet>>;

    fn create_wallet(&self, wallet: CashWallet) -> Result<CashWallet>;

    /// Persist the updated wallet balance and its audit row in one storage
    /// transaction.
    fn apply_cash_transaction(
        &self,
        wallet: &CashWallet,
        transaction: &CashTransaction,
    ) -> Result<()>;

    /// Cash transactions for a user, most recent first.
    fn list_cash_transactions(&self, user_id: &str) -> Result<Vec<CashTransaction>>;
}

/// Trait defining the contract for wallet operations.
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    /// Derived trading balance: starting capital minus invested capital.
    fn get_trading_balance(&self, user_id: &str) -> Result<Decimal>;

    /// Combined trading + cash balance view.
    fn get_overview(&self, user_id: &str) -> Result<WalletOverview>;

    /// The user's cash wallet, created empty on first access.
    fn get_cash_wallet(&self, user_id: &str) -> Result<CashWallet>;

    async fn deposit(&self, user_id: &str, amount: Decimal) -> Result<CashTransaction>;

    async fn withdraw(&self, user_id: &str, amount: Decimal) -> Result<CashTransaction>;

    fn list_cash_transactions(&self, user_id: &str) -> Result<Vec<CashTransaction>>;
}
