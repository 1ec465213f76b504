use crate::ledger::ledger_model::{Holding, PositionUpdate, Transaction};
use crate::Result;

/// Trait defining the contract for the trade ledger store: open holdings plus
/// the append-only transaction history.
///
/// `record_trade` is the only write path; implementations MUST apply the
/// position update and the transaction insert atomically so a crash between
/// the two cannot leave the ledger inconsistent with the holdings.
pub trait LedgerRepositoryTrait: Send + Sync {
    fn find_holding(&self, user_id: &str, symbol: &str) -> Result<Option<Holding>>;

    fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>>;

    /// Persist a position change and its ledger transaction in one storage
    /// transaction.
    fn record_trade(&self, update: PositionUpdate, transaction: &Transaction) -> Result<()>;

    /// Transactions for a user, most recent first, optionally filtered to one
    /// symbol.
    fn list_transactions(&self, user_id: &str, symbol: Option<&str>) -> Result<Vec<Transaction>>;
}
