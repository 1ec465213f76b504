pub(crate) mod ledger_model;
pub(crate) mod ledger_traits;

pub use ledger_model::{Holding, PositionUpdate, Transaction, TransactionSide};
pub use ledger_traits::LedgerRepositoryTrait;
