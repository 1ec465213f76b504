pub(crate) mod wallet_errors;
pub(crate) mod wallet_model;
pub(crate) mod wallet_service;
pub(crate) mod wallet_traits;


pub use wallet_errors::WalletError;
pub use wallet_model::{
    CashTransaction, CashTransactionKind, CashTransactionStatus, CashWallet, WalletOverview,
    WalletStatus,
};
pub use wallet_service::{invested_capital, WalletService};
pub use wallet_traits::{CashWalletRepositoryTrait, WalletServiceTrait};
