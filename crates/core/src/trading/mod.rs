pub(crate) mod trading_errors;
pub(crate) mod trading_model;
pub(crate) mod trading_service;
pub(crate) mod trading_traits;

#[cfg(test)]
mod trading_service_tests;

pub use trading_errors::TradeError;
pub use trading_model::{BuyOutcome, SellOutcome, TradeRequest};
pub use trading_service::TradingService;
pub use trading_traits::TradingServiceTrait;
