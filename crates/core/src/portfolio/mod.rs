pub mod performance;

pub(crate) mod portfolio_errors;
pub(crate) mod portfolio_model;
pub(crate) mod portfolio_service;
pub(crate) mod portfolio_traits;

#[cfg(test)]
mod portfolio_service_tests;

pub use portfolio_errors::PortfolioError;
pub use portfolio_model::{GainLoss, PortfolioSummary, PositionValuation};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
