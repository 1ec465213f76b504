//! Papertrade Market Data Crate
//!
//! This crate provides provider-agnostic market data fetching for the
//! papertrade platform: latest quotes, symbol search, company profiles and
//! company news.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Domain Layer   |  (quote service, portfolio valuation)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Provider      |  (FMP, or Null when unconfigured)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  Quote / Search  |  (wire-agnostic models)
//! +------------------+
//! ```
//!
//! Providers implement [`MarketDataProvider`]; callers that must degrade
//! gracefully (portfolio valuation) treat every error as "no quote", while
//! explicit market endpoints surface [`MarketDataError`] to the caller.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CompanyProfile, NewsArticle, Quote, SymbolSearchResult};
pub use provider::{FmpProvider, MarketDataProvider, NullProvider};
