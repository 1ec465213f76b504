//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, NewsArticle, Quote, SymbolSearchResult};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source. All
/// methods are fallible; graceful degradation (e.g. valuing a portfolio
/// without a live quote) is the caller's policy, not the provider's.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "FMP".
    ///
    /// Used for logging and diagnostics.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Search for symbols matching the query.
    ///
    /// Returns at most `limit` suggestions, best matches first.
    async fn search_symbols(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SymbolSearchResult>, MarketDataError>;

    /// Fetch the company profile for a symbol.
    async fn get_profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError>;

    /// Fetch recent news articles for a symbol, most recent first.
    async fn get_news(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, MarketDataError>;
}
