//! Provider used when no market data API key is configured.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, NewsArticle, Quote, SymbolSearchResult};
use crate::provider::MarketDataProvider;

/// A provider that reports itself as unconfigured on every call.
///
/// Lets the quote service fall back to cost basis and the search endpoint
/// fall back to its static ticker list without special-casing a missing key.
#[derive(Debug, Default)]
pub struct NullProvider;

#[async_trait]
impl MarketDataProvider for NullProvider {
    fn id(&self) -> &'static str {
        "NULL"
    }

    async fn get_quote(&self, _symbol: &str) -> Result<Quote, MarketDataError> {
        Err(MarketDataError::NotConfigured)
    }

    async fn search_symbols(
        &self,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<SymbolSearchResult>, MarketDataError> {
        Err(MarketDataError::NotConfigured)
    }

    async fn get_profile(&self, _symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        Err(MarketDataError::NotConfigured)
    }

    async fn get_news(
        &self,
        _symbol: &str,
        _limit: usize,
    ) -> Result<Vec<NewsArticle>, MarketDataError> {
        Err(MarketDataError::NotConfigured)
    }
}
