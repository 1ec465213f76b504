use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;

use papertrade_market_data::{CompanyProfile, NewsArticle, Quote, SymbolSearchResult};

use crate::Result;

/// The quote collaborator contract consumed by portfolio valuation.
///
/// Both methods are infallible by design: a provider failure degrades to "no
/// quote" so a flaky upstream can never take down the portfolio view.
#[async_trait]
pub trait QuoteProviderTrait: Send + Sync {
    /// Latest price for a symbol, or `None` when unavailable.
    async fn get_quote(&self, symbol: &str) -> Option<Decimal>;

    /// Latest prices for a set of symbols; failed symbols are omitted.
    async fn get_quotes(&self, symbols: &[String]) -> HashMap<String, Decimal>;
}

/// Trait for the explicit market endpoints (search, detail, news), where
/// provider failures surface to the caller instead of degrading.
#[async_trait]
pub trait MarketQueryServiceTrait: Send + Sync {
    async fn search_symbols(&self, query: &str) -> Result<Vec<SymbolSearchResult>>;

    async fn get_quote_detail(&self, symbol: &str) -> Result<Quote>;

    async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile>;

    async fn get_company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>>;
}
