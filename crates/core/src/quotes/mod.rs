pub(crate) mod quotes_constants;
pub(crate) mod quotes_service;
pub(crate) mod quotes_traits;

#[cfg(test)]
mod quotes_service_tests;

pub use quotes_constants::{NEWS_LIMIT, QUOTE_CACHE_TTL, SEARCH_LIMIT};
pub use quotes_service::QuoteService;
pub use quotes_traits::{MarketQueryServiceTrait, QuoteProviderTrait};

// Re-export the wire models market endpoints return
pub use papertrade_market_data::{CompanyProfile, NewsArticle, Quote, SymbolSearchResult};
