use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;

use papertrade_market_data::{
    CompanyProfile, MarketDataError, MarketDataProvider, NewsArticle, NullProvider, Quote,
    SymbolSearchResult,
};

use crate::quotes::{MarketQueryServiceTrait, QuoteProviderTrait, QuoteService};

// Provider stub that counts quote fetches and can be told to fail.
struct CountingProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingProvider {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }
}

#[async_trait]
impl MarketDataProvider for CountingProvider {
    fn id(&self) -> &'static str {
        "COUNTING"
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(MarketDataError::ProviderError("boom".to_string()));
        }
        Ok(Quote {
            symbol: symbol.to_string(),
            price: dec!(101.5),
            change_percent: None,
            timestamp: Utc::now(),
        })
    }

    async fn search_symbols(
        &self,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<SymbolSearchResult>, MarketDataError> {
        Ok(Vec::new())
    }

    async fn get_profile(&self, _symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        Err(MarketDataError::NotFound("no profile".to_string()))
    }

    async fn get_news(
        &self,
        _symbol: &str,
        _limit: usize,
    ) -> Result<Vec<NewsArticle>, MarketDataError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn second_fetch_within_ttl_is_served_from_cache() {
    let provider = Arc::new(CountingProvider::new(false));
    let service = QuoteService::new(provider.clone());

    assert_eq!(service.get_quote("aapl").await, Some(dec!(101.5)));
    assert_eq!(service.get_quote("AAPL").await, Some(dec!(101.5)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn expired_cache_entries_are_refetched() {
    let provider = Arc::new(CountingProvider::new(false));
    let service = QuoteService::with_ttl(provider.clone(), Duration::ZERO);

    service.get_quote("AAPL").await;
    service.get_quote("AAPL").await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn provider_failure_degrades_to_none() {
    let service = QuoteService::new(Arc::new(CountingProvider::new(true)));
    assert_eq!(service.get_quote("AAPL").await, None);
}

#[tokio::test]
async fn get_quotes_dedupes_and_omits_failures() {
    let provider = Arc::new(CountingProvider::new(false));
    let service = QuoteService::new(provider.clone());

    let prices = service
        .get_quotes(&["AAPL".to_string(), "aapl".to_string(), "MSFT".to_string()])
        .await;

    assert_eq!(prices.len(), 2);
    assert_eq!(prices.get("AAPL"), Some(&dec!(101.5)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unconfigured_provider_yields_no_quotes() {
    let service = QuoteService::new(Arc::new(NullProvider));
    assert_eq!(service.get_quote("AAPL").await, None);
    assert!(service.get_quotes(&["AAPL".to_string()]).await.is_empty());
}

#[tokio::test]
async fn search_falls_back_to_static_list() {
    let service = QuoteService::new(Arc::new(NullProvider));

    let results = service.search_symbols("apple").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol, "AAPL");

    // Empty provider results also fall back.
    let service = QuoteService::new(Arc::new(CountingProvider::new(false)));
    let results = service.search_symbols("micro").await.unwrap();
    assert_eq!(results[0].symbol, "MSFT");
}

#[tokio::test]
async fn blank_search_query_is_rejected() {
    let service = QuoteService::new(Arc::new(NullProvider));
    assert!(service.search_symbols("   ").await.is_err());
}

#[tokio::test]
async fn profile_falls_back_for_well_known_tickers_only() {
    let service = QuoteService::new(Arc::new(CountingProvider::new(false)));

    let profile = service.get_company_profile("TSLA").await.unwrap();
    assert_eq!(profile.name, "Tesla, Inc.");

    assert!(service.get_company_profile("ZZZQ").await.is_err());
}
