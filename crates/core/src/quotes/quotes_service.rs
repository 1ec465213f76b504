use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use papertrade_market_data::{
    CompanyProfile, MarketDataError, MarketDataProvider, NewsArticle, Quote, SymbolSearchResult,
};

use crate::errors::ValidationError;
use crate::quotes::quotes_constants::{FALLBACK_TICKERS, NEWS_LIMIT, QUOTE_CACHE_TTL, SEARCH_LIMIT};
use crate::quotes::quotes_traits::{MarketQueryServiceTrait, QuoteProviderTrait};
use crate::Result;

struct CachedPrice {
    price: Decimal,
    fetched_at: Instant,
}

/// Quote fetching over a single market data provider, with a TTL price cache.
///
/// Valuation callers go through [`QuoteProviderTrait`] and never see provider
/// errors; the explicit market endpoints go through
/// [`MarketQueryServiceTrait`] and do.
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
    cache: DashMap<String, CachedPrice>,
    ttl: Duration,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_ttl(provider, QUOTE_CACHE_TTL)
    }

    pub fn with_ttl(provider: Arc<dyn MarketDataProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            cache: DashMap::new(),
            ttl,
        }
    }

    fn cached_price(&self, symbol: &str) -> Option<Decimal> {
        let entry = self.cache.get(symbol)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.price)
        } else {
            None
        }
    }

    fn fallback_matches(query: &str) -> Vec<SymbolSearchResult> {
        let needle = query.to_lowercase();
        FALLBACK_TICKERS
            .iter()
            .filter(|(symbol, name)| {
                symbol.to_lowercase().contains(&needle) || name.to_lowercase().contains(&needle)
            })
            .take(SEARCH_LIMIT)
            .map(|(symbol, name)| SymbolSearchResult {
                symbol: symbol.to_string(),
                name: name.to_string(),
            })
            .collect()
    }

    fn fallback_profile(symbol: &str) -> Option<CompanyProfile> {
        FALLBACK_TICKERS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(s, name)| CompanyProfile {
                symbol: s.to_string(),
                name: name.to_string(),
                logo_url: None,
                description: None,
                price: None,
                change_percent: None,
                exchange: None,
            })
    }
}

#[async_trait::async_trait]
impl QuoteProviderTrait for QuoteService {
    async fn get_quote(&self, symbol: &str) -> Option<Decimal> {
        let symbol = symbol.to_uppercase();
        if let Some(price) = self.cached_price(&symbol) {
            return Some(price);
        }

        match self.provider.get_quote(&symbol).await {
            Ok(quote) => {
                self.cache.insert(
                    symbol,
                    CachedPrice {
                        price: quote.price,
                        fetched_at: Instant::now(),
                    },
                );
                Some(quote.price)
            }
            Err(MarketDataError::NotConfigured) => None,
            Err(e) => {
                warn!("quote fetch failed for {}: {}", symbol, e);
                None
            }
        }
    }

    async fn get_quotes(&self, symbols: &[String]) -> HashMap<String, Decimal> {
        let unique: HashSet<String> = symbols.iter().map(|s| s.to_uppercase()).collect();
        let fetches = unique.into_iter().map(|symbol| async move {
            let price = self.get_quote(&symbol).await;
            (symbol, price)
        });

        join_all(fetches)
            .await
            .into_iter()
            .filter_map(|(symbol, price)| price.map(|p| (symbol, p)))
            .collect()
    }
}

#[async_trait::async_trait]
impl MarketQueryServiceTrait for QuoteService {
    async fn search_symbols(&self, query: &str) -> Result<Vec<SymbolSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::InvalidInput("query is required".to_string()).into());
        }

        match self.provider.search_symbols(query, SEARCH_LIMIT).await {
            Ok(results) if !results.is_empty() => Ok(results),
            Ok(_) => {
                debug!("provider returned no matches for '{}', using fallback", query);
                Ok(Self::fallback_matches(query))
            }
            Err(MarketDataError::NotConfigured) => Ok(Self::fallback_matches(query)),
            Err(e) => {
                warn!("symbol search failed for '{}': {}", query, e);
                Ok(Self::fallback_matches(query))
            }
        }
    }

    async fn get_quote_detail(&self, symbol: &str) -> Result<Quote> {
        Ok(self.provider.get_quote(&symbol.to_uppercase()).await?)
    }

    async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let symbol = symbol.to_uppercase();
        match self.provider.get_profile(&symbol).await {
            Ok(profile) => Ok(profile),
            Err(MarketDataError::NotConfigured) | Err(MarketDataError::NotFound(_)) => {
                Self::fallback_profile(&symbol)
                    .ok_or_else(|| MarketDataError::NotFound(symbol).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>> {
        Ok(self
            .provider
            .get_news(&symbol.to_uppercase(), NEWS_LIMIT)
            .await?)
    }
}
