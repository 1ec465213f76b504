//! Financial Modeling Prep market data provider.
//!
//! Endpoints used:
//! - `/quote/{symbol}` for latest prices
//! - `/search` for symbol autocomplete
//! - `/profile/{symbol}` for company profiles
//! - `/stock_news` for company news
//!
//! API documentation: https://site.financialmodelingprep.com/developer/docs

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use log::debug;
use reqwest::{Client, StatusCode};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, NewsArticle, Quote, SymbolSearchResult};
use crate::provider::MarketDataProvider;

const BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
const PROVIDER_ID: &str = "FMP";
const REQUEST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// API Response Structures
// ============================================================================

/// One element of the `/quote/{symbol}` response array.
#[derive(Debug, Deserialize)]
struct QuoteItem {
    symbol: String,
    price: Option<f64>,
    #[serde(rename = "changesPercentage")]
    changes_percentage: Option<f64>,
    /// Unix seconds.
    timestamp: Option<i64>,
}

/// One element of the `/search` response array.
#[derive(Debug, Deserialize)]
struct SearchItem {
    symbol: String,
    name: Option<String>,
}

/// One element of the `/profile/{symbol}` response array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileItem {
    symbol: String,
    company_name: Option<String>,
    image: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    changes_percentage: Option<f64>,
    exchange_short_name: Option<String>,
}

/// One element of the `/stock_news` response array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsItem {
    symbol: Option<String>,
    title: String,
    text: Option<String>,
    url: String,
    image: Option<String>,
    site: Option<String>,
    /// "YYYY-MM-DD HH:MM:SS"
    published_date: Option<String>,
}

// ============================================================================
// FmpProvider
// ============================================================================

/// Financial Modeling Prep market data provider.
///
/// The free tier is limited to 250 API calls per day; the quote service's
/// cache keeps the platform well under that for normal use.
pub struct FmpProvider {
    client: Client,
    api_key: String,
}

impl FmpProvider {
    /// Create a new FMP provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Perform a GET request and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MarketDataError> {
        let url = format!("{}{}", BASE_URL, path);
        debug!("FMP request: {}", path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(MarketDataError::RateLimitExceeded),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(MarketDataError::Unauthorized(
                    "FMP rejected the API key".to_string(),
                ));
            }
            status if !status.is_success() => {
                return Err(MarketDataError::ProviderError(format!(
                    "FMP returned HTTP {}",
                    status
                )));
            }
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MarketDataError::Parsing(e.to_string()))
    }
}

fn decimal_from_f64(value: f64, field: &str) -> Result<Decimal, MarketDataError> {
    Decimal::from_f64(value)
        .ok_or_else(|| MarketDataError::Parsing(format!("non-finite {} value: {}", field, value)))
}

fn parse_published_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[async_trait]
impl MarketDataProvider for FmpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = symbol.to_uppercase();
        let path = format!("/quote/{}", urlencoding::encode(&symbol));
        let items: Vec<QuoteItem> = self.get_json(&path, &[]).await?;

        let item = items
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::NotFound(format!("no quote data for {}", symbol)))?;

        let price = item
            .price
            .ok_or_else(|| MarketDataError::NotFound(format!("no price for {}", symbol)))?;

        let timestamp = item
            .timestamp
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .unwrap_or_else(Utc::now);

        Ok(Quote {
            symbol: item.symbol,
            price: decimal_from_f64(price, "price")?,
            change_percent: item
                .changes_percentage
                .and_then(Decimal::from_f64),
            timestamp,
        })
    }

    async fn search_symbols(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SymbolSearchResult>, MarketDataError> {
        let limit_str = limit.to_string();
        let items: Vec<SearchItem> = self
            .get_json("/search", &[("query", query), ("limit", &limit_str)])
            .await?;

        Ok(items
            .into_iter()
            .map(|item| SymbolSearchResult {
                name: item.name.unwrap_or_else(|| item.symbol.clone()),
                symbol: item.symbol,
            })
            .collect())
    }

    async fn get_profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        let symbol = symbol.to_uppercase();
        let path = format!("/profile/{}", urlencoding::encode(&symbol));
        let items: Vec<ProfileItem> = self.get_json(&path, &[]).await?;

        let item = items
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::NotFound(format!("no profile for {}", symbol)))?;

        Ok(CompanyProfile {
            name: item.company_name.unwrap_or_else(|| item.symbol.clone()),
            symbol: item.symbol,
            logo_url: item.image,
            description: item.description,
            price: item.price.and_then(Decimal::from_f64),
            change_percent: item.changes_percentage.and_then(Decimal::from_f64),
            exchange: item.exchange_short_name,
        })
    }

    async fn get_news(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, MarketDataError> {
        let symbol = symbol.to_uppercase();
        let limit_str = limit.to_string();
        let items: Vec<NewsItem> = self
            .get_json(
                "/stock_news",
                &[("tickers", symbol.as_str()), ("limit", &limit_str)],
            )
            .await?;

        Ok(items
            .into_iter()
            .map(|item| NewsArticle {
                symbol: item.symbol.unwrap_or_else(|| symbol.clone()),
                title: item.title,
                text: item.text,
                url: item.url,
                image_url: item.image,
                site: item.site,
                published_at: item.published_date.as_deref().and_then(parse_published_date),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_quote_response() {
        let body = r#"[{"symbol":"AAPL","name":"Apple Inc.","price":178.25,
            "changesPercentage":1.32,"timestamp":1700000000}]"#;
        let items: Vec<QuoteItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.symbol, "AAPL");
        assert_eq!(
            decimal_from_f64(item.price.unwrap(), "price").unwrap(),
            dec!(178.25)
        );
        assert_eq!(item.timestamp, Some(1700000000));
    }

    #[test]
    fn parses_search_response_with_missing_name() {
        let body = r#"[{"symbol":"MSFT","name":"Microsoft Corporation"},{"symbol":"MSF"}]"#;
        let items: Vec<SearchItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, None);
    }

    #[test]
    fn parses_profile_response() {
        let body = r#"[{"symbol":"TSLA","companyName":"Tesla, Inc.",
            "image":"https://example.com/tsla.png","description":"Cars.",
            "price":242.8,"changesPercentage":-0.5,"exchangeShortName":"NASDAQ"}]"#;
        let items: Vec<ProfileItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items[0].company_name.as_deref(), Some("Tesla, Inc."));
        assert_eq!(items[0].exchange_short_name.as_deref(), Some("NASDAQ"));
    }

    #[test]
    fn parses_news_published_date() {
        let parsed = parse_published_date("2024-03-01 14:30:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T14:30:00+00:00");
        assert!(parse_published_date("bogus").is_none());
    }
}
