//! Error types for market data operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("No provider configured")]
    NotConfigured,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl MarketDataError {
    /// True when retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            MarketDataError::RateLimitExceeded | MarketDataError::Network(_)
        )
    }
}
