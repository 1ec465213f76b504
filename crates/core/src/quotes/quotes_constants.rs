use std::time::Duration;

/// How long a fetched price stays served from cache.
pub const QUOTE_CACHE_TTL: Duration = Duration::from_secs(600);

/// Maximum autocomplete suggestions returned per search.
pub const SEARCH_LIMIT: usize = 10;

/// Maximum news articles returned per symbol.
pub const NEWS_LIMIT: usize = 20;

/// Well-known tickers served when the provider is unconfigured or returns
/// nothing for a query.
pub const FALLBACK_TICKERS: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("TSLA", "Tesla, Inc."),
    ("AMZN", "Amazon.com, Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("META", "Meta Platforms, Inc."),
];
