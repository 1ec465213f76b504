//! Server configuration from environment variables.

/// Development-only fallback; set PT_JWT_SECRET in any real deployment.
const DEV_JWT_SECRET: &str = "papertrade-dev-secret-do-not-use-in-production";

pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub jwt_secret: String,
    /// Financial Modeling Prep API key; market data degrades gracefully when
    /// unset.
    pub fmp_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("PT_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            db_path: std::env::var("PT_DB_PATH")
                .unwrap_or_else(|_| "data/papertrade.db".to_string()),
            jwt_secret: std::env::var("PT_JWT_SECRET")
                .unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            fmp_api_key: std::env::var("FMP_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}
