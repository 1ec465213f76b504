use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One news article about a symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub symbol: String,
    pub title: String,
    pub text: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    /// Publishing site name.
    pub site: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}
