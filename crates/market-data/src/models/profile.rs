use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company profile data shown on the stock detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub symbol: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    /// Last price as reported alongside the profile, if any.
    pub price: Option<Decimal>,
    pub change_percent: Option<Decimal>,
    /// Short exchange code (e.g. "NASDAQ").
    pub exchange: Option<String>,
}
