use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A latest-price quote for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Upper-cased ticker symbol.
    pub symbol: String,
    /// Last traded price.
    pub price: Decimal,
    /// Day change in percent, when the provider reports it.
    pub change_percent: Option<Decimal>,
    /// When the provider produced the price.
    pub timestamp: DateTime<Utc>,
}
