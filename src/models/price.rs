use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceData — A price quote in both display currencies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub usd: f64,
    pub inr: f64,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
}

impl PriceData {
    /// Build a USD-denominated quote, deriving the INR amount from `rate`.
    pub fn from_usd(usd: f64, rate: f64, last_updated: DateTime<Utc>) -> Self {
        Self {
            usd,
            inr: usd * rate,
            currency: "USD".to_string(),
            last_updated,
        }
    }
}

// ---------------------------------------------------------------------------
// PricePoint — Single point of a card's price history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}
