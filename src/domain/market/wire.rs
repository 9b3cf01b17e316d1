//! Wire types for the markets endpoint (REST).
//!
//! The upstream sends `null` for several numeric fields on thinly traded
//! assets, so everything except the identity fields is optional here.

use serde::{Deserialize, Serialize};

/// One element of `GET /coins/markets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoinMarketResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_30d_in_currency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_1y_in_currency: Option<f64>,
}
