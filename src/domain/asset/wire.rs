//! Wire types for the per-asset detail endpoint (REST).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Image URLs in three sizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageResponse {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// `market_data` block; per-currency maps are keyed by lowercase code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketDataResponse {
    #[serde(default)]
    pub current_price: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub market_cap: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub total_volume: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1y: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
}

/// Localized description; only English is requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DescriptionResponse {
    #[serde(default)]
    pub en: Option<String>,
}

/// `GET /coins/{id}` payload (localization and tickers disabled).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<ImageResponse>,
    #[serde(default)]
    pub market_data: Option<MarketDataResponse>,
    #[serde(default)]
    pub description: Option<DescriptionResponse>,
}
