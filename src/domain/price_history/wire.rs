//! Wire types for the market chart endpoint (REST).

use serde::{Deserialize, Serialize};

/// `GET /coins/{id}/market_chart` payload: `[timestamp_ms, value]` pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub market_caps: Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}
