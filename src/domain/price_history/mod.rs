//! Price history domain: market chart series, synthetic fallback.

pub mod client;
pub mod synthetic;
pub mod wire;

use crate::shared::Provenance;
use serde::{Deserialize, Serialize};

/// A single data point on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Unix timestamp in milliseconds.
    pub time: i64,
    pub value: f64,
}

impl LinePoint {
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for LinePoint {
    fn from((time, value): (f64, f64)) -> Self {
        Self {
            time: time as i64,
            value,
        }
    }
}

/// Three parallel daily series for one asset, ascending by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub prices: Vec<LinePoint>,
    pub market_caps: Vec<LinePoint>,
    pub total_volumes: Vec<LinePoint>,
    pub provenance: Provenance,
}

impl HistoricalSeries {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn is_synthetic(&self) -> bool {
        self.provenance.is_synthetic()
    }

    pub fn latest_price(&self) -> Option<f64> {
        self.prices.last().map(|p| p.value)
    }

    /// Percentage move from the first to the last price of the window.
    pub fn price_change_percent(&self) -> Option<f64> {
        let first = self.prices.first()?.value;
        let last = self.prices.last()?.value;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

impl From<wire::MarketChartResponse> for HistoricalSeries {
    fn from(resp: wire::MarketChartResponse) -> Self {
        Self {
            prices: resp.prices.into_iter().map(LinePoint::from).collect(),
            market_caps: resp.market_caps.into_iter().map(LinePoint::from).collect(),
            total_volumes: resp.total_volumes.into_iter().map(LinePoint::from).collect(),
            provenance: Provenance::Live,
        }
    }
}
