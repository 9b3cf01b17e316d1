//! Market domain: the ranked cryptocurrency list, validation, demo snapshot.

pub mod client;
pub(crate) mod convert;
pub mod demo;
pub mod state;
pub mod wire;

pub use state::{ChartView, MarketState, Status};

use crate::shared::{AssetId, Provenance};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Cryptocurrency ──────────────────────────────────────────────────────────

/// One row of the market list, as of a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cryptocurrency {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub market_cap_rank: Option<u32>,
    pub price_change_percentage_24h: f64,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub price_change_percentage_30d_in_currency: Option<f64>,
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

impl Cryptocurrency {
    /// Case-insensitive substring match against name or symbol.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }

    pub fn matches(&self, term: &str) -> bool {
        self.matches_lowercase(&term.to_lowercase())
    }

    pub fn is_gaining(&self) -> bool {
        self.price_change_percentage_24h >= 0.0
    }
}

/// Filter a list by search term, keeping source order.
pub fn filter_by_term(list: &[Cryptocurrency], term: &str) -> Vec<Cryptocurrency> {
    let needle = term.to_lowercase();
    list.iter()
        .filter(|c| c.matches_lowercase(&needle))
        .cloned()
        .collect()
}

// ─── MarketSnapshot ──────────────────────────────────────────────────────────

/// Advisory shown whenever the bundled demo list replaces live data.
pub const DEMO_DATA_MESSAGE: &str =
    "Using demo data due to API rate limits. Real API data would be used in production.";

/// Result of a list fetch that never fails: live data or the demo snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub cryptocurrencies: Vec<Cryptocurrency>,
    pub provenance: Provenance,
    /// Advisory message, set only when `provenance` is synthetic.
    pub error: Option<String>,
}

impl MarketSnapshot {
    pub fn live(cryptocurrencies: Vec<Cryptocurrency>) -> Self {
        Self {
            cryptocurrencies,
            provenance: Provenance::Live,
            error: None,
        }
    }

    pub fn demo() -> Self {
        Self {
            cryptocurrencies: demo::demo_cryptocurrencies(),
            provenance: Provenance::Synthetic,
            error: Some(DEMO_DATA_MESSAGE.to_string()),
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingSymbol,
    MissingName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Cryptocurrency validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
            ValidationError::MissingName => write!(f, "Missing name"),
        }
    }
}

impl std::error::Error for ValidationError {}
