//! Asset domain: the per-asset detail page data.

pub mod client;
mod convert;
pub mod wire;

use crate::domain::market::Cryptocurrency;
use crate::shared::{AssetId, Currency, Provenance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when details cannot be loaded at all.
pub const DETAILS_ERROR_MESSAGE: &str =
    "Failed to fetch cryptocurrency details. Please try again later.";

/// Detail view of one asset, priced in a single currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetails {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub currency: Currency,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub price_change_percentage_1y: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    /// HTML description in English, empty when unavailable.
    pub description: String,
    pub provenance: Provenance,
}

impl AssetDetails {
    /// Build details from a market list row; used for the demo fallback.
    pub fn from_listing(crypto: &Cryptocurrency, currency: Currency) -> Self {
        Self {
            id: crypto.id.clone(),
            symbol: crypto.symbol.clone(),
            name: crypto.name.clone(),
            image: crypto.image.clone(),
            currency,
            current_price: Some(crypto.current_price),
            market_cap: Some(crypto.market_cap),
            total_volume: None,
            price_change_percentage_24h: Some(crypto.price_change_percentage_24h),
            price_change_percentage_7d: crypto.price_change_percentage_7d_in_currency,
            price_change_percentage_30d: crypto.price_change_percentage_30d_in_currency,
            price_change_percentage_1y: crypto.price_change_percentage_1y_in_currency,
            circulating_supply: None,
            total_supply: None,
            max_supply: None,
            description: String::new(),
            provenance: Provenance::Synthetic,
        }
    }
}

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingSymbol,
    MissingName,
    MissingMarketData,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Asset validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingMarketData => write!(f, "Missing market data"),
        }
    }
}

impl std::error::Error for ValidationError {}
