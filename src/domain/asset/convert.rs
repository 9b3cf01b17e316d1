//! Conversion: (CoinDetailResponse, Currency) → AssetDetails (TryFrom + validation).

use super::wire;
use super::{AssetDetails, ValidationError};
use crate::shared::{AssetId, Currency, Provenance};
use std::collections::HashMap;

fn pick(map: &HashMap<String, Option<f64>>, currency: Currency) -> Option<f64> {
    map.get(currency.as_str()).copied().flatten()
}

impl TryFrom<(wire::CoinDetailResponse, Currency)> for AssetDetails {
    type Error = ValidationError;

    fn try_from(
        (source, currency): (wire::CoinDetailResponse, Currency),
    ) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let id = source.id.filter(|s| !s.is_empty()).unwrap_or_else(|| {
            errors.push(ValidationError::MissingId);
            String::new()
        });
        let symbol = source.symbol.filter(|s| !s.is_empty()).unwrap_or_else(|| {
            errors.push(ValidationError::MissingSymbol);
            String::new()
        });
        let name = source.name.filter(|s| !s.is_empty()).unwrap_or_else(|| {
            errors.push(ValidationError::MissingName);
            String::new()
        });
        let market_data = source.market_data.unwrap_or_else(|| {
            errors.push(ValidationError::MissingMarketData);
            wire::MarketDataResponse::default()
        });

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(id, errors));
        }

        let image = source
            .image
            .and_then(|i| i.large.or(i.small).or(i.thumb))
            .unwrap_or_default();

        Ok(AssetDetails {
            id: AssetId::new(id),
            symbol,
            name,
            image,
            currency,
            current_price: pick(&market_data.current_price, currency),
            market_cap: pick(&market_data.market_cap, currency),
            total_volume: pick(&market_data.total_volume, currency),
            price_change_percentage_24h: market_data.price_change_percentage_24h,
            price_change_percentage_7d: market_data.price_change_percentage_7d,
            price_change_percentage_30d: market_data.price_change_percentage_30d,
            price_change_percentage_1y: market_data.price_change_percentage_1y,
            circulating_supply: market_data.circulating_supply,
            total_supply: market_data.total_supply,
            max_supply: market_data.max_supply,
            description: source.description.and_then(|d| d.en).unwrap_or_default(),
            provenance: Provenance::Live,
        })
    }
}
