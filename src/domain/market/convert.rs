//! Conversion: CoinMarketResponse → Cryptocurrency (TryFrom + validation).

use super::wire;
use super::{Cryptocurrency, ValidationError};
use crate::shared::AssetId;

impl TryFrom<wire::CoinMarketResponse> for Cryptocurrency {
    type Error = ValidationError;

    fn try_from(source: wire::CoinMarketResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let id = non_empty(source.id).unwrap_or_else(|| {
            errors.push(ValidationError::MissingId);
            String::new()
        });
        let symbol = non_empty(source.symbol).unwrap_or_else(|| {
            errors.push(ValidationError::MissingSymbol);
            String::new()
        });
        let name = non_empty(source.name).unwrap_or_else(|| {
            errors.push(ValidationError::MissingName);
            String::new()
        });

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(id, errors));
        }

        Ok(Cryptocurrency {
            id: AssetId::new(id),
            symbol,
            name,
            image: source.image.unwrap_or_default(),
            current_price: source.current_price.unwrap_or_default(),
            market_cap: source.market_cap.unwrap_or_default(),
            market_cap_rank: source.market_cap_rank,
            price_change_percentage_24h: source.price_change_percentage_24h.unwrap_or_default(),
            price_change_percentage_7d_in_currency: source.price_change_percentage_7d_in_currency,
            price_change_percentage_30d_in_currency: source
                .price_change_percentage_30d_in_currency,
            price_change_percentage_1y_in_currency: source.price_change_percentage_1y_in_currency,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Convert a whole page, dropping rows that fail validation.
pub(crate) fn convert_page(rows: Vec<wire::CoinMarketResponse>) -> Vec<Cryptocurrency> {
    rows.into_iter()
        .filter_map(|row| match Cryptocurrency::try_from(row) {
            Ok(crypto) => Some(crypto),
            Err(err) => {
                tracing::warn!(error = %err, "Dropping invalid market row");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_row() -> wire::CoinMarketResponse {
        wire::CoinMarketResponse {
            id: Some("ethereum".to_string()),
            symbol: Some("eth".to_string()),
            name: Some("Ethereum".to_string()),
            image: Some("https://example.com/eth.png".to_string()),
            current_price: Some(3245.67),
            market_cap: Some(389_012_345_678.0),
            market_cap_rank: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_row_converts_with_defaults() {
        let crypto = Cryptocurrency::try_from(minimal_row()).unwrap();
        assert_eq!(crypto.id.as_str(), "ethereum");
        assert_eq!(crypto.market_cap_rank, Some(2));
        assert_eq!(crypto.price_change_percentage_24h, 0.0);
        assert_eq!(crypto.price_change_percentage_7d_in_currency, None);
    }

    #[test]
    fn test_missing_name_fails() {
        let mut row = minimal_row();
        row.name = Some("  ".to_string());
        let err = Cryptocurrency::try_from(row).unwrap_err();
        assert!(format!("{err}").contains("Missing name"));
    }

    #[test]
    fn test_missing_id_and_symbol_are_both_reported() {
        let mut row = minimal_row();
        row.id = None;
        row.symbol = None;
        let err = Cryptocurrency::try_from(row).unwrap_err();
        let message = format!("{err}");
        assert!(message.contains("Missing id"));
        assert!(message.contains("Missing symbol"));
    }

    #[test]
    fn test_convert_page_drops_invalid_rows_and_keeps_order() {
        let mut bad = minimal_row();
        bad.id = None;
        let mut btc = minimal_row();
        btc.id = Some("bitcoin".to_string());
        btc.market_cap_rank = Some(1);

        let page = convert_page(vec![btc, bad, minimal_row()]);
        let ids: Vec<_> = page.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin", "ethereum"]);
    }
}
