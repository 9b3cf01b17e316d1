//! Stat cards and the supply panel of the asset details page.

use super::StatCard;
use crate::domain::asset::AssetDetails;
use crate::shared::fmt::currency::{
    format_compact, format_currency, format_optional_percent, format_supply,
};

const NOT_AVAILABLE: &str = "Not Available";

#[derive(Debug, Clone, PartialEq)]
pub struct SupplyPanel {
    pub circulating: String,
    pub total: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailStats {
    /// Current price, market cap, 24h volume, circulating supply.
    pub overview: Vec<StatCard>,
    /// 7 day, 30 day and 1 year change.
    pub performance: Vec<StatCard>,
    pub supply: SupplyPanel,
}

impl DetailStats {
    pub fn from_details(details: &AssetDetails) -> Self {
        let code = details.currency.as_str();
        let money = |v: Option<f64>| v.map_or_else(|| "N/A".to_string(), |v| format_currency(v, code));
        let compact = |v: Option<f64>| v.map_or_else(|| "N/A".to_string(), |v| format_compact(v, code));
        let supply = |v: Option<f64>| {
            v.filter(|s| *s > 0.0)
                .map_or_else(|| NOT_AVAILABLE.to_string(), |s| format_supply(s, &details.symbol))
        };
        let percent = |title: &str, v: Option<f64>| {
            StatCard::new(title, format_optional_percent(v)).with_change(v)
        };

        Self {
            overview: vec![
                StatCard::new("Current Price", money(details.current_price))
                    .with_change(details.price_change_percentage_24h),
                StatCard::new("Market Cap", compact(details.market_cap)),
                StatCard::new("24h Trading Volume", compact(details.total_volume)),
                StatCard::new("Circulating Supply", supply(details.circulating_supply)),
            ],
            performance: vec![
                percent("7 Days", details.price_change_percentage_7d),
                percent("30 Days", details.price_change_percentage_30d),
                percent("1 Year", details.price_change_percentage_1y),
            ],
            supply: SupplyPanel {
                circulating: supply(details.circulating_supply),
                total: supply(details.total_supply),
                max: supply(details.max_supply),
            },
        }
    }
}
