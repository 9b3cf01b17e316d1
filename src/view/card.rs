//! Summary card for one asset.

use super::Direction;
use crate::domain::market::Cryptocurrency;
use crate::shared::fmt::currency::{format_compact, format_currency, format_percent_abs};
use crate::shared::{AssetId, Currency};

#[derive(Debug, Clone, PartialEq)]
pub struct CryptoCard {
    pub id: AssetId,
    pub name: String,
    /// Upper-cased ticker.
    pub symbol: String,
    pub image: String,
    /// `Rank #1`, or `Rank #-` when the source has no rank.
    pub rank_label: String,
    pub price: String,
    pub market_cap: String,
    /// Absolute 24h change, read together with `direction`.
    pub change: String,
    pub direction: Direction,
}

impl CryptoCard {
    pub fn new(crypto: &Cryptocurrency, currency: Currency) -> Self {
        let code = currency.as_str();
        let rank = crypto
            .market_cap_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        Self {
            id: crypto.id.clone(),
            name: crypto.name.clone(),
            symbol: crypto.symbol.to_uppercase(),
            image: crypto.image.clone(),
            rank_label: format!("Rank #{rank}"),
            price: format_currency(crypto.current_price, code),
            market_cap: format_compact(crypto.market_cap, code),
            change: format_percent_abs(crypto.price_change_percentage_24h),
            direction: Direction::of(crypto.price_change_percentage_24h),
        }
    }

    /// Route of the detail page for this asset.
    pub fn href(&self) -> String {
        format!("/crypto/{}", self.id)
    }
}
