//! Scrolling price ticker.

use super::Direction;
use crate::domain::market::Cryptocurrency;
use crate::shared::fmt::currency::{format_currency, format_percent_change};
use crate::shared::AssetId;

/// Assets shown in the ticker.
pub const TICKER_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct TickerItem {
    pub id: AssetId,
    pub symbol: String,
    pub image: String,
    /// Always rendered with a `$` glyph, whatever the selected currency.
    pub price: String,
    pub change: String,
    pub direction: Direction,
}

impl From<&Cryptocurrency> for TickerItem {
    fn from(crypto: &Cryptocurrency) -> Self {
        Self {
            id: crypto.id.clone(),
            symbol: crypto.symbol.to_uppercase(),
            image: crypto.image.clone(),
            price: format_currency(crypto.current_price, "usd"),
            change: format_percent_change(crypto.price_change_percentage_24h),
            direction: Direction::of(crypto.price_change_percentage_24h),
        }
    }
}

/// Items for the first [`TICKER_LEN`] assets of the unfiltered list. Empty
/// input renders no ticker.
pub fn ticker_items(list: &[Cryptocurrency]) -> Vec<TickerItem> {
    list.iter().take(TICKER_LEN).map(TickerItem::from).collect()
}
