//! Dashboard list: the "All Cryptocurrencies" table and the top card row.

use super::{CryptoCard, Direction};
use crate::domain::market::{Cryptocurrency, MarketState};
use crate::shared::fmt::currency::{format_compact, format_currency, format_percent_abs};
use crate::shared::{AssetId, Currency};

/// Rows shown in the dashboard table.
pub const DASHBOARD_TABLE_ROWS: usize = 10;

/// Cards shown above the main chart.
pub const TOP_CARD_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct MarketRow {
    pub id: AssetId,
    /// Market-cap rank, empty when unknown.
    pub rank: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub price: String,
    pub change: String,
    pub direction: Direction,
    pub market_cap: String,
}

impl MarketRow {
    pub fn new(crypto: &Cryptocurrency, currency: Currency) -> Self {
        let code = currency.as_str();
        Self {
            id: crypto.id.clone(),
            rank: crypto
                .market_cap_rank
                .map(|r| r.to_string())
                .unwrap_or_default(),
            name: crypto.name.clone(),
            symbol: crypto.symbol.to_uppercase(),
            image: crypto.image.clone(),
            price: format_currency(crypto.current_price, code),
            change: format_percent_abs(crypto.price_change_percentage_24h),
            direction: Direction::of(crypto.price_change_percentage_24h),
            market_cap: format_compact(crypto.market_cap, code),
        }
    }
}

/// The first `limit` rows of the filtered list, in the selected currency.
pub fn market_table(state: &MarketState, limit: usize) -> Vec<MarketRow> {
    let currency = state.selected_currency;
    state
        .filtered()
        .iter()
        .take(limit)
        .map(|c| MarketRow::new(c, currency))
        .collect()
}

/// Cards for the first `n` assets of the filtered list.
pub fn top_cards(state: &MarketState, n: usize) -> Vec<CryptoCard> {
    let currency = state.selected_currency;
    state
        .filtered()
        .iter()
        .take(n)
        .map(|c| CryptoCard::new(c, currency))
        .collect()
}
