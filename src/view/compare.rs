//! Side-by-side comparison of several assets over one timeframe.

use super::ChartSeries;
use crate::domain::market::Cryptocurrency;
use crate::domain::price_history::HistoricalSeries;
use crate::shared::fmt::currency::{
    format_currency, format_optional_percent, format_percent_change,
};
use crate::shared::{AssetId, Timeframe};
use crate::source::MarketSource;
use crate::store::MarketStore;

use futures_util::future::join_all;
use std::collections::HashMap;

/// Line colors by slot; slot `i` uses `COMPARE_PALETTE[i % 5]`.
pub const COMPARE_PALETTE: [&str; 5] = ["#4f46e5", "#ef4444", "#10b981", "#f59e0b", "#3b82f6"];

pub const MIN_SELECTED: usize = 2;
pub const MAX_SELECTED: usize = 5;

/// Selected assets, the timeframe, and the histories of the last load.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    selected: Vec<AssetId>,
    days: u32,
    histories: HashMap<AssetId, HistoricalSeries>,
}

impl Default for Comparison {
    fn default() -> Self {
        Self {
            selected: vec![AssetId::from("bitcoin"), AssetId::from("ethereum")],
            days: Timeframe::default().days(),
            histories: HashMap::new(),
        }
    }
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[AssetId] {
        &self.selected
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn set_days(&mut self, days: u32) {
        self.days = days;
    }

    pub fn color_for(index: usize) -> &'static str {
        COMPARE_PALETTE[index % COMPARE_PALETTE.len()]
    }

    pub fn can_add(&self) -> bool {
        self.selected.len() < MAX_SELECTED
    }

    pub fn can_remove(&self) -> bool {
        self.selected.len() > MIN_SELECTED
    }

    /// Append the first asset of `list` that is not selected yet.
    ///
    /// Returns the added id, or `None` when full or nothing is left to add.
    pub fn add(&mut self, list: &[Cryptocurrency]) -> Option<AssetId> {
        if !self.can_add() {
            return None;
        }
        let next = list.iter().find(|c| !self.selected.contains(&c.id))?;
        self.selected.push(next.id.clone());
        Some(next.id.clone())
    }

    /// Drop the asset in slot `index`. Never goes below [`MIN_SELECTED`].
    pub fn remove(&mut self, index: usize) -> Option<AssetId> {
        if !self.can_remove() || index >= self.selected.len() {
            return None;
        }
        let removed = self.selected.remove(index);
        self.histories.remove(&removed);
        Some(removed)
    }

    /// Put `asset` in slot `index`, returning the previous occupant. The
    /// previous occupant's history is dropped unless another slot still holds it.
    pub fn replace(&mut self, index: usize, asset: AssetId) -> Option<AssetId> {
        let slot = self.selected.get_mut(index)?;
        let previous = std::mem::replace(slot, asset);
        if !self.selected.contains(&previous) {
            self.histories.remove(&previous);
        }
        Some(previous)
    }

    /// Fetch every selected history concurrently and keep the results.
    ///
    /// Individual failures come back as synthetic series, so a load always
    /// yields one series per selected asset.
    pub async fn load<S: MarketSource>(&mut self, store: &MarketStore<S>) {
        let days = self.days;
        let fetches = self.selected.iter().map(|id| store.fetch_history(id, days));
        let results = join_all(fetches).await;

        self.histories = self.selected.iter().cloned().zip(results).collect();
        tracing::debug!(
            assets = self.selected.len(),
            days,
            "Comparison histories loaded"
        );
    }

    pub fn history(&self, asset: &AssetId) -> Option<&HistoricalSeries> {
        self.histories.get(asset)
    }

    /// One dataset per slot. Names come from `list`, falling back to the id.
    pub fn datasets(&self, list: &[Cryptocurrency]) -> Vec<CompareDataset> {
        self.selected
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let name = list
                    .iter()
                    .find(|c| &c.id == id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.to_string());
                let color = Self::color_for(i);
                let series = self
                    .histories
                    .get(id)
                    .map(|h| ChartSeries::from_history(h, &name, Some(color), true));
                CompareDataset {
                    id: id.clone(),
                    name,
                    color,
                    series,
                }
            })
            .collect()
    }

    /// Performance cards for selected assets present in `list`.
    pub fn insights(&self, list: &[Cryptocurrency]) -> Vec<Insight> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, id)| {
                let crypto = list.iter().find(|c| &c.id == id)?;
                Some(Insight::new(crypto, Self::color_for(i)))
            })
            .collect()
    }
}

/// A chart line in the comparison view. `series` is `None` until loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareDataset {
    pub id: AssetId,
    pub name: String,
    pub color: &'static str,
    pub series: Option<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub id: AssetId,
    pub name: String,
    pub color: &'static str,
    pub current_price: String,
    pub change_24h: String,
    pub change_7d: String,
    /// Billions with a `$` glyph, e.g. `$1.23B`.
    pub market_cap: String,
}

impl Insight {
    fn new(crypto: &Cryptocurrency, color: &'static str) -> Self {
        Self {
            id: crypto.id.clone(),
            name: crypto.name.clone(),
            color,
            current_price: format_currency(crypto.current_price, "usd"),
            change_24h: format_percent_change(crypto.price_change_percentage_24h),
            change_7d: format_optional_percent(crypto.price_change_percentage_7d_in_currency),
            market_cap: format!("${:.2}B", crypto.market_cap / 1e9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CryptoClient;
    use crate::test_support::{crypto, live_series, StaticSource};

    fn listing() -> Vec<Cryptocurrency> {
        vec![
            crypto("bitcoin", "Bitcoin", "btc", 61_000.0),
            crypto("ethereum", "Ethereum", "eth", 3_000.0),
            crypto("solana", "Solana", "sol", 150.0),
            crypto("cardano", "Cardano", "ada", 0.5),
            crypto("ripple", "XRP", "xrp", 0.6),
            crypto("polkadot", "Polkadot", "dot", 7.0),
        ]
    }

    #[test]
    fn test_defaults() {
        let cmp = Comparison::new();
        let ids: Vec<_> = cmp.selected().iter().map(|a| a.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin", "ethereum"]);
        assert_eq!(cmp.days(), 30);
        assert!(!cmp.can_remove());
    }

    #[test]
    fn test_add_picks_first_unselected_and_caps_at_five() {
        let list = listing();
        let mut cmp = Comparison::new();

        assert_eq!(cmp.add(&list), Some(AssetId::from("solana")));
        assert_eq!(cmp.add(&list), Some(AssetId::from("cardano")));
        assert_eq!(cmp.add(&list), Some(AssetId::from("ripple")));
        assert_eq!(cmp.selected().len(), MAX_SELECTED);
        assert_eq!(cmp.add(&list), None);
    }

    #[test]
    fn test_add_with_nothing_left() {
        let list = vec![crypto("bitcoin", "Bitcoin", "btc", 1.0)];
        let mut cmp = Comparison::new();
        assert_eq!(cmp.add(&list), None);
        assert_eq!(cmp.selected().len(), 2);
    }

    #[test]
    fn test_remove_keeps_two() {
        let list = listing();
        let mut cmp = Comparison::new();
        assert_eq!(cmp.remove(0), None);

        cmp.add(&list);
        assert_eq!(cmp.remove(9), None);
        assert_eq!(cmp.remove(0), Some(AssetId::from("bitcoin")));
        assert_eq!(cmp.selected().len(), 2);
        assert_eq!(cmp.remove(0), None);
    }

    #[test]
    fn test_replace_slot() {
        let mut cmp = Comparison::new();
        let old = cmp.replace(1, AssetId::from("solana"));
        assert_eq!(old, Some(AssetId::from("ethereum")));
        assert_eq!(cmp.selected()[1].as_str(), "solana");
        assert_eq!(cmp.replace(5, AssetId::from("ripple")), None);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(Comparison::color_for(0), "#4f46e5");
        assert_eq!(Comparison::color_for(4), "#3b82f6");
        assert_eq!(Comparison::color_for(5), "#4f46e5");
    }

    #[tokio::test]
    async fn test_load_fetches_every_selected_asset() {
        let source = StaticSource::with_chart(live_series(&[(1, 10.0), (2, 12.0)]));
        let store = MarketStore::new(CryptoClient::with_source(source));
        let mut cmp = Comparison::new();
        cmp.set_days(7);

        cmp.load(&store).await;

        let requests = store.client().source().chart_requests.lock().unwrap().len();
        assert_eq!(requests, 2);
        assert!(cmp.history(&AssetId::from("bitcoin")).is_some());
        assert!(cmp.history(&AssetId::from("ethereum")).is_some());

        let datasets = cmp.datasets(&listing());
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[1].name, "Ethereum");
        assert_eq!(datasets[1].color, "#ef4444");
        let series = datasets[0].series.as_ref().unwrap();
        assert_eq!(series.label, "Bitcoin Price");
        assert!(!series.fill);
    }

    #[tokio::test]
    async fn test_load_failures_come_back_synthetic() {
        let store = MarketStore::new(CryptoClient::with_source(StaticSource::failing()));
        let mut cmp = Comparison::new();
        cmp.load(&store).await;

        let btc = cmp.history(&AssetId::from("bitcoin")).unwrap();
        assert!(btc.is_synthetic());
        assert_eq!(btc.len(), 31);
    }

    #[tokio::test]
    async fn test_replace_drops_previous_history() {
        let source = StaticSource::with_chart(live_series(&[(1, 10.0)]));
        let store = MarketStore::new(CryptoClient::with_source(source));
        let mut cmp = Comparison::new();
        cmp.load(&store).await;

        cmp.replace(1, AssetId::from("solana"));

        assert!(cmp.history(&AssetId::from("ethereum")).is_none());
        assert!(cmp.history(&AssetId::from("bitcoin")).is_some());
        assert!(cmp.datasets(&listing())[1].series.is_none());
    }

    #[test]
    fn test_datasets_before_load_and_unknown_names() {
        let mut cmp = Comparison::new();
        cmp.replace(1, AssetId::from("mystery-coin"));
        let datasets = cmp.datasets(&listing());
        assert!(datasets.iter().all(|d| d.series.is_none()));
        assert_eq!(datasets[1].name, "mystery-coin");
    }

    #[test]
    fn test_insights() {
        let mut list = listing();
        list[0].market_cap = 1_230_000_000_000.0;
        list[0].price_change_percentage_24h = 2.5;
        list[0].price_change_percentage_7d_in_currency = Some(-3.25);

        let mut cmp = Comparison::new();
        cmp.replace(1, AssetId::from("mystery-coin"));
        let insights = cmp.insights(&list);

        assert_eq!(insights.len(), 1);
        let btc = &insights[0];
        assert_eq!(btc.current_price, "$61,000");
        assert_eq!(btc.change_24h, "+2.50%");
        assert_eq!(btc.change_7d, "-3.25%");
        assert_eq!(btc.market_cap, "$1230.00B");
        assert_eq!(btc.color, "#4f46e5");
    }
}
