//! Market state container: the data behind the dashboard, owned by the store.

use super::{filter_by_term, Cryptocurrency, MarketSnapshot};
use crate::domain::price_history::HistoricalSeries;
use crate::shared::{AssetId, Currency, Provenance};

/// Where the list refresh cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A refresh is in flight.
    Loading,
    /// Live data is shown.
    Ready,
    /// The bundled demo snapshot is shown.
    Degraded,
}

/// The history currently applied to the main chart slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub asset: AssetId,
    pub days: u32,
    pub currency: Currency,
    pub series: HistoricalSeries,
}

/// Shared dashboard state.
///
/// `loading` is true only while a refresh is in flight, and `error` is set
/// only when the last completed refresh fell back to demo data.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketState {
    pub cryptocurrencies: Vec<Cryptocurrency>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub selected_currency: Currency,
    pub status: Status,
    pub chart: Option<ChartView>,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            cryptocurrencies: Vec::new(),
            loading: true,
            error: None,
            search_term: String::new(),
            selected_currency: Currency::default(),
            status: Status::Loading,
            chart: None,
        }
    }
}

impl MarketState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list narrowed by the current search term, in source order.
    pub fn filtered(&self) -> Vec<Cryptocurrency> {
        filter_by_term(&self.cryptocurrencies, &self.search_term)
    }

    pub fn find(&self, asset: &AssetId) -> Option<&Cryptocurrency> {
        self.cryptocurrencies.iter().find(|c| &c.id == asset)
    }

    pub fn is_degraded(&self) -> bool {
        self.status == Status::Degraded
    }

    /// Enter the loading state for a refresh in `currency`.
    pub fn begin_loading(&mut self, currency: Currency) {
        self.selected_currency = currency;
        self.loading = true;
        self.status = Status::Loading;
    }

    /// Replace the list with the result of a completed refresh.
    pub fn apply_snapshot(&mut self, snapshot: MarketSnapshot) {
        self.status = match snapshot.provenance {
            Provenance::Live => Status::Ready,
            Provenance::Synthetic => Status::Degraded,
        };
        self.cryptocurrencies = snapshot.cryptocurrencies;
        self.error = snapshot.error;
        self.loading = false;
    }
}
