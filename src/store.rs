//! `MarketStore`: shared dashboard state with fenced refreshes.
//!
//! The store is handed explicitly to every consumer (clones share the same
//! state). Each logical query (the list refresh and the main chart slot) has
//! its own generation counter. A generation is taken when the call is made,
//! not when the future is first polled, and a response whose generation has
//! been overtaken is dropped instead of overwriting newer state. Superseded
//! requests are not cancelled.
//!
//! The requested currency is recorded together with the list generation, so
//! a later `refresh` or history fetch sees a selection even if the
//! `set_currency` future that made it was superseded before being polled.

use crate::client::CryptoClient;
use crate::domain::asset::AssetDetails;
use crate::domain::market::{ChartView, Cryptocurrency, MarketState};
use crate::domain::price_history::HistoricalSeries;
use crate::error::SdkError;
use crate::http::CoinGeckoHttp;
use crate::shared::{AssetId, Currency};
use crate::source::MarketSource;

use async_lock::RwLock;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// How a list refresh ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Live data applied.
    Ready,
    /// Demo snapshot applied.
    Degraded,
    /// A newer refresh was issued; this result was discarded.
    Superseded,
}

/// The most recent list request.
#[derive(Debug, Clone, Copy)]
struct ListRequest {
    generation: u64,
    currency: Currency,
}

pub struct MarketStore<S = CoinGeckoHttp> {
    client: CryptoClient<S>,
    state: Arc<RwLock<MarketState>>,
    list_request: Arc<Mutex<ListRequest>>,
    chart_generation: Arc<AtomicU64>,
}

impl<S: MarketSource> MarketStore<S> {
    /// Create a store in the initial loading state. Call [`mount`](Self::mount)
    /// to issue the first refresh.
    pub fn new(client: CryptoClient<S>) -> Self {
        let state = MarketState::new();
        let list_request = ListRequest {
            generation: 0,
            currency: state.selected_currency,
        };
        Self {
            client,
            state: Arc::new(RwLock::new(state)),
            list_request: Arc::new(Mutex::new(list_request)),
            chart_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn client(&self) -> &CryptoClient<S> {
        &self.client
    }

    // ── Reads ────────────────────────────────────────────────────────────

    /// Snapshot of the whole state.
    pub async fn state(&self) -> MarketState {
        self.state.read().await.clone()
    }

    /// The list narrowed by the current search term.
    pub async fn filtered(&self) -> Vec<Cryptocurrency> {
        self.state.read().await.filtered()
    }

    /// Currency of the list currently held in the state.
    pub async fn selected_currency(&self) -> Currency {
        self.state.read().await.selected_currency
    }

    /// Currency of the latest `set_currency` call. The state catches up once
    /// the matching refresh starts.
    pub fn requested_currency(&self) -> Currency {
        self.list_request.lock().currency
    }

    // ── List refresh ─────────────────────────────────────────────────────

    /// Initial refresh for the current currency.
    pub fn mount(&self) -> impl Future<Output = RefreshOutcome> + '_ {
        self.refresh()
    }

    /// Re-fetch the list for the most recently requested currency.
    pub fn refresh(&self) -> impl Future<Output = RefreshOutcome> + '_ {
        let request = self.issue_list_request(None);
        async move { self.run_refresh(request).await }
    }

    /// Select a currency and re-fetch the list in it.
    pub fn set_currency(&self, currency: Currency) -> impl Future<Output = RefreshOutcome> + '_ {
        let request = self.issue_list_request(Some(currency));
        async move { self.run_refresh(request).await }
    }

    /// Update the search term. Never triggers a refresh.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.search_term = term.into();
    }

    fn issue_list_request(&self, currency: Option<Currency>) -> ListRequest {
        let mut latest = self.list_request.lock();
        latest.generation += 1;
        if let Some(currency) = currency {
            latest.currency = currency;
        }
        *latest
    }

    fn is_current_list(&self, generation: u64) -> bool {
        self.list_request.lock().generation == generation
    }

    async fn run_refresh(&self, request: ListRequest) -> RefreshOutcome {
        let ListRequest {
            generation,
            currency,
        } = request;
        {
            let mut state = self.state.write().await;
            if !self.is_current_list(generation) {
                tracing::debug!(generation, currency = %currency, "Refresh superseded before start");
                return RefreshOutcome::Superseded;
            }
            state.begin_loading(currency);
        }

        let snapshot = self.client.markets().list_or_demo(currency).await;

        let mut state = self.state.write().await;
        if !self.is_current_list(generation) {
            tracing::debug!(
                generation,
                currency = %currency,
                "Discarding superseded market list response"
            );
            return RefreshOutcome::Superseded;
        }
        let outcome = if snapshot.provenance.is_synthetic() {
            RefreshOutcome::Degraded
        } else {
            RefreshOutcome::Ready
        };
        state.apply_snapshot(snapshot);
        tracing::debug!(
            generation,
            currency = %currency,
            count = state.cryptocurrencies.len(),
            ?outcome,
            "Market list refreshed"
        );
        outcome
    }

    // ── History ──────────────────────────────────────────────────────────

    /// Fetch history in the currency requested when the call is made. Never
    /// fails; see [`HistoricalSeries::provenance`].
    pub fn fetch_history<'a>(
        &'a self,
        asset: &'a AssetId,
        days: u32,
    ) -> impl Future<Output = HistoricalSeries> + 'a {
        let currency = self.requested_currency();
        async move { self.client.price_history().get(asset, days, currency).await }
    }

    /// Fetch history into the main chart slot.
    ///
    /// Returns the series if it was applied, or `None` when a later
    /// `load_chart` call was issued before this one resolved.
    pub fn load_chart(
        &self,
        asset: AssetId,
        days: u32,
    ) -> impl Future<Output = Option<HistoricalSeries>> + '_ {
        let generation = self.chart_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let currency = self.requested_currency();
        async move {
            let series = self.client.price_history().get(&asset, days, currency).await;

            let mut state = self.state.write().await;
            if self.chart_generation.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, asset = %asset, "Discarding superseded chart response");
                return None;
            }
            state.chart = Some(ChartView {
                asset,
                days,
                currency,
                series: series.clone(),
            });
            Some(series)
        }
    }

    // ── Details ──────────────────────────────────────────────────────────

    /// Asset details in the currency requested when the call is made.
    pub fn asset_details<'a>(
        &'a self,
        asset: &'a AssetId,
    ) -> impl Future<Output = Result<AssetDetails, SdkError>> + 'a {
        let currency = self.requested_currency();
        async move { self.client.assets().get(asset, currency).await }
    }
}

impl<S> Clone for MarketStore<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            state: self.state.clone(),
            list_request: self.list_request.clone(),
            chart_generation: self.chart_generation.clone(),
        }
    }
}
