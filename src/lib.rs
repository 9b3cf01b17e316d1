//! # cryptoview SDK
//!
//! Market data, formatting and shared state for a cryptocurrency dashboard,
//! backed by the CoinGecko v3 REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, formatters, domain models (no I/O)
//! 2. **HTTP API**: `CoinGeckoHttp` with a uniform request timeout
//! 3. **Source**: The `MarketSource` trait, the seam for alternative providers
//! 4. **High-Level Client**: `CryptoClient` with nested sub-clients and fallbacks
//! 5. **Store**: `MarketStore`, shared dashboard state with fenced refreshes
//! 6. **Views**: Cards, table rows, ticker, chart series, comparison
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptoview_sdk::prelude::*;
//!
//! let client = CryptoClient::builder().build()?;
//! let store = MarketStore::new(client);
//! store.mount().await;
//!
//! store.set_search_term("eth").await;
//! let rows = market_table(&store.state().await, 10);
//! let history = store.fetch_history(&AssetId::from("bitcoin"), 30).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatters used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and timeout constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the upstream REST API.
pub mod http;

// ── Layer 3: Source ──────────────────────────────────────────────────────────

/// `MarketSource`: abstract market data provider.
pub mod source;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CryptoClient`: the primary entry point.
pub mod client;

// ── Layer 5: Store ───────────────────────────────────────────────────────────

/// `MarketStore`: shared state with fenced refreshes.
pub mod store;

// ── Layer 6: Views ───────────────────────────────────────────────────────────

/// Display models for the dashboard pages.
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatters
    pub use crate::shared::{
        currency_symbol, format_compact, format_currency, AssetId, Currency, Provenance,
        Timeframe,
    };

    // Domain types: market
    pub use crate::domain::market::{
        ChartView, Cryptocurrency, MarketSnapshot, MarketState, Status, DEMO_DATA_MESSAGE,
    };

    // Domain types: price history, asset
    pub use crate::domain::asset::{AssetDetails, DETAILS_ERROR_MESSAGE};
    pub use crate::domain::price_history::{HistoricalSeries, LinePoint};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

    // HTTP client, source, sub-clients
    pub use crate::client::{
        AssetsClient, CryptoClient, CryptoClientBuilder, MarketsClient, PriceHistorySubClient,
    };
    pub use crate::http::CoinGeckoHttp;
    pub use crate::source::MarketSource;

    // Store
    pub use crate::store::{MarketStore, RefreshOutcome};

    // Views
    pub use crate::view::{
        market_table, ticker_items, top_cards, ChartSeries, Comparison, CryptoCard, DetailStats,
        Direction, MarketOverview, MarketRow, StatCard, TickerItem,
    };
}
