//! High-level client: `CryptoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`, and each
//! owns that domain's fallback policy. This module keeps the builder and the
//! accessor methods.

use crate::domain::asset::client::Assets;
use crate::domain::market::client::Markets;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::error::SdkError;
use crate::http::CoinGeckoHttp;
use crate::source::MarketSource;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.price_history()`, `client.assets()`.
pub struct CryptoClient<S = CoinGeckoHttp> {
    pub(crate) source: Arc<S>,
}

impl CryptoClient<CoinGeckoHttp> {
    pub fn builder() -> CryptoClientBuilder {
        CryptoClientBuilder::default()
    }
}

impl<S: MarketSource> CryptoClient<S> {
    /// Build a client over any market data source.
    pub fn with_source(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_, S> {
        Markets { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_, S> {
        PriceHistoryClient { client: self }
    }

    pub fn assets(&self) -> Assets<'_, S> {
        Assets { client: self }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> Clone for CryptoClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptoClientBuilder {
    base_url: String,
    timeout: Duration,
    api_key: Option<String>,
}

impl Default for CryptoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: crate::network::DEFAULT_TIMEOUT,
            api_key: None,
        }
    }
}

impl CryptoClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Timeout applied to every upstream request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Demo API key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn build(self) -> Result<CryptoClient<CoinGeckoHttp>, SdkError> {
        if self.timeout.is_zero() {
            return Err(SdkError::Validation("timeout must be non-zero".into()));
        }
        let http = CoinGeckoHttp::with_options(&self.base_url, self.timeout, self.api_key)?;
        Ok(CryptoClient::with_source(http))
    }
}
