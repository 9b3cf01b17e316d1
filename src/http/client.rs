//! Low-level HTTP client: `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the `MarketSource` impl). Every request is bounded by the
//! configured timeout.

use crate::domain::asset::wire::CoinDetailResponse;
use crate::domain::market::wire::CoinMarketResponse;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::error::HttpError;
use crate::network::{API_KEY_HEADER, DEFAULT_TIMEOUT, MARKETS_PER_PAGE};
use crate::shared::{AssetId, Currency};

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the CoinGecko-compatible REST API.
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
    timeout: Duration,
    /// Demo API key. NEVER exposed publicly.
    api_key: Option<String>,
}

impl CoinGeckoHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, None)
    }

    pub fn with_options(
        base_url: &str,
        timeout: Duration,
        api_key: Option<String>,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            timeout,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub(crate) fn markets_url(&self, currency: Currency, page: u32, per_page: u32) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=false&price_change_percentage=24h,7d,30d,1y",
            self.base_url,
            currency.as_str(),
            per_page,
            page
        )
    }

    pub async fn get_markets(
        &self,
        currency: Currency,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Vec<CoinMarketResponse>, HttpError> {
        let url = self.markets_url(
            currency,
            page.unwrap_or(1),
            per_page.unwrap_or(MARKETS_PER_PAGE),
        );
        self.get(&url).await
    }

    // ── Asset details ────────────────────────────────────────────────────

    pub(crate) fn coin_url(&self, asset: &AssetId) -> String {
        format!(
            "{}/coins/{}?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false",
            self.base_url,
            urlencoding::encode(asset.as_str())
        )
    }

    pub async fn get_coin(&self, asset: &AssetId) -> Result<CoinDetailResponse, HttpError> {
        let url = self.coin_url(asset);
        self.get(&url).await
    }

    // ── Market chart ─────────────────────────────────────────────────────

    pub(crate) fn market_chart_url(&self, asset: &AssetId, currency: Currency, days: u32) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            urlencoding::encode(asset.as_str()),
            currency.as_str(),
            days
        )
    }

    pub async fn get_market_chart(
        &self,
        asset: &AssetId,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = self.market_chart_url(asset, currency, days);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(timeout_ms = self.timeout.as_millis() as u64, "GET {}", url);

        let request = self.do_request::<T>(url);
        let deadline = futures_timer::Delay::new(self.timeout);
        pin_mut!(request);

        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                tracing::debug!("Request to {} timed out", url);
                Err(HttpError::Timeout)
            }
        }
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(key) = self.api_key.as_ref() {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await.map_err(map_transport_error)?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await.map_err(map_transport_error)?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after_ms);
        let body_text = resp.text().await.unwrap_or_default();

        Err(error_for_status(status_code, body_text, retry_after_ms))
    }
}

/// `Retry-After` in delta-seconds, converted to milliseconds. HTTP dates are
/// ignored.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

fn map_transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

fn error_for_status(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

impl Clone for CoinGeckoHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            timeout: self.timeout,
            api_key: self.api_key.clone(),
        }
    }
}

impl std::fmt::Debug for CoinGeckoHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoHttp")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{http_response, serve_response, serve_silently};

    fn http() -> CoinGeckoHttp {
        CoinGeckoHttp::new("https://api.example.com/v3/").unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(http().base_url(), "https://api.example.com/v3");
        assert_eq!(http().timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_markets_url_query() {
        let url = http().markets_url(Currency::Eur, 1, 100);
        assert_eq!(
            url,
            "https://api.example.com/v3/coins/markets?vs_currency=eur&order=market_cap_desc&per_page=100&page=1&sparkline=false&price_change_percentage=24h,7d,30d,1y"
        );
    }

    #[test]
    fn test_coin_url_disables_localization_and_tickers() {
        let url = http().coin_url(&AssetId::from("avalanche-2"));
        assert!(url.starts_with("https://api.example.com/v3/coins/avalanche-2?"));
        assert!(url.contains("localization=false"));
        assert!(url.contains("tickers=false"));
        assert!(url.contains("market_data=true"));
    }

    #[test]
    fn test_market_chart_url_encodes_asset() {
        let url = http().market_chart_url(&AssetId::from("a b"), Currency::Jpy, 7);
        assert_eq!(
            url,
            "https://api.example.com/v3/coins/a%20b/market_chart?vs_currency=jpy&days=7"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            error_for_status(404, "x".into(), None),
            HttpError::NotFound(_)
        ));
        assert!(matches!(error_for_status(408, String::new(), None), HttpError::Timeout));
        assert!(matches!(
            error_for_status(429, String::new(), Some(60_000)),
            HttpError::RateLimited {
                retry_after_ms: Some(60_000)
            }
        ));
        assert!(matches!(
            error_for_status(422, String::new(), None),
            HttpError::BadRequest(_)
        ));
        assert!(matches!(
            error_for_status(503, String::new(), None),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let http = CoinGeckoHttp::with_options(
            "https://api.example.com",
            Duration::from_secs(1),
            Some("secret".to_string()),
        )
        .unwrap();
        let printed = format!("{http:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(parse_retry_after_ms(" 30 "), Some(30_000));
        assert_eq!(parse_retry_after_ms("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_retry_after_ms("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }

    #[tokio::test]
    async fn test_huge_retry_after_is_rate_limited() {
        let base_url = serve_response(http_response(
            "429 Too Many Requests",
            &["Retry-After: 18446744073709551615"],
            "",
        ))
        .await;
        let http = CoinGeckoHttp::new(&base_url).unwrap();

        let result = http.get_markets(Currency::Usd, None, None).await;
        assert!(matches!(
            result,
            Err(HttpError::RateLimited {
                retry_after_ms: Some(u64::MAX)
            })
        ));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let base_url = serve_silently().await;
        let http = CoinGeckoHttp::with_options(&base_url, Duration::from_millis(100), None).unwrap();

        let result = http.get_markets(Currency::Usd, None, None).await;
        assert!(matches!(result, Err(HttpError::Timeout)));
    }

    #[tokio::test]
    async fn test_server_error_status_is_mapped() {
        let base_url = serve_response(http_response("500 Internal Server Error", &[], "oops")).await;
        let http = CoinGeckoHttp::new(&base_url).unwrap();

        let result = http.get_market_chart(&AssetId::from("bitcoin"), Currency::Usd, 7).await;
        assert!(matches!(
            result,
            Err(HttpError::ServerError { status: 500, ref body }) if body == "oops"
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let http =
            CoinGeckoHttp::with_options("http://127.0.0.1:9", Duration::from_secs(2), None).unwrap();
        let result = http.get_markets(Currency::Usd, None, None).await;
        assert!(result.is_err());
    }
}
