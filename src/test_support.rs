//! Fake market sources and local HTTP servers shared by unit tests.

use crate::domain::asset::AssetDetails;
use crate::domain::market::Cryptocurrency;
use crate::domain::price_history::{HistoricalSeries, LinePoint};
use crate::error::{HttpError, SdkError};
use crate::shared::{AssetId, Currency, Provenance};
use crate::source::MarketSource;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub(crate) fn crypto(id: &str, name: &str, symbol: &str, price: f64) -> Cryptocurrency {
    Cryptocurrency {
        id: AssetId::from(id),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: format!("https://example.com/{id}.png"),
        current_price: price,
        market_cap: price * 1_000_000.0,
        market_cap_rank: None,
        price_change_percentage_24h: 1.0,
        price_change_percentage_7d_in_currency: None,
        price_change_percentage_30d_in_currency: None,
        price_change_percentage_1y_in_currency: None,
    }
}

pub(crate) fn live_series(points: &[(i64, f64)]) -> HistoricalSeries {
    let prices: Vec<LinePoint> = points.iter().map(|&(t, v)| LinePoint::new(t, v)).collect();
    HistoricalSeries {
        market_caps: prices.clone(),
        total_volumes: prices.clone(),
        prices,
        provenance: Provenance::Live,
    }
}

fn unavailable() -> SdkError {
    SdkError::Http(HttpError::Timeout)
}

/// Answers every call immediately; `None` fields fail with a timeout.
#[derive(Default)]
pub(crate) struct StaticSource {
    pub list: Option<Vec<Cryptocurrency>>,
    pub chart: Option<HistoricalSeries>,
    pub details: Option<AssetDetails>,
    pub chart_requests: Mutex<Vec<(AssetId, Currency, u32)>>,
    pub list_requests: Mutex<Vec<Currency>>,
}

impl StaticSource {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_list(list: Vec<Cryptocurrency>) -> Self {
        Self {
            list: Some(list),
            ..Default::default()
        }
    }

    pub fn with_chart(chart: HistoricalSeries) -> Self {
        Self {
            chart: Some(chart),
            ..Default::default()
        }
    }
}

impl MarketSource for StaticSource {
    async fn markets(&self, currency: Currency) -> Result<Vec<Cryptocurrency>, SdkError> {
        self.list_requests.lock().unwrap().push(currency);
        self.list.clone().ok_or_else(unavailable)
    }

    async fn market_chart(
        &self,
        asset: &AssetId,
        currency: Currency,
        days: u32,
    ) -> Result<HistoricalSeries, SdkError> {
        self.chart_requests
            .lock()
            .unwrap()
            .push((asset.clone(), currency, days));
        self.chart.clone().ok_or_else(unavailable)
    }

    async fn asset_details(
        &self,
        _asset: &AssetId,
        _currency: Currency,
    ) -> Result<AssetDetails, SdkError> {
        self.details.clone().ok_or_else(unavailable)
    }
}

/// Holds every response until the test releases it, so tests decide the
/// order in which concurrent requests resolve. Sending `None` fails the call.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    lists: Mutex<HashMap<Currency, oneshot::Receiver<Option<Vec<Cryptocurrency>>>>>,
    charts: Mutex<HashMap<AssetId, oneshot::Receiver<Option<HistoricalSeries>>>>,
}

impl ScriptedSource {
    pub fn script_list(&self, currency: Currency) -> oneshot::Sender<Option<Vec<Cryptocurrency>>> {
        let (tx, rx) = oneshot::channel();
        self.lists.lock().unwrap().insert(currency, rx);
        tx
    }

    pub fn script_chart(&self, asset: &AssetId) -> oneshot::Sender<Option<HistoricalSeries>> {
        let (tx, rx) = oneshot::channel();
        self.charts.lock().unwrap().insert(asset.clone(), rx);
        tx
    }
}

impl MarketSource for ScriptedSource {
    async fn markets(&self, currency: Currency) -> Result<Vec<Cryptocurrency>, SdkError> {
        let rx = self.lists.lock().unwrap().remove(&currency);
        match rx {
            Some(rx) => rx.await.ok().flatten().ok_or_else(unavailable),
            None => Err(unavailable()),
        }
    }

    async fn market_chart(
        &self,
        asset: &AssetId,
        _currency: Currency,
        _days: u32,
    ) -> Result<HistoricalSeries, SdkError> {
        let rx = self.charts.lock().unwrap().remove(asset);
        match rx {
            Some(rx) => rx.await.ok().flatten().ok_or_else(unavailable),
            None => Err(unavailable()),
        }
    }

    async fn asset_details(
        &self,
        _asset: &AssetId,
        _currency: Currency,
    ) -> Result<AssetDetails, SdkError> {
        Err(unavailable())
    }
}

// ─── Local HTTP servers ──────────────────────────────────────────────────────

/// A complete HTTP/1.1 response that closes the connection.
pub(crate) fn http_response(status: &str, headers: &[&str], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {status}\r\n");
    for header in headers {
        response.push_str(header);
        response.push_str("\r\n");
    }
    response.push_str(&format!(
        "Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ));
    response
}

/// Answer every connection with `response`. Returns the base URL.
pub(crate) async fn serve_response(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    format!("http://{addr}")
}

/// Accept connections and never answer. Returns the base URL.
pub(crate) async fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    format!("http://{addr}")
}
