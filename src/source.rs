//! `MarketSource`: the seam between the SDK and whatever serves market data.
//!
//! `CoinGeckoHttp` is the production implementation. The high-level client and
//! the store are generic over this trait, so alternative providers (or fakes)
//! can be injected without touching the fallback policy.

use crate::domain::asset::AssetDetails;
use crate::domain::market::{self, Cryptocurrency};
use crate::domain::price_history::HistoricalSeries;
use crate::error::SdkError;
use crate::http::CoinGeckoHttp;
use crate::shared::{AssetId, Currency};
use std::future::Future;

/// Raw market data provider. Implementations report failures; they never
/// substitute fallback data themselves.
pub trait MarketSource: Send + Sync {
    /// Top assets by market cap, ranked.
    fn markets(
        &self,
        currency: Currency,
    ) -> impl Future<Output = Result<Vec<Cryptocurrency>, SdkError>> + Send;

    /// Daily price, market cap and volume series for the last `days` days.
    fn market_chart(
        &self,
        asset: &AssetId,
        currency: Currency,
        days: u32,
    ) -> impl Future<Output = Result<HistoricalSeries, SdkError>> + Send;

    /// Detail page data for one asset.
    fn asset_details(
        &self,
        asset: &AssetId,
        currency: Currency,
    ) -> impl Future<Output = Result<AssetDetails, SdkError>> + Send;
}

impl MarketSource for CoinGeckoHttp {
    async fn markets(&self, currency: Currency) -> Result<Vec<Cryptocurrency>, SdkError> {
        let rows = self.get_markets(currency, None, None).await?;
        Ok(market::convert::convert_page(rows))
    }

    async fn market_chart(
        &self,
        asset: &AssetId,
        currency: Currency,
        days: u32,
    ) -> Result<HistoricalSeries, SdkError> {
        let resp = self.get_market_chart(asset, currency, days).await?;
        Ok(resp.into())
    }

    async fn asset_details(
        &self,
        asset: &AssetId,
        currency: Currency,
    ) -> Result<AssetDetails, SdkError> {
        let resp = self.get_coin(asset).await?;
        AssetDetails::try_from((resp, currency))
            .map_err(|e: crate::domain::asset::ValidationError| SdkError::Validation(e.to_string()))
    }
}
