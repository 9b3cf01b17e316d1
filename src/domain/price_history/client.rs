//! Price history sub-client: market chart queries with synthetic fallback.

use super::{synthetic, HistoricalSeries};
use crate::client::CryptoClient;
use crate::error::SdkError;
use crate::shared::{AssetId, Currency};
use crate::source::MarketSource;

/// Sub-client for historical chart data.
pub struct PriceHistoryClient<'a, S> {
    pub(crate) client: &'a CryptoClient<S>,
}

impl<'a, S: MarketSource> PriceHistoryClient<'a, S> {
    /// Fetch `days` of daily history. Never fails: any upstream error yields a
    /// synthetic series (check [`HistoricalSeries::provenance`]).
    pub async fn get(&self, asset: &AssetId, days: u32, currency: Currency) -> HistoricalSeries {
        match self.get_live(asset, days, currency).await {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!(
                    asset = %asset,
                    days,
                    currency = %currency,
                    error = %e,
                    "Market chart unavailable, using synthetic series"
                );
                synthetic::synthesize(days)
            }
        }
    }

    /// Fetch history from the source only, surfacing errors.
    pub async fn get_live(
        &self,
        asset: &AssetId,
        days: u32,
        currency: Currency,
    ) -> Result<HistoricalSeries, SdkError> {
        self.client.source.market_chart(asset, currency, days).await
    }
}
