//! Assets sub-client: per-asset details with demo fallback.

use super::AssetDetails;
use crate::client::CryptoClient;
use crate::domain::market::demo;
use crate::error::SdkError;
use crate::shared::{AssetId, Currency};
use crate::source::MarketSource;

/// Sub-client for asset detail operations.
pub struct Assets<'a, S> {
    pub(crate) client: &'a CryptoClient<S>,
}

impl<'a, S: MarketSource> Assets<'a, S> {
    /// Fetch details for one asset.
    ///
    /// On failure, assets that are part of the bundled demo snapshot are
    /// served from it (synthetic provenance); any other asset surfaces the
    /// error.
    pub async fn get(&self, asset: &AssetId, currency: Currency) -> Result<AssetDetails, SdkError> {
        match self.get_live(asset, currency).await {
            Ok(details) => Ok(details),
            Err(e) => match demo::demo_cryptocurrency(asset) {
                Some(listing) => {
                    tracing::warn!(
                        asset = %asset,
                        error = %e,
                        "Asset details unavailable, using demo listing"
                    );
                    Ok(AssetDetails::from_listing(&listing, currency))
                }
                None => {
                    tracing::warn!(asset = %asset, error = %e, "Asset details unavailable");
                    Err(e)
                }
            },
        }
    }

    /// Fetch details from the source only, surfacing errors.
    pub async fn get_live(
        &self,
        asset: &AssetId,
        currency: Currency,
    ) -> Result<AssetDetails, SdkError> {
        self.client.source.asset_details(asset, currency).await
    }
}
