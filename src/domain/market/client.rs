//! Markets sub-client: ranked list with demo fallback.

use super::{Cryptocurrency, MarketSnapshot};
use crate::client::CryptoClient;
use crate::error::SdkError;
use crate::shared::Currency;
use crate::source::MarketSource;

/// Sub-client for market list operations.
pub struct Markets<'a, S> {
    pub(crate) client: &'a CryptoClient<S>,
}

impl<'a, S: MarketSource> Markets<'a, S> {
    /// Fetch the top assets by market cap. Never fails: on any upstream error
    /// the bundled demo snapshot is returned with an advisory message.
    pub async fn list_or_demo(&self, currency: Currency) -> MarketSnapshot {
        match self.list(currency).await {
            Ok(list) => MarketSnapshot::live(list),
            Err(e) => {
                tracing::warn!(
                    currency = %currency,
                    error = %e,
                    "Market list unavailable, using demo data"
                );
                MarketSnapshot::demo()
            }
        }
    }

    /// Fetch the top assets by market cap, surfacing errors.
    pub async fn list(&self, currency: Currency) -> Result<Vec<Cryptocurrency>, SdkError> {
        self.client.source.markets(currency).await
    }
}
