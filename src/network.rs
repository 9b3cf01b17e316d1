//! Network constants for the upstream market-data API.

use std::time::Duration;

/// Default REST API base URL (CoinGecko v3).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Timeout applied to every upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the optional demo API key.
pub const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Page size requested from the markets endpoint.
pub const MARKETS_PER_PAGE: u32 = 100;
