//! Synthetic daily series used when the market chart endpoint fails.
//!
//! A random walk: price and market cap share one daily return so their ratio
//! stays constant, volume gets its own jitter.

use super::{HistoricalSeries, LinePoint};
use crate::shared::Provenance;
use rand::Rng;

pub const DAY_MS: i64 = 86_400_000;

const BASE_PRICE_MIN: f64 = 50_000.0;
const BASE_PRICE_SPAN: f64 = 10_000.0;
const BASE_MARKET_CAP: f64 = 1e12;
const BASE_VOLUME: f64 = 5e10;
/// Daily return bound for price and market cap (±2.5%).
const MAX_DAILY_RETURN: f64 = 0.025;
/// Daily multiplicative jitter bound for volume (±10%).
const MAX_VOLUME_JITTER: f64 = 0.1;

/// Generate `days + 1` daily points ending now.
pub fn synthesize(days: u32) -> HistoricalSeries {
    let now = chrono::Utc::now().timestamp_millis();
    synthesize_with(days, now, &mut rand::thread_rng())
}

/// Generate `days + 1` daily points, the oldest `days` full days before
/// `now_ms` and the newest at `now_ms`.
pub fn synthesize_with<R: Rng + ?Sized>(days: u32, now_ms: i64, rng: &mut R) -> HistoricalSeries {
    let capacity = days as usize + 1;
    let mut prices = Vec::with_capacity(capacity);
    let mut market_caps = Vec::with_capacity(capacity);
    let mut total_volumes = Vec::with_capacity(capacity);

    let mut price = BASE_PRICE_MIN + rng.gen::<f64>() * BASE_PRICE_SPAN;
    let mut market_cap = BASE_MARKET_CAP;
    let mut volume = BASE_VOLUME;

    for i in (0..=i64::from(days)).rev() {
        let time = now_ms - i * DAY_MS;

        let change = rng.gen_range(-MAX_DAILY_RETURN..MAX_DAILY_RETURN);
        price *= 1.0 + change;
        market_cap *= 1.0 + change;
        volume *= 1.0 + rng.gen_range(-MAX_VOLUME_JITTER..MAX_VOLUME_JITTER);

        prices.push(LinePoint::new(time, price));
        market_caps.push(LinePoint::new(time, market_cap));
        total_volumes.push(LinePoint::new(time, volume));
    }

    HistoricalSeries {
        prices,
        market_caps,
        total_volumes,
        provenance: Provenance::Synthetic,
    }
}
