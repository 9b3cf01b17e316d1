//! HTTP client layer: `CoinGeckoHttp` with a uniform request timeout.

pub mod client;

pub use client::CoinGeckoHttp;
