//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, display-ready)
//! - `wire.rs`: Raw serde structs matching upstream responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with fetch methods and the fallback policy
//!
//! `market` additionally carries the dashboard state container and the demo
//! snapshot; `price_history` carries the synthetic series generator.

pub mod asset;
pub mod market;
pub mod price_history;
