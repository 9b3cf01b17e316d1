//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the upstream API uses, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;

pub use fmt::currency::{currency_symbol, format_compact, format_currency};

use crate::error::SdkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Stable lowercase slug identifying a cryptocurrency (e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Quote currency selectable in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Inr,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
    ];

    /// Lowercase code as sent in `vs_currency`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Inr => "inr",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Jpy => "jpy",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SdkError::Validation(format!("unsupported currency: {s}")))
    }
}

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Chart windows offered by the timeframe selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "24h")]
    Day1,
    #[serde(rename = "7d")]
    Day7,
    #[default]
    #[serde(rename = "30d")]
    Day30,
    #[serde(rename = "90d")]
    Day90,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "5y")]
    Year5,
}

impl Timeframe {
    pub const ALL: [Timeframe; 6] = [
        Timeframe::Day1,
        Timeframe::Day7,
        Timeframe::Day30,
        Timeframe::Day90,
        Timeframe::Year1,
        Timeframe::Year5,
    ];

    pub fn days(&self) -> u32 {
        match self {
            Timeframe::Day1 => 1,
            Timeframe::Day7 => 7,
            Timeframe::Day30 => 30,
            Timeframe::Day90 => 90,
            Timeframe::Year1 => 365,
            Timeframe::Year5 => 1825,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Day1 => "24h",
            Timeframe::Day7 => "7d",
            Timeframe::Day30 => "30d",
            Timeframe::Day90 => "90d",
            Timeframe::Year1 => "1y",
            Timeframe::Year5 => "5y",
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Timeframe::ALL.into_iter().find(|t| t.days() == days)
    }
}

// ─── Provenance ──────────────────────────────────────────────────────────────

/// Where a piece of market data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Returned by the upstream API.
    Live,
    /// Bundled demo data or a locally generated series.
    Synthetic,
}

impl Provenance {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Provenance::Synthetic)
    }
}
