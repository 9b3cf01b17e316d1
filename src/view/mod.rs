//! Display models for the dashboard pages.
//!
//! Everything here is a pure projection of domain data into the strings and
//! series a renderer needs. No I/O happens in this layer except
//! [`compare::Comparison::load`], which goes through the store.

pub mod card;
pub mod chart;
pub mod compare;
pub mod details;
pub mod overview;
pub mod table;
pub mod ticker;

pub use card::CryptoCard;
pub use chart::ChartSeries;
pub use compare::{CompareDataset, Comparison, Insight};
pub use details::{DetailStats, SupplyPanel};
pub use overview::MarketOverview;
pub use table::{market_table, top_cards, MarketRow};
pub use ticker::{ticker_items, TickerItem};

use crate::shared::fmt::currency::format_percent_abs;

/// Arrow direction for a percentage change. Zero counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Direction::Up)
    }
}

/// A titled value with an optional change badge.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: Option<f64>,
}

impl StatCard {
    pub fn new(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            change: None,
        }
    }

    pub fn with_change(mut self, change: Option<f64>) -> Self {
        self.change = change;
        self
    }

    pub fn direction(&self) -> Option<Direction> {
        self.change.map(Direction::of)
    }

    /// Badge text, e.g. `2.35%` next to an arrow.
    pub fn change_label(&self) -> Option<String> {
        self.change.map(format_percent_abs)
    }
}
