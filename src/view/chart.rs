//! Line chart series built from price history.

use crate::domain::price_history::HistoricalSeries;
use crate::shared::fmt::currency::format_currency;
use crate::shared::{Currency, Provenance};
use chrono::DateTime;

/// Line color when the caller does not pick one.
pub const DEFAULT_CHART_COLOR: &str = "#7c3aed";

/// Hex alpha suffix appended to the line color for the area fill.
const FILL_ALPHA: &str = "20";

/// One dataset plus its x-axis labels, ready for a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend text, `"{name} Price"`.
    pub label: String,
    /// One `MMM d` label per point, in UTC.
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    /// Area fill under the line; off in comparison charts.
    pub fill: bool,
    pub provenance: Provenance,
}

impl ChartSeries {
    pub fn from_history(
        series: &HistoricalSeries,
        name: &str,
        color: Option<&str>,
        compare: bool,
    ) -> Self {
        let color = color.unwrap_or(DEFAULT_CHART_COLOR);
        Self {
            label: format!("{name} Price"),
            labels: series.prices.iter().map(|p| date_label(p.time)).collect(),
            data: series.prices.iter().map(|p| p.value).collect(),
            border_color: color.to_string(),
            background_color: format!("{color}{FILL_ALPHA}"),
            fill: !compare,
            provenance: series.provenance,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Hover text for one point, e.g. `Bitcoin Price: $61,245.32`.
    pub fn tooltip_label(&self, value: f64, currency: Currency) -> String {
        format!("{}: {}", self.label, axis_label(value, currency))
    }
}

/// Y-axis tick text.
pub fn axis_label(value: f64, currency: Currency) -> String {
    format_currency(value, currency.as_str())
}

/// `Apr 3` style label for a millisecond timestamp.
fn date_label(time_ms: i64) -> String {
    DateTime::from_timestamp_millis(time_ms)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}
