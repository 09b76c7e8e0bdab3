// ABOUTME: Time-series point model feeding the dashboard and progress bar charts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub date: String,
    pub value: u64,
}

impl ProgressPoint {
    pub fn new(date: impl Into<String>, value: u64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Chart rows as ratatui's `BarChart` wants them.
pub fn chart_data(series: &[ProgressPoint]) -> Vec<(&str, u64)> {
    series.iter().map(|p| (p.date.as_str(), p.value)).collect()
}
