//! Configuration for visualization functionality

use serde::{Deserialize, Serialize};

/// What a panel's y-axis measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Absolute per-category counts
    Count,
    /// Per-category proportions of the partition
    Percent,
}

impl DisplayMode {
    /// Parse the caller-facing mode string. Anything other than `"count"`
    /// or `"percent"` is out of domain and yields `None`; callers warn and
    /// skip rendering rather than substituting a default.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "count" => Some(DisplayMode::Count),
            "percent" => Some(DisplayMode::Percent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Count => "count",
            DisplayMode::Percent => "percent",
        }
    }
}

/// Plot settings for grid rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSettings {
    /// Width of the figure (pixels)
    pub width: u32,
    /// Height of the figure (pixels)
    pub height: u32,
    /// Bar color
    pub color: (u8, u8, u8),
    /// Show grid lines
    pub show_grid: bool,
    /// Rotate category labels on the x-axis
    pub rotate_labels: bool,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            width: 1000,
            height: 1000,
            color: (0, 123, 255),
            show_grid: true,
            rotate_labels: true,
        }
    }
}
