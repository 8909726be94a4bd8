//! Distribution chart grids across dataset partitions.
//!
//! Computes one bar-chart panel per partition (the full dataset, plus
//! train/validation/test splits when a split column is given), with one
//! shared y-axis bound and one category order across every panel so the
//! panels can be compared directly.

use serde::Serialize;

use crate::core::data_value::CellValue;
use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;
use crate::vis::config::DisplayMode;
use crate::vis::frequency::FrequencyTable;

/// Split labels recognized in a split-indicator column.
pub const SPLIT_LABELS: [&str; 3] = ["Train", "Validation", "Test"];

// Headroom above the tallest bar so value labels do not clip.
const COUNT_HEADROOM: f64 = 1.07;

/// One bar-chart panel of a distribution grid.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    /// Partition name, used as the panel title
    pub title: String,
    /// Category labels, left to right
    pub categories: Vec<String>,
    /// Bar heights in the grid's display mode, rounded to 2 decimals
    pub heights: Vec<f64>,
    /// Absolute per-category counts
    pub counts: Vec<usize>,
    /// Row count of the partition
    pub total_rows: usize,
}

/// A renderable grid of distribution panels sharing one y-axis scale.
///
/// Persistence and display are external concerns; the grid is a plain data
/// structure an external rendering or export layer consumes (see
/// [`crate::vis::plotters::render_grid_png`] and [`ChartGrid::to_json`]).
#[derive(Debug, Clone, Serialize)]
pub struct ChartGrid {
    pub target_feature: String,
    pub mode: DisplayMode,
    /// Shared upper y-axis bound applied to every panel
    pub y_max: f64,
    /// Grid rows (1, or 2 when split panels are present)
    pub rows: usize,
    /// Grid columns (1, or 2 when split panels are present)
    pub cols: usize,
    /// Panels in reading order: Total, Train, Validation, Test
    pub panels: Vec<Panel>,
}

impl ChartGrid {
    /// Serialize the grid definition for an external consumer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the distribution chart grid for `target_feature`.
///
/// `display_mode` must be `"count"` or `"percent"`; any other value logs a
/// warning and returns `Ok(None)` without rendering anything. With a
/// `split` column the grid has four panels (Total plus the three recognized
/// splits, a split matching zero rows becoming an empty panel); without one
/// it has a single Total panel. `value_order`, when given, fixes the
/// left-to-right category order on every panel, keeping categories with
/// zero occurrences; otherwise categories follow the natural ordering of
/// the unfiltered dataset's values.
pub fn distribution_grid(
    df: &DataFrame,
    target_feature: &str,
    display_mode: &str,
    split: Option<&str>,
    value_order: Option<&[CellValue]>,
) -> Result<Option<ChartGrid>> {
    let mode = match DisplayMode::parse(display_mode) {
        Some(mode) => mode,
        None => {
            log::warn!(
                "display_mode must be \"count\" or \"percent\", got {:?}; skipping render",
                display_mode
            );
            return Ok(None);
        }
    };

    if !df.contains_column(target_feature) {
        return Err(Error::ColumnNotFound(target_feature.to_string()));
    }

    let partitions = build_partitions(df, split)?;

    // Shared axis bound and category order both come from the unfiltered
    // dataset, before any panel is built.
    let total_freq = FrequencyTable::from_column(df, target_feature)?;
    let y_max = match mode {
        DisplayMode::Count => total_freq.max_count() as f64 * COUNT_HEADROOM,
        DisplayMode::Percent => 1.0,
    };
    let order: Vec<CellValue> = match value_order {
        Some(order) => order.to_vec(),
        None => total_freq.categories.clone(),
    };

    let mut panels = Vec::with_capacity(partitions.len());
    for (label, frame) in &partitions {
        let freq = FrequencyTable::from_column(frame, target_feature)?.reindex(&order);
        panels.push(Panel {
            title: label.clone(),
            categories: freq.categories.iter().map(|c| c.to_string()).collect(),
            heights: freq.heights(mode),
            counts: freq.counts.clone(),
            total_rows: freq.total_rows,
        });
    }

    let (rows, cols) = if panels.len() > 1 { (2, 2) } else { (1, 1) };

    Ok(Some(ChartGrid {
        target_feature: target_feature.to_string(),
        mode,
        y_max,
        rows,
        cols,
        panels,
    }))
}

// Partition list: the unfiltered frame first, then the three named splits
// when a split column is supplied.
fn build_partitions(df: &DataFrame, split: Option<&str>) -> Result<Vec<(String, DataFrame)>> {
    let mut partitions = vec![("Total".to_string(), df.clone())];
    if let Some(split_col) = split {
        if !df.contains_column(split_col) {
            return Err(Error::ColumnNotFound(split_col.to_string()));
        }
        for label in SPLIT_LABELS {
            let sub = df.filter_eq(split_col, &CellValue::from(label))?;
            partitions.push((label.to_string(), sub));
        }
    }
    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_split() -> DataFrame {
        // 6 rows: flag a,a,b over Train, then a,b,b over Validation; no Test rows
        let flag = ["a", "a", "b", "a", "b", "b"]
            .iter()
            .map(|&s| CellValue::from(s))
            .collect();
        let split = ["Train", "Train", "Train", "Validation", "Validation", "Validation"]
            .iter()
            .map(|&s| CellValue::from(s))
            .collect();
        DataFrame::from_columns(vec![
            ("flag".to_string(), flag),
            ("split".to_string(), split),
        ])
        .unwrap()
    }

    #[test]
    fn test_partition_order_is_fixed() {
        let df = frame_with_split();
        let grid = distribution_grid(&df, "flag", "count", Some("split"), None)
            .unwrap()
            .unwrap();
        let titles: Vec<&str> = grid.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Total", "Train", "Validation", "Test"]);
        assert_eq!((grid.rows, grid.cols), (2, 2));
    }

    #[test]
    fn test_empty_split_renders_zero_bars() {
        let df = frame_with_split();
        let grid = distribution_grid(&df, "flag", "count", Some("split"), None)
            .unwrap()
            .unwrap();
        let test_panel = &grid.panels[3];
        assert_eq!(test_panel.total_rows, 0);
        assert_eq!(test_panel.categories, vec!["a", "b"]);
        assert_eq!(test_panel.heights, vec![0.0, 0.0]);
    }

    #[test]
    fn test_unknown_mode_skips_render() {
        let df = frame_with_split();
        let grid = distribution_grid(&df, "flag", "frequency", None, None).unwrap();
        assert!(grid.is_none());
    }

    #[test]
    fn test_missing_columns_fail() {
        let df = frame_with_split();
        assert!(matches!(
            distribution_grid(&df, "nope", "count", None, None),
            Err(Error::ColumnNotFound(_))
        ));
        assert!(matches!(
            distribution_grid(&df, "flag", "count", Some("nope"), None),
            Err(Error::ColumnNotFound(_))
        ));
    }
}
