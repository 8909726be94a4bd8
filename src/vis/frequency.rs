//! Per-partition frequency tables.

use serde::Serialize;

use crate::core::data_value::CellValue;
use crate::core::error::Result;
use crate::dataframe::DataFrame;
use crate::vis::config::DisplayMode;

/// Frequency breakdown of a feature's values within one partition.
///
/// Categories are sorted by value with missing values last; each carries its
/// absolute count and its proportion of the partition's rows. Counts always
/// sum to the partition's row count; proportions sum to 1 within
/// floating-point tolerance (both trivially for an empty partition).
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyTable {
    pub categories: Vec<CellValue>,
    pub counts: Vec<usize>,
    pub proportions: Vec<f64>,
    /// Row count of the partition the table was computed from
    pub total_rows: usize,
}

impl FrequencyTable {
    /// Tabulate one column of `df`, missing values included as their own
    /// category.
    pub fn from_column(df: &DataFrame, column: &str) -> Result<Self> {
        let pairs = df.value_counts(column)?;
        let total_rows = df.row_count();

        let mut categories = Vec::with_capacity(pairs.len());
        let mut counts = Vec::with_capacity(pairs.len());
        let mut proportions = Vec::with_capacity(pairs.len());
        for (value, count) in pairs {
            categories.push(value);
            counts.push(count);
            proportions.push(count as f64 / total_rows as f64);
        }

        Ok(FrequencyTable {
            categories,
            counts,
            proportions,
            total_rows,
        })
    }

    /// Re-key the table to an explicit category order. Categories absent
    /// from this partition are kept at zero rather than dropped.
    pub fn reindex(&self, order: &[CellValue]) -> FrequencyTable {
        let mut counts = Vec::with_capacity(order.len());
        let mut proportions = Vec::with_capacity(order.len());
        for wanted in order {
            match self.categories.iter().position(|c| c == wanted) {
                Some(i) => {
                    counts.push(self.counts[i]);
                    proportions.push(self.proportions[i]);
                }
                None => {
                    counts.push(0);
                    proportions.push(0.0);
                }
            }
        }
        FrequencyTable {
            categories: order.to_vec(),
            counts,
            proportions,
            total_rows: self.total_rows,
        }
    }

    /// Bar heights for the selected mode, rounded to 2 decimal places.
    pub fn heights(&self, mode: DisplayMode) -> Vec<f64> {
        let raw: Vec<f64> = match mode {
            DisplayMode::Count => self.counts.iter().map(|&c| c as f64).collect(),
            DisplayMode::Percent => self.proportions.clone(),
        };
        raw.iter().map(|v| (v * 100.0).round() / 100.0).collect()
    }

    /// Largest single-category count in the table.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
