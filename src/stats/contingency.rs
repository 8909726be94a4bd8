//! Contingency tabulation of feature values by target classes.

use std::collections::BTreeSet;

use crate::core::data_value::CellValue;
use crate::core::error::Result;
use crate::dataframe::DataFrame;

/// Cross-tabulation of one feature column against a categorical target.
///
/// Rows are the feature's distinct values in sorted order with missing
/// values as their own final row; columns are the target's distinct classes
/// in sorted order. Margin totals are carried for completeness checks but
/// never participate in the rank computation.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    /// Distinct feature values (missing last)
    pub row_labels: Vec<CellValue>,
    /// Distinct target classes
    pub col_labels: Vec<CellValue>,
    /// Observed counts, indexed `[row][col]`
    pub observed: Vec<Vec<usize>>,
    /// Row margin totals
    pub row_totals: Vec<usize>,
    /// Column margin totals
    pub col_totals: Vec<usize>,
    /// Grand total
    pub total: usize,
}

impl ContingencyTable {
    /// Cross-tabulate `feature` against `target`.
    ///
    /// Fails with `ColumnNotFound` when either column is absent. Rows with a
    /// missing feature value are tabulated under the `Null` row, never
    /// dropped.
    pub fn from_columns(df: &DataFrame, feature: &str, target: &str) -> Result<Self> {
        let feature_col = df.column(feature)?;
        let target_col = df.column(target)?;

        let row_set: BTreeSet<CellValue> = feature_col.iter().cloned().collect();
        let col_set: BTreeSet<CellValue> = target_col.iter().cloned().collect();
        let row_labels: Vec<CellValue> = row_set.into_iter().collect();
        let col_labels: Vec<CellValue> = col_set.into_iter().collect();

        let row_index = |cell: &CellValue| {
            row_labels
                .binary_search(cell)
                .expect("feature value must be in its own distinct set")
        };
        let col_index = |cell: &CellValue| {
            col_labels
                .binary_search(cell)
                .expect("class value must be in its own distinct set")
        };

        let mut observed = vec![vec![0usize; col_labels.len()]; row_labels.len()];
        for (feature_cell, target_cell) in feature_col.iter().zip(target_col.iter()) {
            observed[row_index(feature_cell)][col_index(target_cell)] += 1;
        }

        let row_totals: Vec<usize> = observed.iter().map(|row| row.iter().sum()).collect();
        let col_totals: Vec<usize> = (0..col_labels.len())
            .map(|j| observed.iter().map(|row| row[j]).sum())
            .collect();
        let total = row_totals.iter().sum();

        Ok(ContingencyTable {
            row_labels,
            col_labels,
            observed,
            row_totals,
            col_totals,
            total,
        })
    }

    /// Number of observed target classes.
    pub fn n_classes(&self) -> usize {
        self.col_labels.len()
    }

    /// Number of distinct feature values (including the missing row).
    pub fn n_categories(&self) -> usize {
        self.row_labels.len()
    }

    /// Expand one class column into a rank sample: each feature-value row
    /// contributes its row index, repeated by that class's count. Because
    /// rows are in value order, the sample is rank-equivalent to the raw
    /// feature values observed in that class.
    pub fn class_rank_sample(&self, class_idx: usize) -> Vec<f64> {
        let mut sample = Vec::with_capacity(self.col_totals[class_idx]);
        for (row_idx, row) in self.observed.iter().enumerate() {
            for _ in 0..row[class_idx] {
                sample.push(row_idx as f64);
            }
        }
        sample
    }
}
