//! Column-oriented 2-dimensional data structures.
//!
//! The frame here is deliberately minimal: named-column lookup, exact-match
//! row filtering and per-value count aggregation are the only capabilities
//! the analysis layers consume. Loading data into a frame is the caller's
//! concern.

use std::collections::{BTreeMap, HashMap};

use crate::core::data_value::CellValue;
use crate::core::error::{Error, Result};
use crate::series::Series;

/// DataFrame struct: column-oriented 2D data structure
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    columns: HashMap<String, Series<CellValue>>,
    column_order: Vec<String>,
    row_count: usize,
}

impl DataFrame {
    /// Create a new empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DataFrame from (name, values) pairs, preserving their order.
    pub fn from_columns(columns: Vec<(String, Vec<CellValue>)>) -> Result<Self> {
        let mut df = Self::new();
        for (name, values) in columns {
            let series = Series::new(values, Some(name.clone()))?;
            df.add_column(name, series)?;
        }
        Ok(df)
    }

    /// Check if the DataFrame contains a column with the given name
    pub fn contains_column(&self, column_name: &str) -> bool {
        self.columns.contains_key(column_name)
    }

    /// Get the number of rows in the DataFrame
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns in the DataFrame
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    /// Add a column to the DataFrame
    pub fn add_column(&mut self, column_name: String, series: Series<CellValue>) -> Result<()> {
        if self.contains_column(&column_name) {
            return Err(Error::DuplicateColumnName(column_name));
        }

        let series_len = series.len();
        if !self.columns.is_empty() && series_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: series_len,
            });
        }

        self.columns.insert(column_name.clone(), series);
        self.column_order.push(column_name);

        if self.row_count == 0 {
            self.row_count = series_len;
        }

        Ok(())
    }

    /// Get a column from the DataFrame
    pub fn column(&self, column_name: &str) -> Result<&Series<CellValue>> {
        self.columns
            .get(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))
    }

    /// Filter rows by exact match on one column, keeping every column.
    ///
    /// A value that matches no row yields an empty frame, not an error.
    pub fn filter_eq(&self, column_name: &str, value: &CellValue) -> Result<Self> {
        let column = self.column(column_name)?;
        let keep: Vec<usize> = column
            .iter()
            .enumerate()
            .filter(|(_, cell)| *cell == value)
            .map(|(i, _)| i)
            .collect();

        let mut filtered = Self::new();
        filtered.row_count = keep.len();
        for name in &self.column_order {
            let series = &self.columns[name];
            let values: Vec<CellValue> = keep
                .iter()
                .map(|&i| series.values()[i].clone())
                .collect();
            filtered
                .columns
                .insert(name.clone(), Series::new(values, Some(name.clone()))?);
            filtered.column_order.push(name.clone());
        }
        Ok(filtered)
    }

    /// Count occurrences of each distinct value in a column, sorted by
    /// value with missing values last. Missing values count as their own
    /// category.
    pub fn value_counts(&self, column_name: &str) -> Result<Vec<(CellValue, usize)>> {
        let column = self.column(column_name)?;
        let mut counts: BTreeMap<CellValue, usize> = BTreeMap::new();
        for cell in column.iter() {
            *counts.entry(cell.clone()).or_insert(0) += 1;
        }
        Ok(counts.into_iter().collect())
    }
}
