//! Feature screening and distribution visualization for labeled tabular data.
//!
//! `featscope` answers two questions about a labeled dataset: which features
//! statistically discriminate between the classes of a categorical target
//! (via a tie-corrected Kruskal-Wallis rank test over per-feature
//! contingency tables), and how a feature's values are distributed overall
//! and across train/validation/test splits (via comparable bar-chart grids
//! with a shared y-axis scale).
//!
//! # Example
//! ```rust
//! use featscope::{CellValue, DataFrame, Series};
//!
//! let mut df = DataFrame::new();
//! let label: Vec<CellValue> = ["A", "A", "B", "B"].iter().map(|&s| s.into()).collect();
//! let feat: Vec<CellValue> = [1i64, 2, 9, 10].iter().map(|&v| v.into()).collect();
//! df.add_column("label".to_string(), Series::new(label, Some("label".to_string())).unwrap())
//!     .unwrap();
//! df.add_column("feat".to_string(), Series::new(feat, Some("feat".to_string())).unwrap())
//!     .unwrap();
//!
//! let scores = featscope::stats::discriminative_power(&df, &["feat"], "label").unwrap();
//! assert!(scores[0].1 >= 0.0 && scores[0].1 <= 1.0);
//! ```

// Core module with fundamental data structures and error types
pub mod core;

pub mod dataframe;
pub mod output;
pub mod series;
pub mod stats;
pub mod vis;

// Re-export the primary types
pub use crate::core::data_value::CellValue;
pub use crate::core::error::{Error, Result};
pub use crate::dataframe::DataFrame;
pub use crate::output::OutputLayout;
pub use crate::series::Series;
pub use crate::stats::{discriminative_power, ContingencyTable, KruskalResult};
pub use crate::vis::{distribution_grid, ChartGrid, DisplayMode, Panel, PlotSettings};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
