//! Module providing data visualization functionality
//!
//! Builds comparable per-partition distribution charts for a feature: the
//! data side (`distribution`, `frequency`) computes renderable chart-grid
//! definitions, and the optional `plotters` backend draws them to PNG.

pub mod config;
pub mod distribution;
pub mod frequency;
pub mod plotters;

pub use self::config::{DisplayMode, PlotSettings};
pub use self::distribution::{distribution_grid, ChartGrid, Panel, SPLIT_LABELS};
pub use self::frequency::FrequencyTable;
pub use self::plotters::render_grid_png;
