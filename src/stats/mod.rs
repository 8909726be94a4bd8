//! Statistical functionality for feature screening.
//!
//! The central entry point is [`discriminative_power`], which scores each
//! candidate feature's ability to separate the classes of a categorical
//! target. Supporting pieces are the contingency tabulation, the
//! tie-corrected Kruskal-Wallis rank test and the reference chi-squared
//! distribution used to convert its statistic into a p-value.

pub mod contingency;
pub mod distributions;
pub mod nonparametric;

pub use contingency::ContingencyTable;
pub use distributions::{ChiSquared, Distribution, StandardNormal};
pub use nonparametric::{assign_ranks, discriminative_power, kruskal_wallis_test, KruskalResult};
