//! Non-parametric statistical tests
//!
//! Distribution-free tests that don't assume specific probability
//! distributions for the underlying data. The feature-screening entry point
//! is [`discriminative_power`], a tie-corrected Kruskal-Wallis analysis run
//! per candidate feature.

use serde::Serialize;

use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;
use crate::stats::contingency::ContingencyTable;
use crate::stats::distributions::{ChiSquared, Distribution};

/// Kruskal-Wallis test result
#[derive(Debug, Clone, Serialize)]
pub struct KruskalResult {
    /// Tie-corrected H statistic
    pub statistic: f64,
    /// p-value from the chi-squared reference distribution
    pub p_value: f64,
    /// Degrees of freedom (number of groups minus one)
    pub degrees_of_freedom: f64,
}

/// Assign ranks to values, averaging over ties (1-based ranking).
pub fn assign_ranks(data: &[f64]) -> Vec<f64> {
    let n = data.len();

    let mut indexed_data: Vec<(usize, f64)> =
        data.iter().enumerate().map(|(i, &val)| (i, val)).collect();
    indexed_data.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks = vec![0.0; n];

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && (indexed_data[j].1 - indexed_data[i].1).abs() < 1e-10 {
            j += 1;
        }

        // Average rank for tied values
        let avg_rank = (i + j - 1) as f64 / 2.0 + 1.0;
        for k in i..j {
            ranks[indexed_data[k].0] = avg_rank;
        }

        i = j;
    }

    ranks
}

// Sum of t^3 - t over runs of tied values, for the tie correction factor.
fn tie_term(pooled: &[f64]) -> f64 {
    let mut sorted = pooled.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut term = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j < sorted.len() && (sorted[j] - sorted[i]).abs() < 1e-10 {
            j += 1;
        }
        let t = (j - i) as f64;
        term += t * t * t - t;
        i = j;
    }
    term
}

/// Kruskal-Wallis test (non-parametric one-way analysis of variance).
///
/// Pools all values, assigns average ranks, computes the H statistic from the
/// per-group rank sums, corrects for ties and maps the statistic to a
/// p-value via the chi-squared distribution with `k - 1` degrees of freedom.
///
/// Errors on fewer than two groups, an empty group, or a pooled sample whose
/// values are all identical (the tie correction collapses to zero and the
/// statistic is undefined).
pub fn kruskal_wallis_test(groups: &[&[f64]]) -> Result<KruskalResult> {
    if groups.len() < 2 {
        return Err(Error::InsufficientData(
            "At least two groups are required".into(),
        ));
    }
    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(Error::InsufficientData(format!("Group {} is empty", i)));
        }
    }

    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.len()).sum();

    // Pool all values with group labels
    let mut pooled: Vec<f64> = Vec::with_capacity(n_total);
    let mut labels: Vec<usize> = Vec::with_capacity(n_total);
    for (group_idx, group) in groups.iter().enumerate() {
        for &value in group.iter() {
            pooled.push(value);
            labels.push(group_idx);
        }
    }

    let ranks = assign_ranks(&pooled);

    // Rank sums per group
    let mut rank_sums = vec![0.0; k];
    for (rank, &group_idx) in ranks.iter().zip(labels.iter()) {
        rank_sums[group_idx] += rank;
    }

    let n = n_total as f64;
    let mut h_statistic = 0.0;
    for (group, &rank_sum) in groups.iter().zip(rank_sums.iter()) {
        h_statistic += rank_sum * rank_sum / group.len() as f64;
    }
    h_statistic = 12.0 / (n * (n + 1.0)) * h_statistic - 3.0 * (n + 1.0);

    // Tie correction
    let correction = 1.0 - tie_term(&pooled) / (n * n * n - n);
    if correction <= 0.0 {
        return Err(Error::InsufficientData(
            "All pooled values are identical".into(),
        ));
    }
    h_statistic /= correction;

    let df = (k - 1) as f64;
    let chi_sq = ChiSquared::new(df)?;
    let p_value = (1.0 - chi_sq.cdf(h_statistic)).clamp(0.0, 1.0);

    Ok(KruskalResult {
        statistic: h_statistic,
        p_value,
        degrees_of_freedom: df,
    })
}

/// Score each candidate feature's power to discriminate between the classes
/// of a categorical target.
///
/// For each requested feature a contingency table of feature value by class
/// is built (missing feature values included as their own category), each
/// class column is expanded into a rank sample, and the tie-corrected
/// Kruskal-Wallis test maps the result to a p-value. Lower p-values indicate
/// stronger evidence that the feature's value distribution differs across
/// classes; threshold policy is the caller's concern.
///
/// The returned pairs preserve the caller-supplied feature order. A missing
/// feature or target column fails immediately with `ColumnNotFound`.
/// Degenerate inputs for a single feature (fewer than two observed classes,
/// a class with no observations, a single distinct feature value) log a
/// warning and report `f64::NAN` for that feature; computation continues for
/// the rest.
pub fn discriminative_power(
    df: &DataFrame,
    features: &[&str],
    target: &str,
) -> Result<Vec<(String, f64)>> {
    if !df.contains_column(target) {
        return Err(Error::ColumnNotFound(target.to_string()));
    }
    for &feature in features {
        if !df.contains_column(feature) {
            return Err(Error::ColumnNotFound(feature.to_string()));
        }
    }

    let mut result = Vec::with_capacity(features.len());
    for &feature in features {
        let table = ContingencyTable::from_columns(df, feature, target)?;
        result.push((feature.to_string(), feature_p_value(feature, &table)));
    }
    Ok(result)
}

fn feature_p_value(feature: &str, table: &ContingencyTable) -> f64 {
    if table.n_classes() < 2 {
        log::warn!(
            "target has {} observed class(es); p-value for feature {:?} is undefined",
            table.n_classes(),
            feature
        );
        return f64::NAN;
    }

    let samples: Vec<Vec<f64>> = (0..table.n_classes())
        .map(|j| table.class_rank_sample(j))
        .collect();
    let groups: Vec<&[f64]> = samples.iter().map(|s| s.as_slice()).collect();

    match kruskal_wallis_test(&groups) {
        Ok(result) => result.p_value,
        Err(err) => {
            log::warn!(
                "degenerate contingency table for feature {:?}: {}; p-value is undefined",
                feature,
                err
            );
            f64::NAN
        }
    }
}
