use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use featscope::stats::discriminative_power;
use featscope::{CellValue, DataFrame, Error, Series};

fn frame_from(columns: Vec<(&str, Vec<CellValue>)>) -> DataFrame {
    DataFrame::from_columns(
        columns
            .into_iter()
            .map(|(name, values)| (name.to_string(), values))
            .collect(),
    )
    .unwrap()
}

fn str_col(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|&s| CellValue::from(s)).collect()
}

fn int_col(values: &[i64]) -> Vec<CellValue> {
    values.iter().map(|&v| CellValue::from(v)).collect()
}

// 100 rows, binary target, feature distribution identical in both classes:
// 30 "a" and 20 "b" per class.
fn balanced_binary_frame() -> DataFrame {
    let mut label = Vec::new();
    let mut feat = Vec::new();
    for class in ["A", "B"] {
        for _ in 0..30 {
            label.push(CellValue::from(class));
            feat.push(CellValue::from("a"));
        }
        for _ in 0..20 {
            label.push(CellValue::from(class));
            feat.push(CellValue::from("b"));
        }
    }
    frame_from(vec![("label", label), ("feat", feat)])
}

// 100 rows, 3 classes, each class on a disjoint range of feature values.
fn disjoint_three_class_frame() -> DataFrame {
    let mut label = Vec::new();
    let mut feat = Vec::new();
    for v in 1..=33 {
        label.push(CellValue::from("A"));
        feat.push(CellValue::from(v as i64));
    }
    for v in 34..=66 {
        label.push(CellValue::from("B"));
        feat.push(CellValue::from(v as i64));
    }
    for v in 67..=100 {
        label.push(CellValue::from("C"));
        feat.push(CellValue::from(v as i64));
    }
    frame_from(vec![("label", label), ("feat", feat)])
}

#[test]
fn p_values_stay_in_unit_interval() {
    let df = frame_from(vec![
        ("label", str_col(&["A", "A", "A", "B", "B", "B", "C", "C", "C"])),
        ("f1", int_col(&[1, 2, 3, 2, 3, 4, 3, 4, 5])),
        ("f2", str_col(&["x", "y", "x", "y", "x", "y", "x", "y", "x"])),
    ]);

    let scores = discriminative_power(&df, &["f1", "f2"], "label").unwrap();
    assert_eq!(scores.len(), 2);
    for (name, p) in &scores {
        assert!(
            (0.0..=1.0).contains(p),
            "p-value for {} out of range: {}",
            name,
            p
        );
    }
}

#[test]
fn caller_order_is_preserved() {
    let df = frame_from(vec![
        ("label", str_col(&["A", "B", "A", "B"])),
        ("alpha", int_col(&[1, 2, 3, 4])),
        ("beta", int_col(&[4, 3, 2, 1])),
        ("gamma", int_col(&[1, 1, 2, 2])),
    ]);

    let scores = discriminative_power(&df, &["gamma", "alpha", "beta"], "label").unwrap();
    let names: Vec<&str> = scores.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["gamma", "alpha", "beta"]);
}

#[test]
fn row_permutation_does_not_change_p_values() {
    let df = disjoint_three_class_frame();
    let baseline = discriminative_power(&df, &["feat"], "label").unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let mut indices: Vec<usize> = (0..df.row_count()).collect();
    indices.shuffle(&mut rng);

    let mut shuffled = DataFrame::new();
    for name in df.column_names() {
        let column = df.column(name).unwrap();
        let values: Vec<CellValue> = indices
            .iter()
            .map(|&i| column.values()[i].clone())
            .collect();
        shuffled
            .add_column(name.clone(), Series::new(values, Some(name.clone())).unwrap())
            .unwrap();
    }

    let permuted = discriminative_power(&shuffled, &["feat"], "label").unwrap();
    assert!((baseline[0].1 - permuted[0].1).abs() < 1e-12);
}

#[test]
fn p_values_are_roughly_uniform_under_the_null() {
    // Feature drawn independently of the label, so no discrimination
    // exists and the p-value sample should be close to uniform on [0, 1].
    let mut rng = StdRng::seed_from_u64(42);
    let categories = ["a", "b", "c", "d", "e", "f"];

    let mut p_values = Vec::with_capacity(300);
    for _ in 0..300 {
        let mut label = Vec::with_capacity(120);
        let mut feat = Vec::with_capacity(120);
        for _ in 0..120 {
            label.push(CellValue::from(if rng.gen_bool(0.5) { "A" } else { "B" }));
            feat.push(CellValue::from(categories[rng.gen_range(0..categories.len())]));
        }
        let df = frame_from(vec![("label", label), ("feat", feat)]);
        let p = discriminative_power(&df, &["feat"], "label").unwrap()[0].1;
        assert!(p.is_finite(), "null draw produced a non-finite p-value: {}", p);
        p_values.push(p);
    }

    let n = p_values.len() as f64;
    let mean = p_values.iter().sum::<f64>() / n;
    assert!((mean - 0.5).abs() < 0.08, "mean p-value {} far from 0.5", mean);

    for threshold in [0.2, 0.5, 0.8] {
        let frac = p_values.iter().filter(|&&p| p < threshold).count() as f64 / n;
        assert!(
            (frac - threshold).abs() < 0.1,
            "frac(p < {}) = {} far from nominal",
            threshold,
            frac
        );
    }
}

#[test]
fn identical_distribution_yields_large_p_value() {
    let df = balanced_binary_frame();
    let scores = discriminative_power(&df, &["feat"], "label").unwrap();
    let p = scores[0].1;
    assert!(p >= 0.5, "expected no significant difference, got p = {}", p);
}

#[test]
fn perfectly_separating_feature_yields_tiny_p_value() {
    let df = disjoint_three_class_frame();
    let scores = discriminative_power(&df, &["feat"], "label").unwrap();
    let p = scores[0].1;
    assert!(p < 1e-3, "expected strong separation, got p = {}", p);
}

#[test]
fn missing_feature_value_is_its_own_category() {
    let mut label = str_col(&["A"; 10]);
    label.extend(str_col(&["B"; 10]));
    // Class A observes real values, class B is entirely missing.
    let mut feat: Vec<CellValue> = int_col(&[1, 2, 3, 4, 5, 1, 2, 3, 4, 5]);
    feat.extend(std::iter::repeat(CellValue::Null).take(10));

    let df = frame_from(vec![("label", label), ("feat", feat)]);
    let scores = discriminative_power(&df, &["feat"], "label").unwrap();
    let p = scores[0].1;
    // Missing is a strongly class-B category here, so the feature separates.
    assert!(p < 0.05, "got p = {}", p);
}

#[test]
fn absent_columns_fail_fast() {
    let df = balanced_binary_frame();
    assert!(matches!(
        discriminative_power(&df, &["nope"], "label"),
        Err(Error::ColumnNotFound(_))
    ));
    assert!(matches!(
        discriminative_power(&df, &["feat"], "nope"),
        Err(Error::ColumnNotFound(_))
    ));
}

#[test]
fn degenerate_inputs_surface_as_nan_and_do_not_stop_the_rest() {
    // Surface the degenerate-input warnings under RUST_LOG
    let _ = env_logger::builder().is_test(true).try_init();

    let df = frame_from(vec![
        ("label", str_col(&["A", "A", "B", "B"])),
        ("constant", str_col(&["same", "same", "same", "same"])),
        ("useful", int_col(&[1, 2, 9, 10])),
    ]);

    let scores = discriminative_power(&df, &["constant", "useful"], "label").unwrap();
    assert!(scores[0].1.is_nan(), "single-category feature must be NaN");
    assert!(scores[1].1.is_finite());
}

#[test]
fn single_class_target_is_undefined() {
    let df = frame_from(vec![
        ("label", str_col(&["A", "A", "A"])),
        ("feat", int_col(&[1, 2, 3])),
    ]);
    let scores = discriminative_power(&df, &["feat"], "label").unwrap();
    assert!(scores[0].1.is_nan());
}
