//! Property tests for the confusion-matrix metrics
//!
//! Ensures the counts and metrics satisfy their invariants:
//! - Matrix cells account for every in-range pair
//! - Metrics bounded to [0, 1] and never NaN
//! - Merging counts is order-independent
//! - Incremental totals equal totals over the whole stream

use evaluar::eval::{ClassPolicy, ConfusionCounts, ConfusionMatrix, MetricValue, MetricsSnapshot};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Generate pair of prediction/true labels with same length
fn label_pair(
    n_classes: i64,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    len.prop_flat_map(move |l| (vec(0..n_classes, l), vec(0..n_classes, l)))
}

/// Label pairs that may include out-of-range values on either side
fn noisy_label_pair(
    n_classes: i64,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    len.prop_flat_map(move |l| {
        (
            vec(-2..n_classes + 2, l),
            vec(-2..n_classes + 2, l),
        )
    })
}

fn counts_for(y_pred: &[i64], y_true: &[i64], n_classes: usize) -> ConfusionCounts {
    let cm = ConfusionMatrix::compute(y_pred, y_true, n_classes, ClassPolicy::Lenient).unwrap();
    cm.decompose(y_pred.len() as u64).unwrap()
}

fn assert_bounded(snapshot: &MetricsSnapshot) -> Result<(), TestCaseError> {
    for (metric, value) in snapshot.iter() {
        if let MetricValue::Defined(v) = value {
            prop_assert!(!v.is_nan() && !v.is_infinite(), "{} is {}", metric, v);
            prop_assert!((0.0..=1.0).contains(&v), "{} = {} not in [0, 1]", metric, v);
        }
    }
    Ok(())
}

// =============================================================================
// Confusion Matrix Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    #[test]
    fn prop_cells_count_in_range_pairs(
        (y_pred, y_true) in noisy_label_pair(4, 0..200)
    ) {
        let cm = ConfusionMatrix::compute(&y_pred, &y_true, 4, ClassPolicy::Lenient).unwrap();
        let in_range = y_pred
            .iter()
            .zip(&y_true)
            .filter(|&(p, t)| (0..4).contains(p) && (0..4).contains(t))
            .count();

        prop_assert_eq!(cm.cells_sum(), in_range as u64);
        prop_assert_eq!(cm.dropped(), y_pred.len() - in_range);
    }

    #[test]
    fn prop_diagonal_is_true_positives(
        (y_pred, y_true) in label_pair(5, 1..200)
    ) {
        let cm = ConfusionMatrix::compute(&y_pred, &y_true, 5, ClassPolicy::Lenient).unwrap();
        let counts = cm.decompose(y_pred.len() as u64).unwrap();

        prop_assert_eq!(cm.diagonal_sum(), counts.true_positive);
        let classified = counts.true_positive + counts.false_positive + counts.false_negative;
        prop_assert_eq!(classified as i64 + counts.true_negative, counts.total as i64);
        prop_assert_eq!(counts.per_class.true_positive.iter().sum::<u64>(), counts.true_positive);
        prop_assert_eq!(counts.per_class.false_positive.iter().sum::<u64>(), counts.false_positive);
        prop_assert_eq!(counts.per_class.false_negative.iter().sum::<u64>(), counts.false_negative);
    }

    #[test]
    fn prop_strict_rejects_exactly_when_out_of_range(
        (y_pred, y_true) in noisy_label_pair(3, 1..50)
    ) {
        let any_out = y_pred.iter().chain(&y_true).any(|v| !(0..3).contains(v));
        let result = ConfusionMatrix::compute(&y_pred, &y_true, 3, ClassPolicy::Strict);
        prop_assert_eq!(result.is_err(), any_out);
    }

    #[test]
    fn prop_mismatched_lengths_fail(
        y_pred in vec(0i64..3, 0..50),
        y_true in vec(0i64..3, 0..50)
    ) {
        prop_assume!(y_pred.len() != y_true.len());
        let result = ConfusionMatrix::compute(&y_pred, &y_true, 3, ClassPolicy::Lenient);
        let is_mismatch = matches!(result, Err(evaluar::Error::LengthMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}

// =============================================================================
// Metric Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    #[test]
    fn prop_metrics_bounded(
        (y_pred, y_true) in label_pair(5, 1..200)
    ) {
        let snapshot = counts_for(&y_pred, &y_true, 5).snapshot();
        assert_bounded(&snapshot)?;
    }

    #[test]
    fn prop_derive_never_nan(
        tp in 0u64..1_000,
        fp in 0u64..1_000,
        fn_ in 0u64..1_000,
        tn in 0i64..1_000
    ) {
        let total = tp + fp + fn_ + tn as u64;
        let snapshot = MetricsSnapshot::derive(tp, fp, fn_, tn, total);
        assert_bounded(&snapshot)?;

        prop_assert_eq!(snapshot.precision.is_defined(), tp + fp > 0);
        prop_assert_eq!(snapshot.recall.is_defined(), tp + fn_ > 0);
        prop_assert_eq!(snapshot.accuracy.is_defined(), total > 0);
    }

    #[test]
    fn prop_accuracy_and_error_rate_complement(
        (y_pred, y_true) in label_pair(4, 1..200)
    ) {
        let snapshot = counts_for(&y_pred, &y_true, 4).snapshot();
        let acc = snapshot.accuracy.value().unwrap();
        let err = snapshot.error_rate.value().unwrap();
        prop_assert!((acc + err - 1.0).abs() < 1e-9, "acc {} + err {} != 1", acc, err);
    }

    #[test]
    fn prop_perfect_predictions(
        y in vec(0i64..5, 1..200)
    ) {
        let snapshot = counts_for(&y, &y, 5).snapshot();
        prop_assert_eq!(snapshot.precision, MetricValue::Defined(1.0));
        prop_assert_eq!(snapshot.recall, MetricValue::Defined(1.0));
        prop_assert_eq!(snapshot.accuracy, MetricValue::Defined(1.0));
        prop_assert_eq!(snapshot.error_rate, MetricValue::Defined(0.0));
    }
}

// =============================================================================
// Merge Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_merge_commutative(
        (p1, t1) in label_pair(4, 1..100),
        (p2, t2) in label_pair(3, 1..100)
    ) {
        let a = counts_for(&p1, &t1, 4);
        let b = counts_for(&p2, &t2, 3);
        prop_assert_eq!(a.merge(&b).unwrap(), b.merge(&a).unwrap());
    }

    #[test]
    fn prop_merge_associative(
        (p1, t1) in label_pair(3, 1..60),
        (p2, t2) in label_pair(3, 1..60),
        (p3, t3) in label_pair(3, 1..60)
    ) {
        let a = counts_for(&p1, &t1, 3);
        let b = counts_for(&p2, &t2, 3);
        let c = counts_for(&p3, &t3, 3);

        let left = a.merge(&b).unwrap().merge(&c).unwrap();
        let right = a.merge(&b.merge(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_merge_identity(
        (p, t) in label_pair(3, 1..100)
    ) {
        let a = counts_for(&p, &t, 3);
        prop_assert_eq!(a.merge(&ConfusionCounts::default()).unwrap().total, a.total);
        prop_assert_eq!(
            ConfusionCounts::default().merge(&a).unwrap().true_positive,
            a.true_positive
        );
    }

    #[test]
    fn prop_incremental_equals_concatenated(
        (y_pred, y_true) in label_pair(4, 2..200),
        split in 1usize..199
    ) {
        let split = split.min(y_pred.len() - 1);

        let first = counts_for(&y_pred[..split], &y_true[..split], 4);
        let second = counts_for(&y_pred[split..], &y_true[split..], 4);
        let incremental = first.merge(&second).unwrap();
        let whole = counts_for(&y_pred, &y_true, 4);

        prop_assert_eq!(incremental, whole);
    }
}
