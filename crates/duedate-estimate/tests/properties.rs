use duedate_datasets::{DatasetRegistry, SampleSource};
use duedate_estimate::{Estimator, compute_due_date};
use duedate_types::{ConfidenceLevel, Sample, UnitCount};
use proptest::prelude::*;

fn luxboat() -> Sample {
    DatasetRegistry::global().default_sample().clone()
}

/// Samples of positive times whose lag-1 autocorrelation stays well below 1.
fn sample_strategy() -> impl Strategy<Value = Sample> {
    prop::collection::vec(1.0f64..100.0, 5..60)
        .prop_filter_map("degenerate autocorrelation", |values| {
            let sample = Sample::new(values).ok()?;
            Estimator::default()
                .estimate(&sample, UnitCount::new(1).ok()?, ConfidenceLevel::MEDIAN)
                .ok()
                .filter(|e| e.autocorrelation < 0.95)
                .map(|_| sample)
        })
}

#[test]
fn default_sample_mean_is_about_39_hours() {
    let estimate = compute_due_date(luxboat().values(), 1, 0.5).unwrap();
    assert!((estimate.mean - 39.0).abs() < 0.2, "mean {}", estimate.mean);
}

#[test]
fn malformed_custom_text_still_produces_an_estimate() {
    let expected = Estimator::default()
        .estimate(
            &luxboat(),
            UnitCount::new(25).unwrap(),
            ConfidenceLevel::default(),
        )
        .unwrap();

    for text in ["", "not, numbers", "12", "3;4;5", "1, 2, NaN"] {
        let sample = SampleSource::Custom(text.to_string()).resolve();
        let estimate = Estimator::default()
            .estimate(
                &sample,
                UnitCount::new(25).unwrap(),
                ConfidenceLevel::default(),
            )
            .unwrap();
        assert_eq!(estimate, expected, "input {text:?}");
    }
}

proptest! {
    #[test]
    fn higher_confidence_means_later_due_date(
        sample in sample_strategy(),
        units in 1u32..50,
        low in 0.5f64..0.98,
        gap in 0.005f64..0.015,
    ) {
        let estimator = Estimator::default();
        let units = UnitCount::new(units).unwrap();
        let a = estimator.estimate(&sample, units, ConfidenceLevel::new(low).unwrap()).unwrap();
        let b = estimator.estimate(&sample, units, ConfidenceLevel::new(low + gap).unwrap()).unwrap();

        prop_assert!(b.due_date_hours >= a.due_date_hours);
        prop_assert!(b.safety_days >= a.safety_days);
        if a.scaled_std_dev > 0.0 {
            prop_assert!(b.due_date_hours > a.due_date_hours);
        }
    }

    #[test]
    fn doubling_units_is_sublinear(
        sample in sample_strategy(),
        units in 1u32..40,
        confidence in 0.55f64..0.99,
    ) {
        let estimator = Estimator::default();
        let level = ConfidenceLevel::new(confidence).unwrap();
        let single = estimator.estimate(&sample, UnitCount::new(units).unwrap(), level).unwrap();
        let double = estimator.estimate(&sample, UnitCount::new(units * 2).unwrap(), level).unwrap();

        let mean_ratio = double.scaled_mean / single.scaled_mean;
        prop_assert!((mean_ratio - 2.0).abs() < 1e-9);
        if single.scaled_std_dev > 0.0 {
            let std_ratio = double.scaled_std_dev / single.scaled_std_dev;
            prop_assert!((std_ratio - 2.0f64.sqrt()).abs() < 1e-9);
            prop_assert!(double.due_date_hours < 2.0 * single.due_date_hours);
        }
    }

    #[test]
    fn median_confidence_has_zero_safety(sample in sample_strategy(), units in 1u32..50) {
        let estimate = Estimator::default()
            .estimate(&sample, UnitCount::new(units).unwrap(), ConfidenceLevel::MEDIAN)
            .unwrap();
        prop_assert!(estimate.z_score.abs() < 1e-12);
        prop_assert!(estimate.safety_days.abs() < 1e-9);
    }

    #[test]
    fn bessel_corrected_variance(values in prop::collection::vec(1.0f64..100.0, 2..60)) {
        let n = values.len() as f64;
        let population = duedate_stats::population_variance(&values).unwrap();
        let sample = duedate_stats::sample_variance(&values).unwrap();
        prop_assert!((sample - population * n / (n - 1.0)).abs() <= 1e-9 * sample.max(1.0));
    }

    #[test]
    fn arbitrary_text_never_panics(text in "[0-9a-z ,.\\-]{0,40}") {
        let sample = SampleSource::Custom(text).resolve();
        prop_assert!(sample.len() >= Sample::MIN_LEN);
    }
}
