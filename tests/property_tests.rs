//! Property-based tests for perfprof.
//!
//! Uses proptest to verify profile invariants across many random datasets.

#![allow(clippy::unwrap_used)]

use perfprof::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Dataset Generation Strategies
// ============================================================================

/// A raw cell: mostly successes, some failures, occasional exact zeros
fn raw_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.001..1000.0f64,
        2 => Just(-1.0),
        1 => Just(0.0),
    ]
}

/// Columns of equal length: 1-6 solvers x 1-40 problems
fn raw_columns() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6, 1usize..40).prop_flat_map(|(solvers, problems)| {
        prop::collection::vec(prop::collection::vec(raw_value(), problems), solvers)
    })
}

fn build(columns: &[Vec<f64>], seed: u64) -> Result<MetricMatrix> {
    let mut builder = MatrixBuilder::new();
    for (s, column) in columns.iter().enumerate() {
        builder.add_column(format!("solver{s}"), column.clone());
    }
    builder.build(&mut StdRng::seed_from_u64(seed))
}

fn has_success(columns: &[Vec<f64>]) -> bool {
    columns.iter().flatten().any(|&v| v >= 0.0)
}

// ============================================================================
// Ratio Engine Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_success_ratios_at_least_one(columns in raw_columns(), seed in any::<u64>()) {
        prop_assume!(has_success(&columns));
        let matrix = build(&columns, seed).unwrap();
        let ratios = RatioMatrix::compute(&matrix, false).unwrap();

        for i in 0..matrix.num_problems() {
            for s in 0..matrix.num_solvers() {
                if matrix.get(i, s) > 0.0 {
                    prop_assert!(ratios.get(i, s) >= 1.0);
                }
            }
        }
    }

    #[test]
    fn prop_row_winner_is_exactly_best(columns in raw_columns(), seed in any::<u64>(), log in any::<bool>()) {
        prop_assume!(has_success(&columns));
        let matrix = build(&columns, seed).unwrap();
        let ratios = RatioMatrix::compute(&matrix, log).unwrap();
        let best = if log { 0.0 } else { 1.0 };

        for (i, row) in matrix.rows().enumerate() {
            let winner = row
                .iter()
                .enumerate()
                .filter(|(_, v)| **v > 0.0)
                .min_by(|a, b| a.1.total_cmp(b.1))
                .map(|(s, _)| s);
            if let Some(s) = winner {
                prop_assert_eq!(ratios.get(i, s), best);
            }
        }
    }

    #[test]
    fn prop_failure_counts_match_negative_entries(columns in raw_columns(), seed in any::<u64>()) {
        prop_assume!(has_success(&columns));
        let matrix = build(&columns, seed).unwrap();
        let ratios = RatioMatrix::compute(&matrix, false).unwrap();

        // rows where everyone failed still count as a failure per solver
        for (s, column) in columns.iter().enumerate() {
            let negatives = column.iter().filter(|&&v| v < 0.0).count();
            prop_assert_eq!(ratios.failures()[s], negatives);
        }
    }

    #[test]
    fn prop_failures_sit_at_ceiling_above_successes(columns in raw_columns(), seed in any::<u64>()) {
        prop_assume!(has_success(&columns));
        let matrix = build(&columns, seed).unwrap();
        let ratios = RatioMatrix::compute(&matrix, false).unwrap();

        for i in 0..matrix.num_problems() {
            for s in 0..matrix.num_solvers() {
                if matrix.get(i, s) < 0.0 {
                    prop_assert_eq!(ratios.get(i, s), ratios.ceiling());
                } else {
                    prop_assert!(ratios.get(i, s) < ratios.ceiling());
                }
            }
        }
    }

    #[test]
    fn prop_all_failed_dataset_is_degenerate(problems in 1usize..20, solvers in 1usize..5) {
        let columns = vec![vec![-1.0; problems]; solvers];
        let matrix = build(&columns, 0).unwrap();
        prop_assert!(matches!(
            RatioMatrix::compute(&matrix, false),
            Err(ProfileError::DegenerateDataset)
        ));
    }
}

// ============================================================================
// Profile Curve Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_curves_are_monotone_and_complete(columns in raw_columns(), seed in any::<u64>(), log in any::<bool>()) {
        prop_assume!(has_success(&columns));
        let matrix = build(&columns, seed).unwrap();
        let config = ProfileConfig::new().with_log_scale(log);
        let profile = PerformanceProfile::compute(&matrix, &config).unwrap();
        let n = matrix.num_problems();

        for curve in profile.curves() {
            let points = curve.points();
            prop_assert_eq!(points.len(), n + 1);
            prop_assert_eq!((points[0].ratio, points[0].fraction), (0.0, 0.0));
            prop_assert_eq!(points[n].fraction, 1.0);

            for w in points[1..].windows(2) {
                prop_assert!(w[0].ratio <= w[1].ratio);
                prop_assert!(w[0].fraction < w[1].fraction);
            }
        }
    }

    #[test]
    fn prop_each_step_is_one_over_n(ratios in prop::collection::vec(1.0..50.0f64, 1..60)) {
        let curve = ProfileCurve::from_ratios("s", 0, &ratios);
        let n = ratios.len() as f64;

        let mut total = 0.0;
        for w in curve.points().windows(2) {
            let step = w[1].fraction - w[0].fraction;
            prop_assert!((step - 1.0 / n).abs() < 1e-12);
            total += step;
        }
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_fraction_at_matches_direct_count(
        ratios in prop::collection::vec(1.0..10.0f64, 1..40),
        tau in 0.5..12.0f64
    ) {
        let curve = ProfileCurve::from_ratios("s", 0, &ratios);
        let expected = ratios.iter().filter(|&&r| r <= tau).count() as f64 / ratios.len() as f64;
        prop_assert_eq!(curve.fraction_at(tau), expected);
    }
}

// ============================================================================
// Reproducibility
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_same_seed_same_profile(columns in raw_columns(), seed in any::<u64>()) {
        prop_assume!(has_success(&columns));
        let a = PerformanceProfile::compute(&build(&columns, seed).unwrap(), &ProfileConfig::new()).unwrap();
        let b = PerformanceProfile::compute(&build(&columns, seed).unwrap(), &ProfileConfig::new()).unwrap();
        prop_assert_eq!(a, b);
    }
}
