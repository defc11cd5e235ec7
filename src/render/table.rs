//! Plain-text summary of a profile.

use crate::profile::PerformanceProfile;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Headline numbers of one solver's curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSummary {
    /// Solver label
    pub solver: String,
    /// Failed problems
    pub failures: usize,
    /// Fraction of problems on which the solver was (jointly) best; failed
    /// problems never count
    pub efficiency: f64,
    /// Fraction of problems the solver did not fail
    pub robustness: f64,
    /// Curve value at the right end of the plotted τ range
    pub solved_at_tau_max: f64,
    /// Largest ratio on the curve
    pub max_ratio: f64,
}

/// Summarize every curve of `profile`, in solver order.
#[must_use]
pub fn summarize(profile: &PerformanceProfile) -> Vec<SolverSummary> {
    let best = profile.ratios().best_ratio();
    let (_, tau_max) = profile.tau_range();
    let n = profile.num_problems() as f64;
    // an all-tie log profile puts the ceiling on top of the winners
    let failures_at_best = profile.ceiling() <= best;

    profile
        .curves()
        .iter()
        .map(|curve| SolverSummary {
            solver: curve.solver().to_string(),
            failures: curve.failures(),
            efficiency: if failures_at_best {
                (curve.fraction_at(best) - curve.failures() as f64 / n).max(0.0)
            } else {
                curve.fraction_at(best)
            },
            robustness: 1.0 - curve.failures() as f64 / n,
            solved_at_tau_max: curve.fraction_at(tau_max),
            max_ratio: curve.max_ratio(),
        })
        .collect()
}

/// Render the summary as an aligned text table.
#[must_use]
pub fn summary_table(profile: &PerformanceProfile) -> String {
    let rows = summarize(profile);
    let width = rows
        .iter()
        .map(|r| r.solver.chars().count())
        .max()
        .unwrap_or(0)
        .max("Solver".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}",
        "Solver", "Failures", "Efficiency", "Robustness", "At τ max", "Max ratio"
    );
    let _ = writeln!(out, "{}", "-".repeat(width + 60));
    for r in &rows {
        let _ = writeln!(
            out,
            "{:<width$}  {:>8}  {:>9.1}%  {:>9.1}%  {:>9.1}%  {:>10.3}",
            r.solver,
            r.failures,
            r.efficiency * 100.0,
            r.robustness * 100.0,
            r.solved_at_tau_max * 100.0,
            r.max_ratio
        );
    }
    let _ = writeln!(
        out,
        "\n{} problems, {} solvers, failure ceiling {:.4}{}",
        profile.num_problems(),
        profile.num_solvers(),
        profile.ceiling(),
        if profile.log_scale() { " (log2)" } else { "" }
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MetricMatrix;
    use crate::profile::ProfileConfig;

    fn profile() -> PerformanceProfile {
        let matrix = MetricMatrix::from_rows(
            vec!["s0".into(), "s1".into()],
            &[vec![1.0, 2.0], vec![4.0, -1.0], vec![5.0, 5.0]],
        )
        .unwrap();
        PerformanceProfile::compute(&matrix, &ProfileConfig::new()).unwrap()
    }

    #[test]
    fn test_summarize_scenario() {
        let rows = summarize(&profile());
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].efficiency, 1.0);
        assert_eq!(rows[0].robustness, 1.0);
        assert_eq!(rows[0].failures, 0);

        assert!((rows[1].efficiency - 1.0 / 3.0).abs() < 1e-12);
        assert!((rows[1].robustness - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(rows[1].solved_at_tau_max, 1.0);
        assert!((rows[1].max_ratio - 2.02).abs() < 1e-12);
    }

    #[test]
    fn test_efficiency_ignores_failures_at_zero_log_ceiling() {
        let matrix = MetricMatrix::from_rows(
            vec!["s0".into(), "s1".into()],
            &[vec![2.0, 2.0], vec![3.0, -1.0]],
        )
        .unwrap();
        let profile =
            PerformanceProfile::compute(&matrix, &ProfileConfig::new().with_log_scale(true))
                .unwrap();
        assert_eq!(profile.ceiling(), 0.0);

        let rows = summarize(&profile);
        assert_eq!(rows[0].efficiency, 1.0);
        assert_eq!(rows[1].efficiency, 0.5);
        assert_eq!(rows[1].robustness, 0.5);
    }

    #[test]
    fn test_summary_table_lists_every_solver() {
        let table = summary_table(&profile());
        assert!(table.contains("Solver"));
        assert!(table.lines().any(|l| l.starts_with("s0")));
        assert!(table.lines().any(|l| l.starts_with("s1")));
        assert!(table.contains("3 problems, 2 solvers, failure ceiling 2.0200"));
    }
}
