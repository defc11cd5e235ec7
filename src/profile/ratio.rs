//! Performance ratios and the failure ceiling.
//!
//! Each successful cell is divided by the smallest positive value of its
//! problem row. Failed cells (negative raw values) get the failure ceiling:
//! 1% above the worst ratio observed on any problem with at least one
//! successful run, so failures always plot to the right of every real ratio.

use crate::data::MetricMatrix;
use crate::error::{ProfileError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Safety factor applied to the worst observed ratio.
pub const FAILURE_CEILING_FACTOR: f64 = 1.01;

/// Floor value used for degenerate zero-time runs. When both the cell and the
/// row best sit exactly at this floor the ratio is pinned to 1.0.
pub const DEGENERATE_FLOOR: f64 = 0.00001;

/// Smallest and largest strictly positive value in a row.
///
/// Returns `None` when every solver failed on the problem.
#[must_use]
pub fn positive_extremes(row: &[f64]) -> Option<(f64, f64)> {
    row.iter()
        .copied()
        .filter(|&v| v > 0.0)
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Compute the failure ceiling over the raw matrix.
///
/// For every problem with a successful run take `max / min` of its positive
/// values (log2 of it when `log_scale`), keep the largest, and scale by
/// [`FAILURE_CEILING_FACTOR`].
///
/// # Errors
///
/// Returns [`ProfileError::DegenerateDataset`] when no problem has any
/// positive value.
pub fn failure_ceiling(matrix: &MetricMatrix, log_scale: bool) -> Result<f64> {
    let worst = matrix
        .rows()
        .filter_map(positive_extremes)
        .map(|(lo, hi)| {
            let ratio = hi / lo;
            if log_scale {
                ratio.log2()
            } else {
                ratio
            }
        })
        .fold(None, |acc: Option<f64>, r| Some(acc.map_or(r, |m| m.max(r))))
        .ok_or(ProfileError::DegenerateDataset)?;

    Ok(worst * FAILURE_CEILING_FACTOR)
}

/// Ratio of a successful cell to its row best.
fn success_ratio(raw: f64, best: f64, log_scale: bool) -> f64 {
    #[allow(clippy::float_cmp)]
    let ratio = if raw == DEGENERATE_FLOOR && best == DEGENERATE_FLOOR {
        1.0
    } else {
        raw / best
    };
    if log_scale {
        ratio.log2()
    } else {
        ratio
    }
}

/// Performance ratios of every solver on every problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioMatrix {
    ratios: Matrix<f64>,
    failures: Vec<usize>,
    ceiling: f64,
    log_scale: bool,
}

impl RatioMatrix {
    /// Compute ratios, per-solver failure counts and the failure ceiling.
    ///
    /// Problems where every solver failed are excluded from the ceiling and
    /// count as a failure for every solver.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::DegenerateDataset`] when the ceiling is
    /// undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfprof::data::MetricMatrix;
    /// use perfprof::profile::RatioMatrix;
    ///
    /// let matrix = MetricMatrix::from_rows(
    ///     vec!["a".into(), "b".into()],
    ///     &[vec![1.0, 2.0], vec![4.0, -1.0], vec![5.0, 5.0]],
    /// ).unwrap();
    /// let ratios = RatioMatrix::compute(&matrix, false).unwrap();
    ///
    /// assert!((ratios.ceiling() - 2.02).abs() < 1e-12);
    /// assert_eq!(ratios.failures(), &[0, 1]);
    /// ```
    pub fn compute(matrix: &MetricMatrix, log_scale: bool) -> Result<Self> {
        let ceiling = failure_ceiling(matrix, log_scale)?;
        if log_scale && ceiling <= 0.0 {
            tracing::warn!(
                ceiling,
                "every successful problem is a tie; failures share the winners' log ratio"
            );
        }

        let (num_problems, num_solvers) = (matrix.num_problems(), matrix.num_solvers());
        let mut ratios = Matrix::filled(num_problems, num_solvers, ceiling);
        let mut failures = vec![0usize; num_solvers];

        for (problem, row) in matrix.rows().enumerate() {
            let Some((best, _)) = positive_extremes(row) else {
                tracing::warn!(problem, "every solver failed; assigning the failure ceiling");
                for count in &mut failures {
                    *count += 1;
                }
                continue;
            };

            // the ceiling is already in log units; only successes take log2
            for (solver, &raw) in row.iter().enumerate() {
                if raw < 0.0 {
                    failures[solver] += 1;
                } else {
                    ratios.set(problem, solver, success_ratio(raw, best, log_scale));
                }
            }
        }

        tracing::debug!(
            problems = num_problems,
            solvers = num_solvers,
            ceiling,
            log_scale,
            "computed performance ratios"
        );

        Ok(Self {
            ratios,
            failures,
            ceiling,
            log_scale,
        })
    }

    /// Number of problems (rows).
    #[must_use]
    pub fn num_problems(&self) -> usize {
        self.ratios.n_rows()
    }

    /// Number of solvers (columns).
    #[must_use]
    pub fn num_solvers(&self) -> usize {
        self.ratios.n_cols()
    }

    /// Ratio of `solver` on `problem`.
    #[must_use]
    pub fn get(&self, problem: usize, solver: usize) -> f64 {
        self.ratios.get(problem, solver)
    }

    /// All ratios of one solver, in problem order.
    #[must_use]
    pub fn column(&self, solver: usize) -> Vec<f64> {
        self.ratios.column(solver)
    }

    /// Failed problems per solver.
    #[must_use]
    pub fn failures(&self) -> &[usize] {
        &self.failures
    }

    /// Ratio assigned to failed runs.
    #[must_use]
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Whether ratios are log2-transformed.
    #[must_use]
    pub fn log_scale(&self) -> bool {
        self.log_scale
    }

    /// Ratio of the best solver on a problem: 1.0, or 0.0 in log scale.
    #[must_use]
    pub fn best_ratio(&self) -> f64 {
        if self.log_scale {
            0.0
        } else {
            1.0
        }
    }
}
