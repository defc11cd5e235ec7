//! Metric matrix construction.
//!
//! Collects one labelled column of raw metric values per solver (from memory
//! or from whitespace-delimited files) and materializes them into a
//! rectangular [`MetricMatrix`]: rows are problems, columns are solvers.
//!
//! Negative values mark failed runs and pass through untouched. Exact zeros
//! would make `0 / 0` ratios, so they are replaced by a small positive jitter
//! drawn from the caller's random generator.
//!
//! # Example
//!
//! ```
//! use perfprof::data::MatrixBuilder;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let matrix = MatrixBuilder::new()
//!     .with_column("fast", vec![1.0, 4.0, 5.0])
//!     .with_column("slow", vec![2.0, -1.0, 5.0])
//!     .build(&mut rng)
//!     .expect("columns have equal length");
//!
//! assert_eq!(matrix.num_problems(), 3);
//! assert_eq!(matrix.num_solvers(), 2);
//! ```

mod column_file;

pub use column_file::{parse_column, read_column};

use crate::error::{ProfileError, Result};
use crate::primitives::Matrix;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Center of the jitter that replaces exact zeros.
pub const ZERO_JITTER_CENTER: f64 = 0.0025;

/// Half width of the uniform jitter interval around [`ZERO_JITTER_CENTER`].
pub const ZERO_JITTER_HALF_WIDTH: f64 = 0.00125;

/// Draw a replacement for an exact zero, uniform in
/// `[CENTER - HALF_WIDTH, CENTER + HALF_WIDTH)`.
pub fn zero_jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(
        ZERO_JITTER_CENTER - ZERO_JITTER_HALF_WIDTH..ZERO_JITTER_CENTER + ZERO_JITTER_HALF_WIDTH,
    )
}

/// Raw metric values, one row per problem and one column per solver.
///
/// Invariants: at least one problem and one solver, every value finite, no
/// exact zeros. Negative values are failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricMatrix {
    solvers: Vec<String>,
    values: Matrix<f64>,
}

impl MetricMatrix {
    /// Wrap an already perturbed matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty, the label count differs from
    /// the column count, or a value is non-finite or an exact zero.
    pub fn new(solvers: Vec<String>, values: Matrix<f64>) -> Result<Self> {
        let (problems, cols) = values.shape();
        if problems == 0 || cols == 0 {
            return Err(ProfileError::EmptyMatrix {
                problems,
                solvers: cols,
            });
        }
        if solvers.len() != cols {
            return Err(ProfileError::InvalidConfig {
                param: "solvers".to_string(),
                value: solvers.len().to_string(),
                constraint: format!("must name all {cols} matrix columns"),
            });
        }

        for (problem, row) in values.rows().enumerate() {
            for (solver, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ProfileError::NonFinite {
                        problem,
                        solver,
                        value,
                    });
                }
                if value == 0.0 {
                    return Err(ProfileError::UnperturbedZero { problem, solver });
                }
            }
        }

        Ok(Self { solvers, values })
    }

    /// Build from row vectors (problem-major), without perturbation.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::ShapeMismatch`] for ragged rows, plus every
    /// error of [`MetricMatrix::new`].
    pub fn from_rows(solvers: Vec<String>, rows: &[Vec<f64>]) -> Result<Self> {
        let cols = solvers.len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ProfileError::ShapeMismatch {
                    solver: format!("row {i}"),
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        let values = Matrix::from_vec(rows.len(), cols, data).map_err(|e| {
            ProfileError::InvalidConfig {
                param: "rows".to_string(),
                value: rows.len().to_string(),
                constraint: e.to_string(),
            }
        })?;
        Self::new(solvers, values)
    }

    /// Number of problems (rows).
    #[must_use]
    pub fn num_problems(&self) -> usize {
        self.values.n_rows()
    }

    /// Number of solvers (columns).
    #[must_use]
    pub fn num_solvers(&self) -> usize {
        self.values.n_cols()
    }

    /// Solver labels in column order.
    #[must_use]
    pub fn solvers(&self) -> &[String] {
        &self.solvers
    }

    /// Raw value of `solver` on `problem`.
    #[must_use]
    pub fn get(&self, problem: usize, solver: usize) -> f64 {
        self.values.get(problem, solver)
    }

    /// All solvers' values for one problem.
    #[must_use]
    pub fn row(&self, problem: usize) -> &[f64] {
        self.values.row(problem)
    }

    /// Iterates over problem rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.rows()
    }
}

/// Collects solver columns and validates them into a [`MetricMatrix`].
#[derive(Debug, Clone, Default)]
pub struct MatrixBuilder {
    columns: Vec<(String, Vec<f64>)>,
}

impl MatrixBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solver column
    #[must_use]
    pub fn with_column(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.add_column(label, values);
        self
    }

    /// Add a solver column in place
    pub fn add_column(&mut self, label: impl Into<String>, values: Vec<f64>) {
        self.columns.push((label.into(), values));
    }

    /// Read column `column` of `path` as the values of solver `label`.
    ///
    /// # Errors
    ///
    /// Returns the reader's error, naming the file, line and column.
    pub fn add_file(&mut self, label: impl Into<String>, path: &Path, column: usize) -> Result<()> {
        let values = read_column(path, column)?;
        self.add_column(label, values);
        Ok(())
    }

    /// Number of columns collected so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Validate the columns, perturb exact zeros and build the matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if no column was added, columns differ in length,
    /// labels are empty or duplicated, or a value is non-finite.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Result<MetricMatrix> {
        let Some((_, first)) = self.columns.first() else {
            return Err(ProfileError::EmptyMatrix {
                problems: 0,
                solvers: 0,
            });
        };
        let num_problems = first.len();
        let num_solvers = self.columns.len();

        for (label, values) in &self.columns {
            if values.len() != num_problems {
                return Err(ProfileError::ShapeMismatch {
                    solver: label.clone(),
                    expected: num_problems,
                    actual: values.len(),
                });
            }
            if label.is_empty() {
                return Err(ProfileError::InvalidConfig {
                    param: "label".to_string(),
                    value: String::new(),
                    constraint: "solver labels cannot be empty".to_string(),
                });
            }
        }

        let mut labels: Vec<&str> = self.columns.iter().map(|(l, _)| l.as_str()).collect();
        labels.sort_unstable();
        if let Some(pair) = labels.windows(2).find(|w| w[0] == w[1]) {
            return Err(ProfileError::InvalidConfig {
                param: "label".to_string(),
                value: pair[0].to_string(),
                constraint: "solver labels must be unique".to_string(),
            });
        }

        let mut values = Matrix::filled(num_problems, num_solvers, 0.0);
        let mut perturbed = 0usize;
        for (solver, (_, column)) in self.columns.iter().enumerate() {
            for (problem, &raw) in column.iter().enumerate() {
                let value = if raw == 0.0 {
                    perturbed += 1;
                    zero_jitter(rng)
                } else {
                    raw
                };
                values.set(problem, solver, value);
            }
        }

        tracing::debug!(
            problems = num_problems,
            solvers = num_solvers,
            perturbed,
            "built metric matrix"
        );

        let solvers = self.columns.into_iter().map(|(label, _)| label).collect();
        MetricMatrix::new(solvers, values)
    }
}
