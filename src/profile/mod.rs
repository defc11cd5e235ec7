//! Dolan–Moré performance profiles.
//!
//! A profile compares solvers across a shared problem set. For solver `s`
//! the curve value at `τ` is the fraction of problems on which `s` is within
//! a factor `τ` of the best solver for that problem.
//!
//! # References
//! - Dolan & Moré (2002) "Benchmarking optimization software with
//!   performance profiles", Math. Programming 91(2)
//!
//! # Example
//! ```
//! use perfprof::data::MetricMatrix;
//! use perfprof::profile::{PerformanceProfile, ProfileConfig};
//!
//! let matrix = MetricMatrix::from_rows(
//!     vec!["a".into(), "b".into()],
//!     &[vec![1.0, 2.0], vec![4.0, -1.0], vec![5.0, 5.0]],
//! ).expect("rectangular matrix");
//!
//! let profile = PerformanceProfile::compute(&matrix, &ProfileConfig::default())
//!     .expect("at least one successful run");
//! assert_eq!(profile.curves()[0].fraction_at(1.0), 1.0);
//! ```

mod curve;
mod ratio;

pub use curve::{CurvePoint, ProfileCurve};
pub use ratio::{
    failure_ceiling, positive_extremes, RatioMatrix, DEGENERATE_FLOOR, FAILURE_CEILING_FACTOR,
};

use crate::data::{MatrixBuilder, MetricMatrix};
use crate::error::{ProfileError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Profile computation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Transform ratios with log2
    pub log_scale: bool,
    /// Upper end of the plotted τ axis (defaults to the failure ceiling)
    pub tau_max: Option<f64>,
}

impl ProfileConfig {
    /// Create a config with linear ratios and automatic axis range
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the log2 transform
    #[must_use]
    pub fn with_log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Clip the plotted τ axis
    #[must_use]
    pub fn with_tau_max(mut self, tau_max: f64) -> Self {
        self.tau_max = Some(tau_max);
        self
    }

    /// Check parameter constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidConfig`] when `tau_max` is not a finite
    /// value above the best ratio (1.0, or 0.0 in log scale).
    pub fn validate(&self) -> Result<()> {
        if let Some(tau) = self.tau_max {
            let floor = if self.log_scale { 0.0 } else { 1.0 };
            if !tau.is_finite() || tau <= floor {
                return Err(ProfileError::InvalidConfig {
                    param: "tau_max".to_string(),
                    value: tau.to_string(),
                    constraint: format!("must be finite and greater than {floor}"),
                });
            }
        }
        Ok(())
    }
}

/// Everything a renderer needs: ratios, curves, failure counts and ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    solvers: Vec<String>,
    config: ProfileConfig,
    ratios: RatioMatrix,
    curves: Vec<ProfileCurve>,
}

impl PerformanceProfile {
    /// Compute ratios and one curve per solver.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid config or a degenerate dataset.
    pub fn compute(matrix: &MetricMatrix, config: &ProfileConfig) -> Result<Self> {
        config.validate()?;
        let ratios = RatioMatrix::compute(matrix, config.log_scale)?;

        let curves = matrix
            .solvers()
            .iter()
            .enumerate()
            .map(|(s, label)| {
                ProfileCurve::from_ratios(label.clone(), ratios.failures()[s], &ratios.column(s))
            })
            .collect();

        Ok(Self {
            solvers: matrix.solvers().to_vec(),
            config: config.clone(),
            ratios,
            curves,
        })
    }

    /// Build the metric matrix with `rng` as jitter source, then compute.
    ///
    /// # Errors
    ///
    /// Returns builder errors (shape, parse) or computation errors.
    pub fn from_builder<R: Rng + ?Sized>(
        builder: MatrixBuilder,
        config: &ProfileConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let matrix = builder.build(rng)?;
        Self::compute(&matrix, config)
    }

    /// Solver labels in column order
    #[must_use]
    pub fn solvers(&self) -> &[String] {
        &self.solvers
    }

    /// Number of problems
    #[must_use]
    pub fn num_problems(&self) -> usize {
        self.ratios.num_problems()
    }

    /// Number of solvers
    #[must_use]
    pub fn num_solvers(&self) -> usize {
        self.ratios.num_solvers()
    }

    /// Settings used for the computation
    #[must_use]
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Ratio matrix
    #[must_use]
    pub fn ratios(&self) -> &RatioMatrix {
        &self.ratios
    }

    /// One curve per solver, in column order
    #[must_use]
    pub fn curves(&self) -> &[ProfileCurve] {
        &self.curves
    }

    /// Curve of the solver labelled `solver`
    #[must_use]
    pub fn curve(&self, solver: &str) -> Option<&ProfileCurve> {
        self.curves.iter().find(|c| c.solver() == solver)
    }

    /// Failure ceiling
    #[must_use]
    pub fn ceiling(&self) -> f64 {
        self.ratios.ceiling()
    }

    /// Failed problems per solver
    #[must_use]
    pub fn failures(&self) -> &[usize] {
        self.ratios.failures()
    }

    /// Whether ratios are log2-transformed
    #[must_use]
    pub fn log_scale(&self) -> bool {
        self.config.log_scale
    }

    /// Plotted τ range: from the best ratio to `tau_max` or the ceiling.
    #[must_use]
    pub fn tau_range(&self) -> (f64, f64) {
        let lo = self.ratios.best_ratio();
        let hi = self.config.tau_max.unwrap_or(self.ceiling());
        if hi > lo {
            (lo, hi)
        } else {
            (lo, lo + 1.0)
        }
    }
}
