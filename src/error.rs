//! Error types for perfprof operations.
//!
//! Every failure carries enough context (file, line, column, solver) to be
//! reported to the user without a backtrace.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for perfprof operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Main error type for profile construction.
///
/// # Examples
///
/// ```
/// use perfprof::error::ProfileError;
///
/// let err = ProfileError::ShapeMismatch {
///     solver: "ipopt".to_string(),
///     expected: 10,
///     actual: 9,
/// };
/// assert!(err.to_string().contains("ipopt"));
/// ```
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A token in a data file is not a finite number.
    #[error("{}:{line}: column {column} holds non-numeric value '{token}'", .file.display())]
    Parse {
        /// Source file
        file: PathBuf,
        /// One-based line number
        line: usize,
        /// Zero-based column index
        column: usize,
        /// Offending token
        token: String,
    },

    /// A data line has fewer columns than requested.
    #[error("{}:{line}: missing column {column}", .file.display())]
    MissingColumn {
        /// Source file
        file: PathBuf,
        /// One-based line number
        line: usize,
        /// Zero-based column index
        column: usize,
    },

    /// Solver columns differ in length.
    #[error("solver '{solver}' has {actual} problems, expected {expected}")]
    ShapeMismatch {
        /// Solver label of the offending column
        solver: String,
        /// Problem count of the first column
        expected: usize,
        /// Problem count of this column
        actual: usize,
    },

    /// No solvers or no problems were supplied.
    #[error("metric matrix is empty ({problems} problems x {solvers} solvers)")]
    EmptyMatrix {
        /// Number of problems
        problems: usize,
        /// Number of solvers
        solvers: usize,
    },

    /// An exact zero reached the ratio engine without perturbation.
    #[error("unperturbed zero at problem {problem}, solver {solver}")]
    UnperturbedZero {
        /// Row index
        problem: usize,
        /// Column index
        solver: usize,
    },

    /// A metric value is NaN or infinite.
    #[error("non-finite value {value} at problem {problem}, solver {solver}")]
    NonFinite {
        /// Row index
        problem: usize,
        /// Column index
        solver: usize,
        /// Offending value
        value: f64,
    },

    /// No problem has a successful run, so the failure ceiling is undefined.
    #[error("degenerate dataset: no problem has a positive value for any solver")]
    DegenerateDataset,

    /// Invalid configuration value.
    #[error("invalid {param} = {value}: {constraint}")]
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// JSON export failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProfileError {
    /// Build an [`ProfileError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } => ExitCode::from(3),
            Self::Parse { .. } | Self::MissingColumn { .. } => ExitCode::from(4),
            Self::ShapeMismatch { .. }
            | Self::EmptyMatrix { .. }
            | Self::UnperturbedZero { .. }
            | Self::NonFinite { .. } => ExitCode::from(5),
            Self::DegenerateDataset => ExitCode::from(6),
            Self::InvalidConfig { .. } => ExitCode::from(2),
            Self::Serialization(_) => ExitCode::from(7),
        }
    }
}
