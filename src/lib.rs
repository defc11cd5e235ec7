//! perfprof: Dolan–Moré performance profiles in pure Rust.
//!
//! Compares several solvers over a shared set of benchmark problems. Raw
//! metric values (time, iterations, function evaluations, ...) become
//! performance ratios against the best solver per problem, and each solver's
//! ratios become a cumulative step curve.
//!
//! # Quick Start
//!
//! ```
//! use perfprof::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let builder = MatrixBuilder::new()
//!     .with_column("newton", vec![1.0, 4.0, 5.0])
//!     .with_column("bfgs", vec![2.0, -1.0, 5.0]);
//!
//! let profile = PerformanceProfile::from_builder(builder, &ProfileConfig::new(), &mut rng)
//!     .expect("valid dataset");
//!
//! assert_eq!(profile.failures(), &[0, 1]);
//! assert!((profile.ceiling() - 2.02).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`data`]: metric matrix construction and column files
//! - [`profile`]: ratio engine and profile curves
//! - [`render`]: SVG plot and text summary
//! - [`cli`]: command-line interface of the `perfprof` binary

pub mod cli;
pub mod data;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod profile;
pub mod render;

pub use error::{ProfileError, Result};
