//! Dense storage shared by the metric and ratio matrices.

mod matrix;

pub use matrix::Matrix;
