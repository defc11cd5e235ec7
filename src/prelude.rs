//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use perfprof::prelude::*;
//! ```

pub use crate::data::{MatrixBuilder, MetricMatrix};
pub use crate::error::{ProfileError, Result};
pub use crate::profile::{CurvePoint, PerformanceProfile, ProfileConfig, ProfileCurve, RatioMatrix};
pub use crate::render::{render_svg, summary_table, RenderConfig};
