//! Output layers over a computed [`PerformanceProfile`](crate::profile::PerformanceProfile).
//!
//! - [`svg`]: step plot with legend and failure counts
//! - [`table`]: plain-text per-solver summary
//!
//! Renderers only build strings; writing files is left to the caller.

pub mod svg;
pub mod table;

pub use svg::render_svg;
pub use table::{summarize, summary_table, SolverSummary};

use serde::{Deserialize, Serialize};

/// Plot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Plot title
    pub title: String,
    /// X axis label (derived from the scale when `None`)
    pub x_label: Option<String>,
    /// Y axis label
    pub y_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 520,
            title: "Performance Profile".to_string(),
            x_label: None,
            y_label: "Fraction of problems".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create default plot settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plot title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the canvas size
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Override the x axis label
    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// X axis label for the given scale
    #[must_use]
    pub fn x_label_for(&self, log_scale: bool) -> String {
        match (&self.x_label, log_scale) {
            (Some(label), _) => label.clone(),
            (None, true) => "log2(τ)".to_string(),
            (None, false) => "τ (performance ratio)".to_string(),
        }
    }
}

/// Line colors, cycled per solver.
pub const PALETTE: [&str; 8] = [
    "#4285f4", "#ff9800", "#4caf50", "#f44336", "#9c27b0", "#00bcd4", "#795548", "#607d8b",
];

/// Legend text: solver label with its failure count.
#[must_use]
pub fn legend_label(solver: &str, failures: usize) -> String {
    format!("{solver} ({failures} failed)")
}
