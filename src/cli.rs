//! Command-line interface of the `perfprof` binary.

use crate::data::MatrixBuilder;
use crate::error::{ProfileError, Result};
use crate::profile::ProfileConfig;
use crate::render::RenderConfig;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    Compact,
    /// Newline-delimited JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "perfprof")]
#[command(about = "Dolan-More performance profiles for comparing solvers")]
#[command(version)]
pub struct Cli {
    /// Data files, one per solver; whitespace-delimited, one problem per line
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Zero-based column holding the metric
    #[arg(short, long, default_value_t = 0)]
    pub column: usize,

    /// Comma-separated solver labels (default: file stems)
    #[arg(short, long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,

    /// Use log2-scaled performance ratios
    #[arg(long)]
    pub log2: bool,

    /// Output SVG file
    #[arg(short, long, default_value = "perfprof.svg")]
    pub output: PathBuf,

    /// Also export the computed profile as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Plot title
    #[arg(long, default_value = "Performance Profile")]
    pub title: String,

    /// Plot width in pixels
    #[arg(long, default_value_t = 900)]
    pub width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 520)]
    pub height: u32,

    /// Right end of the plotted τ axis
    #[arg(long)]
    pub tau_max: Option<f64>,

    /// Seed for the jitter that replaces exact zeros
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary only, skip the SVG
    #[arg(long)]
    pub no_plot: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output style
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Parse from the process arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Solver labels, one per file.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidConfig`] when explicit labels do not
    /// match the number of files.
    pub fn solver_labels(&self) -> Result<Vec<String>> {
        match &self.labels {
            Some(labels) if labels.len() != self.files.len() => Err(ProfileError::InvalidConfig {
                param: "labels".to_string(),
                value: labels.join(","),
                constraint: format!("expected {} labels, one per file", self.files.len()),
            }),
            Some(labels) => Ok(labels.iter().map(|l| l.trim().to_string()).collect()),
            None => Ok(self.files.iter().map(|p| default_label(p)).collect()),
        }
    }

    /// Read every file into a matrix builder.
    ///
    /// # Errors
    ///
    /// Returns label errors or the first file that fails to load.
    pub fn matrix_builder(&self) -> Result<MatrixBuilder> {
        let labels = self.solver_labels()?;
        let mut builder = MatrixBuilder::new();
        for (label, path) in labels.into_iter().zip(&self.files) {
            builder.add_file(label, path, self.column)?;
        }
        Ok(builder)
    }

    /// Profile settings from the flags
    #[must_use]
    pub fn profile_config(&self) -> ProfileConfig {
        let config = ProfileConfig::new().with_log_scale(self.log2);
        match self.tau_max {
            Some(tau) => config.with_tau_max(tau),
            None => config,
        }
    }

    /// Plot settings from the flags
    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new()
            .with_title(self.title.clone())
            .with_size(self.width, self.height)
    }

    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over `--log-level`.
    pub fn init_logging(&self) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.log_level));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr);

        // a subscriber may already be installed (tests)
        let _ = match self.log_format {
            LogFormat::Json => subscriber.json().try_init(),
            LogFormat::Compact => subscriber.compact().try_init(),
            LogFormat::Pretty => subscriber.pretty().try_init(),
        };
    }
}

/// File stem, falling back to the full path.
fn default_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
