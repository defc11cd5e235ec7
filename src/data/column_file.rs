//! Whitespace-delimited column files.
//!
//! One solver per file, one problem per line. Blank lines and lines starting
//! with `#` are skipped; the requested column is zero-based.

use crate::error::{ProfileError, Result};
use std::path::Path;

/// Read column `column` of the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line lacks the column, or a
/// value is not a finite number.
pub fn read_column(path: &Path, column: usize) -> Result<Vec<f64>> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;
    let values = parse_column(&content, path, column)?;
    tracing::info!(
        file = %path.display(),
        column,
        problems = values.len(),
        "loaded solver column"
    );
    Ok(values)
}

/// Parse column `column` out of already loaded file content.
///
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns an error if a line lacks the column or a value is not a finite
/// number.
pub fn parse_column(content: &str, path: &Path, column: usize) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let token = line
            .split_whitespace()
            .nth(column)
            .ok_or_else(|| ProfileError::MissingColumn {
                file: path.to_path_buf(),
                line: line_num + 1,
                column,
            })?;

        let value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ProfileError::Parse {
                file: path.to_path_buf(),
                line: line_num + 1,
                column,
                token: token.to_string(),
            })?;

        values.push(value);
    }

    Ok(values)
}
