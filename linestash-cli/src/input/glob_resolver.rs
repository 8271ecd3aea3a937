//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Argument standing for standard input
pub const STDIN_MARKER: &str = "-";

/// Resolve file patterns to actual file paths
///
/// Order follows the patterns; matches within one pattern are sorted. A path
/// reached through several patterns is kept at its first position, and
/// [`STDIN_MARKER`] passes through unchanged.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            let stdin = PathBuf::from(STDIN_MARKER);
            if !files.contains(&stdin) {
                files.push(stdin);
            }
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;
            if path.is_file() {
                matched.push(path);
            }
        }
        matched.sort();

        if matched.is_empty() {
            return Err(CliError::NoInputs(pattern.clone()).into());
        }
        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}
