//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One line as handed to a formatter
#[derive(Debug, Clone, Copy)]
pub struct LineRecord<'a> {
    /// Display name of the input the line came from
    pub file: &'a str,
    /// 1-based line number within that input
    pub number: usize,
    /// Raw line bytes, including the newline when present
    pub bytes: &'a [u8],
}

impl LineRecord<'_> {
    /// Whether the line ends with a newline byte
    pub fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&linestash_core::NEWLINE)
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single line
    fn format_line(&mut self, record: &LineRecord<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raw lines as read
    Text,
    /// JSON array of lines with metadata
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
