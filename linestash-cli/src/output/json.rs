//! JSON output formatter

use super::{LineRecord, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LineData {
    /// Input the line came from
    pub file: String,
    /// 1-based line number within that input
    pub line: usize,
    /// Line text without its newline, lossily decoded as UTF-8
    pub text: String,
    /// Length of the raw line in bytes, newline included
    pub bytes: usize,
    /// Whether the line ended with a newline
    pub terminated: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, record: &LineRecord<'_>) -> Result<()> {
        let terminated = record.is_terminated();
        let body = if terminated {
            &record.bytes[..record.bytes.len() - 1]
        } else {
            record.bytes
        };
        self.lines.push(LineData {
            file: record.file.to_string(),
            line: record.number,
            text: String::from_utf8_lossy(body).into_owned(),
            bytes: record.bytes.len(),
            terminated,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
