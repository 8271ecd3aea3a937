//! Plain text output formatter

use super::{LineRecord, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - writes lines back out byte for byte
pub struct TextFormatter<W: Write> {
    writer: W,
    prefix: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, prefix: bool) -> Self {
        Self { writer, prefix }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(prefix: bool) -> Self {
        Self::new(io::stdout(), prefix)
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, record: &LineRecord<'_>) -> Result<()> {
        if self.prefix {
            write!(self.writer, "{}:", record.file)?;
        }
        self.writer.write_all(record.bytes)?;
        // Keep lines from different inputs apart
        if !record.is_terminated() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
