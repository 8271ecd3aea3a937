//! Configuration types for the reader

use crate::error::{ReaderError, Result};

/// Bytes requested from the read primitive per call when nothing else is configured
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Upper bound on the bytes requested by a single underlying read
    pub chunk_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with the given chunk size
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Check that the configuration can drive a reader
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ReaderError::InvalidArgument {
                reason: "chunk size must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
