//! Reader error types

use crate::DescriptorId;
use std::io;
use thiserror::Error;

/// Errors surfaced by [`LineReader::next_line`](crate::LineReader::next_line)
///
/// End of input is not an error; it is reported as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// Descriptor or configuration rejected before any state was touched
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the call was rejected
        reason: String,
    },

    /// The underlying read primitive failed; the descriptor's stash was discarded
    #[error("read failed on descriptor {descriptor}: {source}")]
    Read {
        /// Descriptor whose read failed
        descriptor: DescriptorId,
        /// Error reported by the read primitive
        #[source]
        source: io::Error,
    },
}

impl ReaderError {
    pub(crate) fn invalid_descriptor(descriptor: DescriptorId) -> Self {
        ReaderError::InvalidArgument {
            reason: format!("descriptor {descriptor} is negative"),
        }
    }

    /// Whether this is an [`ReaderError::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ReaderError::InvalidArgument { .. })
    }

    /// Whether this is a [`ReaderError::Read`]
    pub fn is_read_error(&self) -> bool {
        matches!(self, ReaderError::Read { .. })
    }

    /// Descriptor a read failure belongs to
    pub fn descriptor(&self) -> Option<DescriptorId> {
        match self {
            ReaderError::Read { descriptor, .. } => Some(*descriptor),
            ReaderError::InvalidArgument { .. } => None,
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;
