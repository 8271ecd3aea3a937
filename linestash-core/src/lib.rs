//! Incremental line reading over many descriptors at once
//!
//! A descriptor may deliver data in chunks that ignore line boundaries. The
//! readers in this crate keep whatever was read past the end of a line in a
//! per-descriptor stash and serve it first on the next call, so each call
//! yields exactly one line and no byte is read twice or lost.
//!
//! - [`LineReader`]: owned, single-threaded reader
//! - [`SharedLineReader`]: the same contract through `&self`, for many threads
//! - [`ByteSource`]: the read primitive, with [`StreamTable`] for in-process
//!   streams and, on unix, [`FdSource`] for raw OS descriptors
//!
//! # Example
//!
//! ```rust
//! use linestash_core::{LineReader, StreamTable};
//! use std::io::Cursor;
//!
//! let table = StreamTable::new();
//! table.register(0, Cursor::new(b"x\n".to_vec()));
//! table.register(1, Cursor::new(b"y\nz\n".to_vec()));
//!
//! let mut reader = LineReader::new(table);
//! assert_eq!(reader.next_line(1).unwrap(), Some(b"y\n".to_vec()));
//! assert_eq!(reader.next_line(0).unwrap(), Some(b"x\n".to_vec()));
//! assert_eq!(reader.next_line(1).unwrap(), Some(b"z\n".to_vec()));
//! assert_eq!(reader.next_line(0).unwrap(), None);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
#[cfg(unix)]
pub mod global;
pub mod reader;
pub mod shared;
pub mod source;
pub mod stash;

/// Identifier of an open input stream; negative values are rejected
pub type DescriptorId = i32;

pub use config::{ReaderConfig, DEFAULT_CHUNK_SIZE};
pub use error::{ReaderError, Result};
pub use reader::{LineReader, Lines};
pub use shared::SharedLineReader;
#[cfg(unix)]
pub use source::FdSource;
pub use source::{ByteSource, StreamTable};
pub use stash::{Stash, NEWLINE};
