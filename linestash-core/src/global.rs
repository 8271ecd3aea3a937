//! Process-wide reader over raw OS descriptors
//!
//! Mirrors the classic `get_next_line(fd)` calling convention: one reader is
//! created on first use and lives until the process exits, keeping a stash for
//! every descriptor it has been asked about. Callers that close and reuse a
//! descriptor number must [`release_descriptor`] it first.

use crate::error::Result;
use crate::shared::SharedLineReader;
use crate::source::FdSource;
use crate::DescriptorId;
use once_cell::sync::Lazy;

static READER: Lazy<SharedLineReader<FdSource>> = Lazy::new(|| {
    log::debug!("creating process-wide line reader");
    SharedLineReader::new(FdSource::new())
});

/// Return the next line of the open descriptor `fd`
///
/// `Ok(None)` signals end of input.
///
/// # Notes
///
/// End of input is remembered per descriptor number. After closing `fd`, call
/// [`release_descriptor`] before the number is handed out again, or the newly
/// opened stream keeps reporting `Ok(None)` without being read.
pub fn get_next_line(fd: DescriptorId) -> Result<Option<Vec<u8>>> {
    READER.next_line(fd)
}

/// Forget the buffered state of `fd`
pub fn release_descriptor(fd: DescriptorId) -> bool {
    READER.release(fd)
}

/// Forget the buffered state of every descriptor
pub fn reset() {
    READER.reset();
}

/// Access the process-wide reader
pub fn reader() -> &'static SharedLineReader<FdSource> {
    &READER
}
