//! Per-descriptor incremental line reader

use crate::config::ReaderConfig;
use crate::error::{ReaderError, Result};
use crate::source::ByteSource;
use crate::stash::{Stash, NEWLINE};
use crate::DescriptorId;
use std::collections::HashMap;

/// Reader state for one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Bytes read but not yet returned (possibly none)
    Pending(Stash),
    /// End of input observed and every byte handed out
    Exhausted,
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Pending(Stash::new())
    }
}

impl Slot {
    pub(crate) fn is_drained(&self) -> bool {
        matches!(self, Slot::Pending(stash) if stash.is_empty())
    }

    pub(crate) fn pending_bytes(&self) -> usize {
        match self {
            Slot::Pending(stash) => stash.len(),
            Slot::Exhausted => 0,
        }
    }
}

/// Reject arguments before any state is touched
pub(crate) fn check_arguments(descriptor: DescriptorId, config: &ReaderConfig) -> Result<()> {
    if descriptor < 0 {
        return Err(ReaderError::invalid_descriptor(descriptor));
    }
    config.validate()
}

/// Top up `slot` from `source` until it holds a line or the stream ends, then
/// split that line off.
///
/// A read failure discards everything buffered for the descriptor.
pub(crate) fn read_line_into<S: ByteSource + ?Sized>(
    slot: &mut Slot,
    source: &S,
    descriptor: DescriptorId,
    chunk_size: usize,
) -> Result<Option<Vec<u8>>> {
    let stash = match slot {
        Slot::Exhausted => return Ok(None),
        Slot::Pending(stash) => stash,
    };

    let mut at_eof = false;
    if !stash.has_line() {
        let mut chunk = vec![0u8; chunk_size];
        loop {
            match source.read_chunk(descriptor, &mut chunk) {
                Ok(0) => {
                    at_eof = true;
                    break;
                }
                Ok(n) => {
                    log::trace!("descriptor {descriptor}: read {n} bytes");
                    let fresh = &chunk[..n];
                    stash.append(fresh);
                    if fresh.contains(&NEWLINE) {
                        break;
                    }
                }
                Err(source) => {
                    log::warn!(
                        "descriptor {descriptor}: read failed, dropping {} bytes: {source}",
                        stash.len()
                    );
                    stash.clear();
                    return Err(ReaderError::Read { descriptor, source });
                }
            }
        }
    }

    let line = stash.take_line(at_eof);
    if at_eof {
        log::debug!("descriptor {descriptor}: end of input");
        *slot = Slot::Exhausted;
    }
    Ok(line)
}

/// Incremental line reader over any number of descriptors
///
/// Each call to [`next_line`](Self::next_line) returns the next line of the
/// given descriptor, including its trailing newline. Bytes read past the end
/// of that line are retained and served first on the next call for the same
/// descriptor, so nothing is read twice and nothing is lost.
///
/// # Example
///
/// ```rust
/// use linestash_core::{LineReader, ReaderConfig, StreamTable};
/// use std::io::Cursor;
///
/// let table = StreamTable::new();
/// table.register(3, Cursor::new(b"a\nbb\nccc".to_vec()));
///
/// let mut reader = LineReader::with_config(table, ReaderConfig::new(2));
/// assert_eq!(reader.next_line(3).unwrap(), Some(b"a\n".to_vec()));
/// assert_eq!(reader.next_line(3).unwrap(), Some(b"bb\n".to_vec()));
/// assert_eq!(reader.next_line(3).unwrap(), Some(b"ccc".to_vec()));
/// assert_eq!(reader.next_line(3).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct LineReader<S> {
    source: S,
    config: ReaderConfig,
    slots: HashMap<DescriptorId, Slot>,
}

impl<S: ByteSource> LineReader<S> {
    /// Create a reader with the default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    /// Create a reader with an explicit configuration
    ///
    /// An invalid configuration is reported by every `next_line` call.
    pub fn with_config(source: S, config: ReaderConfig) -> Self {
        Self {
            source,
            config,
            slots: HashMap::new(),
        }
    }

    /// Return the next line of `descriptor`
    ///
    /// `Ok(None)` signals end of input. Once returned, it is returned again on
    /// every later call until the descriptor is [released](Self::release).
    pub fn next_line(&mut self, descriptor: DescriptorId) -> Result<Option<Vec<u8>>> {
        check_arguments(descriptor, &self.config)?;

        let slot = self.slots.entry(descriptor).or_default();
        let result = read_line_into(slot, &self.source, descriptor, self.config.chunk_size);

        // Drained entries and entries discarded by a read error are dropped
        if slot.is_drained() {
            self.slots.remove(&descriptor);
        }
        result
    }

    /// Iterate over the remaining lines of `descriptor`
    pub fn lines(&mut self, descriptor: DescriptorId) -> Lines<'_, S> {
        Lines {
            reader: self,
            descriptor,
            done: false,
        }
    }

    /// Forget everything known about `descriptor`
    ///
    /// Buffered bytes are discarded and a recorded end of input is cleared, so
    /// the identifier can be reused for a newly opened stream. Returns whether
    /// any state existed.
    pub fn release(&mut self, descriptor: DescriptorId) -> bool {
        let existed = self.slots.remove(&descriptor).is_some();
        if existed {
            log::debug!("descriptor {descriptor}: released");
        }
        existed
    }

    /// Drop the state of every descriptor
    pub fn reset(&mut self) {
        log::debug!("resetting {} descriptors", self.slots.len());
        self.slots = HashMap::new();
    }

    /// Bytes buffered for `descriptor` and not yet returned
    pub fn pending_bytes(&self, descriptor: DescriptorId) -> usize {
        self.slots.get(&descriptor).map_or(0, Slot::pending_bytes)
    }

    /// Whether `descriptor` has reported end of input with nothing left to return
    pub fn is_exhausted(&self, descriptor: DescriptorId) -> bool {
        matches!(self.slots.get(&descriptor), Some(Slot::Exhausted))
    }

    /// Descriptors with buffered bytes or a recorded end of input, sorted
    pub fn tracked_descriptors(&self) -> Vec<DescriptorId> {
        let mut ids: Vec<DescriptorId> = self.slots.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Active configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Underlying read primitive
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Tear the reader down, returning the read primitive
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Iterator over the remaining lines of one descriptor
///
/// Ends at end of input, or right after yielding the first error.
#[derive(Debug)]
pub struct Lines<'a, S> {
    reader: &'a mut LineReader<S>,
    descriptor: DescriptorId,
    done: bool,
}

impl<S: ByteSource> Iterator for Lines<'_, S> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_line(self.descriptor) {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
