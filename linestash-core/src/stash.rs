//! Retained bytes read from a descriptor but not yet handed out

/// Line delimiter byte
pub const NEWLINE: u8 = b'\n';

/// Unconsumed bytes for one descriptor
///
/// Holds zero or more complete lines followed by at most one partial line.
/// Lines are handed out by advancing a consumed offset; the consumed prefix is
/// dropped before the next append, or the storage released once drained.
#[derive(Debug, Default, Clone)]
pub struct Stash {
    bytes: Vec<u8>,
    start: usize,
}

impl PartialEq for Stash {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Stash {}

impl Stash {
    /// Create an empty stash without allocating
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            start: 0,
        }
    }

    /// Append freshly read bytes, preserving order
    pub fn append(&mut self, chunk: &[u8]) {
        if self.start > 0 {
            self.bytes.drain(..self.start);
            self.start = 0;
        }
        self.bytes.extend_from_slice(chunk);
    }

    /// Offset of the first newline byte, if any
    pub fn newline_position(&self) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == NEWLINE)
    }

    /// Whether a complete line is buffered
    pub fn has_line(&self) -> bool {
        self.newline_position().is_some()
    }

    /// Split off the next line
    ///
    /// Returns the prefix up to and including the first newline. Without a
    /// newline, the whole remainder is returned only when `at_eof` is set.
    /// The returned vector is allocated to fit the line and never shares
    /// storage with the stash.
    pub fn take_line(&mut self, at_eof: bool) -> Option<Vec<u8>> {
        let end = match self.newline_position() {
            Some(pos) => pos + 1,
            None if at_eof && !self.is_empty() => self.len(),
            None => return None,
        };

        let line = self.as_bytes()[..end].to_vec();
        self.start += end;
        if self.is_empty() {
            self.clear();
        }
        Some(line)
    }

    /// Drop all buffered bytes and release the storage
    pub fn clear(&mut self) {
        self.bytes = Vec::new();
        self.start = 0;
    }

    /// Number of buffered bytes
    pub fn len(&self) -> usize {
        self.bytes.len() - self.start
    }

    /// Whether nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated capacity, zero once released
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// View of the buffered bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start..]
    }
}
