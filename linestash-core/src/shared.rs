//! Thread-safe line reader
//!
//! The descriptor map is locked only while entries are looked up, inserted or
//! removed. Each descriptor's stash sits behind its own lock, which a caller
//! holds for the whole of its `next_line` call: calls on one descriptor are
//! serialized, calls on different descriptors run side by side.

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::reader::{check_arguments, read_line_into, Slot};
use crate::source::ByteSource;
use crate::DescriptorId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

type SharedSlot = Arc<Mutex<Slot>>;

/// [`LineReader`](crate::LineReader) counterpart usable through `&self`
/// from many threads
#[derive(Debug)]
pub struct SharedLineReader<S> {
    source: S,
    config: ReaderConfig,
    slots: Mutex<HashMap<DescriptorId, SharedSlot>>,
}

impl<S: ByteSource + Sync> SharedLineReader<S> {
    /// Create a reader with the default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    /// Create a reader with an explicit configuration
    pub fn with_config(source: S, config: ReaderConfig) -> Self {
        Self {
            source,
            config,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the next line of `descriptor`
    ///
    /// Same contract as [`LineReader::next_line`](crate::LineReader::next_line).
    /// A drained stash has its storage released but its entry is kept until
    /// [`release`](Self::release) or [`reset`](Self::reset), so that a caller
    /// waiting on the same descriptor never writes into a detached slot.
    pub fn next_line(&self, descriptor: DescriptorId) -> Result<Option<Vec<u8>>> {
        check_arguments(descriptor, &self.config)?;

        let slot = Arc::clone(self.slots.lock().entry(descriptor).or_default());
        let mut slot = slot.lock();
        read_line_into(&mut slot, &self.source, descriptor, self.config.chunk_size)
    }

    /// Forget everything known about `descriptor`
    pub fn release(&self, descriptor: DescriptorId) -> bool {
        let existed = self.slots.lock().remove(&descriptor).is_some();
        if existed {
            log::debug!("descriptor {descriptor}: released");
        }
        existed
    }

    /// Drop the state of every descriptor
    pub fn reset(&self) {
        let mut slots = self.slots.lock();
        log::debug!("resetting {} descriptors", slots.len());
        *slots = HashMap::new();
    }

    /// Bytes buffered for `descriptor` and not yet returned
    ///
    /// Waits for any in-flight call on the same descriptor.
    pub fn pending_bytes(&self, descriptor: DescriptorId) -> usize {
        let slot = self.slots.lock().get(&descriptor).cloned();
        slot.map_or(0, |slot| slot.lock().pending_bytes())
    }

    /// Whether `descriptor` has reported end of input with nothing left to return
    pub fn is_exhausted(&self, descriptor: DescriptorId) -> bool {
        let slot = self.slots.lock().get(&descriptor).cloned();
        slot.is_some_and(|slot| matches!(*slot.lock(), Slot::Exhausted))
    }

    /// Descriptors with an entry in the map, sorted
    pub fn tracked_descriptors(&self) -> Vec<DescriptorId> {
        let mut ids: Vec<DescriptorId> = self.slots.lock().keys().copied().collect();
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
}
