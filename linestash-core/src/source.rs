//! Byte-stream read primitives
//!
//! A [`ByteSource`] answers `read(descriptor, max_bytes)` the way an operating
//! system read call does: a positive count, `0` for end of input, or an error.

use crate::DescriptorId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Read};
use std::sync::Arc;

/// Read primitive keyed by descriptor
///
/// Takes `&self` so that reads on distinct descriptors can be issued from
/// different threads; implementations synchronize per descriptor as needed.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes from `descriptor` into `buf`
    ///
    /// Returns the number of bytes written to the front of `buf`; `0` means
    /// end of input.
    fn read_chunk(&self, descriptor: DescriptorId, buf: &mut [u8]) -> io::Result<usize>;
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn read_chunk(&self, descriptor: DescriptorId, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_chunk(descriptor, buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_chunk(&self, descriptor: DescriptorId, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_chunk(descriptor, buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Arc<S> {
    fn read_chunk(&self, descriptor: DescriptorId, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_chunk(descriptor, buf)
    }
}

/// Reads directly from raw OS file descriptors
///
/// The descriptors are borrowed: opening and closing them stays with the caller.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FdSource;

#[cfg(unix)]
impl FdSource {
    /// Create a raw descriptor source
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl ByteSource for FdSource {
    fn read_chunk(&self, descriptor: DescriptorId, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let ret = unsafe { libc::read(descriptor, buf.as_mut_ptr().cast(), buf.len()) };
            if ret < 0 {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(err);
            }
            return Ok(ret as usize);
        }
    }
}

type SharedStream = Arc<Mutex<Box<dyn Read + Send>>>;

/// In-process descriptor table over arbitrary [`Read`] streams
///
/// Each registered stream is locked on its own, so reads on different
/// descriptors do not wait on each other.
#[derive(Default)]
pub struct StreamTable {
    streams: Mutex<HashMap<DescriptorId, SharedStream>>,
}

impl std::fmt::Debug for StreamTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<DescriptorId> = self.streams.lock().keys().copied().collect();
        ids.sort_unstable();
        f.debug_struct("StreamTable").field("descriptors", &ids).finish()
    }
}

impl StreamTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `stream` under `descriptor`
    ///
    /// Returns `true` when a previously registered stream was replaced.
    pub fn register<R: Read + Send + 'static>(&self, descriptor: DescriptorId, stream: R) -> bool {
        let stream: Box<dyn Read + Send> = Box::new(stream);
        self.streams
            .lock()
            .insert(descriptor, Arc::new(Mutex::new(stream)))
            .is_some()
    }

    /// Detach the stream registered under `descriptor`
    pub fn deregister(&self, descriptor: DescriptorId) -> bool {
        self.streams.lock().remove(&descriptor).is_some()
    }

    /// Whether a stream is registered under `descriptor`
    pub fn contains(&self, descriptor: DescriptorId) -> bool {
        self.streams.lock().contains_key(&descriptor)
    }

    /// Number of registered streams
    pub fn len(&self) -> usize {
        self.streams.lock().len()
    }

    /// Whether no streams are registered
    pub fn is_empty(&self) -> bool {
        self.streams.lock().is_empty()
    }
}

impl ByteSource for StreamTable {
    fn read_chunk(&self, descriptor: DescriptorId, buf: &mut [u8]) -> io::Result<usize> {
        let stream = self.streams.lock().get(&descriptor).cloned();
        match stream {
            Some(stream) => stream.lock().read(buf),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("descriptor {descriptor} is not registered"),
            )),
        }
    }
}
