//! Shared helpers for reader integration tests

#![allow(dead_code)]

use linestash_core::{ByteSource, DescriptorId, LineReader, Result};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::io;

/// One scripted response of the read primitive
#[derive(Debug, Clone)]
pub enum Step {
    /// Deliver these bytes, split further if the caller asks for fewer
    Data(Vec<u8>),
    /// Fail with this error kind
    Fail(io::ErrorKind),
}

/// Read primitive that replays a fixed script per descriptor
///
/// Once a script runs out, every read reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    scripts: Mutex<HashMap<DescriptorId, VecDeque<Step>>>,
    reads: Mutex<HashMap<DescriptorId, usize>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `data` on `descriptor` in pieces of the given sizes
    pub fn with_partition(self, descriptor: DescriptorId, data: &[u8], sizes: &[usize]) -> Self {
        let mut steps = VecDeque::new();
        let mut rest = data;
        for &size in sizes {
            if rest.is_empty() {
                break;
            }
            let take = size.clamp(1, rest.len());
            steps.push_back(Step::Data(rest[..take].to_vec()));
            rest = &rest[take..];
        }
        if !rest.is_empty() {
            steps.push_back(Step::Data(rest.to_vec()));
        }
        self.scripts.lock().insert(descriptor, steps);
        self
    }

    /// Replay `steps` on `descriptor`
    pub fn with_steps(self, descriptor: DescriptorId, steps: Vec<Step>) -> Self {
        self.scripts.lock().insert(descriptor, steps.into());
        self
    }

    /// Number of reads issued on `descriptor`
    pub fn reads(&self, descriptor: DescriptorId) -> usize {
        self.reads.lock().get(&descriptor).copied().unwrap_or(0)
    }
}

impl ByteSource for ScriptedSource {
    fn read_chunk(&self, descriptor: DescriptorId, buf: &mut [u8]) -> io::Result<usize> {
        *self.reads.lock().entry(descriptor).or_insert(0) += 1;

        let mut scripts = self.scripts.lock();
        let Some(script) = scripts.get_mut(&descriptor) else {
            return Ok(0);
        };
        match script.pop_front() {
            None => Ok(0),
            Some(Step::Fail(kind)) => Err(io::Error::new(kind, "scripted failure")),
            Some(Step::Data(data)) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    script.push_front(Step::Data(data[n..].to_vec()));
                }
                Ok(n)
            }
        }
    }
}

/// Call `next_line` until end of input
pub fn drain<S: ByteSource>(
    reader: &mut LineReader<S>,
    descriptor: DescriptorId,
) -> Result<Vec<Vec<u8>>> {
    reader.lines(descriptor).collect()
}
