//! Opening inputs as readable descriptors

use super::glob_resolver::STDIN_MARKER;
use anyhow::{Context, Result};
use linestash_core::{ByteSource, DescriptorId};
use std::fs::File;
use std::path::{Path, PathBuf};

/// An opened input and the descriptor it is read through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenInput {
    /// Display name used in output
    pub name: String,
    /// Descriptor handed to the line reader
    pub descriptor: DescriptorId,
}

/// Opened inputs together with the read primitive that serves them
///
/// The files stay open for as long as the set lives.
pub struct InputSet {
    inputs: Vec<OpenInput>,
    source: Box<dyn ByteSource + Send + Sync>,
    _files: Vec<File>,
}

impl std::fmt::Debug for InputSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSet")
            .field("inputs", &self.inputs)
            .finish()
    }
}

fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_MARKER) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))
}

impl InputSet {
    /// Open every path; `-` stands for standard input
    #[cfg(unix)]
    pub fn open(paths: &[PathBuf]) -> Result<Self> {
        use linestash_core::FdSource;
        use std::os::unix::io::AsRawFd;

        let mut inputs = Vec::with_capacity(paths.len());
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let descriptor = if path == Path::new(STDIN_MARKER) {
                std::io::stdin().as_raw_fd()
            } else {
                let file = open_file(path)?;
                let fd = file.as_raw_fd();
                files.push(file);
                fd
            };
            log::debug!("opened {} as descriptor {descriptor}", path.display());
            inputs.push(OpenInput {
                name: display_name(path),
                descriptor,
            });
        }

        Ok(Self {
            inputs,
            source: Box::new(FdSource::new()),
            _files: files,
        })
    }

    /// Open every path; `-` stands for standard input
    #[cfg(not(unix))]
    pub fn open(paths: &[PathBuf]) -> Result<Self> {
        use linestash_core::StreamTable;

        let table = StreamTable::new();
        let mut inputs = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let descriptor = DescriptorId::try_from(index).context("Too many inputs")?;
            if path == Path::new(STDIN_MARKER) {
                table.register(descriptor, std::io::stdin());
            } else {
                table.register(descriptor, open_file(path)?);
            }
            log::debug!("opened {} as descriptor {descriptor}", path.display());
            inputs.push(OpenInput {
                name: display_name(path),
                descriptor,
            });
        }

        Ok(Self {
            inputs,
            source: Box::new(table),
            _files: Vec::new(),
        })
    }

    /// Opened inputs in command-line order
    pub fn inputs(&self) -> &[OpenInput] {
        &self.inputs
    }

    /// Read primitive serving every descriptor in the set
    pub fn source(&self) -> &(dyn ByteSource + Send + Sync) {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linestash_core::LineReader;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_and_read_through_source() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "a1\na2\n").unwrap();
        fs::write(&b, "b1").unwrap();

        let set = InputSet::open(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(set.inputs().len(), 2);
        assert_eq!(set.inputs()[0].name, a.display().to_string());
        assert_ne!(set.inputs()[0].descriptor, set.inputs()[1].descriptor);

        let mut reader = LineReader::new(set.source());
        let fd_a = set.inputs()[0].descriptor;
        let fd_b = set.inputs()[1].descriptor;
        assert_eq!(reader.next_line(fd_b).unwrap(), Some(b"b1".to_vec()));
        assert_eq!(reader.next_line(fd_a).unwrap(), Some(b"a1\n".to_vec()));
        assert_eq!(reader.next_line(fd_a).unwrap(), Some(b"a2\n".to_vec()));
        assert_eq!(reader.next_line(fd_a).unwrap(), None);
    }

    #[test]
    fn test_missing_file() {
        let err = InputSet::open(&[PathBuf::from("/nonexistent/input.txt")]).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_stdin_display_name() {
        assert_eq!(display_name(Path::new("-")), "<stdin>");
        assert_eq!(display_name(Path::new("x.txt")), "x.txt");
    }
}
