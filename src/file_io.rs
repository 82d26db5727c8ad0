//! Byte-level collaborators of the summary pipeline
//!
//! The pipeline only ever sees bytes coming in, bytes going out and the
//! modification time of the input. [`FileSource`] and [`FileSink`] provide
//! those over the file system; tests substitute in-memory versions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Supplies raw event bytes and the time they last changed
pub trait EventSource {
    /// Human-readable location used in logs and errors
    fn location(&self) -> String;

    fn read_bytes(&self) -> io::Result<Vec<u8>>;

    fn modified(&self) -> io::Result<SystemTime>;
}

/// Accepts encoded summary bytes, replacing whatever was there before
pub trait SummarySink {
    fn location(&self) -> String;

    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    fn modified(&self) -> io::Result<SystemTime> {
        fs::metadata(&self.path)?.modified()
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SummarySink for FileSink {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    /// Truncates and overwrites; never appends
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        fs::write(&self.path, bytes)
    }
}
