//! Shared test utilities for the cloudprobe workspace.
//!
//! - [`ScratchDir`]: a self-deleting directory with small file helpers.
//! - [`SyntheticStatus`]: a [`FileStatus`] double that hands out whatever
//!   native attribute data the test asks for, with no real entry behind it.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;
use xstat::{FileAttributes, FileStatus, NativeAttributes};

/// Temporary directory removed on drop.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates an empty scratch directory under the system temp location.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::Builder::new().prefix("cloudprobe-").tempdir()?,
        })
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the directory and returns the path.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Creates a subdirectory and returns its path.
    pub fn mkdir(&self, name: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Sorted names of the directory's entries.
    pub fn entries(&self) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(self.dir.path())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> io::Result<bool> {
        Ok(fs::read_dir(self.dir.path())?.next().is_none())
    }
}

/// A file status double with caller-chosen native attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticStatus {
    name: OsString,
    size: u64,
    mode: u32,
    is_dir: bool,
    modified: SystemTime,
    native: Option<NativeAttributes>,
}

impl SyntheticStatus {
    /// A regular file with no native attributes.
    #[must_use]
    pub fn file(name: &str) -> Self {
        Self {
            name: OsString::from(name),
            size: 0,
            mode: 0o100_644,
            is_dir: false,
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000),
            native: None,
        }
    }

    /// A directory with no native attributes.
    #[must_use]
    pub fn dir(name: &str) -> Self {
        Self {
            mode: 0o040_755,
            is_dir: true,
            ..Self::file(name)
        }
    }

    /// Sets the logical size.
    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Attaches native data carrying only `attrs`.
    #[must_use]
    pub const fn with_attributes(mut self, attrs: FileAttributes) -> Self {
        self.native = Some(NativeAttributes::with_attributes(attrs));
        self
    }

    /// Attaches native data carrying the raw attribute word `bits`.
    #[must_use]
    pub const fn with_attribute_bits(self, bits: u32) -> Self {
        self.with_attributes(FileAttributes::from_bits(bits))
    }

    /// Attaches full native data.
    #[must_use]
    pub const fn with_native(mut self, native: NativeAttributes) -> Self {
        self.native = Some(native);
        self
    }
}

impl FileStatus for SyntheticStatus {
    fn name(&self) -> &OsStr {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mode(&self) -> u32 {
        self.mode
    }

    fn is_dir(&self) -> bool {
        self.is_dir
    }

    fn modified(&self) -> Option<SystemTime> {
        Some(self.modified)
    }

    fn native_attributes(&self) -> Option<NativeAttributes> {
        self.native
    }
}
