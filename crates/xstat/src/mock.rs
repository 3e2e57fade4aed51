//! In-crate status double for unit tests.

use std::ffi::{OsStr, OsString};
use std::time::SystemTime;

use crate::attributes::FileAttributes;
use crate::status::{FileStatus, NativeAttributes};

#[derive(Clone, Debug)]
pub(crate) struct MockStatus {
    name: OsString,
    size: u64,
    mode: u32,
    is_dir: bool,
    modified: SystemTime,
    native: Option<NativeAttributes>,
}

impl MockStatus {
    pub(crate) fn file(name: &str) -> Self {
        Self {
            name: name.into(),
            size: 0,
            mode: 0o100_644,
            is_dir: false,
            modified: SystemTime::UNIX_EPOCH,
            native: None,
        }
    }

    pub(crate) fn dir(name: &str) -> Self {
        Self {
            mode: 0o040_755,
            is_dir: true,
            ..Self::file(name)
        }
    }

    pub(crate) fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub(crate) fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) fn with_attributes(mut self, attrs: FileAttributes) -> Self {
        self.native = Some(NativeAttributes::with_attributes(attrs));
        self
    }

    pub(crate) fn with_native(mut self, native: NativeAttributes) -> Self {
        self.native = Some(native);
        self
    }
}

impl FileStatus for MockStatus {
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
