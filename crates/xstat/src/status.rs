//! Generic file status records and the native attribute capability.
//!
//! [`FileStatus`] is the narrow view the extractor needs from whatever the
//! filesystem layer produced. Platform-native data is reached only through
//! [`FileStatus::native_attributes`], so a test double can hand out synthetic
//! attribute words without a real directory entry behind it.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::attributes::FileAttributes;

/// FILETIME ticks (100 ns) between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_EPOCH_TICKS: u64 = 116_444_736_000_000_000;

/// FILETIME ticks per second.
const FILETIME_TICKS_PER_SEC: u64 = 10_000_000;

/// Platform-native attribute data attached to a file status.
///
/// The layout follows `WIN32_FILE_ATTRIBUTE_DATA` with the reparse tag added.
/// Timestamps are raw FILETIME values (100 ns ticks since 1601-01-01 UTC);
/// zero means "not reported".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeAttributes {
    /// Attribute bit set (`dwFileAttributes`).
    pub file_attributes: FileAttributes,
    /// Reparse point tag, or zero when the entry is not a reparse point or the
    /// provider does not report tags.
    pub reparse_tag: u32,
    /// Logical file size in bytes.
    pub file_size: u64,
    /// Creation time as FILETIME ticks.
    pub creation_time: u64,
    /// Last access time as FILETIME ticks.
    pub last_access_time: u64,
    /// Last write time as FILETIME ticks.
    pub last_write_time: u64,
}

impl NativeAttributes {
    /// Attribute data carrying only the given attribute bits.
    #[must_use]
    pub const fn with_attributes(file_attributes: FileAttributes) -> Self {
        Self {
            file_attributes,
            reparse_tag: 0,
            file_size: 0,
            creation_time: 0,
            last_access_time: 0,
            last_write_time: 0,
        }
    }

    /// Creation time, when reported.
    #[must_use]
    pub fn created(&self) -> Option<SystemTime> {
        filetime_to_system_time(self.creation_time)
    }

    /// Last access time, when reported.
    #[must_use]
    pub fn accessed(&self) -> Option<SystemTime> {
        filetime_to_system_time(self.last_access_time)
    }

    /// Last write time, when reported.
    #[must_use]
    pub fn written(&self) -> Option<SystemTime> {
        filetime_to_system_time(self.last_write_time)
    }
}

/// Converts FILETIME ticks to a [`SystemTime`].
///
/// Returns `None` for zero and for values the host clock cannot represent.
#[must_use]
pub fn filetime_to_system_time(ticks: u64) -> Option<SystemTime> {
    if ticks == 0 {
        return None;
    }
    let (after_epoch, delta) = if ticks >= FILETIME_UNIX_EPOCH_TICKS {
        (true, ticks - FILETIME_UNIX_EPOCH_TICKS)
    } else {
        (false, FILETIME_UNIX_EPOCH_TICKS - ticks)
    };
    let offset = Duration::new(
        delta / FILETIME_TICKS_PER_SEC,
        ((delta % FILETIME_TICKS_PER_SEC) * 100) as u32,
    );
    if after_epoch {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    }
}

/// Platform-generic description of a filesystem entry.
///
/// Implementations are snapshots: every method answers from data captured
/// when the status was obtained and must not touch the filesystem.
pub trait FileStatus {
    /// Final path component of the entry.
    fn name(&self) -> &OsStr;

    /// Logical size in bytes.
    fn size(&self) -> u64;

    /// Unix-style mode word (file type and permission bits).
    fn mode(&self) -> u32;

    /// Whether the entry is a directory.
    fn is_dir(&self) -> bool;

    /// Last modification time, when known.
    fn modified(&self) -> Option<SystemTime>;

    /// Native attribute data, or `None` when this status carries none that
    /// can be interpreted.
    fn native_attributes(&self) -> Option<NativeAttributes>;
}

impl<T: FileStatus + ?Sized> FileStatus for &T {
    fn name(&self) -> &OsStr {
        (**self).name()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }

    fn mode(&self) -> u32 {
        (**self).mode()
    }

    fn is_dir(&self) -> bool {
        (**self).is_dir()
    }

    fn modified(&self) -> Option<SystemTime> {
        (**self).modified()
    }

    fn native_attributes(&self) -> Option<NativeAttributes> {
        (**self).native_attributes()
    }
}

/// A [`FileStatus`] backed by [`std::fs::Metadata`].
#[derive(Clone, Debug)]
pub struct Stat {
    name: OsString,
    metadata: fs::Metadata,
}

impl Stat {
    /// Pairs a name with metadata obtained elsewhere.
    pub fn new(name: impl Into<OsString>, metadata: fs::Metadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }

    /// Stats `path`, following symbolic links.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self::new(entry_name(path), metadata))
    }

    /// Stats `path` without following a trailing symbolic link.
    pub fn symlink_from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::symlink_metadata(path)?;
        Ok(Self::new(entry_name(path), metadata))
    }

    /// Builds a status from a directory listing entry.
    ///
    /// On Windows the metadata comes from the directory enumeration itself,
    /// so no extra open of the entry happens.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> io::Result<Self> {
        let metadata = entry.metadata()?;
        Ok(Self::new(entry.file_name(), metadata))
    }

    /// The underlying metadata.
    #[must_use]
    pub const fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }
}

fn entry_name(path: &Path) -> OsString {
    path.file_name()
        .map_or_else(|| path.as_os_str().to_owned(), OsStr::to_owned)
}

impl FileStatus for Stat {
    fn name(&self) -> &OsStr {
        &self.name
    }

    fn size(&self) -> u64 {
        self.metadata.len()
    }

    #[cfg(unix)]
    fn mode(&self) -> u32 {
        use std::os::unix::fs::MetadataExt;
        self.metadata.mode()
    }

    #[cfg(not(unix))]
    fn mode(&self) -> u32 {
        let kind = if self.metadata.is_dir() {
            0o040_000
        } else if self.metadata.file_type().is_symlink() {
            0o120_000
        } else {
            0o100_000
        };
        let perms = if self.metadata.permissions().readonly() {
            0o444
        } else {
            0o666
        };
        let exec = if self.metadata.is_dir() { 0o111 } else { 0 };
        kind | perms | exec
    }

    fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    fn modified(&self) -> Option<SystemTime> {
        self.metadata.modified().ok()
    }

    #[cfg(windows)]
    fn native_attributes(&self) -> Option<NativeAttributes> {
        use std::os::windows::fs::MetadataExt;

        Some(NativeAttributes {
            file_attributes: FileAttributes::from_bits(self.metadata.file_attributes()),
            // Not exposed by std on stable.
            reparse_tag: 0,
            file_size: self.metadata.file_size(),
            creation_time: self.metadata.creation_time(),
            last_access_time: self.metadata.last_access_time(),
            last_write_time: self.metadata.last_write_time(),
        })
    }

    #[cfg(not(windows))]
    fn native_attributes(&self) -> Option<NativeAttributes> {
        None
    }
}
