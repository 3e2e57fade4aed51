//! Platform open flags for exclusive creation.

use std::fs::OpenOptions;

use crate::options::CleanupPolicy;

/// Whether the OS itself removes `DeleteOnClose` files when the last handle
/// closes. When `false` the handle removes the path on close.
pub(crate) const OS_DELETES_ON_CLOSE: bool = cfg!(windows);

/// Read/write, exclusive-create options for a new ephemeral file.
#[cfg(windows)]
pub(crate) fn open_options(cleanup: CleanupPolicy) -> OpenOptions {
    use std::os::windows::fs::OpenOptionsExt;
    use windows_sys::Win32::Storage::FileSystem::{
        FILE_ATTRIBUTE_TEMPORARY, FILE_FLAG_DELETE_ON_CLOSE,
    };

    let mut options = OpenOptions::new();
    options.read(true).write(true).create_new(true);
    if cleanup == CleanupPolicy::DeleteOnClose {
        options
            .share_mode(0)
            .attributes(FILE_ATTRIBUTE_TEMPORARY)
            .custom_flags(FILE_FLAG_DELETE_ON_CLOSE);
    }
    options
}

/// Read/write, exclusive-create options for a new ephemeral file.
#[cfg(unix)]
pub(crate) fn open_options(_cleanup: CleanupPolicy) -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    // Same permissions as mkstemp(3).
    options.read(true).write(true).create_new(true).mode(0o600);
    options
}

/// Read/write, exclusive-create options for a new ephemeral file.
#[cfg(not(any(unix, windows)))]
pub(crate) fn open_options(_cleanup: CleanupPolicy) -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create_new(true);
    options
}
