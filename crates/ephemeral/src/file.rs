//! The allocated file handle and its cleanup guard.

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use logging::{trace_stage, warn_stage};

use crate::options::CleanupPolicy;
use crate::sys;

/// Guard that removes a path on drop while armed.
///
/// Dropping happens after the file handle is closed, because
/// [`EphemeralFile`] declares the handle first.
#[derive(Debug)]
pub(crate) struct CleanupGuard {
    path: PathBuf,
    armed: bool,
}

impl CleanupGuard {
    pub(crate) const fn new(path: PathBuf, armed: bool) -> Self {
        Self { path, armed }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Stops the guard from touching the path and hands it back.
    pub(crate) fn disarm(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }

    /// Removes the path now if armed. A missing path is not an error.
    pub(crate) fn finish(self) -> io::Result<()> {
        if self.armed {
            let path = self.disarm();
            remove_if_present(&path)
        } else {
            Ok(())
        }
    }

    /// Removes the path now regardless of arming.
    pub(crate) fn remove_now(self) -> io::Result<()> {
        let path = self.disarm();
        remove_if_present(&path)
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if self.armed
            && let Err(error) = remove_if_present(&self.path)
        {
            // Drop cannot report; leave a trace for the operator.
            warn_stage!(path = %self.path.display(), %error, "failed to remove ephemeral file");
        }
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            trace_stage!(path = %path.display(), "removed ephemeral file");
            Ok(())
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error),
    }
}

/// An open, uniquely named ephemeral file.
///
/// The handle is open for reading and writing and starts at offset 0. What
/// happens to the path on close depends on the [`CleanupPolicy`] it was
/// allocated with.
#[derive(Debug)]
pub struct EphemeralFile {
    // Declared before `guard`: the handle must close before the path is
    // removed.
    file: File,
    guard: CleanupGuard,
    cleanup: CleanupPolicy,
}

impl EphemeralFile {
    pub(crate) fn new(file: File, path: PathBuf, cleanup: CleanupPolicy) -> Self {
        let armed = cleanup == CleanupPolicy::DeleteOnClose && !sys::OS_DELETES_ON_CLOSE;
        Self {
            file,
            guard: CleanupGuard::new(path, armed),
            cleanup,
        }
    }

    /// Path the file was created at.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.guard.path()
    }

    /// Cleanup policy the file was allocated with.
    #[must_use]
    pub const fn cleanup(&self) -> CleanupPolicy {
        self.cleanup
    }

    /// Shared access to the handle.
    #[must_use]
    pub const fn file(&self) -> &File {
        &self.file
    }

    /// Exclusive access to the handle.
    pub const fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Takes the handle and path; the caller owns cleanup from here on.
    ///
    /// With [`CleanupPolicy::DeleteOnClose`] on Windows the OS still removes
    /// the file when the returned handle closes.
    #[must_use]
    pub fn into_parts(self) -> (File, PathBuf) {
        let Self { file, guard, .. } = self;
        (file, guard.disarm())
    }

    /// Closes the handle and applies the cleanup policy.
    ///
    /// Unlike dropping, this reports a failed removal.
    pub fn close(self) -> io::Result<()> {
        let Self { file, guard, .. } = self;
        drop(file);
        guard.finish()
    }

    /// Closes the handle and removes the path regardless of the policy.
    pub fn remove(self) -> io::Result<()> {
        let Self { file, guard, .. } = self;
        drop(file);
        guard.remove_now()
    }
}

impl Read for EphemeralFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for EphemeralFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for EphemeralFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}
