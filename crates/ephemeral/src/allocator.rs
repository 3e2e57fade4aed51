//! Exclusive-create allocation with bounded name-collision retry.
//!
//! Uniqueness comes from the filesystem: each candidate is opened with
//! `create_new`, so two callers (threads or processes) can never both succeed
//! on the same path. A collision just means another candidate is drawn.

use std::io;
use std::path::Path;

use logging::{trace_stage, warn_stage};

use crate::error::{AllocError, AllocResult};
use crate::file::EphemeralFile;
use crate::name::{fit_prefix, random_suffix, resolve_dir, validate_prefix};
use crate::options::AllocatorOptions;
use crate::sys;

/// Creates ephemeral files according to a fixed set of options.
///
/// The allocator holds no mutable state and can be shared freely between
/// threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Allocator {
    options: AllocatorOptions,
}

impl Allocator {
    /// Creates an allocator with the given options.
    #[must_use]
    pub const fn new(options: AllocatorOptions) -> Self {
        Self {
            options: options.normalized(),
        }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &AllocatorOptions {
        &self.options
    }

    /// Creates a new file named `<prefix><random hex>` inside `dir`.
    ///
    /// An empty `dir` selects the platform temp directory. The returned
    /// handle is open for reading and writing at offset 0, and the path did
    /// not exist before this call created it.
    pub fn allocate(&self, dir: impl AsRef<Path>, prefix: &str) -> AllocResult<EphemeralFile> {
        let suffix_bytes = self.options.random_bytes();
        self.allocate_with(dir.as_ref(), prefix, || random_suffix(suffix_bytes))
    }

    fn allocate_with<F>(
        &self,
        dir: &Path,
        prefix: &str,
        mut next_suffix: F,
    ) -> AllocResult<EphemeralFile>
    where
        F: FnMut() -> AllocResult<String>,
    {
        validate_prefix(prefix)?;
        let dir = resolve_dir(dir);
        let fitted = fit_prefix(prefix, self.options.suffix_len());
        let cleanup = self.options.cleanup_policy();
        let attempts = self.options.attempts();

        for attempt in 1..=attempts {
            let path = dir.join(format!("{fitted}{}", next_suffix()?));
            match sys::open_options(cleanup).open(&path) {
                Ok(file) => {
                    trace_stage!(
                        path = %path.display(),
                        attempt,
                        ?cleanup,
                        "allocated ephemeral file"
                    );
                    return Ok(EphemeralFile::new(file, path, cleanup));
                }
                Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                    trace_stage!(path = %path.display(), attempt, "name collision, retrying");
                }
                Err(source) => return Err(AllocError::Io { path, source }),
            }
        }

        warn_stage!(
            dir = %dir.display(),
            prefix,
            attempts,
            "could not allocate unique ephemeral file name"
        );
        Err(AllocError::Exhausted {
            attempts,
            dir,
            prefix: prefix.to_owned(),
        })
    }
}

/// Creates a [`CleanupPolicy::DeleteOnClose`](crate::CleanupPolicy) file with
/// default options.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut file = ephemeral::allocate(dir.path(), "stage").unwrap();
/// file.write_all(b"scratch").unwrap();
///
/// let path = file.path().to_path_buf();
/// assert!(path.exists());
/// file.close().unwrap();
/// assert!(!path.exists());
/// ```
pub fn allocate(dir: impl AsRef<Path>, prefix: &str) -> AllocResult<EphemeralFile> {
    Allocator::default().allocate(dir, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CleanupPolicy;
    use std::fs;
    use std::io::{Seek, SeekFrom, Write};
    use tempfile::tempdir;

    fn keep_allocator(attempts: u32) -> Allocator {
        Allocator::new(
            AllocatorOptions::new()
                .max_attempts(attempts)
                .cleanup(CleanupPolicy::Keep),
        )
    }

    #[test]
    fn allocate_creates_prefixed_file() {
        let dir = tempdir().expect("create temp dir");
        let file = allocate(dir.path(), "stage").unwrap();

        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("stage"), "got: {name}");
        assert_eq!(name.len(), "stage".len() + 16);
        assert_eq!(file.path().parent().unwrap(), dir.path());
        assert!(file.path().exists());
    }

    #[test]
    fn handle_starts_at_offset_zero_and_is_empty() {
        let dir = tempdir().expect("create temp dir");
        let mut file = allocate(dir.path(), "stage").unwrap();

        assert_eq!(file.stream_position().unwrap(), 0);
        assert_eq!(file.file().metadata().unwrap().len(), 0);

        file.write_all(b"abc").unwrap();
        assert_eq!(file.seek(SeekFrom::End(0)).unwrap(), 3);
    }

    #[test]
    fn collision_retries_with_new_name() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("stage-taken"), b"occupied").unwrap();

        let mut suffixes = ["taken", "free"].into_iter();
        let file = keep_allocator(5)
            .allocate_with(dir.path(), "stage-", || {
                Ok(suffixes.next().unwrap_or("other").to_owned())
            })
            .unwrap();

        assert_eq!(file.path(), dir.path().join("stage-free"));
        assert_eq!(fs::read(dir.path().join("stage-taken")).unwrap(), b"occupied");
    }

    #[test]
    fn exhaustion_reports_attempts() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("stage-same"), b"occupied").unwrap();

        let mut calls = 0;
        let err = keep_allocator(4)
            .allocate_with(dir.path(), "stage-", || {
                calls += 1;
                Ok("same".to_owned())
            })
            .expect_err("every candidate collides");

        assert_eq!(calls, 4);
        match err {
            AllocError::Exhausted {
                attempts,
                dir: reported,
                prefix,
            } => {
                assert_eq!(attempts, 4);
                assert_eq!(reported, dir.path());
                assert_eq!(prefix, "stage-");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exhaustion_reports_caller_prefix_not_truncated_one() {
        let dir = tempdir().expect("create temp dir");
        let prefix = "p".repeat(300);
        let fitted = fit_prefix(&prefix, AllocatorOptions::new().suffix_len());
        fs::write(dir.path().join(format!("{fitted}same")), b"occupied").unwrap();

        let err = keep_allocator(2)
            .allocate_with(dir.path(), &prefix, || Ok("same".to_owned()))
            .expect_err("every candidate collides");

        match err {
            AllocError::Exhausted {
                prefix: reported, ..
            } => {
                assert_eq!(reported, prefix);
                assert!(fitted.len() < prefix.len());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_collision_errors_are_not_retried() {
        let dir = tempdir().expect("create temp dir");
        let missing = dir.path().join("no-such-dir");

        let mut calls = 0;
        let err = keep_allocator(10)
            .allocate_with(&missing, "stage", || {
                calls += 1;
                Ok("x".to_owned())
            })
            .expect_err("parent directory is missing");

        assert_eq!(calls, 1);
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(matches!(err, AllocError::Io { ref path, .. } if path.starts_with(&missing)));
    }

    #[test]
    fn invalid_prefix_rejected_before_touching_disk() {
        let dir = tempdir().expect("create temp dir");
        let err = allocate(dir.path(), "../stage").expect_err("separator in prefix");

        assert!(matches!(err, AllocError::InvalidPrefix(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn long_prefix_truncated() {
        let dir = tempdir().expect("create temp dir");
        let prefix = "p".repeat(400);
        let file = allocate(dir.path(), &prefix).unwrap();

        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.len() <= crate::name::NAME_MAX, "name too long: {}", name.len());
        assert!(name.starts_with("ppp"));
    }

    #[test]
    fn empty_dir_uses_temp_dir() {
        let file = allocate("", "cloudprobe-test-").unwrap();
        assert_eq!(file.path().parent().unwrap(), std::env::temp_dir());
        file.close().unwrap();
    }

    #[test]
    fn suffix_length_follows_options() {
        let dir = tempdir().expect("create temp dir");
        let allocator = Allocator::new(AllocatorOptions::new().suffix_bytes(4));
        let file = allocator.allocate(dir.path(), "s").unwrap();

        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(name.len(), 1 + 8);
    }
}
