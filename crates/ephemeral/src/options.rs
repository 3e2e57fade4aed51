/// Default number of candidate names tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Default number of random bytes in a name suffix (16 hex chars).
pub const DEFAULT_SUFFIX_BYTES: usize = 8;

const MIN_SUFFIX_BYTES: usize = 4;
const MAX_SUFFIX_BYTES: usize = 32;

/// What happens to the path when the handle is closed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CleanupPolicy {
    /// The file stays until the owner deletes it.
    Keep,
    /// The path is removed when the handle closes.
    ///
    /// On Windows the file is opened with `FILE_FLAG_DELETE_ON_CLOSE`, marked
    /// `FILE_ATTRIBUTE_TEMPORARY` and not shared with other openers, so the
    /// OS removes it even if the process dies. Elsewhere the handle removes
    /// the path when it is closed or dropped.
    #[default]
    DeleteOnClose,
}

/// Options that control ephemeral file allocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AllocatorOptions {
    max_attempts: u32,
    suffix_bytes: usize,
    cleanup: CleanupPolicy,
}

impl AllocatorOptions {
    /// Creates options with defaults applied: 100 attempts, 8 random bytes
    /// per suffix and [`CleanupPolicy::DeleteOnClose`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            suffix_bytes: DEFAULT_SUFFIX_BYTES,
            cleanup: CleanupPolicy::DeleteOnClose,
        }
    }

    /// Sets how many candidate names are tried. Zero is raised to one.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = if attempts == 0 { 1 } else { attempts };
        self
    }

    /// Sets the number of random bytes per suffix, clamped to `4..=32`.
    #[must_use]
    pub const fn suffix_bytes(mut self, bytes: usize) -> Self {
        self.suffix_bytes = if bytes < MIN_SUFFIX_BYTES {
            MIN_SUFFIX_BYTES
        } else if bytes > MAX_SUFFIX_BYTES {
            MAX_SUFFIX_BYTES
        } else {
            bytes
        };
        self
    }

    /// Sets the cleanup policy.
    #[must_use]
    pub const fn cleanup(mut self, cleanup: CleanupPolicy) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Re-applies the builder limits; deserialized values skip them.
    pub(crate) const fn normalized(self) -> Self {
        Self::new()
            .max_attempts(self.max_attempts)
            .suffix_bytes(self.suffix_bytes)
            .cleanup(self.cleanup)
    }

    /// Configured attempt limit.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Configured random byte count.
    #[must_use]
    pub const fn random_bytes(&self) -> usize {
        self.suffix_bytes
    }

    /// Length in chars of the rendered suffix.
    #[must_use]
    pub const fn suffix_len(&self) -> usize {
        self.suffix_bytes * 2
    }

    /// Configured cleanup policy.
    #[must_use]
    pub const fn cleanup_policy(&self) -> CleanupPolicy {
        self.cleanup
    }
}

impl Default for AllocatorOptions {
    fn default() -> Self {
        Self::new()
    }
}
