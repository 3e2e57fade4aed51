#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cloudprobe` is the facade over the workspace crates:
//!
//! - [`xstat`] extends a file status with native attributes and decides
//!   whether reading the file would recall remote content.
//! - [`ephemeral`] allocates uniquely named scratch files for staging.
//! - [`logging`] carries the tracing targets and subscriber setup.
//!
//! [`classify`] combines extraction and the recall decision into the single
//! per-entry call a scanner makes before opening a file.
//!
//! # Examples
//!
//! ```
//! use cloudprobe::{ScanDecision, Stat, classify};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("notes.txt");
//! std::fs::write(&path, b"local bytes").unwrap();
//!
//! let status = Stat::from_path(&path).unwrap();
//! assert!(matches!(classify(&status), ScanDecision::Local));
//! ```

pub use ephemeral;
pub use logging;
pub use xstat;

pub use ephemeral::{
    AllocError, AllocResult, Allocator, AllocatorOptions, CleanupPolicy, EphemeralFile, allocate,
};
pub use xstat::{
    ExtendedStatus, FileAttributes, FileStatus, NativeAttributes, ProbeError, ProbeResult, Stat,
    extended_stat, recall_on_data_access, supports_recall,
};

/// What a scanner should do with an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanDecision {
    /// Content is local; reading it is safe.
    Local,
    /// Reading would download remote content first.
    Remote,
    /// The recall decision could not be made.
    Unknown(ProbeError),
}

impl ScanDecision {
    /// Whether the entry may be read without triggering a recall.
    ///
    /// [`ScanDecision::Unknown`] counts as readable: a failed check never
    /// implies that a recall would happen.
    #[must_use]
    pub const fn is_safe_to_read(&self) -> bool {
        matches!(self, Self::Local | Self::Unknown(_))
    }

    /// Whether a scanner should skip the entry. Only a confirmed recall is
    /// skipped.
    #[must_use]
    pub const fn should_skip(&self) -> bool {
        matches!(self, Self::Remote)
    }

    /// Whether the recall check could not be completed and the entry should
    /// be flagged.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<ProbeResult<bool>> for ScanDecision {
    fn from(result: ProbeResult<bool>) -> Self {
        match result {
            Ok(false) => Self::Local,
            Ok(true) => Self::Remote,
            Err(error) => Self::Unknown(error),
        }
    }
}

/// Extends `status` with the platform extractor and evaluates the platform
/// recall policy on it.
pub fn classify<S: FileStatus + ?Sized>(status: &S) -> ScanDecision {
    let xs = extended_stat(status);
    let decision = ScanDecision::from(recall_on_data_access(&xs));
    if decision != ScanDecision::Local {
        logging::debug_probe!(
            name = ?xs.name(),
            ?decision,
            "entry needs attention before reading"
        );
    }
    decision
}
