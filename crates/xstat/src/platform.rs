//! Build-time selection of the extractor and recall policy.
//!
//! Call sites use [`extended_stat`] and [`recall_on_data_access`] and stay
//! free of `cfg` attributes. Windows gets the attribute-decoding pair; every
//! other target gets the no-op pair.

use crate::error::ProbeResult;
use crate::extended::{ExtendedStatus, Extractor};
use crate::recall::RecallPolicy;
use crate::status::FileStatus;

/// Extractor used by [`extended_stat`] on this platform.
#[cfg(windows)]
pub type PlatformExtractor = crate::extended::WindowsExtractor;
/// Extractor used by [`extended_stat`] on this platform.
#[cfg(not(windows))]
pub type PlatformExtractor = crate::extended::NoopExtractor;

/// Policy used by [`recall_on_data_access`] on this platform.
#[cfg(windows)]
pub type PlatformRecallPolicy = crate::recall::WindowsRecallPolicy;
/// Policy used by [`recall_on_data_access`] on this platform.
#[cfg(not(windows))]
pub type PlatformRecallPolicy = crate::recall::NoRecallPolicy;

/// Whether this platform has recall-on-data-access placeholders at all.
#[must_use]
pub const fn supports_recall() -> bool {
    cfg!(windows)
}

/// Builds the extended view of `status` with the platform extractor.
pub fn extended_stat<S: FileStatus + ?Sized>(status: &S) -> ExtendedStatus {
    PlatformExtractor::default().extract(status)
}

/// Evaluates the platform recall policy for `status`.
pub fn recall_on_data_access(status: &ExtendedStatus) -> ProbeResult<bool> {
    PlatformRecallPolicy::default().recall_on_data_access(status)
}
