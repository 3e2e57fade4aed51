//! Recall-on-data-access policies.
//!
//! A policy is a pure function of an [`ExtendedStatus`]. The Windows policy
//! answers from attribute bits alone: the entry kind plays no part, so a
//! directory carrying the marker reports `true` just like a file would.

use logging::trace_probe;

use crate::attributes::FileAttributes;
use crate::error::{ProbeError, ProbeResult};
use crate::extended::{ExtendedStatus, NativeState};

/// Decides whether reading an entry's data would recall remote content.
pub trait RecallPolicy {
    /// Returns `Ok(true)` when access would trigger a recall.
    ///
    /// An error means the decision could not be made; it must never be read
    /// as "recall is true".
    fn recall_on_data_access(&self, status: &ExtendedStatus) -> ProbeResult<bool>;
}

/// Policy based on `FILE_ATTRIBUTE_RECALL_ON_DATA_ACCESS`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsRecallPolicy;

impl RecallPolicy for WindowsRecallPolicy {
    fn recall_on_data_access(&self, status: &ExtendedStatus) -> ProbeResult<bool> {
        match status.state() {
            NativeState::Decoded => {
                let recall = status
                    .attributes()
                    .contains(FileAttributes::RECALL_ON_DATA_ACCESS);
                trace_probe!(
                    name = %status.name().to_string_lossy(),
                    recall,
                    "evaluated recall policy"
                );
                Ok(recall)
            }
            // Extracted by an extractor that has no attribute concept.
            NativeState::Unsupported => Ok(false),
            NativeState::Missing => Err(ProbeError::AttributesUnavailable {
                name: status.name().to_owned(),
            }),
        }
    }
}

/// Policy for platforms without placeholder files; always `Ok(false)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRecallPolicy;

impl RecallPolicy for NoRecallPolicy {
    fn recall_on_data_access(&self, _status: &ExtendedStatus) -> ProbeResult<bool> {
        Ok(false)
    }
}
