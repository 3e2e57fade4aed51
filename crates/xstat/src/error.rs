//! crates/xstat/src/error.rs
//!
//! Error types for the recall probe.

use std::ffi::OsString;

use thiserror::Error;

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors reported by a recall policy.
///
/// A probe error means the check could not be completed. Callers should treat
/// the entry as unknown or regular; it never implies that a recall would
/// happen.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// The extended status carried no interpretable native attributes.
    #[error("could not determine file attributes of {}", .name.to_string_lossy())]
    AttributesUnavailable {
        /// Name of the entry being probed.
        name: OsString,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_unavailable_names_the_entry() {
        let err = ProbeError::AttributesUnavailable {
            name: OsString::from("report.docx"),
        };
        let display = err.to_string();
        assert!(display.contains("could not determine file attributes"));
        assert!(display.contains("report.docx"));
    }

    #[test]
    fn probe_result_err() {
        let result: ProbeResult<bool> = Err(ProbeError::AttributesUnavailable {
            name: OsString::new(),
        });
        assert!(result.is_err());
    }
}
