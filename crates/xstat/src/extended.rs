//! Extended status values and the extractors that build them.
//!
//! Extraction is a reinterpretation of data already held by a
//! [`FileStatus`]; it never stats, opens or reads the entry again. When the
//! native blob is absent the result carries zeroed native fields and records
//! that fact in [`NativeState`] instead of failing.

use std::ffi::{OsStr, OsString};
use std::time::SystemTime;

use logging::{debug_probe, trace_probe};

use crate::attributes::FileAttributes;
use crate::error::ProbeResult;
use crate::platform::PlatformRecallPolicy;
use crate::recall::RecallPolicy;
use crate::status::{FileStatus, NativeAttributes};

/// How the native part of an [`ExtendedStatus`] was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NativeState {
    /// Native attributes were decoded from the status.
    Decoded,
    /// The extractor does not model native attributes on this platform.
    Unsupported,
    /// Native attributes were expected but the status carried none.
    Missing,
}

/// Platform-extended view of a file status.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedStatus {
    name: OsString,
    size: u64,
    mode: u32,
    is_dir: bool,
    modified: Option<SystemTime>,
    native: NativeAttributes,
    state: NativeState,
}

impl ExtendedStatus {
    fn generic<S: FileStatus + ?Sized>(status: &S, state: NativeState) -> Self {
        Self {
            name: status.name().to_owned(),
            size: status.size(),
            mode: status.mode(),
            is_dir: status.is_dir(),
            modified: status.modified(),
            native: NativeAttributes::default(),
            state,
        }
    }

    /// Final path component of the entry.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Logical size in bytes, as reported by the generic status.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Unix-style mode word.
    #[must_use]
    pub const fn mode(&self) -> u32 {
        self.mode
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Last modification time, when known.
    #[must_use]
    pub const fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// How the native fields were obtained.
    #[must_use]
    pub const fn state(&self) -> NativeState {
        self.state
    }

    /// Decoded native attributes, or `None` unless the state is
    /// [`NativeState::Decoded`].
    #[must_use]
    pub const fn native(&self) -> Option<&NativeAttributes> {
        match self.state {
            NativeState::Decoded => Some(&self.native),
            NativeState::Unsupported | NativeState::Missing => None,
        }
    }

    /// Attribute bits; empty when nothing was decoded.
    #[must_use]
    pub const fn attributes(&self) -> FileAttributes {
        self.native.file_attributes
    }

    /// Reparse point tag; zero when nothing was decoded.
    #[must_use]
    pub const fn reparse_tag(&self) -> u32 {
        self.native.reparse_tag
    }

    /// Creation time from the native fields.
    #[must_use]
    pub fn created(&self) -> Option<SystemTime> {
        self.native.created()
    }

    /// Last access time from the native fields.
    #[must_use]
    pub fn accessed(&self) -> Option<SystemTime> {
        self.native.accessed()
    }

    /// Reports whether reading this entry's data would recall remote content,
    /// using the policy selected for the build platform.
    pub fn recall_on_data_access(&self) -> ProbeResult<bool> {
        PlatformRecallPolicy::default().recall_on_data_access(self)
    }

    /// Whether the entry carries any placeholder marker
    /// (`RECALL_ON_DATA_ACCESS`, `RECALL_ON_OPEN` or `OFFLINE`).
    ///
    /// Broader than the recall rule; meant for flagging entries in reports.
    #[must_use]
    pub const fn is_cloud_placeholder(&self) -> bool {
        self.attributes().intersects(
            FileAttributes::RECALL_ON_DATA_ACCESS
                .union(FileAttributes::RECALL_ON_OPEN)
                .union(FileAttributes::OFFLINE),
        )
    }
}

/// Builds an [`ExtendedStatus`] from a [`FileStatus`].
pub trait Extractor {
    /// Produces the extended view. Never performs I/O and never fails.
    fn extract<S: FileStatus + ?Sized>(&self, status: &S) -> ExtendedStatus;
}

/// Extractor that decodes Win32 attribute data.
///
/// Available on every platform so that synthetic statuses can be decoded in
/// tests; only Windows selects it by default.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsExtractor;

impl Extractor for WindowsExtractor {
    fn extract<S: FileStatus + ?Sized>(&self, status: &S) -> ExtendedStatus {
        if let Some(native) = status.native_attributes() {
            trace_probe!(
                name = %status.name().to_string_lossy(),
                attributes = %native.file_attributes,
                "decoded native attributes"
            );
            let mut extended = ExtendedStatus::generic(status, NativeState::Decoded);
            extended.native = native;
            extended
        } else {
            debug_probe!(
                name = %status.name().to_string_lossy(),
                "status carries no native attributes"
            );
            ExtendedStatus::generic(status, NativeState::Missing)
        }
    }
}

/// Extractor for platforms without native extended attributes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopExtractor;

impl Extractor for NoopExtractor {
    fn extract<S: FileStatus + ?Sized>(&self, status: &S) -> ExtendedStatus {
        ExtendedStatus::generic(status, NativeState::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockStatus;

    #[test]
    fn windows_extractor_decodes_synthetic_attributes() {
        let status = MockStatus::file("test").with_attributes(FileAttributes::ARCHIVE);
        let xs = WindowsExtractor.extract(&status);

        assert_eq!(xs.state(), NativeState::Decoded);
        assert_eq!(xs.attributes(), FileAttributes::ARCHIVE);
        assert_eq!(xs.name(), OsStr::new("test"));
        assert!(xs.native().is_some());
    }

    #[test]
    fn windows_extractor_degrades_without_native_blob() {
        let status = MockStatus::file("plain").with_size(42);
        let xs = WindowsExtractor.extract(&status);

        assert_eq!(xs.state(), NativeState::Missing);
        assert!(xs.attributes().is_empty());
        assert_eq!(xs.reparse_tag(), 0);
        assert_eq!(xs.native(), None);
        assert_eq!(xs.size(), 42);
    }

    #[test]
    fn noop_extractor_ignores_native_blob() {
        let status = MockStatus::file("cloud")
            .with_attributes(FileAttributes::RECALL_ON_DATA_ACCESS);
        let xs = NoopExtractor.extract(&status);

        assert_eq!(xs.state(), NativeState::Unsupported);
        assert!(xs.attributes().is_empty());
        assert_eq!(xs.native(), None);
    }

    #[test]
    fn generic_fields_copied_verbatim() {
        let status = MockStatus::dir("photos").with_mode(0o040_755);
        let xs = NoopExtractor.extract(&status);

        assert!(xs.is_dir());
        assert_eq!(xs.mode(), 0o040_755);
        assert_eq!(xs.modified(), status.modified());
    }

    #[test]
    fn reparse_tag_and_times_come_from_native_fields() {
        let native = NativeAttributes {
            file_attributes: FileAttributes::REPARSE_POINT,
            reparse_tag: 0x9000_601A,
            file_size: 10,
            creation_time: 116_444_736_000_000_000,
            last_access_time: 0,
            last_write_time: 0,
        };
        let status = MockStatus::file("stub").with_native(native);
        let xs = WindowsExtractor.extract(&status);

        assert_eq!(xs.reparse_tag(), 0x9000_601A);
        assert_eq!(xs.created(), Some(std::time::UNIX_EPOCH));
        assert_eq!(xs.accessed(), None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let status = MockStatus::file("same")
            .with_attributes(FileAttributes::HIDDEN | FileAttributes::SYSTEM);
        assert_eq!(
            WindowsExtractor.extract(&status),
            WindowsExtractor.extract(&status)
        );
    }

    #[test]
    fn placeholder_detection_covers_offline_and_recall_on_open() {
        for flag in [
            FileAttributes::RECALL_ON_DATA_ACCESS,
            FileAttributes::RECALL_ON_OPEN,
            FileAttributes::OFFLINE,
        ] {
            let status = MockStatus::file("p").with_attributes(flag);
            assert!(WindowsExtractor.extract(&status).is_cloud_placeholder());
        }

        let status = MockStatus::file("p").with_attributes(FileAttributes::PINNED);
        assert!(!WindowsExtractor.extract(&status).is_cloud_placeholder());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn native_state_serde_roundtrip() {
            for state in [NativeState::Decoded, NativeState::Unsupported, NativeState::Missing] {
                let json = serde_json::to_string(&state).unwrap();
                let decoded: NativeState = serde_json::from_str(&json).unwrap();
                assert_eq!(decoded, state);
            }
        }

        #[test]
        fn extended_status_serde_roundtrip() {
            let status = MockStatus::file("cloud.docx")
                .with_size(12)
                .with_attributes(FileAttributes::RECALL_ON_DATA_ACCESS);
            let xs = WindowsExtractor.extract(&status);

            let json = serde_json::to_string(&xs).unwrap();
            let decoded: ExtendedStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, xs);
            assert_eq!(decoded.state(), NativeState::Decoded);
            assert!(decoded.is_cloud_placeholder());
        }
    }
}
