#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `xstat` turns a generic file status into a platform-extended view and
//! decides from that view whether reading the file would make the operating
//! system download remote content first ("recall on data access"). Backup
//! scanners call it per entry before opening a file so that cloud
//! placeholders (OneDrive, iCloud for Windows and other Cloud Files API
//! providers) are not hydrated by accident.
//!
//! # Design
//!
//! - [`FileStatus`] is the only input. Native data is reached through
//!   [`FileStatus::native_attributes`], so test doubles can supply synthetic
//!   attribute words.
//! - [`Extractor`] implementations build an [`ExtendedStatus`] without I/O.
//!   A status without native data yields zeroed fields, not an error.
//! - [`RecallPolicy`] implementations are pure functions of the extended
//!   view.
//! - [`platform`] picks the Windows pair or the no-op pair at build time.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//! use xstat::{Stat, extended_stat, recall_on_data_access};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("regular-file");
//! fs::write(&path, b"foobar").unwrap();
//!
//! let status = Stat::from_path(&path).unwrap();
//! let xs = extended_stat(&status);
//! assert_eq!(recall_on_data_access(&xs), Ok(false));
//! ```

mod attributes;
mod error;
mod extended;
pub mod platform;
mod recall;
mod status;

#[cfg(test)]
mod mock;

pub use attributes::FileAttributes;
pub use error::{ProbeError, ProbeResult};
pub use extended::{ExtendedStatus, Extractor, NativeState, NoopExtractor, WindowsExtractor};
pub use platform::{
    PlatformExtractor, PlatformRecallPolicy, extended_stat, recall_on_data_access,
    supports_recall,
};
pub use recall::{NoRecallPolicy, RecallPolicy, WindowsRecallPolicy};
pub use status::{FileStatus, NativeAttributes, Stat, filetime_to_system_time};
