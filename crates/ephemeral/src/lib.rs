#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ephemeral` creates uniquely named scratch files for staging data.
//!
//! # Design
//!
//! - Names are `<prefix><random hex>`; the random part comes from the OS
//!   entropy source.
//! - Every candidate is created with exclusive-create semantics. Uniqueness
//!   therefore holds across threads and processes without any lock.
//! - A name collision draws a fresh candidate, up to a bounded number of
//!   attempts ([`AllocatorOptions::max_attempts`]). Any other filesystem
//!   error is returned immediately.
//! - [`CleanupPolicy`] decides whether closing the handle removes the path.
//!
//! # Examples
//!
//! ```
//! use ephemeral::{Allocator, AllocatorOptions, CleanupPolicy};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let allocator = Allocator::new(AllocatorOptions::new().cleanup(CleanupPolicy::Keep));
//!
//! let file = allocator.allocate(dir.path(), "pack-").unwrap();
//! let path = file.path().to_path_buf();
//! file.close().unwrap();
//!
//! assert!(path.exists());
//! std::fs::remove_file(path).unwrap();
//! ```

mod allocator;
mod error;
mod file;
mod name;
mod options;
mod sys;

pub use allocator::{Allocator, allocate};
pub use error::{AllocError, AllocResult};
pub use file::EphemeralFile;
pub use options::{AllocatorOptions, CleanupPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_SUFFIX_BYTES};
