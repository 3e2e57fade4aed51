//! crates/ephemeral/src/error.rs
//!
//! Error types for ephemeral file allocation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for allocation.
pub type AllocResult<T> = Result<T, AllocError>;

/// Errors that can occur while allocating an ephemeral file.
#[derive(Debug, Error)]
pub enum AllocError {
    /// The filesystem refused to create the candidate path.
    #[error("failed to create ephemeral file {}: {source}", .path.display())]
    Io {
        /// Candidate path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Every candidate name collided with an existing entry.
    #[error(
        "could not allocate unique name after {attempts} attempts in {} with prefix {prefix:?}",
        .dir.display()
    )]
    Exhausted {
        /// Number of candidates tried.
        attempts: u32,
        /// Target directory.
        dir: PathBuf,
        /// Name prefix in use.
        prefix: String,
    },
    /// The prefix contains a path separator or NUL byte.
    #[error("invalid ephemeral file prefix {0:?}: must not contain a path separator")]
    InvalidPrefix(String),
    /// The OS entropy source failed.
    #[error("failed to gather entropy for ephemeral file name: {0}")]
    Entropy(getrandom::Error),
}

impl AllocError {
    /// The closest [`io::ErrorKind`] for this error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
            Self::Exhausted { .. } => io::ErrorKind::AlreadyExists,
            Self::InvalidPrefix(_) => io::ErrorKind::InvalidInput,
            Self::Entropy(_) => io::ErrorKind::Other,
        }
    }
}

impl From<AllocError> for io::Error {
    fn from(err: AllocError) -> Self {
        match err {
            AllocError::Io { source, .. } => source,
            other => Self::new(other.kind(), other.to_string()),
        }
    }
}
