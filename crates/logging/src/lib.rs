#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the tracing conventions shared by the cloudprobe crates:
//! the event targets, subsystem macros that stamp those targets, and an
//! optional `fmt` subscriber for binaries and tests that want output.
//!
//! Library code only emits events. Nothing here installs a subscriber unless
//! [`init_tracing`] is called explicitly.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, PROBE_TARGET, directive_for, init_tracing};
//!
//! let config = LogConfig::default()
//!     .with_directive(directive_for(PROBE_TARGET, tracing::Level::DEBUG));
//! let _ = init_tracing(&config).unwrap();
//! ```

mod config;
mod targets;
mod tracing_bridge;
mod tracing_macros;

pub use config::{DEFAULT_DIRECTIVE, LOG_ENV, LogConfig};
pub use targets::{PROBE_TARGET, STAGE_TARGET, directive_for};
pub use tracing_bridge::{LogError, build_filter, init_tracing, init_tracing_from_env};
