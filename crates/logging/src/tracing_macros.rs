//! crates/logging/src/tracing_macros.rs
//! Convenience macros for cloudprobe subsystem tracing.
//!
//! These macros wrap the standard tracing macros with the fixed targets
//! listed in [`crate::targets`]. Callers must depend on `tracing` directly.

/// Emit a probe trace (per-entry detail).
///
/// # Example
/// ```ignore
/// trace_probe!(name = %name, "decoded native attributes");
/// ```
#[macro_export]
macro_rules! trace_probe {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "cloudprobe::probe", $($arg)*);
    };
}

/// Emit a probe debug event (degraded extraction and similar).
///
/// # Example
/// ```ignore
/// debug_probe!(name = %name, "status carries no native attributes");
/// ```
#[macro_export]
macro_rules! debug_probe {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "cloudprobe::probe", $($arg)*);
    };
}

/// Emit a staging trace (ephemeral file lifecycle).
///
/// # Example
/// ```ignore
/// trace_stage!(path = %path.display(), "allocated ephemeral file");
/// ```
#[macro_export]
macro_rules! trace_stage {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "cloudprobe::stage", $($arg)*);
    };
}

/// Emit a staging warning (cleanup failures and exhausted retries).
///
/// # Example
/// ```ignore
/// warn_stage!(attempts, "could not allocate unique name");
/// ```
#[macro_export]
macro_rules! warn_stage {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "cloudprobe::stage", $($arg)*);
    };
}
