//! Tracing targets used across the workspace.
//!
//! Each constant matches the literal target baked into the corresponding
//! macros, so filter directives can be assembled from them.

/// Target of extraction and recall-policy events.
pub const PROBE_TARGET: &str = "cloudprobe::probe";

/// Target of ephemeral file allocation events.
pub const STAGE_TARGET: &str = "cloudprobe::stage";

/// Builds a filter directive enabling `level` for `target`.
#[must_use]
pub fn directive_for(target: &str, level: tracing::Level) -> String {
    format!("{target}={}", level.as_str().to_ascii_lowercase())
}
