//! crates/logging/src/config.rs
//! Subscriber configuration.

use std::env;

/// Environment variable consulted by [`LogConfig::from_env`].
pub const LOG_ENV: &str = "CLOUDPROBE_LOG";

/// Directive used when nothing else is configured.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Settings for the `fmt` subscriber installed by
/// [`init_tracing`](crate::init_tracing).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `warn,cloudprobe::probe=trace`.
    pub directive: String,
    /// Emit ANSI colour codes.
    pub ansi: bool,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directive: DEFAULT_DIRECTIVE.to_owned(),
            ansi: false,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Configuration with the directive taken from [`LOG_ENV`], falling back
    /// to [`DEFAULT_DIRECTIVE`] when the variable is unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        let directive = env::var(LOG_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_owned());
        Self::default().with_directive(directive)
    }

    /// Replaces the filter directive.
    #[must_use]
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }

    /// Enables or disables ANSI colour output.
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Enables or disables the target column.
    #[must_use]
    pub const fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }
}
