#![forbid(unsafe_code)]

//! Logging glue.
//!
//! With the `tracing` feature the usual macros are re-exported so widget
//! crates can log through `vitrine_core::debug!` without a direct `tracing`
//! dependency. With `tracing-json` a host binary can install a JSON
//! subscriber filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, info_span, trace, warn};

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Errors from subscriber installation.
#[derive(Debug)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    AlreadyInstalled(String),
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInstalled(msg) => write!(f, "subscriber already installed: {msg}"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install a global JSON subscriber.
///
/// The filter comes from `RUST_LOG`; `default_directive` (e.g.
/// `"vitrine_widgets=debug"`) is used when the variable is unset or invalid.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber(default_directive: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))
}
