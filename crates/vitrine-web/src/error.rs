#![forbid(unsafe_code)]

//! Binding errors.

use vitrine_widgets::ConfigError;

/// Why a carousel could not be mounted.
#[derive(Debug)]
pub enum MountError {
    /// No global `window` (not running in a browser).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// The container has no `.carousel-track` element.
    MissingTrack,
    /// The `data-carousel` options could not be used.
    Config(ConfigError),
    /// A DOM call threw.
    Js(String),
}

impl core::fmt::Display for MountError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::MissingTrack => write!(f, "container has no carousel track"),
            Self::Config(e) => write!(f, "invalid carousel options: {e}"),
            Self::Js(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for MountError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(MountError::MissingTrack.to_string(), "container has no carousel track");
        assert_eq!(MountError::Js("boom".into()).to_string(), "DOM error: boom");
    }

    #[test]
    fn config_errors_chain() {
        let err: MountError = ConfigError::Validation(vec!["itemsToShow must be > 0".into()]).into();
        assert_eq!(
            err.to_string(),
            "invalid carousel options: validation errors: itemsToShow must be > 0"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
