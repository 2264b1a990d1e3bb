#![forbid(unsafe_code)]

//! Carousel configuration.
//!
//! ```json
//! { "itemsToShow": 3, "autoplay": true, "autoplayInterval": 4000, "loop": true }
//! ```
//!
//! Every field is optional when loading; missing fields take the defaults
//! below.

use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of items per view on wide viewports.
pub const DEFAULT_ITEMS_TO_SHOW: usize = 3;
/// Default autoplay period in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Construction-time options for a [`Carousel`](super::Carousel).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselConfig {
    /// Items visible at once on desktop-width viewports.
    pub items_to_show: usize,
    /// Whether autoplay runs at all.
    pub autoplay: bool,
    /// Autoplay period in milliseconds.
    #[cfg_attr(feature = "serde", serde(rename = "autoplayInterval"))]
    pub autoplay_interval_ms: u64,
    /// Wrap around at either end instead of stopping.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub loop_around: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_to_show: DEFAULT_ITEMS_TO_SHOW,
            autoplay: true,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            loop_around: true,
        }
    }
}

impl CarouselConfig {
    /// Set items visible on desktop-width viewports.
    #[must_use]
    pub fn items_to_show(mut self, items: usize) -> Self {
        self.items_to_show = items;
        self
    }

    /// Enable or disable autoplay.
    #[must_use]
    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Set the autoplay period in milliseconds.
    #[must_use]
    pub fn autoplay_interval_ms(mut self, ms: u64) -> Self {
        self.autoplay_interval_ms = ms;
        self
    }

    /// Enable or disable wrap-around.
    #[must_use]
    pub fn loop_around(mut self, enabled: bool) -> Self {
        self.loop_around = enabled;
        self
    }

    /// Autoplay period as a [`Duration`].
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Replace zero counts with their defaults.
    ///
    /// Zero is treated as "not set", so a config built from partial input
    /// never yields an empty view or a busy-looping timer.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.items_to_show == 0 {
            self.items_to_show = DEFAULT_ITEMS_TO_SHOW;
        }
        if self.autoplay_interval_ms == 0 {
            self.autoplay_interval_ms = DEFAULT_AUTOPLAY_INTERVAL_MS;
        }
        self
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.items_to_show == 0 {
            errors.push("itemsToShow must be > 0".into());
        }
        if self.autoplay_interval_ms == 0 {
            errors.push("autoplayInterval must be > 0".into());
        }
        errors
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a JSON string, layering the parsed fields over `self`.
    ///
    /// Fields absent from `s` keep the value they have in `self`.
    #[cfg(feature = "serde")]
    pub fn merged_json(&self, s: &str) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self).map_err(ConfigError::Json)?;
        let overlay: serde_json::Value = serde_json::from_str(s).map_err(ConfigError::Json)?;
        let serde_json::Value::Object(fields) = overlay else {
            return Err(ConfigError::Validation(vec![
                "carousel options must be a JSON object".into(),
            ]));
        };
        if let serde_json::Value::Object(target) = &mut base {
            target.extend(fields);
        }
        let config: Self = serde_json::from_value(base).map_err(ConfigError::Json)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a carousel configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// JSON parse error.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
