#![forbid(unsafe_code)]

//! Carousels mounted automatically on page load.

use vitrine_widgets::CarouselConfig;

/// A container selector and the configuration it is mounted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Selector of the container; only the first match is mounted.
    pub selector: &'static str,
    /// Items per view on desktop.
    pub items_to_show: usize,
    /// Autoplay period in milliseconds.
    pub autoplay_interval_ms: u64,
}

impl Preset {
    /// Configuration for this preset.
    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        CarouselConfig::default()
            .items_to_show(self.items_to_show)
            .autoplay(true)
            .autoplay_interval_ms(self.autoplay_interval_ms)
    }
}

/// Projects, skills and experiences sections of the portfolio.
pub const PRESETS: [Preset; 3] = [
    Preset {
        selector: ".projects-carousel",
        items_to_show: 3,
        autoplay_interval_ms: 5000,
    },
    Preset {
        selector: ".skills-carousel",
        items_to_show: 3,
        autoplay_interval_ms: 4000,
    },
    Preset {
        selector: ".experiences-carousel",
        items_to_show: 3,
        autoplay_interval_ms: 6000,
    },
];
