#![forbid(unsafe_code)]

//! Class names, selectors and generated markup shared by the DOM surface.

use vitrine_widgets::AutoplayButton;

/// Track holding the items as direct children.
pub const TRACK_SELECTOR: &str = ".carousel-track";
/// "Previous" button.
pub const PREV_SELECTOR: &str = ".carousel-prev";
/// "Next" button.
pub const NEXT_SELECTOR: &str = ".carousel-next";
/// Container the indicator dots are generated into.
pub const INDICATORS_SELECTOR: &str = ".carousel-indicators";
/// Play/pause button.
pub const AUTOPLAY_SELECTOR: &str = ".carousel-autoplay";
/// Generated indicator dots.
pub const INDICATOR_SELECTOR: &str = ".carousel-indicator";

/// Class of a generated indicator dot.
pub const INDICATOR_CLASS: &str = "carousel-indicator";
/// Class marking the highlighted dot.
pub const ACTIVE_CLASS: &str = "active";
/// Class marking the autoplay button while the user has paused.
pub const PAUSED_CLASS: &str = "paused";
/// Class put on the track of a static (three items or fewer) carousel.
pub const STATIC_TRACK_CLASS: &str = "no-carousel";

/// Attribute holding per-container JSON options.
pub const OPTIONS_ATTRIBUTE: &str = "data-carousel";

/// Icon markup for the autoplay button.
///
/// The button offers the opposite action: pause while playing, play while
/// paused.
#[must_use]
pub const fn autoplay_icon_html(state: AutoplayButton) -> &'static str {
    match state {
        AutoplayButton::Playing => r#"<i class="fas fa-pause"></i>"#,
        AutoplayButton::Paused => r#"<i class="fas fa-play"></i>"#,
    }
}

/// CSS `transform` value for a track offset in pixels.
#[must_use]
pub fn translate_x(offset: f64) -> String {
    format!("translateX({offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_offer_opposite_action() {
        assert!(autoplay_icon_html(AutoplayButton::Playing).contains("fa-pause"));
        assert!(autoplay_icon_html(AutoplayButton::Paused).contains("fa-play"));
    }

    #[test]
    fn translate_formats_pixels() {
        assert_eq!(translate_x(0.0), "translateX(0px)");
        assert_eq!(translate_x(-330.0), "translateX(-330px)");
        assert_eq!(translate_x(-412.5), "translateX(-412.5px)");
    }

    #[test]
    fn indicator_selector_matches_class() {
        assert_eq!(INDICATOR_SELECTOR, format!(".{INDICATOR_CLASS}"));
    }
}
