#![forbid(unsafe_code)]

//! Carousel layout math.
//!
//! All offsets assume uniform item widths: the stride is the width of the
//! first item plus [`ITEM_GAP`]. Tracks with items of different widths drift
//! out of alignment; that is accepted and not compensated.

/// Horizontal gap between items, in the same unit as measured item widths.
pub const ITEM_GAP: f64 = 30.0;

/// Collections this small render statically with no controls.
pub const STATIC_MAX_ITEMS: usize = 3;

/// Whether a collection of `item_count` items gets interactive behavior.
#[inline]
#[must_use]
pub const fn is_interactive(item_count: usize) -> bool {
    item_count > STATIC_MAX_ITEMS
}

/// Largest index reachable by stepping, `item_count - items_per_view`.
///
/// Saturates at zero when the view is wider than the collection.
#[inline]
#[must_use]
pub const fn max_index(item_count: usize, items_per_view: usize) -> usize {
    item_count.saturating_sub(items_per_view)
}

/// Indicator page that contains `index`.
#[inline]
#[must_use]
pub const fn active_page(index: usize, items_per_view: usize) -> usize {
    if items_per_view == 0 {
        return 0;
    }
    index / items_per_view
}

/// Track translation for `index`: `-(index * (item_width + gap))`.
#[must_use]
pub fn track_offset(index: usize, item_width: f64, gap: f64) -> f64 {
    if index == 0 {
        return 0.0;
    }
    -(index as f64 * (item_width + gap))
}

/// Enabled/disabled state of the prev/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Button state for `index`. Looping carousels never disable either button.
#[must_use]
pub const fn nav_state(index: usize, max_index: usize, loop_around: bool) -> NavState {
    if loop_around {
        return NavState {
            prev_disabled: false,
            next_disabled: false,
        };
    }
    NavState {
        prev_disabled: index == 0,
        next_disabled: index >= max_index,
    }
}
