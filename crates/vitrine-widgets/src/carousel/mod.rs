#![forbid(unsafe_code)]

//! Carousel widget.
//!
//! A carousel shows a window of `items_per_view` items from a fixed track and
//! moves that window one item at a time, by button, indicator dot, swipe or
//! autoplay. It is host-driven: every operation takes the current monotonic
//! time, and the host calls [`Carousel::tick`] when
//! [`Carousel::autoplay_deadline`] passes.
//!
//! # Invariants
//!
//! 1. Stepping (`next`/`prev`/autoplay) keeps `current_index` within
//!    `0..=max_index()`; wrap targets are `0` and `max_index()`.
//! 2. After every operation exactly one indicator is active, the one at
//!    `current_index / items_per_view`.
//! 3. Collections of three items or fewer are static: controls hidden, no
//!    transforms, and every operation is a no-op.
//! 4. At most one autoplay schedule is live; any navigation restarts it.
//! 5. After [`Carousel::destroy`] nothing fires and nothing moves.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use vitrine_core::geometry::Viewport;
//! use vitrine_widgets::{Carousel, CarouselConfig, HeadlessSurface};
//!
//! let surface = HeadlessSurface::uniform(5, 300.0);
//! let mut carousel = Carousel::new(
//!     surface,
//!     CarouselConfig::default(),
//!     Viewport::from_width(1200),
//!     Duration::ZERO,
//! );
//! carousel.next(Duration::ZERO);
//! assert_eq!(carousel.current_index(), 1);
//! ```

pub mod config;
pub mod layout;
pub mod surface;

use core::time::Duration;

use vitrine_core::event::{ControlEvent, Event, PointerEvent, PointerSource};
use vitrine_core::geometry::{Breakpoints, Viewport, page_count};
use vitrine_core::gesture::{SwipeDirection, SwipeEvent, SwipeRecognizer};
use vitrine_runtime::Interval;

use self::config::CarouselConfig;
use self::layout::ITEM_GAP;
use self::surface::{AutoplayButton, CarouselSurface, Controls, TrackCursor};

/// Whether the carousel reacts to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselMode {
    /// More than three items: controls, gestures and autoplay are live.
    Interactive,
    /// Three items or fewer: natural flow, controls hidden.
    Static,
}

/// Carousel widget bound to a [`CarouselSurface`].
#[derive(Debug)]
pub struct Carousel<S: CarouselSurface> {
    surface: S,
    config: CarouselConfig,
    breakpoints: Breakpoints,
    viewport: Viewport,
    item_count: usize,
    mode: CarouselMode,
    current_index: usize,
    autoplay: Interval,
    autoplay_paused: bool,
    hovered: bool,
    swipe: SwipeRecognizer,
    destroyed: bool,
}

impl<S: CarouselSurface> Carousel<S> {
    /// Bind a carousel to `surface`.
    ///
    /// With more than three items the indicators are built, the layout is
    /// applied and autoplay starts (if enabled). Otherwise the surface is put
    /// in static layout with every control hidden.
    pub fn new(mut surface: S, config: CarouselConfig, viewport: Viewport, now: Duration) -> Self {
        let config = config.normalized();
        let item_count = surface.item_count();
        let mode = if layout::is_interactive(item_count) {
            CarouselMode::Interactive
        } else {
            surface.set_static_layout();
            surface.hide_controls(Controls::ALL);
            CarouselMode::Static
        };

        let mut carousel = Self {
            surface,
            autoplay: Interval::new(config.autoplay_interval()),
            config,
            breakpoints: Breakpoints::default(),
            viewport,
            item_count,
            mode,
            current_index: 0,
            autoplay_paused: false,
            hovered: false,
            swipe: SwipeRecognizer::default(),
            destroyed: false,
        };

        #[cfg(feature = "tracing")]
        vitrine_core::debug!(
            message = "carousel.init",
            items = item_count,
            interactive = mode == CarouselMode::Interactive,
            items_per_view = carousel.items_per_view()
        );

        if mode == CarouselMode::Interactive {
            carousel.init(now);
        }
        carousel
    }

    fn init(&mut self, now: Duration) {
        if self.surface.controls().contains(Controls::INDICATORS) {
            self.surface.render_indicators(self.page_count(), 0);
        }
        self.update_layout();
        if self.config.autoplay {
            self.start_autoplay(now);
        }
    }

    // --- Queries -----------------------------------------------------------

    /// Interactive or static.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> CarouselMode {
        self.mode
    }

    /// Whether the carousel reacts to input.
    #[inline]
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.mode == CarouselMode::Interactive
    }

    /// Index of the first visible item.
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of items in the track.
    #[inline]
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Items visible at once for the current viewport.
    #[must_use]
    pub fn items_per_view(&self) -> usize {
        self.breakpoints
            .items_per_view(self.viewport.width, self.config.items_to_show)
    }

    /// Largest index reachable by stepping.
    #[must_use]
    pub fn max_index(&self) -> usize {
        layout::max_index(self.item_count, self.items_per_view())
    }

    /// Number of indicator pages for the current viewport.
    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.item_count, self.items_per_view())
    }

    /// Page containing the current index.
    #[must_use]
    pub fn active_page(&self) -> usize {
        layout::active_page(self.current_index, self.items_per_view())
    }

    /// Track translation for the current index.
    #[must_use]
    pub fn track_offset(&self) -> f64 {
        let item_width = self
            .surface
            .measure_item(0)
            .filter(|w| w.is_finite() && *w >= 0.0)
            .unwrap_or(0.0);
        layout::track_offset(self.current_index, item_width, ITEM_GAP)
    }

    /// Whether an autoplay schedule is live.
    #[inline]
    #[must_use]
    pub const fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Whether the user paused autoplay with the toggle.
    #[inline]
    #[must_use]
    pub const fn is_autoplay_paused(&self) -> bool {
        self.autoplay_paused
    }

    /// When the host should next call [`tick`](Self::tick).
    #[inline]
    #[must_use]
    pub const fn autoplay_deadline(&self) -> Option<Duration> {
        self.autoplay.deadline()
    }

    /// Counter bumped every time the autoplay schedule restarts.
    #[inline]
    #[must_use]
    pub const fn autoplay_generation(&self) -> u64 {
        self.autoplay.generation()
    }

    /// Whether the pointer is inside the container.
    #[inline]
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a press on the track is being tracked.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging()
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    #[inline]
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Effective configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current viewport.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The bound surface.
    #[inline]
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The bound surface, mutably.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn accepts_input(&self) -> bool {
        self.mode == CarouselMode::Interactive && !self.destroyed
    }

    // --- Navigation --------------------------------------------------------

    /// Step forward one item, wrapping to 0 past the end when looping.
    ///
    /// Returns `true` if the index changed.
    pub fn next(&mut self, now: Duration) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let from = self.current_index;
        if self.current_index < self.max_index() {
            self.current_index += 1;
        } else if self.config.loop_around {
            self.current_index = 0;
        }
        self.after_navigation("next", from, now)
    }

    /// Step back one item, wrapping to the last position when looping.
    ///
    /// Returns `true` if the index changed.
    pub fn prev(&mut self, now: Duration) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let from = self.current_index;
        if self.current_index > 0 {
            self.current_index -= 1;
        } else if self.config.loop_around {
            self.current_index = self.max_index();
        }
        self.after_navigation("prev", from, now)
    }

    /// Jump to the first item of indicator page `page`.
    ///
    /// The index becomes `page * items_per_view` without clamping, so the
    /// last page of a collection that does not divide evenly may overshoot
    /// `max_index()`. Pages outside `0..page_count()` are ignored.
    ///
    /// Returns `true` if the index changed.
    pub fn go_to_slide(&mut self, page: usize, now: Duration) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if page >= self.page_count() {
            #[cfg(feature = "tracing")]
            vitrine_core::debug!(
                message = "carousel.go_to_slide.out_of_range",
                page,
                pages = self.page_count()
            );
            return false;
        }
        let from = self.current_index;
        self.current_index = page * self.items_per_view();
        self.after_navigation("go_to_slide", from, now)
    }

    fn after_navigation(&mut self, reason: &'static str, from: usize, now: Duration) -> bool {
        self.update_layout();
        self.reset_autoplay(now);
        #[cfg(feature = "tracing")]
        Self::log_move(reason, from, self.current_index);
        #[cfg(not(feature = "tracing"))]
        let _ = reason;
        from != self.current_index
    }

    #[cfg(feature = "tracing")]
    fn log_move(reason: &str, from: usize, to: usize) {
        vitrine_core::debug!(message = "carousel.move", reason, from, to);
    }

    // --- Layout ------------------------------------------------------------

    fn update_layout(&mut self) {
        let offset = self.track_offset();
        self.surface.set_track_offset(offset);
        self.sync_indicators();
        self.sync_buttons();
    }

    fn sync_indicators(&mut self) {
        if !self.surface.controls().contains(Controls::INDICATORS) {
            return;
        }
        let active = self.active_page();
        self.surface.set_active_indicator(active);
    }

    fn sync_buttons(&mut self) {
        if !self.surface.controls().contains(Controls::NAV) {
            return;
        }
        let nav = layout::nav_state(self.current_index, self.max_index(), self.config.loop_around);
        self.surface
            .set_nav_disabled(nav.prev_disabled, nav.next_disabled);
    }

    /// Apply a new viewport.
    ///
    /// Recomputes the offset for the new items-per-view and rebuilds the
    /// indicators when the page count changed. The index itself is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !self.accepts_input() {
            return;
        }
        self.update_layout();

        let pages = self.page_count();
        if self.surface.controls().contains(Controls::INDICATORS)
            && self.surface.indicator_count() != pages
        {
            let active = self.active_page();
            self.surface.render_indicators(pages, active);
            #[cfg(feature = "tracing")]
            vitrine_core::debug!(
                message = "carousel.indicators.rebuild",
                pages,
                active,
                width = viewport.width
            );
        }
    }

    // --- Autoplay ----------------------------------------------------------

    /// (Re)start autoplay so the next advance is one full period from `now`.
    ///
    /// No-op when autoplay is disabled in the configuration.
    pub fn start_autoplay(&mut self, now: Duration) {
        if !self.config.autoplay || !self.accepts_input() {
            return;
        }
        self.autoplay.start(now);
        if self.surface.controls().contains(Controls::AUTOPLAY) {
            self.surface.set_autoplay_button(AutoplayButton::Playing);
        }
    }

    /// Cancel the autoplay schedule, if any.
    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Flip the user pause flag and start or stop autoplay to match.
    pub fn toggle_autoplay(&mut self, now: Duration) {
        if !self.accepts_input() {
            return;
        }
        self.autoplay_paused = !self.autoplay_paused;
        if self.autoplay_paused {
            self.stop_autoplay();
            if self.surface.controls().contains(Controls::AUTOPLAY) {
                self.surface.set_autoplay_button(AutoplayButton::Paused);
            }
        } else {
            self.start_autoplay(now);
        }
        #[cfg(feature = "tracing")]
        vitrine_core::debug!(message = "carousel.autoplay.toggle", paused = self.autoplay_paused);
    }

    fn reset_autoplay(&mut self, now: Duration) {
        if self.config.autoplay && !self.autoplay_paused {
            self.start_autoplay(now);
        }
    }

    /// Pointer entered (`true`) or left (`false`) the container.
    ///
    /// Hovering suspends autoplay and leaving resumes it, unless the user
    /// paused it. The pause flag itself is never touched.
    pub fn set_hovered(&mut self, hovered: bool, now: Duration) {
        if !self.accepts_input() {
            return;
        }
        self.hovered = hovered;
        if !self.config.autoplay || self.autoplay_paused {
            return;
        }
        if hovered {
            self.stop_autoplay();
        } else {
            self.start_autoplay(now);
        }
    }

    /// Advance if the autoplay deadline has passed.
    ///
    /// Returns `true` if the index changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.accepts_input() || !self.autoplay.poll(now) {
            return false;
        }
        self.next(now)
    }

    // --- Gestures ----------------------------------------------------------

    /// Feed a pointer event on the track.
    ///
    /// A press suspends autoplay and a release past the swipe threshold
    /// steps once. Ending the press restarts autoplay unless the pointer is
    /// still over the container.
    ///
    /// Returns `true` if the index changed.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Duration) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(swipe) = self.swipe.process(event) else {
            return false;
        };
        match swipe {
            SwipeEvent::Pressed { source, .. } => {
                if source == PointerSource::Mouse {
                    self.surface.set_track_cursor(TrackCursor::Grabbing);
                }
                self.stop_autoplay();
                false
            }
            SwipeEvent::Released { source, swipe, .. } => {
                let moved = match swipe {
                    Some(SwipeDirection::Forward) => self.next(now),
                    Some(SwipeDirection::Backward) => self.prev(now),
                    None => false,
                };
                self.end_press(source, now);
                moved
            }
            SwipeEvent::Cancelled { source } => {
                self.end_press(source, now);
                false
            }
        }
    }

    fn end_press(&mut self, source: PointerSource, now: Duration) {
        if source == PointerSource::Mouse {
            self.surface.set_track_cursor(TrackCursor::Grab);
        }
        // A swipe step restarts the interval; while hovered it stays
        // suspended until the pointer leaves the container.
        if self.hovered {
            self.stop_autoplay();
        } else {
            self.reset_autoplay(now);
        }
    }

    // --- Dispatch ----------------------------------------------------------

    /// Route a canonical event to the matching operation.
    ///
    /// Returns `true` if the index changed.
    pub fn handle_event(&mut self, event: &Event, now: Duration) -> bool {
        match event {
            Event::Pointer(pointer) => self.handle_pointer(pointer, now),
            Event::Hover(inside) => {
                self.set_hovered(*inside, now);
                false
            }
            Event::Resize { width, height } => {
                self.resize(Viewport::new(*width, *height));
                false
            }
            Event::Control(ControlEvent::Prev) => self.prev(now),
            Event::Control(ControlEvent::Next) => self.next(now),
            Event::Control(ControlEvent::Indicator(page)) => self.go_to_slide(*page, now),
            Event::Control(ControlEvent::ToggleAutoplay) => {
                self.toggle_autoplay(now);
                false
            }
        }
    }

    // --- Teardown ----------------------------------------------------------

    /// Stop autoplay and ignore everything from now on.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.stop_autoplay();
        self.swipe.reset();
        self.destroyed = true;
        #[cfg(feature = "tracing")]
        vitrine_core::debug!(message = "carousel.destroy", index = self.current_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::surface::{HeadlessSurface, SurfaceOp};
    use vitrine_core::event::PointerEventKind;

    const T0: Duration = Duration::ZERO;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn carousel(items: usize, width: u32, config: CarouselConfig) -> Carousel<HeadlessSurface> {
        Carousel::new(
            HeadlessSurface::uniform(items, 300.0),
            config,
            Viewport::from_width(width),
            T0,
        )
    }

    // --- Construction ---

    #[test]
    fn small_collection_is_static() {
        let c = carousel(3, 1200, CarouselConfig::default());
        assert_eq!(c.mode(), CarouselMode::Static);
        assert!(c.surface().is_static());
        assert_eq!(c.surface().hidden(), Controls::ALL);
        assert!(!c.is_autoplay_running());
        assert_eq!(
            c.surface().ops(),
            &[SurfaceOp::StaticLayout, SurfaceOp::Hide(Controls::ALL)]
        );
    }

    #[test]
    fn empty_collection_is_a_safe_no_op() {
        let mut c = carousel(0, 1200, CarouselConfig::default());
        assert_eq!(c.mode(), CarouselMode::Static);
        assert!(!c.next(T0));
        assert!(!c.prev(T0));
        assert!(!c.go_to_slide(0, T0));
        assert!(!c.tick(ms(60_000)));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn interactive_init_builds_indicators_and_starts_autoplay() {
        let c = carousel(5, 1200, CarouselConfig::default());
        assert!(c.is_interactive());
        assert_eq!(c.surface().indicators(), &[true, false]);
        assert_eq!(c.surface().offset(), 0.0);
        assert_eq!(c.surface().autoplay_button(), Some(AutoplayButton::Playing));
        assert_eq!(c.autoplay_deadline(), Some(ms(5000)));
    }

    #[test]
    fn autoplay_disabled_leaves_timer_off() {
        let c = carousel(5, 1200, CarouselConfig::default().autoplay(false));
        assert!(!c.is_autoplay_running());
        assert_eq!(c.surface().autoplay_button(), None);
    }

    #[test]
    fn zero_config_values_fall_back_to_defaults() {
        let c = carousel(
            5,
            1200,
            CarouselConfig::default().items_to_show(0).autoplay_interval_ms(0),
        );
        assert_eq!(c.items_per_view(), 3);
        assert_eq!(c.autoplay_deadline(), Some(ms(5000)));
    }

    // --- Navigation ---

    #[test]
    fn next_and_prev_update_offset() {
        let mut c = carousel(6, 1200, CarouselConfig::default());
        assert!(c.next(T0));
        assert_eq!(c.surface().offset(), -330.0);
        assert!(c.next(T0));
        assert_eq!(c.surface().offset(), -660.0);
        assert!(c.prev(T0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn bounded_edges_are_no_ops() {
        let mut c = carousel(5, 1200, CarouselConfig::default().loop_around(false));
        assert!(!c.prev(T0));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.surface().nav_disabled(), (true, false));
        c.next(T0);
        c.next(T0);
        assert!(!c.next(T0));
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.surface().nav_disabled(), (false, true));
    }

    #[test]
    fn view_wider_than_collection_never_goes_negative() {
        let mut c = carousel(4, 1600, CarouselConfig::default().items_to_show(6));
        assert_eq!(c.max_index(), 0);
        assert!(!c.prev(T0));
        assert!(!c.next(T0));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn go_to_slide_sets_page_start_without_clamping() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        assert!(c.go_to_slide(1, T0));
        assert_eq!(c.current_index(), 3);
        assert!(c.current_index() > c.max_index());
        assert_eq!(c.surface().active_indicators(), vec![1]);
        assert_eq!(c.surface().offset(), -990.0);
    }

    #[test]
    fn go_to_slide_out_of_range_is_ignored() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        let before = c.autoplay_generation();
        assert!(!c.go_to_slide(2, ms(100)));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.autoplay_generation(), before);
    }

    #[test]
    fn next_from_overshoot_wraps_to_start() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.go_to_slide(1, T0);
        assert!(c.next(T0));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn missing_indicators_and_buttons_are_tolerated() {
        let surface = HeadlessSurface::uniform(6, 200.0).without(Controls::ALL);
        let mut c = Carousel::new(surface, CarouselConfig::default(), Viewport::from_width(1200), T0);
        c.next(T0);
        c.go_to_slide(1, T0);
        c.toggle_autoplay(T0);
        c.resize(Viewport::from_width(500));
        assert!(c.surface().indicators().is_empty());
        assert_eq!(c.surface().autoplay_button(), None);
        assert!(
            !c.surface()
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::NavDisabled { .. }))
        );
    }

    #[test]
    fn buttons_need_both_prev_and_next() {
        let surface = HeadlessSurface::uniform(6, 200.0).without(Controls::PREV);
        let c = Carousel::new(surface, CarouselConfig::default(), Viewport::from_width(1200), T0);
        assert!(
            !c.surface()
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::NavDisabled { .. }))
        );
    }

    #[test]
    fn unmeasurable_first_item_uses_gap_only() {
        let surface = HeadlessSurface::with_widths(vec![f64::NAN, 10.0, 10.0, 10.0, 10.0]);
        let mut c = Carousel::new(surface, CarouselConfig::default(), Viewport::from_width(1200), T0);
        c.next(T0);
        assert_eq!(c.surface().offset(), -30.0);
    }

    #[test]
    fn non_uniform_widths_use_first_item_stride() {
        let surface = HeadlessSurface::with_widths(vec![100.0, 400.0, 400.0, 400.0, 400.0]);
        let mut c = Carousel::new(surface, CarouselConfig::default(), Viewport::from_width(1200), T0);
        c.next(T0);
        c.next(T0);
        assert_eq!(c.surface().offset(), -260.0);
    }

    // --- Autoplay ---

    #[test]
    fn tick_advances_on_deadline() {
        let mut c = carousel(5, 500, CarouselConfig::default().autoplay_interval_ms(4000));
        assert!(!c.tick(ms(3999)));
        assert!(c.tick(ms(4000)));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.autoplay_deadline(), Some(ms(8000)));
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let mut c = carousel(5, 500, CarouselConfig::default());
        c.next(ms(4500));
        assert!(!c.tick(ms(5000)));
        assert!(!c.tick(ms(9499)));
        assert!(c.tick(ms(9500)));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn toggle_pauses_and_resumes() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.toggle_autoplay(ms(10));
        assert!(c.is_autoplay_paused());
        assert!(!c.is_autoplay_running());
        assert_eq!(c.surface().autoplay_button(), Some(AutoplayButton::Paused));

        // Navigation while paused does not restart the timer.
        c.next(ms(20));
        assert!(!c.is_autoplay_running());

        c.toggle_autoplay(ms(30));
        assert!(!c.is_autoplay_paused());
        assert_eq!(c.autoplay_deadline(), Some(ms(5030)));
        assert_eq!(c.surface().autoplay_button(), Some(AutoplayButton::Playing));
    }

    #[test]
    fn hover_suspends_without_touching_pause_flag() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.set_hovered(true, ms(100));
        assert!(c.is_hovered());
        assert!(!c.is_autoplay_running());
        assert!(!c.is_autoplay_paused());

        c.set_hovered(false, ms(2000));
        assert_eq!(c.autoplay_deadline(), Some(ms(7000)));
    }

    #[test]
    fn hover_leave_while_user_paused_stays_stopped() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.toggle_autoplay(T0);
        c.set_hovered(true, ms(1));
        c.set_hovered(false, ms(2));
        assert!(!c.is_autoplay_running());
    }

    // --- Gestures ---

    fn drag(c: &mut Carousel<HeadlessSurface>, from: f64, to: f64, now: Duration) -> bool {
        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Down, from, 0.0), now);
        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Move, to, 0.0), now);
        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Up, to, 0.0), now)
    }

    #[test]
    fn mouse_drag_sets_cursor_and_navigates() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Down, 400.0, 0.0), ms(1));
        assert_eq!(c.surface().cursor(), Some(TrackCursor::Grabbing));
        assert!(!c.is_autoplay_running());

        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Move, 300.0, 0.0), ms(2));
        assert!(c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Up, 300.0, 0.0), ms(3)));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.surface().cursor(), Some(TrackCursor::Grab));
        assert_eq!(c.autoplay_deadline(), Some(ms(5003)));
    }

    #[test]
    fn backward_drag_calls_prev() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        assert!(drag(&mut c, 100.0, 200.0, T0));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn mouse_leave_mid_drag_releases_without_navigation() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Down, 400.0, 0.0), T0);
        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Move, 100.0, 0.0), T0);
        assert!(!c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Leave, 0.0, 0.0), ms(5)));
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_dragging());
        assert_eq!(c.surface().cursor(), Some(TrackCursor::Grab));
        assert_eq!(c.autoplay_deadline(), Some(ms(5005)));
    }

    #[test]
    fn release_while_hovered_keeps_autoplay_suspended() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.set_hovered(true, ms(10));
        c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Down, 400.0, 0.0), ms(20));
        assert!(!c.handle_pointer(&PointerEvent::mouse(PointerEventKind::Up, 400.0, 0.0), ms(30)));
        assert!(!c.is_autoplay_running());
        assert!(!c.tick(ms(5030)));
        assert_eq!(c.current_index(), 0);

        c.set_hovered(false, ms(6000));
        assert_eq!(c.autoplay_deadline(), Some(ms(11_000)));
    }

    #[test]
    fn swipe_while_hovered_steps_without_restarting_autoplay() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.set_hovered(true, ms(10));
        assert!(drag(&mut c, 400.0, 300.0, ms(20)));
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_autoplay_running());
        assert!(!c.tick(ms(5020)));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn touch_does_not_touch_cursor() {
        let mut c = carousel(5, 500, CarouselConfig::default());
        c.handle_pointer(&PointerEvent::touch(PointerEventKind::Down, 300.0, 0.0), T0);
        c.handle_pointer(&PointerEvent::touch(PointerEventKind::Move, 200.0, 0.0), T0);
        assert!(c.handle_pointer(&PointerEvent::touch(PointerEventKind::Up, 200.0, 0.0), T0));
        assert_eq!(c.surface().cursor(), None);
    }

    // --- Resize ---

    #[test]
    fn resize_across_breakpoint_rebuilds_indicators() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.next(T0);
        c.next(T0);
        assert_eq!(c.surface().indicators().len(), 2);

        c.resize(Viewport::from_width(500));
        assert_eq!(c.items_per_view(), 1);
        assert_eq!(c.surface().indicators().len(), 5);
        assert_eq!(c.surface().active_indicators(), vec![2]);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn resize_with_same_page_count_keeps_indicators() {
        let mut c = carousel(4, 1200, CarouselConfig::default());
        c.surface_mut().take_ops();
        c.resize(Viewport::from_width(900));
        assert_eq!(c.items_per_view(), 2);
        assert!(
            !c.surface()
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::RenderIndicators { .. }))
        );
    }

    #[test]
    fn bounded_resize_keeps_index_past_new_max() {
        let config = CarouselConfig::default().loop_around(false).autoplay(false);
        let mut c = carousel(5, 500, config);
        for _ in 0..4 {
            c.next(T0);
        }
        assert_eq!(c.current_index(), 4);

        c.resize(Viewport::from_width(1200));
        assert_eq!(c.max_index(), 2);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.surface().active_indicators(), vec![1]);
        assert_eq!(c.surface().nav_disabled(), (false, true));
        assert!(!c.next(T0));
        assert!(c.prev(T0));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn static_resize_only_records_viewport() {
        let mut c = carousel(2, 1200, CarouselConfig::default());
        c.surface_mut().take_ops();
        c.resize(Viewport::from_width(400));
        assert_eq!(c.viewport().width, 400);
        assert!(c.surface().ops().is_empty());
    }

    // --- Dispatch & teardown ---

    #[test]
    fn handle_event_routes_controls() {
        let mut c = carousel(8, 1200, CarouselConfig::default());
        assert!(c.handle_event(&Event::Control(ControlEvent::Next), T0));
        assert!(c.handle_event(&Event::Control(ControlEvent::Indicator(2)), T0));
        assert_eq!(c.current_index(), 6);
        assert!(c.handle_event(&Event::Control(ControlEvent::Prev), T0));
        assert_eq!(c.current_index(), 5);
        assert!(!c.handle_event(&Event::Control(ControlEvent::ToggleAutoplay), T0));
        assert!(c.is_autoplay_paused());
        assert!(!c.handle_event(&Event::Hover(true), T0));
        assert!(c.is_hovered());
        assert!(!c.handle_event(&Event::Resize { width: 700, height: 900 }, T0));
        assert_eq!(c.items_per_view(), 1);
    }

    #[test]
    fn destroy_stops_everything() {
        let mut c = carousel(5, 1200, CarouselConfig::default());
        c.destroy();
        assert!(c.is_destroyed());
        assert!(!c.is_autoplay_running());
        assert!(!c.tick(ms(60_000)));
        assert!(!c.next(T0));
        assert!(!drag(&mut c, 400.0, 100.0, T0));
        c.set_hovered(false, T0);
        c.toggle_autoplay(T0);
        assert!(!c.is_autoplay_running());
        assert_eq!(c.current_index(), 0);
        c.destroy();
    }

    // --- Tracing ---

    #[cfg(feature = "tracing")]
    mod trace_capture {
        use super::*;
        use std::sync::{Arc, Mutex};
        use tracing::Subscriber;
        use tracing_subscriber::Layer;
        use tracing_subscriber::layer::{Context, SubscriberExt};

        struct MessageCapture {
            messages: Arc<Mutex<Vec<String>>>,
        }

        impl<S> Layer<S> for MessageCapture
        where
            S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
        {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                struct Msg {
                    message: Option<String>,
                }
                impl tracing::field::Visit for Msg {
                    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                        if field.name() == "message" {
                            self.message = Some(value.to_string());
                        }
                    }

                    fn record_debug(
                        &mut self,
                        field: &tracing::field::Field,
                        value: &dyn std::fmt::Debug,
                    ) {
                        if field.name() == "message" {
                            self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                        }
                    }
                }
                let mut msg = Msg { message: None };
                event.record(&mut msg);
                if let Some(message) = msg.message {
                    self.messages.lock().expect("trace lock").push(message);
                }
            }
        }

        #[test]
        fn lifecycle_events_are_traced() {
            let messages = Arc::new(Mutex::new(Vec::new()));
            let subscriber = tracing_subscriber::registry().with(MessageCapture {
                messages: Arc::clone(&messages),
            });
            let _guard = tracing::subscriber::set_default(subscriber);

            let mut c = carousel(5, 1200, CarouselConfig::default());
            c.next(T0);
            c.toggle_autoplay(T0);
            c.destroy();

            let seen = messages.lock().expect("trace lock");
            for expected in [
                "carousel.init",
                "carousel.move",
                "carousel.autoplay.toggle",
                "carousel.destroy",
            ] {
                assert!(
                    seen.iter().any(|m| m == expected),
                    "expected {expected} event, saw {seen:?}"
                );
            }
        }
    }
}
