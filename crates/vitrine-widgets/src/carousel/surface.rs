#![forbid(unsafe_code)]

//! The page-side contract of a carousel.
//!
//! A [`CarouselSurface`] is everything the widget needs from its container:
//! how many items the track holds, how wide the first one renders, and a
//! handful of write-only effects (transform, classes, icons). Optional
//! elements are reported through [`CarouselSurface::controls`]; the widget
//! never calls into a control the surface says is missing.
//!
//! [`HeadlessSurface`] keeps all of that in memory. Tests use it as a
//! double, and headless hosts can use it to drive a carousel without a page.

use bitflags::bitflags;

bitflags! {
    /// Optional control elements inside a carousel container.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Controls: u8 {
        const PREV = 0b0001;
        const NEXT = 0b0010;
        const INDICATORS = 0b0100;
        const AUTOPLAY = 0b1000;
        const NAV = Self::PREV.bits() | Self::NEXT.bits();
        const ALL = Self::NAV.bits() | Self::INDICATORS.bits() | Self::AUTOPLAY.bits();
    }
}

/// What the autoplay button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoplayButton {
    /// Autoplay is on; the button offers "pause".
    Playing,
    /// The user paused autoplay; the button offers "play".
    Paused,
}

/// Cursor shown over the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackCursor {
    /// Idle, draggable.
    Grab,
    /// A mouse drag is in progress.
    Grabbing,
}

impl TrackCursor {
    /// CSS `cursor` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Page-side contract consumed by [`Carousel`](super::Carousel).
pub trait CarouselSurface {
    /// Number of item elements in the track.
    fn item_count(&self) -> usize;

    /// Rendered width of the item at `index`, or `None` when it cannot be
    /// measured.
    fn measure_item(&self, index: usize) -> Option<f64>;

    /// Optional controls present in the container.
    fn controls(&self) -> Controls;

    /// Translate the track horizontally by `offset`.
    fn set_track_offset(&mut self, offset: f64);

    /// Leave items in natural flow; no transform-based positioning.
    fn set_static_layout(&mut self);

    /// Hide the given controls. Missing ones are skipped.
    fn hide_controls(&mut self, controls: Controls);

    /// Replace all indicator dots with `count` new ones, `active` highlighted.
    fn render_indicators(&mut self, count: usize, active: usize);

    /// Number of indicator dots currently rendered.
    fn indicator_count(&self) -> usize;

    /// Highlight the dot at `active` and clear every other one.
    ///
    /// An out-of-range `active` leaves no dot highlighted.
    fn set_active_indicator(&mut self, active: usize);

    /// Enable or disable the prev/next buttons.
    fn set_nav_disabled(&mut self, prev: bool, next: bool);

    /// Update the autoplay button's icon and state class.
    fn set_autoplay_button(&mut self, state: AutoplayButton);

    /// Change the cursor shown over the track.
    fn set_track_cursor(&mut self, cursor: TrackCursor);
}

// ---------------------------------------------------------------------------
// HeadlessSurface
// ---------------------------------------------------------------------------

/// One effect applied to a [`HeadlessSurface`], in call order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    Offset(f64),
    StaticLayout,
    Hide(Controls),
    RenderIndicators { count: usize, active: usize },
    ActiveIndicator(usize),
    NavDisabled { prev: bool, next: bool },
    Autoplay(AutoplayButton),
    Cursor(TrackCursor),
}

/// In-memory surface with fixed item widths.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    item_widths: Vec<f64>,
    present: Controls,
    hidden: Controls,
    static_layout: bool,
    offset: f64,
    indicators: Vec<bool>,
    nav_disabled: (bool, bool),
    autoplay_button: Option<AutoplayButton>,
    cursor: Option<TrackCursor>,
    ops: Vec<SurfaceOp>,
}

impl HeadlessSurface {
    /// Surface with one item per entry of `item_widths` and every control present.
    #[must_use]
    pub fn with_widths(item_widths: Vec<f64>) -> Self {
        Self {
            item_widths,
            present: Controls::ALL,
            hidden: Controls::empty(),
            static_layout: false,
            offset: 0.0,
            indicators: Vec::new(),
            nav_disabled: (false, false),
            autoplay_button: None,
            cursor: None,
            ops: Vec::new(),
        }
    }

    /// Surface with `count` items of identical `width`.
    #[must_use]
    pub fn uniform(count: usize, width: f64) -> Self {
        Self::with_widths(vec![width; count])
    }

    /// Remove some optional controls from the container.
    #[must_use]
    pub fn without(mut self, controls: Controls) -> Self {
        self.present.remove(controls);
        self
    }

    /// Current track translation.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the track was put in natural flow.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.static_layout
    }

    /// Controls that have been hidden.
    #[must_use]
    pub fn hidden(&self) -> Controls {
        self.hidden
    }

    /// Active flag of every rendered dot.
    #[must_use]
    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    /// Indices of the highlighted dots.
    #[must_use]
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    /// `(prev_disabled, next_disabled)`.
    #[must_use]
    pub fn nav_disabled(&self) -> (bool, bool) {
        self.nav_disabled
    }

    /// Last state written to the autoplay button.
    #[must_use]
    pub fn autoplay_button(&self) -> Option<AutoplayButton> {
        self.autoplay_button
    }

    /// Last cursor written to the track.
    #[must_use]
    pub fn cursor(&self) -> Option<TrackCursor> {
        self.cursor
    }

    /// Every effect applied so far.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the effect log.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl CarouselSurface for HeadlessSurface {
    fn item_count(&self) -> usize {
        self.item_widths.len()
    }

    fn measure_item(&self, index: usize) -> Option<f64> {
        self.item_widths.get(index).copied()
    }

    fn controls(&self) -> Controls {
        self.present
    }

    fn set_track_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.ops.push(SurfaceOp::Offset(offset));
    }

    fn set_static_layout(&mut self) {
        self.static_layout = true;
        self.ops.push(SurfaceOp::StaticLayout);
    }

    fn hide_controls(&mut self, controls: Controls) {
        let controls = controls & self.present;
        self.hidden.insert(controls);
        self.ops.push(SurfaceOp::Hide(controls));
    }

    fn render_indicators(&mut self, count: usize, active: usize) {
        self.indicators = (0..count).map(|i| i == active).collect();
        self.ops.push(SurfaceOp::RenderIndicators { count, active });
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_active_indicator(&mut self, active: usize) {
        for (i, dot) in self.indicators.iter_mut().enumerate() {
            *dot = i == active;
        }
        self.ops.push(SurfaceOp::ActiveIndicator(active));
    }

    fn set_nav_disabled(&mut self, prev: bool, next: bool) {
        self.nav_disabled = (prev, next);
        self.ops.push(SurfaceOp::NavDisabled { prev, next });
    }

    fn set_autoplay_button(&mut self, state: AutoplayButton) {
        self.autoplay_button = Some(state);
        self.ops.push(SurfaceOp::Autoplay(state));
    }

    fn set_track_cursor(&mut self, cursor: TrackCursor) {
        self.cursor = Some(cursor);
        self.ops.push(SurfaceOp::Cursor(cursor));
    }
}
