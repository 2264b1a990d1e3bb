#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Hosts translate whatever their platform delivers (DOM events, synthetic
//! test input) into these types before handing them to a widget.
//!
//! # Design Notes
//!
//! - Pointer coordinates are client-space pixels as `f64`, so events derive
//!   `PartialEq` but not `Eq`.
//! - Mouse and touch share one [`PointerEvent`] shape; [`PointerSource`]
//!   keeps them apart so a touch release never ends a mouse drag.
//! - `Leave` is only meaningful for mouse pointers; touch sequences end with
//!   `Up` or `Cancel`.

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A pointer (mouse or touch) event on the track.
    Pointer(PointerEvent),

    /// Pointer entered (`true`) or left (`false`) the widget container.
    Hover(bool),

    /// The viewport was resized.
    Resize {
        /// New viewport width in CSS pixels.
        width: u32,
        /// New viewport height in CSS pixels.
        height: u32,
    },

    /// A control element was activated.
    Control(ControlEvent),
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// Which device produced it.
    pub source: PointerSource,
    /// Horizontal client coordinate.
    pub x: f64,
    /// Vertical client coordinate.
    pub y: f64,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, source: PointerSource, x: f64, y: f64) -> Self {
        Self { kind, source, x, y }
    }

    /// Create a mouse event at `(x, y)`.
    #[must_use]
    pub const fn mouse(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self::new(kind, PointerSource::Mouse, x, y)
    }

    /// Create a touch event at `(x, y)`.
    #[must_use]
    pub const fn touch(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self::new(kind, PointerSource::Touch, x, y)
    }
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed or finger placed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released or finger lifted.
    Up,
    /// Pointer left the track.
    Leave,
    /// The platform aborted the sequence (e.g. `touchcancel`).
    Cancel,
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Activation of one of the widget's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// The "previous" button.
    Prev,
    /// The "next" button.
    Next,
    /// An indicator dot, by page index.
    Indicator(usize),
    /// The autoplay play/pause button.
    ToggleAutoplay,
}

impl From<PointerEvent> for Event {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<ControlEvent> for Event {
    fn from(event: ControlEvent) -> Self {
        Self::Control(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_constructor_sets_source() {
        let ev = PointerEvent::mouse(PointerEventKind::Down, 10.0, 2.0);
        assert_eq!(ev.source, PointerSource::Mouse);
        assert_eq!(ev.kind, PointerEventKind::Down);
        assert_eq!(ev.x, 10.0);
    }

    #[test]
    fn touch_constructor_sets_source() {
        let ev = PointerEvent::touch(PointerEventKind::Move, 4.5, 0.0);
        assert_eq!(ev.source, PointerSource::Touch);
    }

    #[test]
    fn conversions_into_event() {
        let ev: Event = ControlEvent::Indicator(2).into();
        assert_eq!(ev, Event::Control(ControlEvent::Indicator(2)));

        let ptr = PointerEvent::mouse(PointerEventKind::Up, 1.0, 1.0);
        let ev: Event = ptr.into();
        assert!(matches!(ev, Event::Pointer(p) if p.kind == PointerEventKind::Up));
    }
}
