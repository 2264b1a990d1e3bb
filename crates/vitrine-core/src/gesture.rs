#![forbid(unsafe_code)]

//! Swipe recognition: transforms raw pointer events into swipe intents.
//!
//! [`SwipeRecognizer`] is a stateful processor that watches one pointer at a
//! time through press → move → release and decides whether the horizontal
//! travel was long enough to count as a swipe.
//!
//! # State Machine
//!
//! ```text
//! Idle --Down--> Tracking --Move--> Tracking (current x updated)
//!                Tracking --Up----> Idle  (Released, maybe with a swipe)
//!                Tracking --Leave/Cancel--> Idle  (Cancelled)
//! ```
//!
//! # Invariants
//!
//! 1. Every `Pressed` is followed by exactly one `Released` or `Cancelled`,
//!    unless another `Down` restarts tracking first.
//! 2. A release reports a swipe only when `|start - current| > threshold`.
//! 3. The current coordinate starts at the press coordinate, so a release
//!    with no intermediate moves has zero displacement.
//! 4. Events from a different [`PointerSource`] than the tracked one never
//!    end the tracked sequence.
//!
//! # Failure Modes
//!
//! - Moves without a press are ignored; there is no visual drag feedback and
//!   nothing to correct.
//! - A mouse leaving the track mid-drag cancels the sequence; no swipe is
//!   reported for it.

use crate::event::{PointerEvent, PointerEventKind, PointerSource};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum absolute horizontal travel (pixels, exclusive) that counts as a
    /// swipe (default: 50.0).
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { threshold: 50.0 }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Navigation intent of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Pointer travelled toward negative x: reveal the following items.
    Forward,
    /// Pointer travelled toward positive x: reveal the preceding items.
    Backward,
}

/// Semantic output of the recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// A pointer went down and is now tracked.
    Pressed { source: PointerSource, x: f64 },
    /// The tracked pointer was released.
    Released {
        source: PointerSource,
        /// `start_x - current_x`; positive means travel toward negative x.
        displacement: f64,
        /// Set when the displacement exceeded the threshold.
        swipe: Option<SwipeDirection>,
    },
    /// The tracked sequence ended without a release.
    Cancelled { source: PointerSource },
}

impl SwipeEvent {
    /// The swipe direction, if this is a release that crossed the threshold.
    #[must_use]
    pub const fn swipe(&self) -> Option<SwipeDirection> {
        match self {
            Self::Released { swipe, .. } => *swipe,
            _ => None,
        }
    }

    /// Whether this event ends a tracked sequence.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Released { .. } | Self::Cancelled { .. })
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Tracks an ongoing press.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    source: PointerSource,
    start_x: f64,
    current_x: f64,
}

// ---------------------------------------------------------------------------
// SwipeRecognizer
// ---------------------------------------------------------------------------

/// Stateful swipe recognizer.
///
/// Call [`process`](SwipeRecognizer::process) for each incoming
/// [`PointerEvent`] on the track.
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    drag: Option<DragTracker>,
}

impl SwipeRecognizer {
    /// Create a new recognizer with the given configuration.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, drag: None }
    }

    /// Process a pointer event, returning the semantic event it produced.
    pub fn process(&mut self, event: &PointerEvent) -> Option<SwipeEvent> {
        match event.kind {
            PointerEventKind::Down => Some(self.on_down(event.source, event.x)),
            PointerEventKind::Move => {
                if let Some(drag) = self.drag.as_mut()
                    && drag.source == event.source
                {
                    drag.current_x = event.x;
                }
                None
            }
            PointerEventKind::Up => self.on_up(event.source),
            PointerEventKind::Leave => {
                // Only a mouse can leave the track mid-drag.
                if event.source != PointerSource::Mouse {
                    return None;
                }
                self.cancel_if(event.source)
            }
            PointerEventKind::Cancel => self.cancel_if(event.source),
        }
    }

    /// Whether a press is currently tracked.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Source of the tracked press, if any.
    #[inline]
    #[must_use]
    pub fn active_source(&self) -> Option<PointerSource> {
        self.drag.map(|d| d.source)
    }

    /// Drop any tracked press without emitting anything.
    pub fn reset(&mut self) {
        self.drag = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl SwipeRecognizer {
    fn on_down(&mut self, source: PointerSource, x: f64) -> SwipeEvent {
        self.drag = Some(DragTracker {
            source,
            start_x: x,
            current_x: x,
        });
        SwipeEvent::Pressed { source, x }
    }

    fn on_up(&mut self, source: PointerSource) -> Option<SwipeEvent> {
        let drag = self.drag.filter(|d| d.source == source)?;
        self.drag = None;

        let displacement = drag.start_x - drag.current_x;
        let swipe = if displacement.abs() > self.config.threshold {
            if displacement > 0.0 {
                Some(SwipeDirection::Forward)
            } else {
                Some(SwipeDirection::Backward)
            }
        } else {
            None
        };

        Some(SwipeEvent::Released {
            source,
            displacement,
            swipe,
        })
    }

    fn cancel_if(&mut self, source: PointerSource) -> Option<SwipeEvent> {
        self.drag.filter(|d| d.source == source)?;
        self.drag = None;
        Some(SwipeEvent::Cancelled { source })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
