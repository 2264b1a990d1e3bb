#![forbid(unsafe_code)]

//! Core: input events, viewport breakpoints, and gesture recognition.
//!
//! # Role in Vitrine
//! `vitrine-core` is the input layer. It owns the canonical event types that
//! a host (the browser binding, or a test) feeds into widgets, the viewport
//! breakpoint table, and the swipe recognizer that turns raw pointer
//! sequences into navigation intents.
//!
//! # How it fits in the system
//! `vitrine-widgets` consumes [`event::Event`] values and
//! [`gesture::SwipeEvent`]s. Nothing in this crate touches the DOM, so every
//! piece is testable on the host.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, warn};
