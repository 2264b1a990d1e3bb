#![forbid(unsafe_code)]

//! Runtime primitives for host-driven widgets.
//!
//! Widgets never own threads or platform timers. They keep deadline state
//! in an [`Interval`] and read time from a [`Clock`]; the host (browser
//! binding or test) decides when to call back in.
//!
//! - **Deterministic time**: [`DeterministicClock`] is advanced explicitly.
//! - **Real time**: [`MonotonicClock`] wraps `web_time::Instant`, which is
//!   backed by `performance.now()` on `wasm32`.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.

pub mod clock;
pub mod interval;

pub use clock::{Clock, DeterministicClock, MonotonicClock};
pub use interval::Interval;
