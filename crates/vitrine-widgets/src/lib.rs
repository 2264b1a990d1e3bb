#![forbid(unsafe_code)]

//! Widgets for Vitrine.
//!
//! Widgets here are headless: they own their state and talk to the page
//! through a surface trait, so a browser binding and a unit test drive the
//! exact same code.

pub mod carousel;

pub use carousel::config::{CarouselConfig, ConfigError};
pub use carousel::surface::{
    AutoplayButton, CarouselSurface, Controls, HeadlessSurface, SurfaceOp, TrackCursor,
};
pub use carousel::{Carousel, CarouselMode};
