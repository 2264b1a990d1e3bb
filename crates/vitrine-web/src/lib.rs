#![forbid(unsafe_code)]

//! `vitrine-web` binds Vitrine carousels to the browser DOM.
//!
//! Design goals:
//! - **Widget stays headless**: all behavior lives in
//!   [`vitrine_widgets::Carousel`]; this crate only translates DOM events
//!   into canonical events and surface calls into DOM mutations.
//! - **One timer per carousel**: a single browser timeout is re-armed to the
//!   widget's autoplay deadline after every dispatch.
//! - **Deterministic teardown**: dropping a [`MountedCarousel`] (wasm only)
//!   removes every listener and clears the timeout.
//!
//! The markup, preset and error modules are platform independent so they
//! can be tested on the host; the DOM modules only build for `wasm32`.

pub mod error;
pub mod markup;
pub mod presets;

pub use error::MountError;
pub use presets::{PRESETS, Preset};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
#[cfg(target_arch = "wasm32")]
pub use mount::{MountedCarousel, mount_presets, options_for};
#[cfg(target_arch = "wasm32")]
pub use wasm::{CarouselHandle, destroy_all, start};
