#![forbid(unsafe_code)]

//! `wasm-bindgen` exports.
//!
//! On module start the preset carousels are mounted once the document has
//! been parsed. [`CarouselHandle`] lets page scripts mount and drive
//! additional carousels.

use std::cell::RefCell;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use vitrine_widgets::CarouselConfig;

use crate::mount::{MountedCarousel, mount_presets, options_for};

thread_local! {
    static MOUNTED: RefCell<Vec<MountedCarousel>> = const { RefCell::new(Vec::new()) };
}

pub(crate) fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

fn to_js(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn mount_document(document: &Document) {
    let mounted = mount_presets(document);
    MOUNTED.with(|cell| cell.borrow_mut().extend(mounted));
}

#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        mount_document(&document);
        return;
    }
    let target = document.clone();
    let on_ready = Closure::once_into_js(move || mount_document(&target));
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        console_error(&format!("vitrine: cannot wait for DOMContentLoaded: {err:?}"));
    }
}

/// Detach every carousel mounted on start.
#[wasm_bindgen(js_name = destroyAll)]
pub fn destroy_all() {
    MOUNTED.with(|cell| cell.borrow_mut().clear());
}

/// A carousel mounted from JavaScript.
#[wasm_bindgen]
pub struct CarouselHandle {
    inner: Option<MountedCarousel>,
}

#[wasm_bindgen]
impl CarouselHandle {
    /// Mount a carousel on `container`.
    ///
    /// `options` is a JSON object in the `data-carousel` format; it is
    /// layered over the container's own `data-carousel` attribute, which is
    /// layered over the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(container: Element, options: Option<String>) -> Result<CarouselHandle, JsValue> {
        install_panic_hook();
        let mut config = options_for(&container, CarouselConfig::default()).map_err(to_js)?;
        if let Some(json) = options {
            config = config.merged_json(&json).map_err(to_js)?;
        }
        let inner = MountedCarousel::mount(&container, config).map_err(to_js)?;
        Ok(Self { inner: Some(inner) })
    }

    /// Show the next item. Returns whether the index changed.
    pub fn next(&self) -> bool {
        self.inner.as_ref().is_some_and(MountedCarousel::next)
    }

    /// Show the previous item. Returns whether the index changed.
    pub fn prev(&self) -> bool {
        self.inner.as_ref().is_some_and(MountedCarousel::prev)
    }

    /// Jump to indicator page `page`.
    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, page: u32) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|m| m.go_to_slide(page as usize))
    }

    /// Pause or resume autoplay.
    #[wasm_bindgen(js_name = toggleAutoplay)]
    pub fn toggle_autoplay(&self) {
        if let Some(m) = &self.inner {
            m.toggle_autoplay();
        }
    }

    /// Index of the first visible item.
    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> u32 {
        self.inner
            .as_ref()
            .map_or(0, |m| u32::try_from(m.current_index()).unwrap_or(u32::MAX))
    }

    /// Whether the carousel is mounted and interactive.
    #[wasm_bindgen(getter)]
    pub fn interactive(&self) -> bool {
        self.inner
            .as_ref()
            .and_then(|m| m.with_carousel(|c, _| c.is_interactive()))
            .unwrap_or(false)
    }

    /// Detach listeners and stop autoplay. Idempotent.
    pub fn destroy(&mut self) {
        if let Some(m) = self.inner.take() {
            m.destroy();
        }
    }
}
