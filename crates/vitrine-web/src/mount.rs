#![forbid(unsafe_code)]

//! Mounting a [`Carousel`] onto a DOM container.
//!
//! Every DOM listener translates its event into a canonical
//! [`vitrine_core::event::Event`] and dispatches it to the widget. After each
//! dispatch the single autoplay timeout is re-armed to the widget's current
//! deadline, so at most one browser timer exists per carousel.
//!
//! Listener closures hold a `Weak` reference to the shared state; dropping
//! the [`MountedCarousel`] removes every listener and clears the timeout.

use core::time::Duration;
use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, MouseEvent, TouchEvent, Window};

use vitrine_core::event::{ControlEvent, Event, PointerEvent, PointerEventKind};
use vitrine_core::geometry::Viewport;
use vitrine_runtime::{Clock, MonotonicClock};
use vitrine_widgets::{Carousel, CarouselConfig};

use crate::dom::DomSurface;
use crate::error::MountError;
use crate::markup::OPTIONS_ATTRIBUTE;
use crate::presets::PRESETS;
use crate::wasm::console_error;

fn js_error(value: JsValue) -> MountError {
    MountError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn window_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map_or(0, |v| v.min(f64::from(u32::MAX)) as u32)
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

fn mouse_event(kind: PointerEventKind, ev: &MouseEvent) -> Event {
    Event::Pointer(PointerEvent::mouse(
        kind,
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
    ))
}

fn touch_event(kind: PointerEventKind, ev: &TouchEvent) -> Event {
    // `touches` is empty on touchend; the lifted finger is in `changedTouches`.
    let (x, y) = ev
        .touches()
        .get(0)
        .or_else(|| ev.changed_touches().get(0))
        .map_or((0.0, 0.0), |t| {
            (f64::from(t.client_x()), f64::from(t.client_y()))
        });
    Event::Pointer(PointerEvent::touch(kind, x, y))
}

/// Options for `container`: `base` overlaid with its `data-carousel` JSON.
pub fn options_for(container: &Element, base: CarouselConfig) -> Result<CarouselConfig, MountError> {
    match container.get_attribute(OPTIONS_ATTRIBUTE) {
        Some(json) => Ok(base.merged_json(&json)?),
        None => Ok(base),
    }
}

#[derive(Debug, Default)]
struct TimerSlot {
    handle: Option<i32>,
    /// Deadline and schedule generation the live timeout was armed for.
    armed_for: Option<(Duration, u64)>,
}

struct Shared {
    carousel: RefCell<Carousel<DomSurface>>,
    timer: RefCell<TimerSlot>,
    clock: MonotonicClock,
    window: Window,
    on_timeout: OnceCell<Closure<dyn FnMut()>>,
}

impl Shared {
    /// Run `f` against the widget, then re-arm the autoplay timeout.
    ///
    /// Returns `None` if the widget is already borrowed (a DOM mutation
    /// re-entered a listener).
    fn dispatch<R>(&self, f: impl FnOnce(&mut Carousel<DomSurface>, Duration) -> R) -> Option<R> {
        let now = self.clock.now_mono();
        let out = {
            let mut carousel = self.carousel.try_borrow_mut().ok()?;
            f(&mut carousel, now)
        };
        self.rearm(now);
        Some(out)
    }

    fn dispatch_event(&self, event: &Event) {
        self.dispatch(|c, now| c.handle_event(event, now));
    }

    fn rearm(&self, now: Duration) {
        let target = {
            let Ok(carousel) = self.carousel.try_borrow() else {
                return;
            };
            carousel
                .autoplay_deadline()
                .map(|deadline| (deadline, carousel.autoplay_generation()))
        };
        let mut slot = self.timer.borrow_mut();
        if slot.handle.is_some() && slot.armed_for == target {
            return;
        }
        if let Some(handle) = slot.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        slot.armed_for = None;
        let (Some((deadline, _)), Some(callback)) = (target, self.on_timeout.get()) else {
            return;
        };
        let delay = deadline.saturating_sub(now).as_millis().min(i32::MAX as u128) as i32;
        if let Ok(handle) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )
        {
            slot.handle = Some(handle);
            slot.armed_for = target;
        }
    }

    fn on_timeout(&self) {
        self.timer.borrow_mut().handle = None;
        self.dispatch(|c, now| c.tick(now));
    }

    fn clear_timer(&self) {
        let mut slot = self.timer.borrow_mut();
        if let Some(handle) = slot.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        slot.armed_for = None;
    }
}

/// A registered DOM listener, removed on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn new<E: JsCast + 'static>(
        target: &EventTarget,
        event: &'static str,
        shared: &Rc<Shared>,
        mut handler: impl FnMut(&Shared, E) + 'static,
    ) -> Result<Self, MountError> {
        let weak: Weak<Shared> = Rc::downgrade(shared);
        let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |raw: web_sys::Event| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let Ok(ev) = raw.dyn_into::<E>() else {
                    return;
                };
                handler(&shared, ev);
            },
        ));
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A carousel bound to the page.
///
/// Dropping it (or calling [`MountedCarousel::destroy`]) detaches the
/// listeners, clears the timeout and destroys the widget.
pub struct MountedCarousel {
    shared: Rc<Shared>,
    listeners: Vec<Listener>,
}

impl core::fmt::Debug for MountedCarousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MountedCarousel")
            .field("listeners", &self.listeners.len())
            .field("timer", &*self.shared.timer.borrow())
            .finish_non_exhaustive()
    }
}

impl MountedCarousel {
    /// Initialize a carousel on `container` and attach its listeners.
    ///
    /// Static carousels (three items or fewer) get no listeners at all.
    pub fn mount(container: &Element, config: CarouselConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let surface = DomSurface::from_container(container)?;
        let clock = MonotonicClock::new();
        let carousel = Carousel::new(
            surface,
            config,
            window_viewport(&window),
            clock.now_mono(),
        );

        let shared = Rc::new(Shared {
            carousel: RefCell::new(carousel),
            timer: RefCell::new(TimerSlot::default()),
            clock,
            window,
            on_timeout: OnceCell::new(),
        });
        let weak = Rc::downgrade(&shared);
        let _ = shared
            .on_timeout
            .set(Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_timeout();
                }
            })));

        let interactive = shared.carousel.borrow().is_interactive();
        let listeners = if interactive {
            attach_listeners(&shared)?
        } else {
            Vec::new()
        };
        shared.rearm(shared.clock.now_mono());

        #[cfg(feature = "tracing")]
        vitrine_core::debug!(
            message = "carousel.mount",
            interactive,
            listeners = listeners.len(),
            items = shared.carousel.borrow().item_count()
        );

        Ok(Self { shared, listeners })
    }

    /// Run `f` against the widget and re-arm the timeout afterwards.
    pub fn with_carousel<R>(
        &self,
        f: impl FnOnce(&mut Carousel<DomSurface>, Duration) -> R,
    ) -> Option<R> {
        self.shared.dispatch(f)
    }

    /// Show the next item.
    pub fn next(&self) -> bool {
        self.with_carousel(|c, now| c.next(now)).unwrap_or(false)
    }

    /// Show the previous item.
    pub fn prev(&self) -> bool {
        self.with_carousel(|c, now| c.prev(now)).unwrap_or(false)
    }

    /// Jump to page `page`.
    pub fn go_to_slide(&self, page: usize) -> bool {
        self.with_carousel(|c, now| c.go_to_slide(page, now))
            .unwrap_or(false)
    }

    /// Pause or resume autoplay.
    pub fn toggle_autoplay(&self) {
        self.with_carousel(|c, now| c.toggle_autoplay(now));
    }

    /// Index of the first visible item.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.shared.carousel.borrow().current_index()
    }

    /// Whether the autoplay timeout is currently armed.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.shared.timer.borrow().handle.is_some()
    }

    /// Number of attached DOM listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Detach from the page.
    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for MountedCarousel {
    fn drop(&mut self) {
        self.listeners.clear();
        self.shared.clear_timer();
        if let Ok(mut carousel) = self.shared.carousel.try_borrow_mut() {
            carousel.destroy();
        }
    }
}

fn attach_listeners(shared: &Rc<Shared>) -> Result<Vec<Listener>, MountError> {
    let (container, track, prev, next, indicators, autoplay) = {
        let carousel = shared.carousel.borrow();
        let s = carousel.surface();
        (
            s.container().clone(),
            s.track().clone(),
            s.prev_button().cloned(),
            s.next_button().cloned(),
            s.indicator_container().cloned(),
            s.autoplay_button().cloned(),
        )
    };
    let mut listeners = Vec::with_capacity(16);

    let control = |target: &EventTarget, event: ControlEvent| {
        Listener::new(target, "click", shared, move |s: &Shared, _: MouseEvent| {
            s.dispatch_event(&Event::Control(event));
        })
    };
    if let Some(el) = &prev {
        listeners.push(control(el.as_ref(), ControlEvent::Prev)?);
    }
    if let Some(el) = &next {
        listeners.push(control(el.as_ref(), ControlEvent::Next)?);
    }
    if let Some(el) = &autoplay {
        listeners.push(control(el.as_ref(), ControlEvent::ToggleAutoplay)?);
    }
    if let Some(el) = &indicators {
        // Dots are regenerated on resize, so clicks are delegated to the
        // container and resolved to a dot index at dispatch time.
        listeners.push(Listener::new(
            el,
            "click",
            shared,
            |s: &Shared, ev: MouseEvent| {
                let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                s.dispatch(|c, now| {
                    c.surface()
                        .indicator_index_of(&target)
                        .is_some_and(|page| c.go_to_slide(page, now))
                });
            },
        )?);
    }

    listeners.push(Listener::new(
        &container,
        "mouseenter",
        shared,
        |s: &Shared, _: MouseEvent| s.dispatch_event(&Event::Hover(true)),
    )?);
    listeners.push(Listener::new(
        &container,
        "mouseleave",
        shared,
        |s: &Shared, _: MouseEvent| s.dispatch_event(&Event::Hover(false)),
    )?);

    let touches = [
        ("touchstart", PointerEventKind::Down),
        ("touchmove", PointerEventKind::Move),
        ("touchend", PointerEventKind::Up),
        ("touchcancel", PointerEventKind::Cancel),
    ];
    for (name, kind) in touches {
        listeners.push(Listener::new(
            &track,
            name,
            shared,
            move |s: &Shared, ev: TouchEvent| s.dispatch_event(&touch_event(kind, &ev)),
        )?);
    }

    let mice = [
        ("mousedown", PointerEventKind::Down),
        ("mousemove", PointerEventKind::Move),
        ("mouseup", PointerEventKind::Up),
        ("mouseleave", PointerEventKind::Leave),
    ];
    for (name, kind) in mice {
        listeners.push(Listener::new(
            &track,
            name,
            shared,
            move |s: &Shared, ev: MouseEvent| s.dispatch_event(&mouse_event(kind, &ev)),
        )?);
    }

    let window: EventTarget = shared.window.clone().into();
    listeners.push(Listener::new(
        &window,
        "resize",
        shared,
        |s: &Shared, _: web_sys::Event| {
            let viewport = window_viewport(&s.window);
            s.dispatch_event(&Event::Resize {
                width: viewport.width,
                height: viewport.height,
            });
        },
    )?);

    Ok(listeners)
}

/// Mount the first match of every preset selector in `document`.
///
/// A container's `data-carousel` JSON overrides its preset; invalid options
/// are reported to the console and the preset is used unchanged. Containers
/// that fail to mount are reported and skipped.
pub fn mount_presets(document: &Document) -> Vec<MountedCarousel> {
    let mut mounted = Vec::with_capacity(PRESETS.len());
    for preset in PRESETS {
        let Ok(Some(container)) = document.query_selector(preset.selector) else {
            continue;
        };
        let config = options_for(&container, preset.config()).unwrap_or_else(|err| {
            console_error(&format!("vitrine: {}: {err}", preset.selector));
            preset.config()
        });
        match MountedCarousel::mount(&container, config) {
            Ok(carousel) => mounted.push(carousel),
            Err(err) => console_error(&format!("vitrine: {}: {err}", preset.selector)),
        }
    }
    mounted
}
