#![forbid(unsafe_code)]

//! DOM-backed [`CarouselSurface`].
//!
//! Only the track is required. Every other element is resolved once at
//! construction and kept as an `Option`; a missing one simply drops the
//! effects aimed at it. DOM calls that throw are ignored: a surface effect
//! is best-effort and never aborts a widget operation.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use vitrine_widgets::{AutoplayButton, CarouselSurface, Controls, TrackCursor};

use crate::error::MountError;
use crate::markup::{
    ACTIVE_CLASS, AUTOPLAY_SELECTOR, INDICATOR_CLASS, INDICATOR_SELECTOR, INDICATORS_SELECTOR,
    NEXT_SELECTOR, PAUSED_CLASS, PREV_SELECTOR, STATIC_TRACK_CLASS, TRACK_SELECTOR,
    autoplay_icon_html, translate_x,
};

fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn query_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    query(root, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

/// Carousel surface over one container element.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
    container: Element,
    track: HtmlElement,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
    indicators: Option<HtmlElement>,
    autoplay: Option<HtmlElement>,
}

impl DomSurface {
    /// Resolve the carousel elements inside `container`.
    pub fn from_container(container: &Element) -> Result<Self, MountError> {
        let document = container.owner_document().ok_or(MountError::NoDocument)?;
        let track = query_html(container, TRACK_SELECTOR).ok_or(MountError::MissingTrack)?;
        Ok(Self {
            document,
            container: container.clone(),
            track,
            prev: query_html(container, PREV_SELECTOR),
            next: query_html(container, NEXT_SELECTOR),
            indicators: query_html(container, INDICATORS_SELECTOR),
            autoplay: query_html(container, AUTOPLAY_SELECTOR),
        })
    }

    /// The container element.
    #[must_use]
    pub fn container(&self) -> &Element {
        &self.container
    }

    /// The track element.
    #[must_use]
    pub fn track(&self) -> &HtmlElement {
        &self.track
    }

    /// The "previous" button, if present.
    #[must_use]
    pub fn prev_button(&self) -> Option<&HtmlElement> {
        self.prev.as_ref()
    }

    /// The "next" button, if present.
    #[must_use]
    pub fn next_button(&self) -> Option<&HtmlElement> {
        self.next.as_ref()
    }

    /// The indicator container, if present.
    #[must_use]
    pub fn indicator_container(&self) -> Option<&HtmlElement> {
        self.indicators.as_ref()
    }

    /// The autoplay button, if present.
    #[must_use]
    pub fn autoplay_button(&self) -> Option<&HtmlElement> {
        self.autoplay.as_ref()
    }

    /// Index of the indicator dot that contains `target`.
    #[must_use]
    pub fn indicator_index_of(&self, target: &Element) -> Option<usize> {
        let node: &Node = target;
        self.indicator_elements()
            .iter()
            .position(|dot| dot.contains(Some(node)))
    }

    fn indicator_elements(&self) -> Vec<Element> {
        let Some(container) = &self.indicators else {
            return Vec::new();
        };
        let Ok(list) = container.query_selector_all(INDICATOR_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl CarouselSurface for DomSurface {
    fn item_count(&self) -> usize {
        self.track.child_element_count() as usize
    }

    fn measure_item(&self, index: usize) -> Option<f64> {
        let index = u32::try_from(index).ok()?;
        self.track
            .children()
            .item(index)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_width()))
    }

    fn controls(&self) -> Controls {
        let mut controls = Controls::empty();
        controls.set(Controls::PREV, self.prev.is_some());
        controls.set(Controls::NEXT, self.next.is_some());
        controls.set(Controls::INDICATORS, self.indicators.is_some());
        controls.set(Controls::AUTOPLAY, self.autoplay.is_some());
        controls
    }

    fn set_track_offset(&mut self, offset: f64) {
        let _ = self
            .track
            .style()
            .set_property("transform", &translate_x(offset));
    }

    fn set_static_layout(&mut self) {
        let _ = self.track.class_list().add_1(STATIC_TRACK_CLASS);
    }

    fn hide_controls(&mut self, controls: Controls) {
        let targets = [
            (Controls::PREV, &self.prev),
            (Controls::NEXT, &self.next),
            (Controls::INDICATORS, &self.indicators),
            (Controls::AUTOPLAY, &self.autoplay),
        ];
        for (flag, el) in targets {
            if controls.contains(flag)
                && let Some(el) = el
            {
                hide(el);
            }
        }
    }

    fn render_indicators(&mut self, count: usize, active: usize) {
        let Some(container) = &self.indicators else {
            return;
        };
        container.set_inner_html("");
        for i in 0..count {
            let Ok(dot) = self.document.create_element("div") else {
                return;
            };
            let classes = dot.class_list();
            let _ = classes.add_1(INDICATOR_CLASS);
            if i == active {
                let _ = classes.add_1(ACTIVE_CLASS);
            }
            let _ = container.append_child(&dot);
        }
    }

    fn indicator_count(&self) -> usize {
        self.indicators
            .as_ref()
            .and_then(|c| c.query_selector_all(INDICATOR_SELECTOR).ok())
            .map_or(0, |list| list.length() as usize)
    }

    fn set_active_indicator(&mut self, active: usize) {
        for (i, dot) in self.indicator_elements().iter().enumerate() {
            let _ = dot
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, i == active);
        }
    }

    fn set_nav_disabled(&mut self, prev: bool, next: bool) {
        if let Some(el) = &self.prev {
            let _ = el.toggle_attribute_with_force("disabled", prev);
        }
        if let Some(el) = &self.next {
            let _ = el.toggle_attribute_with_force("disabled", next);
        }
    }

    fn set_autoplay_button(&mut self, state: AutoplayButton) {
        let Some(button) = &self.autoplay else {
            return;
        };
        let _ = button
            .class_list()
            .toggle_with_force(PAUSED_CLASS, state == AutoplayButton::Paused);
        button.set_inner_html(autoplay_icon_html(state));
    }

    fn set_track_cursor(&mut self, cursor: TrackCursor) {
        let _ = self.track.style().set_property("cursor", cursor.as_css());
    }
}
