use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

pub const VISIBLE_CLASS: &str = "visible";

/// Adds [`VISIBLE_CLASS`] to matching elements as they scroll into view.
///
/// The observer lives exactly as long as this guard; dropping it disconnects
/// the observer and releases the JS callback.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn observe(selector: &str, threshold: f64) -> Result<Self, JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    mark_visible(&entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let nodes = document.query_selector_all(selector)?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }
        log::debug!("Scroll reveal observing {} elements", observed);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

fn mark_visible(element: &Element) {
    if let Err(e) = element.class_list().add_1(VISIBLE_CLASS) {
        log::debug!("Could not mark element visible: {:?}", e);
    }
}

/// Marks every element matching `selector` visible at once, for when no
/// observer can be installed.
pub fn reveal_all(selector: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        log::debug!("No document to reveal {} in", selector);
        return;
    };
    match document.query_selector_all(selector) {
        Ok(nodes) => {
            for i in 0..nodes.length() {
                if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    mark_visible(&element);
                }
            }
        }
        Err(e) => log::debug!("Could not query {}: {:?}", selector, e),
    }
}

/// Keeps the guard when observing worked, otherwise runs `fallback` so hidden
/// content still shows up.
pub fn observer_or_fallback<T, E: std::fmt::Debug>(
    attempt: Result<T, E>,
    fallback: impl FnOnce(),
) -> Option<T> {
    match attempt {
        Ok(guard) => Some(guard),
        Err(e) => {
            log::warn!("Scroll reveal unavailable: {:?}", e);
            fallback();
            None
        }
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smoothly scrolls the element with `id` into view. Missing targets are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("Scroll target #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
