//! Shared IntersectionObserver plumbing for the reveal and counter behaviors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverInit};

/// Callback shape the observer invokes: the batch of entries plus the
/// observer itself, so a behavior can unobserve from inside the callback.
pub type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps an observer and its callback alive. Dropping the handle
/// disconnects the observer and releases the closure.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl ObserverHandle {
    /// Builds an observer over `options` and starts watching every element
    /// matching `selector`. A page without such elements still returns a
    /// handle; the observer just never fires.
    pub fn watch(
        document: &Document,
        selector: &str,
        options: &IntersectionObserverInit,
        callback: EntryCallback,
    ) -> Option<ObserverHandle> {
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
                .ok()?;

        let nodes = document.query_selector_all(selector).ok()?;
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&element);
            }
        }

        Some(ObserverHandle {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
