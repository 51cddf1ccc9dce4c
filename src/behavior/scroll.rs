//! Smooth-scroll navigation for in-page fragment links.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::config;

/// Where a navigation scroll lands: the section top minus the fixed header
/// minus a little breathing room.
pub fn target_offset(element_top: i32, header_height: i32) -> f64 {
    f64::from(element_top - header_height - config::NAV_SCROLL_MARGIN)
}

/// Single entry point for navigation scrolls. Rejects while a previous
/// smooth scroll is still considered in flight; the lock clears after
/// `SCROLL_LOCK_MS` whether or not the scroll actually finished.
pub fn attempt_scroll(fragment: &str, header: Option<&HtmlElement>, lock: &Rc<RefCell<bool>>) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    if fragment == "#download" {
        // The download link lands on the footer, not on the section itself.
        if let Some(footer) = document.query_selector(".footer").ok().flatten() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            footer.scroll_into_view_with_scroll_into_view_options(&options);
        }
        return;
    }

    let target = match document
        .query_selector(fragment)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        Some(target) => target,
        // Unknown fragments are not an error, just nothing to do.
        None => return,
    };

    if *lock.borrow() {
        return;
    }
    *lock.borrow_mut() = true;

    let header_height = header.map(HtmlElement::offset_height).unwrap_or(0);
    let options = ScrollToOptions::new();
    options.set_top(target_offset(target.offset_top(), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    let lock = lock.clone();
    Timeout::new(config::SCROLL_LOCK_MS, move || {
        *lock.borrow_mut() = false;
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::target_offset;

    #[test]
    fn offset_subtracts_header_and_margin() {
        assert_eq!(target_offset(800, 72), 708.0);
    }

    #[test]
    fn missing_header_contributes_nothing() {
        assert_eq!(target_offset(500, 0), 480.0);
    }

    #[test]
    fn offset_can_go_negative_near_the_top() {
        // Sections above the fold scroll to a negative offset, which the
        // browser clamps to zero on its own.
        assert_eq!(target_offset(10, 72), -82.0);
    }
}
