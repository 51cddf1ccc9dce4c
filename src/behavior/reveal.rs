//! Reveal-on-scroll animation for content cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::behavior::observe::ObserverHandle;
use crate::config;

const REVEAL_SELECTOR: &str = ".feature-card, .tech-card, .team-card, .benefit, .testimonial";

/// Grid containers whose children cascade in with a staggered delay.
const STAGGER_GRIDS: [&str; 3] = ["features__grid", "technology__grid", "team__grid"];

/// Delay applied to the nth child of a stagger grid.
pub fn stagger_delay_ms(sibling_index: usize) -> u32 {
    sibling_index as u32 * config::REVEAL_STAGGER_MS
}

/// Watches all revealable elements and adds the `animate` class the first
/// time each one becomes sufficiently visible. Elements are never
/// unobserved; re-adding the class on a later pass is a no-op.
pub fn observe_reveals(document: &Document) -> Option<ObserverHandle> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                reveal(&entry.target());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    ObserverHandle::watch(document, REVEAL_SELECTOR, &options, callback)
}

fn reveal(target: &Element) {
    let _ = target.class_list().add_1("animate");

    // Children of the designated grids cascade in left to right.
    if let Some(parent) = target.parent_element() {
        let is_grid = STAGGER_GRIDS
            .iter()
            .any(|grid| parent.class_list().contains(grid));
        if !is_grid {
            return;
        }
        if let Some(index) = sibling_index(&parent, target) {
            if let Some(html) = target.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("animation-delay", &format!("{}ms", stagger_delay_ms(index)));
            }
        }
    }
}

fn sibling_index(parent: &Element, target: &Element) -> Option<usize> {
    let children = parent.children();
    (0..children.length())
        .find(|index| children.item(*index).as_ref() == Some(target))
        .map(|index| index as usize)
}

#[cfg(test)]
mod tests {
    use super::stagger_delay_ms;

    #[test]
    fn first_child_has_no_delay() {
        assert_eq!(stagger_delay_ms(0), 0);
    }

    #[test]
    fn delay_grows_with_sibling_position() {
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(5), 500);
    }
}
