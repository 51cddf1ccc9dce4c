//! Animated statistic counters.
//!
//! Each `.stat__number[data-target]` element tweens from 0 to its target
//! the first time half of it scrolls into view, then stops being observed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::behavior::observe::ObserverHandle;
use crate::config;

const COUNTER_SELECTOR: &str = ".stat__number[data-target]";

/// Per-tick increment so the tween lands on `target` after the full
/// duration of fixed-cadence ticks.
pub fn counter_step(target: u64) -> f64 {
    let ticks = f64::from(config::COUNTER_DURATION_MS) / f64::from(config::COUNTER_TICK_MS);
    target as f64 / ticks
}

/// Renders a counter value with thousands grouping, e.g. `1234` → `"1,234"`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// A missing or malformed `data-target` counts as no target at all rather
/// than poisoning the tween arithmetic.
pub fn parse_target(raw: Option<String>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// Watches all counter elements; each one starts its tween on first
/// half-visibility and is unobserved immediately after.
pub fn observe_counters(document: &Document) -> Option<ObserverHandle> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(element) = target.dyn_into::<HtmlElement>() {
                    animate_counter(element);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(config::COUNTER_VISIBILITY_THRESHOLD));

    ObserverHandle::watch(document, COUNTER_SELECTOR, &options, callback)
}

fn animate_counter(element: HtmlElement) {
    let target = match parse_target(element.get_attribute("data-target")) {
        Some(target) if target > 0 => target,
        // Zero or malformed targets render a plain zero, no tween.
        _ => {
            element.set_text_content(Some("0"));
            return;
        }
    };

    let step = counter_step(target);
    let current = Cell::new(0.0_f64);
    let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let handle = ticker.clone();
    let interval = Interval::new(config::COUNTER_TICK_MS, move || {
        let next = (current.get() + step).min(target as f64);
        current.set(next);
        element.set_text_content(Some(&format_grouped(next.floor() as u64)));
        if next >= target as f64 {
            // Final value reached; cancel our own ticker.
            handle.borrow_mut().take();
        }
    });
    *ticker.borrow_mut() = Some(interval);
}

#[cfg(test)]
mod tests {
    use super::{counter_step, format_grouped, parse_target};

    #[test]
    fn step_spreads_target_over_the_tween() {
        // 2000ms / 16ms = 125 ticks.
        assert_eq!(counter_step(1000), 8.0);
        assert_eq!(counter_step(125), 1.0);
    }

    #[test]
    fn grouping_inserts_thousands_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1234), "1,234");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    #[test]
    fn targets_parse_strictly() {
        assert_eq!(parse_target(Some("1234".into())), Some(1234));
        assert_eq!(parse_target(Some(" 82 ".into())), Some(82));
        assert_eq!(parse_target(Some("lots".into())), None);
        assert_eq!(parse_target(Some("-5".into())), None);
        assert_eq!(parse_target(None), None);
    }

    #[test]
    fn tween_is_monotonic_and_clamped() {
        let target = 1234_u64;
        let step = counter_step(target);
        let mut current = 0.0_f64;
        let mut previous_shown = 0_u64;
        let mut ticks = 0;
        loop {
            ticks += 1;
            current = (current + step).min(target as f64);
            let shown = current.floor() as u64;
            assert!(shown >= previous_shown);
            assert!(shown <= target);
            previous_shown = shown;
            if current >= target as f64 {
                break;
            }
        }
        assert_eq!(previous_shown, target);
        assert_eq!(ticks, 125);
        assert_eq!(format_grouped(previous_shown), "1,234");
    }
}
