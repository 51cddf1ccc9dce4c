//! Arrow-key navigation between page sections.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Index of the "current" section: the last one whose top edge has
/// scrolled above the threshold. Sections missing from the page (`None`)
/// never become current. Nothing passed yet means the first section.
pub fn current_section_index(tops: &[Option<f64>], threshold: f64) -> usize {
    let mut current = 0;
    for (index, top) in tops.iter().enumerate() {
        if matches!(top, Some(top) if *top <= threshold) {
            current = index;
        }
    }
    current
}

/// Section an arrow press should move to, if any.
pub fn arrow_target(current: usize, section_count: usize, down: bool) -> Option<usize> {
    if down {
        (current + 1 < section_count).then(|| current + 1)
    } else {
        current.checked_sub(1)
    }
}

/// Focused form fields keep their native arrow-key behavior.
pub fn is_form_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

/// Keeps the document keydown listener alive; dropping removes it.
pub struct KeyboardHandle {
    document: Document,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Drop for KeyboardHandle {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

/// Attaches global Arrow Up/Down section stepping.
pub fn attach(document: &Document) -> Option<KeyboardHandle> {
    let doc = document.clone();
    let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let down = match event.key().as_str() {
            "ArrowDown" => true,
            "ArrowUp" => false,
            _ => return,
        };

        let in_form_field = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| is_form_tag(&element.tag_name()))
            .unwrap_or(false);
        if in_form_field {
            return;
        }

        let tops: Vec<Option<f64>> = config::SECTION_IDS
            .iter()
            .map(|id| {
                doc.query_selector(id)
                    .ok()
                    .flatten()
                    .map(|section| section.get_bounding_client_rect().top())
            })
            .collect();
        let current = current_section_index(&tops, config::SECTION_TOP_THRESHOLD);

        if let Some(next) = arrow_target(current, config::SECTION_IDS.len(), down) {
            if let Some(section) = doc.query_selector(config::SECTION_IDS[next]).ok().flatten() {
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document
        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        .ok()?;

    Some(KeyboardHandle {
        document: document.clone(),
        callback,
    })
}

#[cfg(test)]
mod tests {
    use super::{arrow_target, current_section_index, is_form_tag};

    #[test]
    fn current_section_is_the_last_one_passed() {
        // Three sections scrolled past, fourth still below the threshold.
        let tops = vec![
            Some(-900.0),
            Some(-400.0),
            Some(40.0),
            Some(380.0),
            Some(900.0),
            Some(1400.0),
        ];
        assert_eq!(current_section_index(&tops, 100.0), 2);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let tops = vec![Some(-100.0), None, Some(2000.0)];
        assert_eq!(current_section_index(&tops, 100.0), 0);
    }

    #[test]
    fn nothing_passed_defaults_to_the_first_section() {
        let tops = vec![Some(500.0), Some(1200.0)];
        assert_eq!(current_section_index(&tops, 100.0), 0);
    }

    #[test]
    fn arrows_step_within_bounds() {
        assert_eq!(arrow_target(2, 6, true), Some(3));
        assert_eq!(arrow_target(2, 6, false), Some(1));
        assert_eq!(arrow_target(5, 6, true), None);
        assert_eq!(arrow_target(0, 6, false), None);
    }

    #[test]
    fn form_fields_keep_their_arrow_keys() {
        assert!(is_form_tag("INPUT"));
        assert!(is_form_tag("textarea"));
        assert!(is_form_tag("Select"));
        assert!(!is_form_tag("DIV"));
    }
}
