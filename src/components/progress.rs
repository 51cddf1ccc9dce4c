//! Fixed scroll-progress bar along the top of the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Fraction of the page scrolled, clamped to [0, 1]. A page no taller than
/// the viewport reports 0 rather than dividing by zero.
pub fn progress_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let bar_ref = use_node_ref();

    {
        let bar_ref = bar_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let bar = match bar_ref.cast::<HtmlElement>() {
                        Some(bar) => bar,
                        None => return,
                    };
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let scroll_height = document
                        .body()
                        .map(|body| f64::from(body.scroll_height()))
                        .unwrap_or(0.0);
                    let viewport_height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|height| height.as_f64())
                        .unwrap_or(0.0);

                    let percent =
                        progress_fraction(scroll_y, scroll_height, viewport_height) * 100.0;
                    let _ = bar
                        .style()
                        .set_property("width", &format!("{}%", percent));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-progress">
            <div class="scroll-progress-bar" ref={bar_ref}></div>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        background: rgba(94, 82, 64, 0.1);
                        z-index: 1001;
                    }

                    .scroll-progress-bar {
                        height: 100%;
                        background: linear-gradient(90deg, var(--color-primary), var(--color-primary-hover));
                        width: 0%;
                        transition: width 0.1s ease;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::progress_fraction;

    #[test]
    fn fraction_tracks_scroll_position() {
        assert_eq!(progress_fraction(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_fraction(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(progress_fraction(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        // Elastic overscroll can report positions past the range.
        assert_eq!(progress_fraction(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(progress_fraction(-50.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_pages_report_zero() {
        assert_eq!(progress_fraction(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_fraction(0.0, 1000.0, 1000.0), 0.0);
    }
}
