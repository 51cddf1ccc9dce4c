//! Fixed page header: brand, section links, mobile menu toggle.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#technology", "Technology"),
    ("#results", "Results"),
    ("#team", "Team"),
    ("#download", "Download"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// The rendered header element, so navigation scrolls can subtract its
    /// height without re-querying the document.
    pub header_ref: NodeRef,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > config::HEADER_SCROLL_THRESHOLD);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Link clicks always close the menu, never toggle it back open.
    let nav_click = {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        move |fragment: &'static str| {
            let menu_open = menu_open.clone();
            let on_navigate = on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                on_navigate.emit(fragment);
            })
        }
    };

    let toggle_icon = if *menu_open { "fa-times" } else { "fa-bars" };

    html! {
        <header
            class={classes!("header", (*is_scrolled).then(|| "scrolled"))}
            ref={props.header_ref.clone()}
        >
            <nav class="nav container">
                <a href="#home" class="nav__logo" onclick={nav_click("#home")}>
                    <i class="fas fa-brain"></i>
                    {" Quizzler"}
                </a>
                <ul class={classes!("nav__menu", (*menu_open).then(|| "active"))}>
                    {
                        NAV_LINKS.iter().map(|(fragment, label)| html! {
                            <li class="nav__item" key={*fragment}>
                                <a
                                    href={*fragment}
                                    class="nav__link"
                                    onclick={nav_click(*fragment)}
                                >
                                    { *label }
                                </a>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
                <button
                    class={classes!("nav__toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                    aria-label="Toggle navigation menu"
                >
                    <i class={classes!("fas", toggle_icon)}></i>
                </button>
            </nav>
        </header>
    }
}
