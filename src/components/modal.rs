//! Download information modal.
//!
//! Lives in the tree only while open; the parent unmounts it after the
//! closing transition has had time to finish.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::download;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Fired once the closing transition is over; the parent removes the
    /// modal from the tree in response.
    pub on_close: Callback<()>,
}

#[function_component(DownloadModal)]
pub fn download_modal(props: &ModalProps) -> Html {
    let active = use_state(|| false);
    let closing = use_mut_ref(|| false);

    // Activate shortly after mounting so the CSS transition runs.
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::MODAL_ENTER_DELAY_MS, move || {
                    active.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let request_close = {
        let active = active.clone();
        let closing = closing.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if *closing.borrow() {
                return;
            }
            *closing.borrow_mut() = true;
            active.set(false);
            let on_close = on_close.clone();
            Timeout::new(config::MODAL_EXIT_MS, move || on_close.emit(())).forget();
        })
    };

    // Escape closes the modal for as long as it is mounted.
    {
        let request_close = request_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let key_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        request_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let close_click = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };

    // Only clicks on the dimmed backdrop itself close the modal; clicks on
    // the content panel bubble up with a different target.
    let overlay_click = {
        let request_close = request_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                request_close.emit(());
            }
        })
    };

    let confirm_click = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| {
            download::initiate_download();
            request_close.emit(());
        })
    };

    html! {
        <div class={classes!("download-modal", (*active).then(|| "active"))}>
            <div class="modal-overlay" onclick={overlay_click}>
                <div class="modal-content">
                    <div class="modal-header">
                        <h3><i class="fab fa-android"></i> {" Download Quizzler"}</h3>
                        <button class="modal-close" onclick={close_click}>{"\u{d7}"}</button>
                    </div>
                    <div class="modal-body">
                        <div class="download-info">
                            <div class="qr-placeholder">
                                <i class="fas fa-qrcode"></i>
                                <p>{"QR Code"}</p>
                            </div>
                            <div class="download-details">
                                <h4>{"Get Quizzler for Android"}</h4>
                                <p>{"Experience personalized learning with AI-powered assessments"}</p>
                                <div class="download-features">
                                    <div class="download-feature">
                                        <i class="fas fa-brain"></i>
                                        <span>{"Adaptive Learning"}</span>
                                    </div>
                                    <div class="download-feature">
                                        <i class="fas fa-chart-line"></i>
                                        <span>{"Progress Tracking"}</span>
                                    </div>
                                    <div class="download-feature">
                                        <i class="fas fa-shield-alt"></i>
                                        <span>{"Secure Exams"}</span>
                                    </div>
                                </div>
                                <button class="btn btn--primary btn--full-width" onclick={confirm_click}>
                                    <i class="fab fa-google-play"></i>
                                    {" Coming Soon to Google Play"}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .download-modal {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 10000;
                        opacity: 0;
                        visibility: hidden;
                        transition: all 0.3s ease;
                    }

                    .download-modal.active {
                        opacity: 1;
                        visibility: visible;
                    }

                    .modal-overlay {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(10px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 20px;
                    }

                    .modal-content {
                        background: var(--color-surface);
                        border-radius: 12px;
                        border: 1px solid var(--color-card-border);
                        max-width: 500px;
                        width: 100%;
                        transform: scale(0.9);
                        transition: transform 0.3s ease;
                    }

                    .download-modal.active .modal-content {
                        transform: scale(1);
                    }

                    .modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 24px;
                        border-bottom: 1px solid var(--color-card-border);
                    }

                    .modal-header h3 {
                        margin: 0;
                        color: var(--color-text);
                        display: flex;
                        align-items: center;
                        gap: 8px;
                    }

                    .modal-close {
                        background: none;
                        border: none;
                        font-size: 1.6rem;
                        color: var(--color-text-secondary);
                        cursor: pointer;
                        padding: 0;
                        width: 30px;
                        height: 30px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        transition: all 0.2s ease;
                    }

                    .modal-close:hover {
                        background: rgba(255, 255, 255, 0.1);
                        color: var(--color-text);
                    }

                    .modal-body {
                        padding: 24px;
                    }

                    .download-info {
                        display: flex;
                        gap: 24px;
                        align-items: center;
                    }

                    .qr-placeholder {
                        width: 120px;
                        height: 120px;
                        background: rgba(255, 255, 255, 0.06);
                        border-radius: 8px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 8px;
                    }

                    .qr-placeholder i {
                        font-size: 2.5rem;
                        color: var(--color-primary);
                    }

                    .qr-placeholder p {
                        margin: 0;
                        font-size: 0.85rem;
                        color: var(--color-text-secondary);
                    }

                    .download-details {
                        flex: 1;
                    }

                    .download-details h4 {
                        margin: 0 0 8px 0;
                        color: var(--color-text);
                    }

                    .download-details > p {
                        color: var(--color-text-secondary);
                        margin: 0 0 16px 0;
                    }

                    .download-features {
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        margin-bottom: 20px;
                    }

                    .download-feature {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                    }

                    .download-feature i {
                        color: var(--color-primary);
                        width: 16px;
                    }

                    .download-feature span {
                        color: var(--color-text-secondary);
                        font-size: 0.9rem;
                    }

                    @media (max-width: 768px) {
                        .download-info {
                            flex-direction: column;
                            text-align: center;
                        }

                        .qr-placeholder {
                            width: 100px;
                            height: 100px;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
