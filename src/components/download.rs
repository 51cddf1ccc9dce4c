//! Download button state machine and the demo file download itself.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, MouseEvent, Url};
use yew::prelude::*;

use crate::config;

/// Content of the demo artifact the modal's confirm button saves.
const DEMO_INFO: &str = "Welcome to Quizzler!

This is a demonstration of our AI-powered learning application.

Features:
\u{2713} Adaptive Assessments with 82% accuracy
\u{2713} Personalized Learning Paths
\u{2713} Focus Mode for distraction-free learning
\u{2713} Secure Exam Mode with anti-cheating measures

Powered by 5 Advanced AI Models:
- Decision Tree (82% accuracy)
- Support Vector Machine (78% accuracy)
- Bayesian Network (80% accuracy)
- RNN-LSTM (MSE: 0.05)
- K-Nearest Neighbors (80% accuracy)

Results:
\u{2022} 15% improvement in test scores
\u{2022} Enhanced student engagement
\u{2022} Better learning outcomes

Developed by the team at Thakur College of Engineering & Technology, Mumbai.

Thank you for your interest in Quizzler!
The full Android app will be available on Google Play Store soon.";

const DEMO_FILE_NAME: &str = "Quizzler-Demo-Info.txt";

/// Visual stages of the simulated download. Driven by chained timers, not
/// by any real transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadStage {
    Idle,
    Preparing,
    Downloading,
    Started,
}

impl DownloadStage {
    pub fn next(self) -> DownloadStage {
        match self {
            DownloadStage::Idle => DownloadStage::Idle,
            DownloadStage::Preparing => DownloadStage::Downloading,
            DownloadStage::Downloading => DownloadStage::Started,
            DownloadStage::Started => DownloadStage::Idle,
        }
    }

    /// How long the stage lasts before moving on. `Idle` is stable.
    pub fn delay_ms(self) -> Option<u32> {
        match self {
            DownloadStage::Idle => None,
            DownloadStage::Preparing => Some(config::DOWNLOAD_PREPARE_MS),
            DownloadStage::Downloading => Some(config::DOWNLOAD_RUN_MS),
            DownloadStage::Started => Some(config::DOWNLOAD_RESET_MS),
        }
    }

    /// Stage label; `Idle` shows the button's own label instead.
    pub fn label(self) -> Option<&'static str> {
        match self {
            DownloadStage::Idle => None,
            DownloadStage::Preparing => Some("Preparing Download..."),
            DownloadStage::Downloading => Some("Downloading..."),
            DownloadStage::Started => Some("Download Started!"),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DownloadStage::Idle | DownloadStage::Downloading => "fas fa-download",
            DownloadStage::Preparing => "fas fa-spinner fa-spin",
            DownloadStage::Started => "fas fa-check",
        }
    }

    pub fn is_busy(self) -> bool {
        self != DownloadStage::Idle
    }
}

#[derive(Properties, PartialEq)]
pub struct DownloadButtonProps {
    /// Label shown while idle and restored after the flow completes.
    pub label: AttrValue,
    pub on_open_modal: Callback<()>,
}

#[function_component(DownloadButton)]
pub fn download_button(props: &DownloadButtonProps) -> Html {
    let stage = use_state(|| DownloadStage::Idle);

    // Each stage schedules its successor; changing stage drops the pending
    // timeout, so a superseded transition can never fire late.
    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |stage: &DownloadStage| {
                let timeout = stage.delay_ms().map(|delay| {
                    let next = stage.next();
                    Timeout::new(delay, move || stage_setter.set(next))
                });
                move || drop(timeout)
            },
            *stage,
        );
    }

    let onclick = {
        let stage = stage.clone();
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if stage.is_busy() {
                return;
            }
            stage.set(DownloadStage::Preparing);
            // The modal opens right away, independent of the timer chain.
            on_open_modal.emit(());
        })
    };

    let label = match stage.label() {
        Some(stage_label) => stage_label.to_string(),
        None => props.label.to_string(),
    };

    html! {
        <button
            class={classes!(
                "btn",
                "btn--primary",
                "download-btn",
                (*stage == DownloadStage::Started).then(|| "download-btn--done"),
            )}
            disabled={stage.is_busy()}
            {onclick}
        >
            <i class={stage.icon()}></i>
            {" "}
            { label }
        </button>
    }
}

/// Saves the demo info file client-side: a text blob, a temporary object
/// URL and a synthetic anchor click.
pub fn initiate_download() {
    if let Err(err) = try_download() {
        log::warn!("demo download failed: {:?}", err);
    }
}

fn try_download() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(DEMO_INFO));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_href(&url);
    link.set_download(DEMO_FILE_NAME);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::DownloadStage;

    #[test]
    fn flow_walks_back_to_idle() {
        let mut stage = DownloadStage::Preparing;
        let mut labels = Vec::new();
        while stage.is_busy() {
            labels.push(stage.label().unwrap());
            stage = stage.next();
        }
        assert_eq!(
            labels,
            ["Preparing Download...", "Downloading...", "Download Started!"]
        );
        assert_eq!(stage, DownloadStage::Idle);
    }

    #[test]
    fn idle_is_stable() {
        assert_eq!(DownloadStage::Idle.next(), DownloadStage::Idle);
        assert_eq!(DownloadStage::Idle.delay_ms(), None);
        assert!(!DownloadStage::Idle.is_busy());
    }

    #[test]
    fn stage_lengths_match_the_simulated_transfer() {
        assert_eq!(DownloadStage::Preparing.delay_ms(), Some(1500));
        assert_eq!(DownloadStage::Downloading.delay_ms(), Some(1000));
        assert_eq!(DownloadStage::Started.delay_ms(), Some(3000));
    }
}
