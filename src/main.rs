use log::{info, Level};
use yew::prelude::*;

mod config;

mod behavior {
    pub mod counter;
    pub mod keyboard;
    pub mod observe;
    pub mod parallax;
    pub mod reveal;
    pub mod scroll;
}

mod components {
    pub mod download;
    pub mod modal;
    pub mod nav;
    pub mod progress;
}

mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
