use log::info;
use yew::prelude::*;

mod captcha;
mod config;
mod download;
mod records;
mod reveal;
mod scroll;
mod state;
mod storage;
mod submit;
mod validation;
mod components {
    pub mod field;
    pub mod nav;
    pub mod overlays;
    pub mod reveal_card;
}
mod pages {
    pub mod landing;
}

use config::PageConfig;
use pages::landing::LandingPage;
use storage::{LocalStore, StoreHandle};

#[function_component]
fn App() -> Html {
    // Built once per page load and handed to the page as explicit dependencies.
    let config = use_state(PageConfig::default);
    let store = use_state(|| StoreHandle::new(LocalStore));

    html! {
        <LandingPage config={(*config).clone()} store={(*store).clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::LOG_LEVEL).expect("error initializing log");

    info!("Welcome to Mike Saif's AI for Small Business Site!");
    info!("Built with Rust, Yew and WebAssembly");
    yew::Renderer::<App>::new().render();
}
