mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use config::MountConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    utils::logging::init(config::LOG_LEVEL);

    let config = match MountConfig::from_window() {
        Ok(config) => config,
        Err(e) => {
            log::error!("not mounting {}: {e}", config::APP_NAME);
            return;
        }
    };

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config /> }).forget();
}
