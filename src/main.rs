//! Dream Builder Frontend Entry Point

mod app;
mod components;
mod context;
mod store;
mod styles;

use app::App;
use console_logger::ConsoleLogger;
use dream_core::TrackerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = TrackerConfig::default();
    debug_assert!(config.validate().is_ok(), "default TrackerConfig must be valid");
    if let Err(e) = ConsoleLogger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
