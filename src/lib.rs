use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::application::context::AppContext;
use crate::domain::logging::LogComponent;

pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// Module start: logging, then the page shell once the DOM is parsed
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = infrastructure::config::app_config();
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(config.log_level)));

    log_info!(LogComponent::Presentation("Initialize"), "🚀 League client initialized");

    if dom_is_loading() {
        if let Some(window) = web_sys::window() {
            EventListener::once(&window, "DOMContentLoaded", |_| run_shell()).forget();
            return;
        }
    }
    run_shell();
}

fn run_shell() {
    spawn_local(presentation::shell::bootstrap(AppContext::from_page()));
}

fn dom_is_loading() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| js_sys::Reflect::get(&document, &JsValue::from_str("readyState")).ok())
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}
