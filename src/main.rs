//! Ops Hub Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod display;
mod error;
mod filters;
mod flows;
mod forms;
mod lifetime;
mod models;
mod store;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init_logger("OpsHub", config.log_level) {
        web_sys::console::warn_1(&format!("[OpsHub] Logger already set: {}", e).into());
    }
    log::info!("[App] Starting, backend {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
