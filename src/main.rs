//! Ticket Board Frontend Entry Point

mod app;
mod backend;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod load;
mod logging;
mod models;
mod routes;
mod store;
mod view_state;

use app::App;
use backend::Backend;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::from_document();
    logging::init(config.level_filter().unwrap_or(log::LevelFilter::Info));
    if let Some(e) = config_error {
        log::warn!("using default config: {}", e);
    }

    let backend = Backend::from_config(&config);
    log::info!("starting ticket board with {} backend", backend.name());

    mount_to_body(move || view! { <App backend=backend config=config /> });
}
