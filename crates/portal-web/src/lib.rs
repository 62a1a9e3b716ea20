//! Browser frontend for the accreditation portal section.

use leptos::prelude::*;
use portal_core::{LogLevel, PortalConfig};
use wasm_bindgen::prelude::*;

mod app;

pub use app::{App, ProgramsPortal};

const BUNDLED_CONFIG: &str = include_str!("../portal.toml");

/// Wasm entry point: load config, set up logging and mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = PortalConfig::from_toml_str(BUNDLED_CONFIG);
    let level = loaded
        .as_ref()
        .map(|config| config.log_level)
        .unwrap_or_default();
    wasm_logger::init(wasm_logger::Config::new(log_level(level)));

    let config = loaded.unwrap_or_else(|err| {
        log::warn!("{err}; using default portal config");
        PortalConfig::default()
    });

    log::info!("Accreditation portal initializing...");

    mount_to_body(move || view! { <App config=config /> });

    log::info!("Accreditation portal mounted successfully");
}

fn log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}
