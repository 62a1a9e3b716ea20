use leptos::prelude::*;
use portal_core::catalog::{self, ACCREDITATIONS_AUTONOMY, ACCREDITATIONS_AUTONOMY_KEY};
use portal_core::PortalConfig;

mod components;
mod services;
mod theme;

pub use components::ProgramsPortal;

/// Main application component
#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    log::info!("Rendering App component");

    let category = catalog::category(&config.category).unwrap_or_else(|err| {
        log::error!("{err}; falling back to {ACCREDITATIONS_AUTONOMY_KEY}");
        &ACCREDITATIONS_AUTONOMY
    });

    if let Err(err) = category.validate() {
        log::error!("Catalog invariant violated: {err}");
    }

    view! {
        <main class="min-h-screen bg-white dark:bg-dark-900">
            <ProgramsPortal category=category visibility=config.visibility />
        </main>
    }
}
