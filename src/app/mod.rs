//! Dioxus fullstack application entry point.
//!
//! The server renders the admin shell; on the client the sidebar reconciler
//! is booted once the page has mounted.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use pages::{Dashboard, DailyFlights, MasterData, SeasonalFlights};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Server-installed config, carried to the client in the hydration data
    let ui_config = use_server_cached(crate::config::ui_config);

    // Every navigation is a full page load (plain anchors), so this runs once per page.
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = crate::web::boot(ui_config.clone()) {
                tracing::warn!(error = %e, "Sidebar state unavailable");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &ui_config;
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/masterdata/:kind")]
    MasterData { kind: String },
    #[route("/flight-ops/daily-flights")]
    DailyFlights {},
    #[route("/schedules/seasonal-flights")]
    SeasonalFlights {},
}
