//! Flight operations and schedule pages.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn DailyFlights() -> Element {
    rsx! {
        Layout {
            title: "Daily Flights".to_string(),
            div { class: "card",
                div { class: "card-body text-body-secondary", "No daily flights generated." }
            }
        }
    }
}

#[component]
pub fn SeasonalFlights() -> Element {
    rsx! {
        Layout {
            title: "Seasonal Flights".to_string(),
            div { class: "card",
                div { class: "card-body text-body-secondary", "No seasonal schedule defined." }
            }
        }
    }
}
