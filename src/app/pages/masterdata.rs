//! Master data list pages (airlines, aircraft, gates, ...).

use dioxus::prelude::*;

use crate::app::components::nav::master_data_label;
use crate::app::components::Layout;

#[component]
pub fn MasterData(kind: String) -> Element {
    let Some(label) = master_data_label(&kind) else {
        return rsx! {
            Layout {
                title: "Not Found".to_string(),
                p { "Unknown master data section: {kind}" }
            }
        };
    };

    rsx! {
        Layout {
            title: label.to_string(),
            div { class: "card",
                div { class: "card-body text-body-secondary", "No {label} records loaded." }
            }
        }
    }
}
