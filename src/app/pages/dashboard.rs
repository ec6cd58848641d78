//! Dashboard page component.

use dioxus::prelude::*;

use crate::app::components::nav::MENUS;
use crate::app::components::Layout;

/// Dashboard page component with a card per navigation menu.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Layout {
            title: "Dashboard".to_string(),

            div { class: "row g-3",
                for menu in MENUS.iter() {
                    div { key: "{menu.id}", class: "col-md-4",
                        div { class: "card h-100",
                            div { class: "card-body",
                                h2 { class: "h5 card-title",
                                    i { class: "bi {menu.icon} me-2" }
                                    "{menu.label}"
                                }
                                ul { class: "list-unstyled mb-0",
                                    for item in menu.items.iter() {
                                        li { key: "{item.href}",
                                            a { href: item.href, "{item.label}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
