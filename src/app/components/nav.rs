//! Side navigation with collapsible menus.
//!
//! The markup follows Bootstrap's collapse conventions so the reconciler in
//! `crate::state` can find toggles, panels and links.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavMenu {
    /// Panel id, also the storage key suffix.
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Never collapses.
    pub pinned: bool,
    pub items: &'static [NavItem],
}

pub const MASTER_DATA_ITEMS: &[NavItem] = &[
    NavItem { label: "Airlines", href: "/masterdata/airlines" },
    NavItem { label: "Aircraft", href: "/masterdata/aircraft" },
    NavItem { label: "Terminals", href: "/masterdata/terminals" },
    NavItem { label: "Gates", href: "/masterdata/gates" },
    NavItem { label: "Stands", href: "/masterdata/stands" },
    NavItem { label: "Check-in Counters", href: "/masterdata/checkin" },
    NavItem { label: "Baggage Carousels", href: "/masterdata/carousels" },
];

pub const MENUS: &[NavMenu] = &[
    NavMenu {
        id: "masterDataMenu",
        label: "Master Data",
        icon: "bi-database",
        pinned: true,
        items: MASTER_DATA_ITEMS,
    },
    NavMenu {
        id: "flightOpsMenu",
        label: "Flight Operations",
        icon: "bi-airplane",
        pinned: false,
        items: &[NavItem { label: "Daily Flights", href: "/flight-ops/daily-flights" }],
    },
    NavMenu {
        id: "schedulesMenu",
        label: "Schedules",
        icon: "bi-calendar3",
        pinned: false,
        items: &[NavItem { label: "Seasonal Flights", href: "/schedules/seasonal-flights" }],
    },
];

/// Label of the master data page with the given slug.
pub fn master_data_label(kind: &str) -> Option<&'static str> {
    let href = format!("/masterdata/{kind}");
    MASTER_DATA_ITEMS
        .iter()
        .find(|item| item.href == href)
        .map(|item| item.label)
}

#[component]
fn MenuSection(menu: NavMenu) -> Element {
    let target = format!("#{}", menu.id);

    rsx! {
        li { class: "nav-item",
            a {
                class: "sidebar-link nav-link collapsed",
                href: "{target}",
                "data-bs-toggle": "collapse",
                "aria-controls": menu.id,
                aria_expanded: "false",
                i { class: "bi {menu.icon} me-2" }
                "{menu.label}"
            }
            ul {
                id: menu.id,
                class: "collapse submenu nav flex-column ms-3",
                "data-pinned-open": if menu.pinned { "true" } else { "false" },
                for item in menu.items.iter() {
                    li { key: "{item.href}", class: "nav-item",
                        a { class: "sidebar-link nav-link", href: item.href, "{item.label}" }
                    }
                }
            }
        }
    }
}

/// Sidebar with the dashboard link and the collapsible menus.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        nav { class: "sb-sidenav", id: "sidenavAccordion",
            ul { class: "nav flex-column",
                li { class: "nav-item",
                    a { class: "sidebar-link nav-link", href: "/",
                        i { class: "bi bi-speedometer2 me-2" }
                        "Dashboard"
                    }
                }
                for menu in MENUS.iter() {
                    MenuSection { key: "{menu.id}", menu: *menu }
                }
            }
        }
    }
}
