//! Layout component wrapping all pages with Bootstrap and the sidebar shell.

use dioxus::prelude::*;

use super::nav::Sidebar;
use super::theme::{ThemeToggle, THEME_SCRIPT};

/// CSS styles for the application (extends Bootstrap 5).
const CUSTOM_STYLES: &str = r#"
#layoutSidenav { display: flex; min-height: calc(100vh - 56px); }
#layoutSidenav_nav { flex: 0 0 225px; transition: margin 0.15s ease-in-out; }
#layoutSidenav_content { flex: 1 1 auto; min-width: 0; display: flex; flex-direction: column; }
body.sb-sidenav-toggled #layoutSidenav_nav { margin-left: -225px; }
.sb-sidenav { height: 100%; background: var(--bs-tertiary-bg); padding-top: 0.5rem; }
.sidebar-link { color: var(--bs-body-color); }
.sidebar-link.active { color: var(--bs-primary); font-weight: 600; }
.sidebar-link[data-bs-toggle="collapse"]::after { content: "\F282"; font-family: bootstrap-icons; float: right; transition: transform 0.15s; }
.sidebar-link[data-bs-toggle="collapse"].collapsed::after { transform: rotate(-90deg); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Airport Operations", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css" }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }
        document::Script { src: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js" }

        nav { class: "sb-topnav navbar navbar-expand navbar-dark bg-dark px-3",
            button {
                id: "sidebarToggle",
                class: "btn btn-link btn-sm text-light me-3",
                r#type: "button",
                title: "Toggle sidebar",
                i { class: "bi bi-list" }
            }
            a { class: "navbar-brand", href: "/", "Airport Operations" }
            div { class: "ms-auto", ThemeToggle {} }
        }
        div { id: "layoutSidenav",
            div { id: "layoutSidenav_nav", Sidebar {} }
            div { id: "layoutSidenav_content",
                main { class: "container-fluid px-4 py-3",
                    h1 { class: "h3 mb-4", "{props.title}" }
                    {props.children}
                }
                footer { class: "container-fluid px-4 py-3 mt-auto border-top",
                    small { class: "text-body-secondary", "Airport Operations v{version}" }
                }
            }
        }
    }
}
