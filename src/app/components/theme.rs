//! Theme toggle button for light/dark modes.

use dioxus::prelude::*;

/// Theme toggle. Clicks are handled by the client-side reconciler, which
/// swaps `data-bs-theme` on `<html>` and the icon classes.
#[component]
pub fn ThemeToggle() -> Element {
    rsx! {
        button {
            id: "themeToggle",
            class: "btn btn-link text-light",
            r#type: "button",
            title: "Toggle theme",
            i { id: "themeIcon", class: "bi bi-moon-stars-fill" }
        }
    }
}

/// Client-side JavaScript for initial theme setup (included in head).
/// Runs before the WASM bundle loads to prevent a flash of the wrong theme.
pub const THEME_SCRIPT: &str = r#"
(function(){
    const t = localStorage.getItem('theme') === 'dark' ? 'dark' : 'light';
    document.documentElement.setAttribute('data-bs-theme', t);
})();
"#;
