//! Shared UI components for the Dioxus fullstack web UI.

pub mod layout;
pub mod nav;
pub mod theme;

pub use layout::Layout;
pub use nav::Sidebar;
pub use theme::ThemeToggle;
