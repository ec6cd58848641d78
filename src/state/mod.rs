//! UI state reconciliation for the admin sidebar.
//!
//! Everything here runs against the [`KeyValueStore`] and [`Page`] traits so
//! the logic can be exercised without a browser. The browser bindings live in
//! `crate::web`.

pub mod dom;
pub mod menu;
pub mod nav;
pub mod reconciler;
pub mod store;
pub mod theme;

pub use dom::{Element, MenuParts, NavLink, Page};
pub use menu::{BootstrapCollapse, CollapsibleMenu, PINNED_ATTRIBUTE};
pub use reconciler::{EventOutcome, UiEvent, UiState};
pub use store::{KeyValueStore, MemoryStore};
pub use theme::Theme;
