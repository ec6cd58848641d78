//! Sidebar, theme and navigation menu state for the airport operations admin UI.
//!
//! This library provides:
//! - A platform-agnostic reconciler ([`state::UiState`]) that restores persisted
//!   sidebar, theme and menu state and keeps it in sync with user interaction
//! - Browser bindings over `web-sys` (wasm32 only)
//! - The Dioxus admin shell that renders the sidebar markup

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

pub mod config;
pub mod error;
pub mod state;

// Browser bindings (excluded from the server build)
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::UiConfig;
pub use error::UiError;
pub use state::{EventOutcome, Theme, UiEvent, UiState};
