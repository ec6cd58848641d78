//! Library error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// The browser refused to hand out a storage object (private mode, sandboxed iframe).
    #[error("persistent storage unavailable: {0}")]
    StoreUnavailable(String),

    #[error("failed to write {key}: {message}")]
    StoreWrite { key: String, message: String },

    /// No window or document (not running in a browser page).
    #[error("browser environment unavailable: {0}")]
    Environment(String),
}
