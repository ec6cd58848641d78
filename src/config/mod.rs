//! Configuration management
//!
//! [`UiConfig`] names the DOM hooks and storage keys the reconciler uses and is
//! shared by server and client. [`AppConfig`] wraps it with server settings.
//! The server installs its `ui` section with [`install_ui_config`]; the app
//! hands it to the client through the hydration data.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Element ids, class names and storage keys used by the reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub sidebar_toggle_id: String,
    pub theme_toggle_id: String,
    pub theme_icon_id: String,
    /// Attribute on `<html>` carrying the theme name.
    pub theme_attribute: String,
    pub classes: ClassNames,
    pub keys: StorageKeys,
    /// Menus that never collapse, in addition to those marked `data-pinned-open`.
    pub pinned_menus: Vec<String>,
    /// Restrict active-link matching to links inside this submenu.
    pub link_scope: Option<String>,
    /// Open and close menus on toggle clicks without the Bootstrap collapse script.
    pub drive_menus: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_toggle_id: "sidebarToggle".to_string(),
            theme_toggle_id: "themeToggle".to_string(),
            theme_icon_id: "themeIcon".to_string(),
            theme_attribute: "data-bs-theme".to_string(),
            classes: ClassNames::default(),
            keys: StorageKeys::default(),
            pinned_menus: Vec::new(),
            link_scope: None,
            drive_menus: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Added to `<body>` while the sidebar is collapsed.
    pub sidebar_collapsed: String,
    pub active: String,
    /// Present on an open collapsible panel.
    pub shown: String,
    /// Present on the toggle of a closed panel.
    pub collapsed: String,
    pub nav_link: String,
    pub submenu: String,
    /// Icon shown while the dark theme is active.
    pub dark_icon: String,
    /// Icon shown while the light theme is active.
    pub light_icon: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            sidebar_collapsed: "sb-sidenav-toggled".to_string(),
            active: "active".to_string(),
            shown: "show".to_string(),
            collapsed: "collapsed".to_string(),
            nav_link: "sidebar-link".to_string(),
            submenu: "submenu".to_string(),
            dark_icon: "bi-sun-fill".to_string(),
            light_icon: "bi-moon-stars-fill".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub sidebar: String,
    pub theme: String,
    pub menu_prefix: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            sidebar: "sb|sidebar-toggle".to_string(),
            theme: "theme".to_string(),
            menu_prefix: "menu_state_".to_string(),
        }
    }
}

impl StorageKeys {
    /// Storage key for a menu's expand flag. A leading `#` is ignored.
    pub fn menu(&self, menu_id: &str) -> String {
        format!("{}{}", self.menu_prefix, menu_id.trim_start_matches('#'))
    }
}

impl UiConfig {
    pub fn is_pinned(&self, menu_id: &str) -> bool {
        self.pinned_menus.iter().any(|m| m == menu_id)
    }
}

static INSTALLED_UI_CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// Make `config` the one served to every page. Only the first call wins.
pub fn install_ui_config(config: UiConfig) -> bool {
    INSTALLED_UI_CONFIG.set(config).is_ok()
}

/// The installed UI config, or the defaults when nothing was installed.
pub fn ui_config() -> UiConfig {
    INSTALLED_UI_CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(feature = "server")]
pub use server::{load_config, load_config_from, AppConfig};

#[cfg(feature = "server")]
mod server {
    use anyhow::Result;
    use serde::Deserialize;
    use std::path::Path;

    use super::UiConfig;

    #[derive(Debug, Deserialize)]
    pub struct AppConfig {
        #[serde(default = "default_port")]
        pub port: u16,

        #[serde(default)]
        pub ui: UiConfig,
    }

    fn default_port() -> u16 {
        8080
    }

    /// Load `sidenav.toml` from the working directory plus `SIDENAV_*` overrides.
    pub fn load_config() -> Result<AppConfig> {
        load_config_from(Path::new("sidenav"))
    }

    pub fn load_config_from(file_stem: &Path) -> Result<AppConfig> {
        let config = ::config::Config::builder()
            // Start with defaults
            .set_default("port", 8080)?
            // Load from config file if it exists
            .add_source(::config::File::with_name(&file_stem.to_string_lossy()).required(false))
            // Override with environment variables (SIDENAV_PORT, SIDENAV_UI__LINK_SCOPE, etc.)
            .add_source(
                ::config::Environment::with_prefix("SIDENAV")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
