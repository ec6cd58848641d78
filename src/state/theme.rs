//! Light/dark theme.

use std::fmt;
use std::str::FromStr;

use super::dom::{Element, Page};
use crate::config::UiConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon class for this theme. The icon shows the mode a click switches to.
    pub fn icon_class(self, config: &UiConfig) -> &str {
        match self {
            Theme::Dark => &config.classes.dark_icon,
            Theme::Light => &config.classes.light_icon,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Theme currently set on the document root, light when missing or unknown.
pub fn applied_theme<P: Page>(page: &P, config: &UiConfig) -> Theme {
    page.root()
        .and_then(|root| root.attribute(&config.theme_attribute))
        .and_then(|t| t.parse().ok())
        .unwrap_or_default()
}

/// Theme a toggle switches to: dark only when the root is exactly `light`.
///
/// A missing or foreign value (`auto` from another script) toggles to light.
pub fn next_theme<P: Page>(page: &P, config: &UiConfig) -> Theme {
    let current = page
        .root()
        .and_then(|root| root.attribute(&config.theme_attribute));
    if current.as_deref() == Some("light") {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Set the root attribute and swap the icon classes.
pub fn apply_theme<P: Page>(page: &P, config: &UiConfig, theme: Theme) {
    match page.root() {
        Some(root) => root.set_attribute(&config.theme_attribute, theme.as_str()),
        None => tracing::debug!("No document root, theme attribute not set"),
    }

    if let Some(icon) = page.element_by_id(&config.theme_icon_id) {
        icon.remove_class(theme.opposite().icon_class(config));
        icon.add_class(theme.icon_class(config));
    }
}
