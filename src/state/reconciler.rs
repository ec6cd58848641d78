//! `UiState` - restores persisted UI preferences and keeps them in sync.

use std::collections::HashSet;

use super::dom::{Element, Page};
use super::menu::{BootstrapCollapse, CollapsibleMenu};
use super::nav::reconcile_active_links;
use super::store::{persist, KeyValueStore};
use super::theme::{applied_theme, apply_theme, next_theme, Theme};
use crate::config::UiConfig;

/// User clicks and toolkit notifications the reconciler reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SidebarToggleClicked,
    ThemeToggleClicked,
    MenuToggleClicked(String),
    /// The toolkit is about to collapse the menu; cancellable.
    MenuHideRequested(String),
    /// The collapse finished opening.
    MenuShown(String),
    /// The collapse finished closing.
    MenuHidden(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Whether the browser's default action (following `href`) must be suppressed.
    pub prevent_default: bool,
}

impl EventOutcome {
    fn prevent() -> Self {
        Self {
            prevent_default: true,
        }
    }
}

/// Owns the page, the store and the menus found on the page.
pub struct UiState<S: KeyValueStore, P: Page> {
    config: UiConfig,
    store: S,
    page: P,
    menus: Vec<BootstrapCollapse<P::Element>>,
}

impl<S: KeyValueStore, P: Page> UiState<S, P> {
    pub fn new(config: UiConfig, store: S, page: P) -> Self {
        let menus = page
            .menus()
            .into_iter()
            .map(|parts| {
                let pinned = config.is_pinned(&parts.id);
                BootstrapCollapse::new(parts, &config.classes, pinned)
            })
            .collect();
        Self {
            config,
            store,
            page,
            menus,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Ids of the menus on the page.
    pub fn menu_ids(&self) -> Vec<String> {
        self.menus.iter().map(|m| m.id().to_string()).collect()
    }

    pub fn is_menu_open(&self, id: &str) -> Option<bool> {
        self.menus.iter().find(|m| m.id() == id).map(|m| m.is_open())
    }

    /// Page-load reconciliation: sidebar, theme, active links, then menus.
    pub fn initialize(&mut self) {
        self.init_sidebar();
        self.init_theme();
        let forced = reconcile_active_links(&self.page, &self.config, &mut self.menus);
        self.restore_menus(&forced);
        tracing::debug!(menus = self.menus.len(), "UI state initialized");
    }

    pub fn init_sidebar(&mut self) {
        if self.store.get_flag(&self.config.keys.sidebar) != Some(true) {
            return;
        }
        match self.page.body() {
            Some(body) => body.add_class(&self.config.classes.sidebar_collapsed),
            None => tracing::debug!("No body element, sidebar state not restored"),
        }
    }

    pub fn init_theme(&mut self) {
        let theme = self
            .store
            .get(&self.config.keys.theme)
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();
        self.set_theme(theme);
    }

    /// Currently applied theme.
    pub fn theme(&self) -> Theme {
        applied_theme(&self.page, &self.config)
    }

    fn set_theme(&mut self, theme: Theme) {
        apply_theme(&self.page, &self.config, theme);
        persist(&mut self.store, &self.config.keys.theme, theme.as_str());
    }

    /// Open menus that are pinned or were persisted open. Forced menus are left alone.
    pub fn restore_menus(&mut self, forced: &HashSet<String>) {
        for menu in self.menus.iter_mut() {
            if forced.contains(menu.id()) {
                continue;
            }
            if menu.is_pinned() {
                menu.open();
                continue;
            }
            let key = self.config.keys.menu(menu.id());
            if self.store.get_flag(&key) == Some(true) && !menu.is_open() {
                menu.open();
            }
        }
    }

    pub fn handle(&mut self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::SidebarToggleClicked => {
                let Some(body) = self.page.body() else {
                    return EventOutcome::prevent();
                };
                let collapsed = body.toggle_class(&self.config.classes.sidebar_collapsed);
                let key = self.config.keys.sidebar.clone();
                persist(&mut self.store, &key, if collapsed { "true" } else { "false" });
                EventOutcome::prevent()
            }
            UiEvent::ThemeToggleClicked => {
                let next = next_theme(&self.page, &self.config);
                tracing::debug!(theme = %next, "Switching theme");
                self.set_theme(next);
                EventOutcome::default()
            }
            UiEvent::MenuToggleClicked(id) if self.config.drive_menus => {
                self.toggle_menu(&id);
                EventOutcome::prevent()
            }
            UiEvent::MenuToggleClicked(id) | UiEvent::MenuHideRequested(id) => {
                match self.menu_mut(&id) {
                    Some(menu) if menu.is_pinned() => {
                        menu.open();
                        EventOutcome::prevent()
                    }
                    _ => EventOutcome::default(),
                }
            }
            UiEvent::MenuShown(id) => {
                self.menu_changed(&id, true);
                EventOutcome::default()
            }
            UiEvent::MenuHidden(id) => {
                self.menu_changed(&id, false);
                EventOutcome::default()
            }
        }
    }

    /// Flip a menu without a toolkit and persist the result.
    ///
    /// Toggle clicks land here when `UiConfig::drive_menus` is set.
    pub fn toggle_menu(&mut self, id: &str) {
        let Some(menu) = self.menu_mut(id) else {
            tracing::debug!(id, "Toggle for unknown menu ignored");
            return;
        };
        if menu.is_pinned() {
            menu.open();
            return;
        }
        let open = !menu.is_open();
        if open {
            menu.open();
        } else {
            menu.close();
        }
        self.menu_changed(id, open);
    }

    fn menu_changed(&mut self, id: &str, open: bool) {
        let Some(menu) = self.menu_mut(id) else {
            tracing::debug!(id, "Notification for unknown menu ignored");
            return;
        };
        if menu.is_pinned() {
            if !open {
                menu.open();
            }
            return;
        }
        let key = self.config.keys.menu(id);
        persist(&mut self.store, &key, if open { "true" } else { "false" });
    }

    fn menu_mut(&mut self, id: &str) -> Option<&mut BootstrapCollapse<P::Element>> {
        let id = id.trim_start_matches('#');
        self.menus.iter_mut().find(|m| m.id() == id)
    }

    /// Hand back the store, e.g. to carry it across a simulated reload.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::dom::fake::FakePage;
    use crate::state::store::MemoryStore;

    fn page() -> FakePage {
        let mut page = FakePage::new("/");
        page.add_element("sidebarToggle");
        page.add_element("themeToggle");
        page.add_element("themeIcon");
        page.add_menu("masterDataMenu", true);
        page.add_menu("flightOpsMenu", false);
        page.add_menu("schedulesMenu", false);
        page.add_link("/", None);
        page.add_link("/masterdata/airlines/", Some("masterDataMenu"));
        page.add_link("/flight-ops/daily-flights/", Some("flightOpsMenu"));
        page.add_link("/schedules/seasonal-flights/", Some("schedulesMenu"));
        page
    }

    #[test]
    fn test_sidebar_restored_and_toggled() {
        let store = MemoryStore::with_entries([("sb|sidebar-toggle", "true")]);
        let page = page();
        let body = page.body().unwrap();
        let mut ui = UiState::new(UiConfig::default(), store, page);
        ui.initialize();
        assert!(body.has_class("sb-sidenav-toggled"));

        let outcome = ui.handle(UiEvent::SidebarToggleClicked);
        assert!(outcome.prevent_default);
        assert!(!body.has_class("sb-sidenav-toggled"));
        assert_eq!(ui.store().get("sb|sidebar-toggle").as_deref(), Some("false"));
    }

    #[test]
    fn test_theme_defaults_to_light_and_is_persisted() {
        let mut ui = UiState::new(UiConfig::default(), MemoryStore::new(), page());
        ui.initialize();
        assert_eq!(ui.theme(), Theme::Light);
        assert_eq!(ui.store().get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_invalid_stored_theme_falls_back() {
        let store = MemoryStore::with_entries([("theme", "neon")]);
        let mut ui = UiState::new(UiConfig::default(), store, page());
        ui.initialize();
        assert_eq!(ui.theme(), Theme::Light);
    }

    #[test]
    fn test_pinned_menu_rejects_collapse() {
        let mut ui = UiState::new(UiConfig::default(), MemoryStore::new(), page());
        ui.initialize();
        assert_eq!(ui.is_menu_open("masterDataMenu"), Some(true));

        let outcome = ui.handle(UiEvent::MenuToggleClicked("masterDataMenu".into()));
        assert!(outcome.prevent_default);
        assert!(ui.handle(UiEvent::MenuHideRequested("masterDataMenu".into())).prevent_default);
        assert!(!ui.handle(UiEvent::MenuHideRequested("flightOpsMenu".into())).prevent_default);
        ui.handle(UiEvent::MenuHidden("masterDataMenu".into()));
        ui.toggle_menu("masterDataMenu");

        assert_eq!(ui.is_menu_open("masterDataMenu"), Some(true));
        assert_eq!(ui.store().get("menu_state_masterDataMenu"), None);
    }

    #[test]
    fn test_unpinned_click_left_to_toolkit() {
        let mut ui = UiState::new(UiConfig::default(), MemoryStore::new(), page());
        ui.initialize();
        let outcome = ui.handle(UiEvent::MenuToggleClicked("#flightOpsMenu".into()));
        assert!(!outcome.prevent_default);
        assert_eq!(ui.store().get("menu_state_flightOpsMenu"), None);
    }

    #[test]
    fn test_foreign_theme_value_toggles_to_light() {
        let mut ui = UiState::new(UiConfig::default(), MemoryStore::new(), page());
        ui.initialize();
        ui.page().root().unwrap().set_attribute("data-bs-theme", "auto");

        ui.handle(UiEvent::ThemeToggleClicked);
        assert_eq!(ui.theme(), Theme::Light);
        assert_eq!(ui.store().get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_driven_menus_toggle_on_click() {
        let config = UiConfig {
            drive_menus: true,
            ..UiConfig::default()
        };
        let mut ui = UiState::new(config, MemoryStore::new(), page());
        ui.initialize();

        assert!(ui.handle(UiEvent::MenuToggleClicked("flightOpsMenu".into())).prevent_default);
        assert_eq!(ui.is_menu_open("flightOpsMenu"), Some(true));
        assert_eq!(ui.store().get("menu_state_flightOpsMenu").as_deref(), Some("true"));

        ui.handle(UiEvent::MenuToggleClicked("flightOpsMenu".into()));
        assert_eq!(ui.is_menu_open("flightOpsMenu"), Some(false));
        assert_eq!(ui.store().get("menu_state_flightOpsMenu").as_deref(), Some("false"));

        assert!(ui.handle(UiEvent::MenuToggleClicked("masterDataMenu".into())).prevent_default);
        assert_eq!(ui.is_menu_open("masterDataMenu"), Some(true));
        assert_eq!(ui.store().get("menu_state_masterDataMenu"), None);
    }

    #[test]
    fn test_missing_controls_are_noops() {
        let mut ui = UiState::new(UiConfig::default(), MemoryStore::new(), FakePage::bare("/"));
        ui.initialize();
        assert!(ui.handle(UiEvent::SidebarToggleClicked).prevent_default);
        ui.handle(UiEvent::ThemeToggleClicked);
        ui.handle(UiEvent::MenuShown("nope".into()));
        ui.toggle_menu("nope");
        assert!(ui.menu_ids().is_empty());
        assert_eq!(ui.store().get("theme").as_deref(), Some("light"));
    }
}
