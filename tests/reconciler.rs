//! End-to-end reconciliation against the in-memory page and store.
//!
//! "Reload" means: take the store out of the old `UiState`, render the same
//! page structure fresh and initialize again.

use sidenav_state::state::dom::fake::FakePage;
use sidenav_state::state::{Element, KeyValueStore, MemoryStore, Page};
use sidenav_state::{Theme, UiConfig, UiEvent, UiState};

fn admin_page(path: &str) -> FakePage {
    let mut page = FakePage::new(path);
    page.add_element("sidebarToggle");
    page.add_element("themeToggle");
    page.add_element("themeIcon");
    page.add_menu("masterDataMenu", true);
    page.add_menu("flightOpsMenu", false);
    page.add_menu("schedulesMenu", false);
    page.add_link("/", None);
    for href in ["/masterdata/airlines", "/masterdata/gates", "/masterdata/stands"] {
        page.add_link(href, Some("masterDataMenu"));
    }
    page.add_link("/flight-ops/daily-flights", Some("flightOpsMenu"));
    page.add_link("/schedules/seasonal-flights", Some("schedulesMenu"));
    page
}

fn boot(page: FakePage, store: MemoryStore) -> UiState<MemoryStore, FakePage> {
    let mut ui = UiState::new(UiConfig::default(), store, page);
    ui.initialize();
    ui
}

fn reload(ui: UiState<MemoryStore, FakePage>, path: &str) -> UiState<MemoryStore, FakePage> {
    let page = ui.page().reloaded(path);
    boot(page, ui.into_store())
}

#[test]
fn theme_matches_last_persisted_value() {
    let ui = boot(admin_page("/"), MemoryStore::with_entries([("theme", "dark")]));
    assert_eq!(ui.theme(), Theme::Dark);
    let root = ui.page().root().unwrap();
    assert_eq!(root.attribute("data-bs-theme").as_deref(), Some("dark"));

    let ui = boot(admin_page("/"), MemoryStore::new());
    assert_eq!(ui.theme(), Theme::Light);
}

#[test]
fn double_theme_toggle_is_identity() {
    let mut ui = boot(admin_page("/"), MemoryStore::new());
    let icon = ui.page().element_by_id("themeIcon").unwrap();
    let before = icon.classes();

    ui.handle(UiEvent::ThemeToggleClicked);
    assert_eq!(ui.theme(), Theme::Dark);
    assert!(icon.has_class("bi-sun-fill"));
    assert_eq!(ui.store().get("theme").as_deref(), Some("dark"));

    ui.handle(UiEvent::ThemeToggleClicked);
    assert_eq!(ui.theme(), Theme::Light);
    assert_eq!(icon.classes(), before);
}

#[test]
fn theme_survives_reload() {
    let mut ui = boot(admin_page("/"), MemoryStore::new());
    ui.handle(UiEvent::ThemeToggleClicked);
    let ui = reload(ui, "/masterdata/gates");
    assert_eq!(ui.theme(), Theme::Dark);
}

#[test]
fn sidebar_state_survives_reload() {
    let mut ui = boot(admin_page("/"), MemoryStore::new());
    assert!(ui.handle(UiEvent::SidebarToggleClicked).prevent_default);

    let ui = reload(ui, "/");
    assert!(ui.page().body().unwrap().has_class("sb-sidenav-toggled"));
}

#[test]
fn only_exact_link_is_active() {
    let page = admin_page("/masterdata/gates");
    let ui = boot(page, MemoryStore::new());
    let page = ui.page();

    for link in page.nav_links() {
        assert_eq!(
            link.element.has_class("active"),
            link.href == "/masterdata/gates",
            "{}",
            link.href
        );
    }
}

#[test]
fn active_link_opens_submenu_over_persisted_closed_state() {
    let store = MemoryStore::with_entries([("menu_state_flightOpsMenu", "false")]);
    let ui = boot(admin_page("/flight-ops/daily-flights"), store);

    assert_eq!(ui.is_menu_open("flightOpsMenu"), Some(true));
    let toggle = ui.page().menu("flightOpsMenu").unwrap().toggle.unwrap();
    assert!(toggle.has_class("active"));
    assert!(!toggle.has_class("collapsed"));
    assert_eq!(toggle.attribute("aria-expanded").as_deref(), Some("true"));
}

#[test]
fn active_link_opens_submenu_without_toggle() {
    let mut page = admin_page("/reports/delays");
    let panel = page.add_panel("reportsMenu");
    let delays = page.add_link("/reports/delays", Some("reportsMenu"));
    let ui = boot(page, MemoryStore::new());

    assert!(delays.has_class("active"));
    assert!(panel.has_class("show"));
    assert_eq!(ui.is_menu_open("reportsMenu"), Some(true));
}

#[test]
fn foreign_theme_value_toggles_to_light() {
    let mut ui = boot(admin_page("/"), MemoryStore::with_entries([("theme", "dark")]));
    ui.page().root().unwrap().set_attribute("data-bs-theme", "auto");
    ui.handle(UiEvent::ThemeToggleClicked);
    assert_eq!(ui.theme(), Theme::Light);
}

#[test]
fn unpinned_menu_state_survives_reload() {
    let mut ui = boot(admin_page("/"), MemoryStore::new());
    assert_eq!(ui.is_menu_open("schedulesMenu"), Some(false));

    ui.handle(UiEvent::MenuShown("schedulesMenu".into()));
    let mut ui = reload(ui, "/");
    assert_eq!(ui.is_menu_open("schedulesMenu"), Some(true));
    let toggle = ui.page().menu("schedulesMenu").unwrap().toggle.unwrap();
    assert_eq!(toggle.attribute("aria-expanded").as_deref(), Some("true"));

    ui.handle(UiEvent::MenuHidden("schedulesMenu".into()));
    let ui = reload(ui, "/");
    assert_eq!(ui.is_menu_open("schedulesMenu"), Some(false));
}

#[test]
fn programmatic_toggle_persists_like_notifications() {
    let mut ui = boot(admin_page("/"), MemoryStore::new());
    ui.toggle_menu("flightOpsMenu");
    assert_eq!(ui.is_menu_open("flightOpsMenu"), Some(true));
    assert_eq!(ui.store().get_flag("menu_state_flightOpsMenu"), Some(true));

    ui.toggle_menu("flightOpsMenu");
    assert_eq!(ui.store().get_flag("menu_state_flightOpsMenu"), Some(false));
}

#[test]
fn pinned_menu_stays_open_and_touches_nothing_else() {
    let store = MemoryStore::with_entries([
        ("menu_state_flightOpsMenu", "true"),
        ("menu_state_schedulesMenu", "false"),
    ]);
    let mut ui = boot(admin_page("/"), store);
    let before = ui.store().clone();

    for _ in 0..3 {
        assert!(ui
            .handle(UiEvent::MenuToggleClicked("masterDataMenu".into()))
            .prevent_default);
        ui.handle(UiEvent::MenuHidden("masterDataMenu".into()));
    }

    assert_eq!(ui.is_menu_open("masterDataMenu"), Some(true));
    assert_eq!(ui.store(), &before);
}

#[test]
fn pinning_can_come_from_config() {
    let config = UiConfig {
        pinned_menus: vec!["schedulesMenu".to_string()],
        ..UiConfig::default()
    };
    let mut ui = UiState::new(config, MemoryStore::new(), admin_page("/"));
    ui.initialize();
    assert_eq!(ui.is_menu_open("schedulesMenu"), Some(true));
    ui.toggle_menu("schedulesMenu");
    assert_eq!(ui.is_menu_open("schedulesMenu"), Some(true));
}

#[test]
fn menu_keys_are_namespaced() {
    let mut ui = boot(admin_page("/"), MemoryStore::new());
    ui.handle(UiEvent::MenuShown("flightOpsMenu".into()));
    ui.handle(UiEvent::MenuHidden("flightOpsMenu".into()));

    assert_eq!(ui.store().get("menu_state_flightOpsMenu").as_deref(), Some("false"));
    assert_eq!(ui.store().get("menu_state_schedulesMenu"), None);
}

#[test]
fn scoped_matching_ignores_links_outside_scope() {
    let config = UiConfig {
        link_scope: Some("masterDataMenu".to_string()),
        ..UiConfig::default()
    };
    let mut ui = UiState::new(config, MemoryStore::new(), admin_page("/flight-ops/daily-flights"));
    ui.initialize();

    let daily = ui.page().link("/flight-ops/daily-flights").unwrap();
    assert!(!daily.has_class("active"));
    assert_eq!(ui.is_menu_open("flightOpsMenu"), Some(false));
}

#[test]
fn page_without_controls_does_not_fail() {
    let mut ui = boot(FakePage::bare("/anything"), MemoryStore::new());
    ui.handle(UiEvent::SidebarToggleClicked);
    ui.handle(UiEvent::ThemeToggleClicked);
    ui.handle(UiEvent::MenuToggleClicked("masterDataMenu".into()));
    assert!(ui.menu_ids().is_empty());
}
