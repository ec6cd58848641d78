//! Browser bindings: localStorage, the live DOM and event wiring.
//!
//! Only compiled for `wasm32`. [`boot`] is the entry point; it builds a
//! [`UiState`] over the real page, reconciles once and then feeds click and
//! Bootstrap collapse events into it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Storage, Window};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::state::{Element, KeyValueStore, MenuParts, NavLink, Page, UiEvent, UiState};

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Result<Self, UiError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(UiError::StoreUnavailable("no localStorage".to_string())),
            Err(e) => Err(UiError::StoreUnavailable(format!("{e:?}"))),
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| UiError::StoreWrite {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}

#[derive(Debug, Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn inner(&self) -> &web_sys::Element {
        &self.0
    }
}

impl Element for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }
}

/// The live document, queried with the class names from [`UiConfig`].
pub struct WebPage {
    window: Window,
    document: Document,
    nav_link_class: String,
    submenu_class: String,
}

impl WebPage {
    pub fn new(window: Window, config: &UiConfig) -> Result<Self, UiError> {
        let document = window
            .document()
            .ok_or_else(|| UiError::Environment("window has no document".to_string()))?;
        Ok(Self {
            window,
            document,
            nav_link_class: config.classes.nav_link.clone(),
            submenu_class: config.classes.submenu.clone(),
        })
    }

    fn select_all(&self, selector: &str) -> Vec<web_sys::Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            tracing::warn!(selector, "Invalid selector");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn toggle_selector(&self) -> String {
        format!(".{}[data-bs-toggle=\"collapse\"]", self.nav_link_class)
    }

    /// The control that toggles panel `id`, if there is one.
    fn toggle_for(&self, id: &str) -> Option<web_sys::Element> {
        let selector = format!("[href=\"#{id}\"], [data-bs-target=\"#{id}\"]");
        self.document.query_selector(&selector).ok().flatten()
    }
}

/// Collapse target of a toggle, without the leading `#`.
fn toggle_target(toggle: &web_sys::Element) -> Option<String> {
    toggle
        .get_attribute("data-bs-target")
        .or_else(|| toggle.get_attribute("href"))
        .and_then(|t| t.strip_prefix('#').map(str::to_string))
        .filter(|t| !t.is_empty())
}

impl Page for WebPage {
    type Element = WebElement;

    fn root(&self) -> Option<WebElement> {
        self.document.document_element().map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|b| WebElement(b.into()))
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn nav_links(&self) -> Vec<NavLink<WebElement>> {
        let selector = format!(
            "a.{}:not([data-bs-toggle=\"collapse\"])",
            self.nav_link_class
        );
        let submenu_selector = format!(".{}", self.submenu_class);
        self.select_all(&selector)
            .into_iter()
            .filter_map(|el| {
                let href = el.get_attribute("href")?;
                let submenu = el
                    .closest(&submenu_selector)
                    .ok()
                    .flatten()
                    .map(|s| s.id())
                    .filter(|id| !id.is_empty());
                Some(NavLink {
                    href,
                    element: WebElement(el),
                    submenu,
                })
            })
            .collect()
    }

    fn menus(&self) -> Vec<MenuParts<WebElement>> {
        // Every submenu panel, whether or not anything toggles it.
        let mut menus: Vec<MenuParts<WebElement>> = self
            .select_all(&format!(".{}[id]", self.submenu_class))
            .into_iter()
            .map(|panel| {
                let id = panel.id();
                MenuParts {
                    toggle: self.toggle_for(&id).map(WebElement),
                    id,
                    panel: WebElement(panel),
                }
            })
            .filter(|parts| !parts.id.is_empty())
            .collect();

        // Collapse targets outside the submenu convention.
        for toggle in self.select_all(&self.toggle_selector()) {
            let Some(id) = toggle_target(&toggle) else {
                continue;
            };
            if menus.iter().any(|m| m.id == id) {
                continue;
            }
            if let Some(panel) = self.document.get_element_by_id(&id) {
                menus.push(MenuParts {
                    id,
                    panel: WebElement(panel),
                    toggle: Some(WebElement(toggle)),
                });
            }
        }
        menus
    }
}

type SharedUi = Rc<RefCell<UiState<LocalStorage, WebPage>>>;

/// Attach a listener that turns a DOM event into a [`UiEvent`].
fn listen(target: &web_sys::Element, name: &str, ui: &SharedUi, event: UiEvent) {
    let ui = Rc::clone(ui);
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |dom_event: web_sys::Event| {
        let Ok(mut state) = ui.try_borrow_mut() else {
            tracing::warn!(?event, "Re-entrant UI event dropped");
            return;
        };
        if state.handle(event.clone()).prevent_default {
            dom_event.prevent_default();
        }
    });
    if target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!(event = name, "Failed to attach listener");
    }
    // Listeners live as long as the page.
    closure.forget();
}

/// Reconcile the current page and start listening for UI events.
pub fn boot(config: UiConfig) -> Result<(), UiError> {
    let window =
        web_sys::window().ok_or_else(|| UiError::Environment("no global window".to_string()))?;
    let store = LocalStorage::open(&window)?;
    let page = WebPage::new(window, &config)?;

    let mut state = UiState::new(config, store, page);
    state.initialize();
    let ui: SharedUi = Rc::new(RefCell::new(state));

    let state = ui.borrow();
    let config = state.config();
    let page = state.page();

    if let Some(toggle) = page.element_by_id(&config.sidebar_toggle_id) {
        listen(toggle.inner(), "click", &ui, UiEvent::SidebarToggleClicked);
    }
    if let Some(toggle) = page.element_by_id(&config.theme_toggle_id) {
        listen(toggle.inner(), "click", &ui, UiEvent::ThemeToggleClicked);
    }

    for parts in page.menus() {
        let id = parts.id.clone();
        if let Some(toggle) = &parts.toggle {
            listen(toggle.inner(), "click", &ui, UiEvent::MenuToggleClicked(id.clone()));
        }
        let panel = parts.panel.inner();
        listen(panel, "hide.bs.collapse", &ui, UiEvent::MenuHideRequested(id.clone()));
        listen(panel, "shown.bs.collapse", &ui, UiEvent::MenuShown(id.clone()));
        listen(panel, "hidden.bs.collapse", &ui, UiEvent::MenuHidden(id));
    }

    tracing::info!(menus = state.menu_ids().len(), "Sidebar state attached");
    Ok(())
}
