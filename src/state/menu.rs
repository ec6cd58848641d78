//! Collapsible menu capability and its Bootstrap-collapse adapter.

use super::dom::{Element, MenuParts};
use crate::config::ClassNames;

/// Panel attribute marking a menu that never collapses.
pub const PINNED_ATTRIBUTE: &str = "data-pinned-open";

/// What the reconciler needs from any collapsible menu.
pub trait CollapsibleMenu {
    fn id(&self) -> &str;
    fn is_open(&self) -> bool;
    /// Show the panel and mark its toggle expanded, without firing toolkit events.
    fn open(&mut self);
    fn close(&mut self);
    fn is_pinned(&self) -> bool;
    /// Highlight the toggle because a link inside the menu is the current page.
    fn mark_active(&mut self);
}

/// A Bootstrap 5 `.collapse` panel driven through classes and `aria-expanded`.
#[derive(Debug, Clone)]
pub struct BootstrapCollapse<E: Element> {
    id: String,
    panel: E,
    toggle: Option<E>,
    pinned: bool,
    classes: ClassNames,
}

impl<E: Element> BootstrapCollapse<E> {
    /// `pinned_by_config` is ORed with the panel's own `data-pinned-open` attribute.
    pub fn new(parts: MenuParts<E>, classes: &ClassNames, pinned_by_config: bool) -> Self {
        let pinned = pinned_by_config
            || parts.panel.attribute(PINNED_ATTRIBUTE).as_deref() == Some("true");
        Self {
            id: parts.id,
            panel: parts.panel,
            toggle: parts.toggle,
            pinned,
            classes: classes.clone(),
        }
    }

    fn set_expanded(&self, expanded: bool) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        if expanded {
            toggle.remove_class(&self.classes.collapsed);
        } else {
            toggle.add_class(&self.classes.collapsed);
        }
        toggle.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
    }
}

impl<E: Element> CollapsibleMenu for BootstrapCollapse<E> {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_open(&self) -> bool {
        self.panel.has_class(&self.classes.shown)
    }

    fn open(&mut self) {
        self.panel.add_class(&self.classes.shown);
        self.set_expanded(true);
    }

    fn close(&mut self) {
        self.panel.remove_class(&self.classes.shown);
        self.set_expanded(false);
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }

    fn mark_active(&mut self) {
        if let Some(toggle) = &self.toggle {
            toggle.add_class(&self.classes.active);
        }
    }
}
