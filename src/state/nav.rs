//! Active-link highlighting from the current URL.

use std::collections::HashSet;

use super::dom::{Element, Page};
use super::menu::CollapsibleMenu;
use crate::config::UiConfig;

/// Mark links whose `href` equals the current path and force their submenus open.
///
/// Matching is an exact string comparison. With `link_scope` set only links in
/// that submenu take part. `active` is cleared from every in-scope link first.
/// Returns the ids of the menus forced open.
pub fn reconcile_active_links<P, M>(page: &P, config: &UiConfig, menus: &mut [M]) -> HashSet<String>
where
    P: Page,
    M: CollapsibleMenu,
{
    let path = page.current_path();
    let mut forced = HashSet::new();

    let links = page.nav_links().into_iter().filter(|link| match &config.link_scope {
        Some(scope) => link.submenu.as_deref() == Some(scope.as_str()),
        None => true,
    });

    for link in links {
        link.element.remove_class(&config.classes.active);
        if link.href != path {
            continue;
        }
        link.element.add_class(&config.classes.active);
        tracing::debug!(href = %link.href, "Active navigation link");

        let Some(submenu) = link.submenu else {
            continue;
        };
        match menus.iter_mut().find(|m| m.id() == submenu) {
            Some(menu) => {
                menu.open();
                menu.mark_active();
                forced.insert(submenu);
            }
            None => tracing::debug!(%submenu, "Active link inside unknown submenu"),
        }
    }

    forced
}
