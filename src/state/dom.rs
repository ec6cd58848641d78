//! The slice of the DOM the reconciler needs.
//!
//! Element handles behave like browser handles: cloning shares the node and
//! mutation goes through `&self`.

/// A single element: class membership plus attributes.
pub trait Element: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    /// Flip a class, returning whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

/// A navigation anchor together with the submenu it lives in, if any.
#[derive(Debug, Clone)]
pub struct NavLink<E> {
    pub href: String,
    pub element: E,
    /// Id of the enclosing collapsible submenu.
    pub submenu: Option<String>,
}

/// A collapsible panel and the control that toggles it.
#[derive(Debug, Clone)]
pub struct MenuParts<E> {
    pub id: String,
    pub panel: E,
    pub toggle: Option<E>,
}

/// Read access to the page structure.
pub trait Page {
    type Element: Element;

    /// The document root (`<html>`).
    fn root(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// Path component of the current URL, e.g. `/masterdata/airlines/`.
    fn current_path(&self) -> String;
    /// Sidebar navigation links, excluding the collapse toggles themselves.
    fn nav_links(&self) -> Vec<NavLink<Self::Element>>;
    /// Every collapsible menu present on the page.
    fn menus(&self) -> Vec<MenuParts<Self::Element>>;
}

/// In-memory DOM for tests and non-browser hosts.
pub mod fake {
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};
    use std::rc::Rc;

    use super::{Element, MenuParts, NavLink, Page};
    use crate::state::menu::PINNED_ATTRIBUTE;

    #[derive(Debug, Default)]
    struct Node {
        classes: BTreeSet<String>,
        attributes: HashMap<String, String>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct FakeElement(Rc<RefCell<Node>>);

    impl FakeElement {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_classes(classes: &[&str]) -> Self {
            let el = Self::new();
            for class in classes {
                el.add_class(class);
            }
            el
        }

        pub fn classes(&self) -> Vec<String> {
            self.0.borrow().classes.iter().cloned().collect()
        }
    }

    impl Element for FakeElement {
        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().classes.contains(class)
        }

        fn add_class(&self, class: &str) {
            self.0.borrow_mut().classes.insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().classes.remove(class);
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.borrow().attributes.get(name).cloned()
        }

        fn set_attribute(&self, name: &str, value: &str) {
            self.0
                .borrow_mut()
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    /// A page built up by hand. Every element also registers under its id.
    #[derive(Debug, Clone)]
    pub struct FakePage {
        path: String,
        root: Option<FakeElement>,
        body: Option<FakeElement>,
        by_id: HashMap<String, FakeElement>,
        links: Vec<NavLink<FakeElement>>,
        menus: Vec<MenuParts<FakeElement>>,
    }

    impl FakePage {
        /// Empty page with `<html>` and `<body>` at the given path.
        pub fn new(path: &str) -> Self {
            Self {
                path: path.to_string(),
                root: Some(FakeElement::new()),
                body: Some(FakeElement::new()),
                by_id: HashMap::new(),
                links: Vec::new(),
                menus: Vec::new(),
            }
        }

        /// A page with no root or body at all.
        pub fn bare(path: &str) -> Self {
            Self {
                root: None,
                body: None,
                ..Self::new(path)
            }
        }

        pub fn set_path(&mut self, path: &str) {
            self.path = path.to_string();
        }

        pub fn add_element(&mut self, id: &str) -> FakeElement {
            let el = FakeElement::new();
            self.by_id.insert(id.to_string(), el.clone());
            el
        }

        /// Add a collapsed menu. The toggle starts with `collapsed` like Bootstrap markup.
        pub fn add_menu(&mut self, id: &str, pinned: bool) -> MenuParts<FakeElement> {
            let panel = FakeElement::with_classes(&["collapse", "submenu"]);
            if pinned {
                panel.set_attribute(PINNED_ATTRIBUTE, "true");
            }
            let toggle = FakeElement::with_classes(&["sidebar-link", "collapsed"]);
            toggle.set_attribute("aria-expanded", "false");
            self.by_id.insert(id.to_string(), panel.clone());
            let parts = MenuParts {
                id: id.to_string(),
                panel,
                toggle: Some(toggle),
            };
            self.menus.push(parts.clone());
            parts
        }

        /// Add a collapsed submenu panel that nothing toggles.
        pub fn add_panel(&mut self, id: &str) -> FakeElement {
            let panel = FakeElement::with_classes(&["collapse", "submenu"]);
            self.by_id.insert(id.to_string(), panel.clone());
            self.menus.push(MenuParts {
                id: id.to_string(),
                panel: panel.clone(),
                toggle: None,
            });
            panel
        }

        pub fn add_link(&mut self, href: &str, submenu: Option<&str>) -> FakeElement {
            let el = FakeElement::with_classes(&["sidebar-link"]);
            el.set_attribute("href", href);
            self.links.push(NavLink {
                href: href.to_string(),
                element: el.clone(),
                submenu: submenu.map(str::to_string),
            });
            el
        }

        /// The same DOM structure rendered fresh, as after a full reload.
        pub fn reloaded(&self, path: &str) -> Self {
            let mut page = if self.root.is_some() {
                Self::new(path)
            } else {
                Self::bare(path)
            };
            for id in self.by_id.keys() {
                if !self.menus.iter().any(|m| &m.id == id) {
                    page.add_element(id);
                }
            }
            for menu in &self.menus {
                if menu.toggle.is_none() {
                    page.add_panel(&menu.id);
                    continue;
                }
                let pinned = menu.panel.attribute(PINNED_ATTRIBUTE).as_deref() == Some("true");
                page.add_menu(&menu.id, pinned);
            }
            for link in &self.links {
                page.add_link(&link.href, link.submenu.as_deref());
            }
            page
        }

        pub fn link(&self, href: &str) -> Option<FakeElement> {
            self.links
                .iter()
                .find(|l| l.href == href)
                .map(|l| l.element.clone())
        }

        pub fn menu(&self, id: &str) -> Option<MenuParts<FakeElement>> {
            self.menus.iter().find(|m| m.id == id).cloned()
        }
    }

    impl Page for FakePage {
        type Element = FakeElement;

        fn root(&self) -> Option<FakeElement> {
            self.root.clone()
        }

        fn body(&self) -> Option<FakeElement> {
            self.body.clone()
        }

        fn element_by_id(&self, id: &str) -> Option<FakeElement> {
            self.by_id.get(id).cloned()
        }

        fn current_path(&self) -> String {
            self.path.clone()
        }

        fn nav_links(&self) -> Vec<NavLink<FakeElement>> {
            self.links.clone()
        }

        fn menus(&self) -> Vec<MenuParts<FakeElement>> {
            self.menus.clone()
        }
    }
}
