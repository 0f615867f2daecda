//! Mobile navigation menu.
//!
//! Open state lives only in the class list: the menu is open while it
//! carries `open_class`. Page scrolling is locked while it is open.

use tracing::debug;

use crate::config::NavConfig;
use crate::dom::DocumentModel;

/// What a click did to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Opened,
    Closed,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct NavController {
    config: NavConfig,
}

impl NavController {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }

    pub fn is_open<D: DocumentModel>(&self, doc: &D) -> bool {
        doc.query_one(&self.config.menu_selector)
            .is_some_and(|menu| doc.has_class(&menu, &self.config.open_class))
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle<D: DocumentModel>(&self, doc: &mut D) -> bool {
        let Some(menu) = doc.query_one(&self.config.menu_selector) else {
            return false;
        };
        let open = !doc.has_class(&menu, &self.config.open_class);
        self.set_open(doc, open);
        open
    }

    pub fn close<D: DocumentModel>(&self, doc: &mut D) {
        self.set_open(doc, false);
    }

    fn set_open<D: DocumentModel>(&self, doc: &mut D, open: bool) {
        for selector in [&self.config.toggle_selector, &self.config.menu_selector] {
            if let Some(element) = doc.query_one(selector) {
                doc.set_class(&element, &self.config.open_class, open);
            }
        }
        doc.set_scroll_lock(open);
        debug!(open, "nav menu");
    }

    /// Route a document-level click.
    ///
    /// Clicks on (or inside) the toggle flip the menu, clicks on a nav link
    /// close it, and clicks outside both the menu and the toggle close an
    /// open menu.
    pub fn on_click<D: DocumentModel>(&self, doc: &mut D, target: &D::Element) -> NavAction {
        let (Some(toggle), Some(menu)) = (
            doc.query_one(&self.config.toggle_selector),
            doc.query_one(&self.config.menu_selector),
        ) else {
            return NavAction::Ignored;
        };

        if doc.contains(&toggle, target) {
            return if self.toggle(doc) {
                NavAction::Opened
            } else {
                NavAction::Closed
            };
        }

        if doc.closest(target, &self.config.link_selector).is_some() {
            self.close(doc);
            return NavAction::Closed;
        }

        if !doc.contains(&menu, target) && self.is_open(doc) {
            self.close(doc);
            return NavAction::Closed;
        }

        NavAction::Ignored
    }
}
