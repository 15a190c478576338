//! Mobile navigation menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::app::{App, NodeOf, Platform};
use crate::bindings::Event;
use crate::dom::Dom;

const ACTIVE: &str = "active";
const ARIA_EXPANDED: &str = "aria-expanded";

impl<P: Platform> App<P> {
    /// Hamburger click: flip the menu open or closed.
    pub(crate) fn toggle_menu(&mut self) {
        let Some(hamburger) = self.dom.query(&self.config.selectors.hamburger) else {
            return;
        };
        let open = self.dom.toggle_class(&hamburger, ACTIVE);
        if let Some(menu) = self.dom.query(&self.config.selectors.nav_menu) {
            if open {
                self.dom.add_class(&menu, ACTIVE);
            } else {
                self.dom.remove_class(&menu, ACTIVE);
            }
        }
        self.dom.set_attribute(&hamburger, ARIA_EXPANDED, if open { "true" } else { "false" });
    }

    /// Nav link click, or any click outside the menu: close it.
    pub(crate) fn close_menu(&mut self) {
        let Some(hamburger) = self.dom.query(&self.config.selectors.hamburger) else {
            return;
        };
        self.dom.remove_class(&hamburger, ACTIVE);
        if let Some(menu) = self.dom.query(&self.config.selectors.nav_menu) {
            self.dom.remove_class(&menu, ACTIVE);
        }
        self.dom.set_attribute(&hamburger, ARIA_EXPANDED, "false");
    }

    pub(crate) fn on_document_click(&mut self, event: &Event<NodeOf<P>>) {
        let Some(target) = &event.target else {
            return;
        };
        let inside = [&self.config.selectors.hamburger, &self.config.selectors.nav_menu]
            .into_iter()
            .filter_map(|selector| self.dom.query(selector))
            .any(|container| self.dom.contains(&container, target));
        if !inside {
            self.close_menu();
        }
    }
}
