//! Page stylesheet for the classes the behaviors add at runtime.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::app::{App, Platform};
use crate::dom::Dom;

/// Marks the injected `<style>` element so it is only added once.
pub const STYLE_MARKER: &str = "data-folio-styles";

pub const PAGE_STYLES: &str = "
.nav-link.active {
    color: #667eea !important;
}

.nav-link.active::after {
    width: 100% !important;
}

.notification-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.notification-close {
    background: none;
    border: none;
    color: white;
    font-size: 1.2rem;
    cursor: pointer;
    padding: 0;
    line-height: 1;
}

.notification-close:hover {
    opacity: 0.8;
}
";

impl<P: Platform> App<P> {
    pub(crate) fn inject_styles(&mut self) {
        if !self.config.inject_styles {
            return;
        }
        if self.dom.query(&format!("style[{STYLE_MARKER}]")).is_some() {
            return;
        }
        let (Some(head), Some(style)) = (self.dom.head(), self.dom.create_element("style")) else {
            log::debug!("no document head; page styles not injected");
            return;
        };
        self.dom.set_attribute(&style, STYLE_MARKER, "");
        self.dom.set_text(&style, PAGE_STYLES);
        self.dom.append_child(&head, &style);
    }
}
