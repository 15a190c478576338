//! Smooth scrolling for in-page anchors.
//!
//! The listener cancels the jump before the handler runs (see
//! [`crate::bindings::Handler::prevents_default`]), so a link to a missing
//! section does nothing at all.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use crate::app::{App, NodeOf, Platform};
use crate::bindings::Event;
use crate::dom::Dom;

/// The element id an in-page href points at. `None` for `#` and non-fragment links.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `offset_top` just below the fixed header.
pub fn scroll_destination(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

impl<P: Platform> App<P> {
    pub(crate) fn on_anchor_click(&mut self, event: &Event<NodeOf<P>>) {
        let Some(link) = &event.current else {
            return;
        };
        let Some(href) = self.dom.attribute(link, "href") else {
            return;
        };
        let Some(target) = fragment_id(&href).and_then(|id| self.dom.element_by_id(id)) else {
            log::debug!("anchor {href} has no target section");
            return;
        };
        let top = scroll_destination(self.dom.offset_top(&target), self.config.scroll.header_offset);
        self.dom.smooth_scroll_to(top);
    }
}
