//! Scroll-triggered fade-in of content blocks.
//!
//! Blocks start transparent and shifted down, with their transition declared
//! up front, and are revealed the first time the intersection observer sees
//! them. Elements stay observed after the reveal; later entries rewrite the
//! same two styles and never hide anything again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::app::{App, NodeOf, Platform};
use crate::bindings::Event;
use crate::dom::Dom;

impl<P: Platform> App<P> {
    pub(crate) fn init_reveal(&mut self) {
        let reveal = &self.config.reveal;
        for node in self.dom.query_all(&self.config.selectors.reveal) {
            self.dom.set_style(&node, "opacity", "0");
            self.dom.set_style(&node, "transform", &reveal.hidden_transform);
            self.dom.set_style(&node, "transition", &reveal.transition);
        }
    }

    pub(crate) fn on_reveal(&mut self, event: &Event<NodeOf<P>>) {
        if !event.intersecting {
            return;
        }
        let Some(node) = &event.current else {
            return;
        };
        self.dom.set_style(node, "opacity", "1");
        self.dom.set_style(node, "transform", &self.config.reveal.shown_transform);
    }
}
