//! Pointer hover transforms on cards, skill items and social links.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::app::{App, NodeOf, Platform};
use crate::bindings::Event;
use crate::dom::Dom;

impl<P: Platform> App<P> {
    /// Apply hover rule `rule` to the element the pointer entered or left.
    pub(crate) fn on_hover(&mut self, rule: usize, event: &Event<NodeOf<P>>, entering: bool) {
        let (Some(node), Some(rule)) = (&event.current, self.config.hover.get(rule)) else {
            return;
        };
        let transform = if entering { &rule.enter } else { &rule.leave };
        self.dom.set_style(node, "transform", transform);
    }
}
