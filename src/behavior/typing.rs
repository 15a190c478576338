//! Typewriter effect on the hero highlight.
//!
//! The highlight's text is captured and cleared at startup, then written back
//! one character per tick. Characters are Unicode scalar values, so a name
//! with accents or emoji never shows half a code point.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::app::{App, Platform};
use crate::dom::Dom;
use crate::timer::{Scheduler, TimerTask};

/// Progress of the effect on one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typing<N> {
    pub node: N,
    chars: Vec<char>,
    shown: usize,
}

impl<N> Typing<N> {
    pub fn new(node: N, text: &str) -> Self {
        Self { node, chars: text.chars().collect(), shown: 0 }
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// once the full text is showing.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

impl<P: Platform> App<P> {
    pub(crate) fn init_typing(&mut self) {
        let Some(node) = self.dom.query(&self.config.selectors.highlight) else {
            log::debug!("no highlight element; typing effect disabled");
            return;
        };
        let text = self.dom.text(&node);
        if text.is_empty() {
            return;
        }
        self.dom.set_text(&node, "");
        self.state.typing = Some(Typing::new(node, &text));
        self.timers.schedule(self.config.timing.typing_start_delay_ms, TimerTask::TypeNext);
    }

    pub(crate) fn type_next(&mut self) {
        let Some(typing) = self.state.typing.as_mut() else {
            return;
        };
        let Some(prefix) = typing.advance() else {
            return;
        };
        self.dom.set_text(&typing.node, &prefix);
        if !typing.is_done() {
            self.timers.schedule(self.config.timing.typing_step_ms, TimerTask::TypeNext);
        }
    }
}
