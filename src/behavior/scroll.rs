//! Window scroll effects: navbar shade, active nav link, and the scroll cue.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use super::theme::Theme;
use crate::app::{App, Platform};
use crate::consts::{NAVBAR_DARK_SOLID, NAVBAR_DARK_TOP, NAVBAR_LIGHT_SOLID, NAVBAR_LIGHT_TOP};
use crate::dom::Dom;

const ACTIVE: &str = "active";

/// Navbar background for a theme and scroll depth.
pub fn navbar_background(theme: Theme, scroll_y: f64, solid_after: f64) -> &'static str {
    let solid = scroll_y > solid_after;
    match (theme, solid) {
        (Theme::Light, true) => NAVBAR_LIGHT_SOLID,
        (Theme::Light, false) => NAVBAR_LIGHT_TOP,
        (Theme::Dark, true) => NAVBAR_DARK_SOLID,
        (Theme::Dark, false) => NAVBAR_DARK_TOP,
    }
}

pub fn indicator_opacity(scroll_y: f64, hide_after: f64) -> &'static str {
    if scroll_y > hide_after { "0" } else { "1" }
}

/// Vertical extent of a section, as `(id, offset_top, client_height)`.
pub type SectionBox<'a> = (&'a str, f64, f64);

/// The section the reader is in: the first whose lead-adjusted span
/// `[top - lead, top - lead + height)` contains `scroll_y`.
pub fn current_section<'a>(sections: &[SectionBox<'a>], scroll_y: f64, lead: f64) -> Option<&'a str> {
    sections
        .iter()
        .find(|(_, offset_top, height)| {
            let top = offset_top - lead;
            scroll_y >= top && scroll_y < top + height
        })
        .map(|(id, _, _)| *id)
}

impl<P: Platform> App<P> {
    pub(crate) fn on_scroll(&mut self) {
        self.update_navbar_background();
        self.highlight_nav_link();
        self.update_scroll_indicator();
    }

    /// Also run after a theme change so the shade matches immediately.
    pub(crate) fn update_navbar_background(&mut self) {
        let Some(navbar) = self.dom.query(&self.config.selectors.navbar) else {
            return;
        };
        let shade = navbar_background(self.state.theme, self.dom.scroll_y(), self.config.scroll.navbar_solid_after);
        self.dom.set_style(&navbar, "background", shade);
    }

    fn highlight_nav_link(&mut self) {
        let nodes = self.dom.query_all(&self.config.selectors.section);
        let ids: Vec<String> = nodes.iter().map(|n| self.dom.attribute(n, "id").unwrap_or_default()).collect();
        let boxes: Vec<SectionBox<'_>> = nodes
            .iter()
            .zip(&ids)
            .map(|(node, id)| (id.as_str(), self.dom.offset_top(node), self.dom.client_height(node)))
            .collect();
        let target = current_section(&boxes, self.dom.scroll_y(), self.config.scroll.section_lead)
            .filter(|id| !id.is_empty())
            .map(|id| format!("#{id}"));

        let mut marked = false;
        for link in self.dom.query_all(&self.config.selectors.nav_link) {
            self.dom.remove_class(&link, ACTIVE);
            let matches = target.is_some() && self.dom.attribute(&link, "href") == target;
            if matches && !marked {
                self.dom.add_class(&link, ACTIVE);
                marked = true;
            }
        }
    }

    fn update_scroll_indicator(&mut self) {
        let Some(indicator) = self.dom.query(&self.config.selectors.scroll_indicator) else {
            return;
        };
        let opacity = indicator_opacity(self.dom.scroll_y(), self.config.scroll.indicator_hide_after);
        self.dom.set_style(&indicator, "opacity", opacity);
    }
}
