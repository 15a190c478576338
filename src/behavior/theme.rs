//! Light/dark theme toggle.
//!
//! The stored preference is read once at startup; anything other than
//! `"light"` (including nothing) means dark. The body carries exactly one of
//! `light-mode` / `dark-mode`, and the `#theme-toggle` checkbox is checked in
//! light mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::app::{App, NodeOf, Platform};
use crate::bindings::Event;
use crate::dom::Dom;
use crate::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference value.
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("light") { Self::Light } else { Self::Dark }
    }

    /// The theme selected by the toggle checkbox state.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Light } else { Self::Dark }
    }

    /// Value persisted to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl<P: Platform> App<P> {
    pub(crate) fn init_theme(&mut self) {
        let stored = match self.prefs.load(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme preference unreadable, using dark: {e}");
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        self.apply_theme(theme);

        match self.dom.query(&self.config.selectors.theme_toggle) {
            Some(toggle) => self.dom.set_checked(&toggle, theme == Theme::Light),
            None => log::debug!("theme toggle {} not found", self.config.selectors.theme_toggle),
        }
    }

    pub(crate) fn on_theme_changed(&mut self, event: &Event<NodeOf<P>>) {
        let Some(toggle) = &event.current else {
            return;
        };
        let theme = Theme::from_checked(self.dom.is_checked(toggle));
        self.apply_theme(theme);
        if let Err(e) = self.prefs.save(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        self.update_navbar_background();
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        if let Some(body) = self.dom.body() {
            self.dom.add_class(&body, theme.body_class());
            self.dom.remove_class(&body, theme.opposite().body_class());
        }
    }
}
