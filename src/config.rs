//! Page binding configuration.
//!
//! Every selector, offset, timing and label the behaviors use lives here so a
//! page can override them with an inline JSON block. Missing keys fall back to
//! the defaults, which match the portfolio markup this crate was written for.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    HEADER_OFFSET_PX, INDICATOR_HIDE_AFTER_PX, NAVBAR_SOLID_AFTER_PX, NOTIFICATION_LIFETIME_MS,
    NOTIFICATION_SLIDE_IN_MS, NOTIFICATION_SLIDE_OUT_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_LEAD_PX,
    TYPING_START_DELAY_MS, TYPING_STEP_MS,
};
use crate::error::Result;

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Local storage key holding the theme preference.
    pub storage_key: String,
    /// Append the active-link and notification rules to `<head>` at startup.
    pub inject_styles: bool,
    pub selectors: Selectors,
    pub scroll: ScrollConfig,
    pub timing: TimingConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub hover: Vec<HoverRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            storage_key: "theme".to_owned(),
            inject_styles: true,
            selectors: Selectors::default(),
            scroll: ScrollConfig::default(),
            timing: TimingConfig::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
            hover: default_hover_rules(),
        }
    }
}

impl Config {
    /// Parse a configuration from JSON, defaulting every absent key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] when the input is not valid JSON or a
    /// present key has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured log level, or `Info` if it does not parse.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Selectors forming the contract with the page markup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub anchor_link: String,
    pub reveal: String,
    pub contact_form: String,
    pub submit_button: String,
    pub highlight: String,
    pub scroll_indicator: String,
    pub navbar: String,
    pub section: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-toggle".to_owned(),
            hamburger: ".hamburger".to_owned(),
            nav_menu: ".nav-menu".to_owned(),
            nav_link: ".nav-link".to_owned(),
            anchor_link: "a[href^=\"#\"]".to_owned(),
            reveal: ".about-content, .skills-grid, .projects-grid, .contact-content, .stat, .skill-category, .project-card"
                .to_owned(),
            contact_form: ".contact-form".to_owned(),
            submit_button: "button[type=\"submit\"]".to_owned(),
            highlight: ".highlight".to_owned(),
            scroll_indicator: ".scroll-indicator".to_owned(),
            navbar: ".navbar".to_owned(),
            section: "section[id]".to_owned(),
        }
    }
}

/// Scroll offsets and thresholds, in CSS pixels.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_offset: f64,
    pub section_lead: f64,
    pub indicator_hide_after: f64,
    pub navbar_solid_after: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: HEADER_OFFSET_PX,
            section_lead: SECTION_LEAD_PX,
            indicator_hide_after: INDICATOR_HIDE_AFTER_PX,
            navbar_solid_after: NAVBAR_SOLID_AFTER_PX,
        }
    }
}

/// Timer delays, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub typing_start_delay_ms: u32,
    pub typing_step_ms: u32,
    pub notification_slide_in_ms: u32,
    pub notification_slide_out_ms: u32,
    pub notification_lifetime_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_step_ms: TYPING_STEP_MS,
            notification_slide_in_ms: NOTIFICATION_SLIDE_IN_MS,
            notification_slide_out_ms: NOTIFICATION_SLIDE_OUT_MS,
            notification_lifetime_ms: NOTIFICATION_LIFETIME_MS,
        }
    }
}

/// Scroll-reveal styles and intersection options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub hidden_transform: String,
    pub shown_transform: String,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            hidden_transform: "translateY(30px)".to_owned(),
            shown_transform: "translateY(0)".to_owned(),
            transition: "opacity 0.6s ease, transform 0.6s ease".to_owned(),
        }
    }
}

/// Contact form field names and the in-flight button label.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub name_field: String,
    pub email_field: String,
    pub subject_field: String,
    pub message_field: String,
    pub pending_label: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            name_field: "name".to_owned(),
            email_field: "email".to_owned(),
            subject_field: "_subject".to_owned(),
            message_field: "message".to_owned(),
            pending_label: "Sending...".to_owned(),
        }
    }
}

/// A hover embellishment: inline transforms applied on pointer enter/leave.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HoverRule {
    pub selector: String,
    pub enter: String,
    pub leave: String,
}

impl HoverRule {
    fn new(selector: &str, enter: &str, leave: &str) -> Self {
        Self { selector: selector.to_owned(), enter: enter.to_owned(), leave: leave.to_owned() }
    }
}

fn default_hover_rules() -> Vec<HoverRule> {
    vec![
        HoverRule::new(".project-card", "translateY(-10px) scale(1.02)", "translateY(0) scale(1)"),
        HoverRule::new(".skill-item", "translateX(10px)", "translateX(0)"),
        HoverRule::new(".social-link", "translateY(-3px) scale(1.1)", "translateY(0) scale(1)"),
    ]
}
