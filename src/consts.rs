//! Shared numeric and style constants for the page behaviors.

// ── Scroll geometry ─────────────────────────────────────────────

/// Height of the fixed header, subtracted from smooth-scroll targets.
pub const HEADER_OFFSET_PX: f64 = 70.0;

/// Lead-in before a section counts as current for nav highlighting.
pub const SECTION_LEAD_PX: f64 = 100.0;

/// Scroll depth past which the scroll cue fades out.
pub const INDICATOR_HIDE_AFTER_PX: f64 = 100.0;

/// Scroll depth past which the navbar switches to its denser background.
pub const NAVBAR_SOLID_AFTER_PX: f64 = 50.0;

// ── Timing ──────────────────────────────────────────────────────

/// Delay before the first typed character appears.
pub const TYPING_START_DELAY_MS: u32 = 500;

/// Interval between typed characters.
pub const TYPING_STEP_MS: u32 = 100;

/// Delay between inserting a notification and sliding it in.
pub const NOTIFICATION_SLIDE_IN_MS: u32 = 100;

/// Slide-out duration; the banner is detached once it elapses.
pub const NOTIFICATION_SLIDE_OUT_MS: u32 = 300;

/// Lifetime of a notification that is never closed by hand.
pub const NOTIFICATION_LIFETIME_MS: u32 = 5000;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin shrinking the viewport bottom for reveal detection.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Navbar shades ───────────────────────────────────────────────

pub const NAVBAR_LIGHT_SOLID: &str = "rgba(255, 255, 255, 0.98)";
pub const NAVBAR_LIGHT_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const NAVBAR_DARK_SOLID: &str = "rgba(10, 10, 10, 0.98)";
pub const NAVBAR_DARK_TOP: &str = "rgba(10, 10, 10, 0.95)";
