//! Declarative event binding table.
//!
//! DESIGN
//! ======
//! Every listener the page needs is described once as a [`Binding`]: which
//! nodes to attach to, which DOM event to listen for, and which [`Handler`]
//! the app dispatches when it fires. The table is plain data so it can be
//! inspected in tests and replayed against the fake DOM, while the browser
//! runtime turns each row into a real listener.
//!
//! Row order is registration order. When two rows match the same node (a
//! `.nav-link` is also an in-page anchor) their handlers run in table order.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use crate::behavior::notify::NotificationId;
use crate::config::Config;

/// DOM events the page listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Click,
    Submit,
    Scroll,
    PointerEnter,
    PointerLeave,
    /// Synthetic: delivered by an intersection observer instead of a listener.
    Intersect,
}

impl EventKind {
    /// The DOM event type string for `addEventListener`.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Click => "click",
            Self::Submit => "submit",
            Self::Scroll => "scroll",
            Self::PointerEnter => "mouseenter",
            Self::PointerLeave => "mouseleave",
            Self::Intersect => "intersect",
        }
    }
}

/// What the app does when a bound event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    ThemeChanged,
    HamburgerClicked,
    NavLinkClicked,
    DocumentClicked,
    AnchorClicked,
    Revealed,
    ContactSubmitted,
    WindowScrolled,
    /// Index into [`Config::hover`].
    HoverEntered(usize),
    HoverLeft(usize),
    NotificationClosed(NotificationId),
}

impl Handler {
    /// Whether the listener must cancel the browser's default action.
    ///
    /// Checked synchronously by the browser runtime, before the handler is
    /// queued, since `preventDefault` is meaningless once the event returns.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::AnchorClicked | Self::ContactSubmitted)
    }
}

/// Where a binding attaches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Every element matching the selector at startup.
    Selector(String),
    Window,
    Document,
}

/// One row of the binding table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub target: Target,
    pub kind: EventKind,
    pub handler: Handler,
}

impl Binding {
    fn on(selector: &str, kind: EventKind, handler: Handler) -> Self {
        Self { target: Target::Selector(selector.to_owned()), kind, handler }
    }
}

/// A delivered event.
///
/// `current` is the node the listener was attached to (absent for window and
/// document listeners); `target` is the node the event originated on.
#[derive(Clone, Debug, PartialEq)]
pub struct Event<N> {
    pub current: Option<N>,
    pub target: Option<N>,
    pub intersecting: bool,
}

impl<N: Clone> Event<N> {
    /// An event whose listener node is also its origin.
    pub fn on(node: N) -> Self {
        Self { current: Some(node.clone()), target: Some(node), intersecting: false }
    }

    /// An event from a window or document listener.
    pub fn global(target: Option<N>) -> Self {
        Self { current: None, target, intersecting: false }
    }

    /// An intersection observer entry for `node`.
    pub fn intersection(node: N, intersecting: bool) -> Self {
        Self { current: Some(node.clone()), target: Some(node), intersecting }
    }
}

/// Build the page's binding table from configuration.
pub fn bindings(config: &Config) -> Vec<Binding> {
    let s = &config.selectors;
    let mut table = vec![
        Binding::on(&s.theme_toggle, EventKind::Change, Handler::ThemeChanged),
        Binding::on(&s.hamburger, EventKind::Click, Handler::HamburgerClicked),
        Binding::on(&s.nav_link, EventKind::Click, Handler::NavLinkClicked),
        Binding { target: Target::Document, kind: EventKind::Click, handler: Handler::DocumentClicked },
        Binding::on(&s.anchor_link, EventKind::Click, Handler::AnchorClicked),
        Binding::on(&s.reveal, EventKind::Intersect, Handler::Revealed),
        Binding::on(&s.contact_form, EventKind::Submit, Handler::ContactSubmitted),
        Binding { target: Target::Window, kind: EventKind::Scroll, handler: Handler::WindowScrolled },
    ];
    for (index, rule) in config.hover.iter().enumerate() {
        table.push(Binding::on(&rule.selector, EventKind::PointerEnter, Handler::HoverEntered(index)));
        table.push(Binding::on(&rule.selector, EventKind::PointerLeave, Handler::HoverLeft(index)));
    }
    table
}
