//! Application object: owns the ports and the page state, wires the binding
//! table and dispatches every incoming message to a behavior.
//!
//! DESIGN
//! ======
//! `App` is the testable core, in the same spirit as a canvas engine core that
//! never touches the canvas element. It is generic over a [`Platform`] naming
//! the four ports. The browser runtime (`web`) instantiates it with live
//! implementations and feeds it [`Message`]s from a single local task; tests
//! instantiate it with the fake DOM and drive it directly.
//!
//! Behavior logic lives in `crate::behavior::*` as `impl<P: Platform> App<P>`
//! blocks, one module per behavior.

#[cfg(test)]
#[path = "app_test.rs"]
pub(crate) mod app_test;

use crate::bindings::{Binding, Event, EventKind, Handler, Target, bindings};
use crate::config::Config;
use crate::dom::Dom;
use crate::net::form::{FormTransport, SubmitOutcome};
use crate::state::AppState;
use crate::storage::PreferenceStore;
use crate::timer::{Scheduler, TimerId, TimerTask};

/// The set of port implementations an [`App`] runs on.
pub trait Platform {
    type Dom: Dom;
    type Timers: Scheduler;
    type Prefs: PreferenceStore;
    type Transport: FormTransport;
}

/// Element handle type of a platform's DOM.
pub type NodeOf<P> = <<P as Platform>::Dom as Dom>::Node;

/// Everything that can wake the app up.
#[derive(Debug)]
pub enum Message<N> {
    Event(Handler, Event<N>),
    Timer(TimerId, TimerTask),
    Submitted(SubmitOutcome),
}

/// The page application.
pub struct App<P: Platform> {
    pub(crate) config: Config,
    pub(crate) dom: P::Dom,
    pub(crate) timers: P::Timers,
    pub(crate) prefs: P::Prefs,
    pub(crate) transport: P::Transport,
    pub(crate) state: AppState<NodeOf<P>>,
}

impl<P: Platform> App<P> {
    pub fn new(config: Config, dom: P::Dom, timers: P::Timers, prefs: P::Prefs, transport: P::Transport) -> Self {
        Self { config, dom, timers, prefs, transport, state: AppState::default() }
    }

    /// Run every initializer and attach every listener. Call once, when the
    /// document is ready.
    pub fn init(&mut self) {
        self.inject_styles();
        self.init_theme();
        self.init_reveal();
        self.init_typing();

        let table = bindings(&self.config);
        let attached: usize = table.iter().map(|binding| self.wire(binding)).sum();
        log::info!("page behaviors initialized: {attached} listeners, theme {}", self.state.theme.as_str());
    }

    fn wire(&mut self, binding: &Binding) -> usize {
        match &binding.target {
            Target::Window => {
                self.dom.listen_window(binding.kind, binding.handler);
                1
            }
            Target::Document => {
                self.dom.listen_document(binding.kind, binding.handler);
                1
            }
            Target::Selector(selector) => {
                let nodes = self.dom.query_all(selector);
                if nodes.is_empty() {
                    log::debug!("no elements match {selector}; {:?} not bound", binding.handler);
                    return 0;
                }
                if binding.kind == EventKind::Intersect {
                    let reveal = &self.config.reveal;
                    self.dom.observe_intersections(&nodes, reveal.threshold, &reveal.root_margin, binding.handler);
                } else {
                    for node in &nodes {
                        self.dom.listen(node, binding.kind, binding.handler);
                    }
                }
                nodes.len()
            }
        }
    }

    /// Process one message.
    pub fn handle(&mut self, message: Message<NodeOf<P>>) {
        match message {
            Message::Event(handler, event) => self.on_event(handler, event),
            Message::Timer(id, task) => self.on_timer(id, task),
            Message::Submitted(outcome) => self.on_submitted(outcome),
        }
    }

    pub fn on_event(&mut self, handler: Handler, event: Event<NodeOf<P>>) {
        match handler {
            Handler::ThemeChanged => self.on_theme_changed(&event),
            Handler::HamburgerClicked => self.toggle_menu(),
            Handler::NavLinkClicked => self.close_menu(),
            Handler::DocumentClicked => self.on_document_click(&event),
            Handler::AnchorClicked => self.on_anchor_click(&event),
            Handler::Revealed => self.on_reveal(&event),
            Handler::ContactSubmitted => self.on_contact_submit(&event),
            Handler::WindowScrolled => self.on_scroll(),
            Handler::HoverEntered(rule) => self.on_hover(rule, &event, true),
            Handler::HoverLeft(rule) => self.on_hover(rule, &event, false),
            Handler::NotificationClosed(id) => self.begin_slide_out(id),
        }
    }

    pub fn on_timer(&mut self, id: TimerId, task: TimerTask) {
        if !self.timers.complete(id) {
            log::debug!("discarding stale timer {id:?} ({task:?})");
            return;
        }
        match task {
            TimerTask::TypeNext => self.type_next(),
            TimerTask::NotificationSlideIn(notification) => self.slide_in(notification),
            TimerTask::NotificationExpire(notification) => self.expire(notification),
            TimerTask::NotificationDetach(notification) => self.detach(notification),
        }
    }

    // --- Accessors ---

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dom(&self) -> &P::Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut P::Dom {
        &mut self.dom
    }

    pub fn timers(&self) -> &P::Timers {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut P::Timers {
        &mut self.timers
    }

    pub fn prefs(&self) -> &P::Prefs {
        &self.prefs
    }

    pub fn transport(&self) -> &P::Transport {
        &self.transport
    }

    pub fn state(&self) -> &AppState<NodeOf<P>> {
        &self.state
    }
}
