//! Transient notification banner.
//!
//! At most one banner exists. Showing a new one tears down the previous
//! banner immediately and cancels its timers, so nothing scheduled for an old
//! banner can touch the new one.
//!
//! Lifecycle of a banner:
//!
//! ```text
//! inserted (off-screen) --100ms--> slid in --5s or close click--> sliding out --300ms--> detached
//! ```

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::app::{App, NodeOf, Platform};
use crate::bindings::{EventKind, Handler};
use crate::dom::Dom;
use crate::timer::{Scheduler, TimerId, TimerTask};

const HIDDEN: &str = "translateX(100%)";
const SHOWN: &str = "translateX(0)";

/// Identity of one shown banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#4CAF50",
            Self::Error => "#f44336",
            Self::Info => "#2196F3",
        }
    }
}

/// Inline style of a freshly inserted banner.
pub fn banner_css(severity: Severity) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; padding: 1rem 1.5rem; \
         border-radius: 10px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); z-index: 10000; \
         transform: {HIDDEN}; transition: transform 0.3s ease; max-width: 300px;",
        severity.background()
    )
}

/// The banner currently in the document and its pending timers.
#[derive(Clone, Debug)]
pub struct ActiveNotification<N> {
    pub id: NotificationId,
    pub node: N,
    slide_in: Option<TimerId>,
    expire: Option<TimerId>,
    detach: Option<TimerId>,
}

impl<N> ActiveNotification<N> {
    pub fn is_leaving(&self) -> bool {
        self.detach.is_some()
    }

    fn timers(&self) -> impl Iterator<Item = TimerId> {
        [self.slide_in, self.expire, self.detach].into_iter().flatten()
    }
}

impl<P: Platform> App<P> {
    /// Replace whatever banner is showing with a new one.
    pub fn show_notification(&mut self, message: &str, severity: Severity) {
        self.discard_notification();

        let Some(body) = self.dom.body() else {
            return;
        };
        self.state.next_notification += 1;
        let id = NotificationId(self.state.next_notification);
        let Some(banner) = self.build_banner(id, message, severity) else {
            log::debug!("could not create notification element");
            return;
        };
        self.dom.append_child(&body, &banner);

        let timing = &self.config.timing;
        let slide_in = self.timers.schedule(timing.notification_slide_in_ms, TimerTask::NotificationSlideIn(id));
        let expire = self.timers.schedule(timing.notification_lifetime_ms, TimerTask::NotificationExpire(id));
        self.state.notification = Some(ActiveNotification {
            id,
            node: banner,
            slide_in: Some(slide_in),
            expire: Some(expire),
            detach: None,
        });
    }

    fn build_banner(&mut self, id: NotificationId, message: &str, severity: Severity) -> Option<NodeOf<P>> {
        let banner = self.dom.create_element("div")?;
        let content = self.dom.create_element("div")?;
        let text = self.dom.create_element("span")?;
        let close = self.dom.create_element("button")?;

        self.dom.set_attribute(&banner, "class", &format!("notification notification-{}", severity.as_str()));
        self.dom.set_attribute(&content, "class", "notification-content");
        self.dom.set_attribute(&text, "class", "notification-message");
        self.dom.set_text(&text, message);
        self.dom.set_attribute(&close, "class", "notification-close");
        self.dom.set_attribute(&close, "aria-label", "Close notification");
        self.dom.set_text(&close, "\u{00d7}");

        self.dom.append_child(&content, &text);
        self.dom.append_child(&content, &close);
        self.dom.append_child(&banner, &content);
        self.dom.set_css_text(&banner, &banner_css(severity));
        self.dom.listen(&close, EventKind::Click, Handler::NotificationClosed(id));
        Some(banner)
    }

    /// Remove the current banner (and any stray one) right away.
    fn discard_notification(&mut self) {
        if let Some(active) = self.state.notification.take() {
            for timer in active.timers() {
                self.timers.cancel(timer);
            }
            self.dom.remove(&active.node);
        }
        if let Some(stray) = self.dom.query(".notification") {
            self.dom.remove(&stray);
        }
    }

    pub(crate) fn slide_in(&mut self, id: NotificationId) {
        let Some(active) = self.state.notification.as_mut().filter(|n| n.id == id) else {
            return;
        };
        active.slide_in = None;
        if !active.is_leaving() {
            self.dom.set_style(&active.node, "transform", SHOWN);
        }
    }

    pub(crate) fn expire(&mut self, id: NotificationId) {
        let attached = self
            .state
            .notification
            .as_ref()
            .is_some_and(|n| n.id == id && self.dom.is_attached(&n.node));
        if let Some(active) = self.state.notification.as_mut() {
            active.expire = None;
        }
        if attached {
            self.begin_slide_out(id);
        }
    }

    /// Close click or expiry: slide the banner out and schedule its removal.
    pub(crate) fn begin_slide_out(&mut self, id: NotificationId) {
        let Some(active) = self.state.notification.as_mut().filter(|n| n.id == id) else {
            return;
        };
        if active.is_leaving() {
            return;
        }
        for timer in [active.slide_in.take(), active.expire.take()].into_iter().flatten() {
            self.timers.cancel(timer);
        }
        self.dom.set_style(&active.node, "transform", HIDDEN);
        let delay = self.config.timing.notification_slide_out_ms;
        active.detach = Some(self.timers.schedule(delay, TimerTask::NotificationDetach(id)));
    }

    pub(crate) fn detach(&mut self, id: NotificationId) {
        if self.state.notification.as_ref().is_some_and(|n| n.id == id) {
            if let Some(active) = self.state.notification.take() {
                self.dom.remove(&active.node);
            }
        }
    }
}
