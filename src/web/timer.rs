//! [`Scheduler`] backed by `gloo_timers` timeouts.
//!
//! Each live timer owns its [`Timeout`]; dropping it clears the browser
//! timer. A fired timeout only queues a [`Message::Timer`], and the entry
//! stays in `live` until the app calls [`Scheduler::complete`], so a cancel
//! that lands in between still wins.

use std::collections::HashMap;

use futures::channel::mpsc::UnboundedSender;
use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::app::Message;
use crate::timer::{Scheduler, TimerId, TimerTask};

pub struct BrowserScheduler {
    next_id: u64,
    live: HashMap<TimerId, Timeout>,
    tx: UnboundedSender<Message<Element>>,
}

impl BrowserScheduler {
    pub fn new(tx: UnboundedSender<Message<Element>>) -> Self {
        Self { next_id: 0, live: HashMap::new(), tx }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay_ms: u32, task: TimerTask) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let tx = self.tx.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if tx.unbounded_send(Message::Timer(id, task)).is_err() {
                log::debug!("app loop gone; dropping {task:?}");
            }
        });
        self.live.insert(id, timeout);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        // Dropping the handle clears the timeout if it has not fired yet.
        self.live.remove(&id);
    }

    fn complete(&mut self, id: TimerId) -> bool {
        self.live.remove(&id).is_some()
    }
}
