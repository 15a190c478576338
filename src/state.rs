//! Mutable page state owned by the app.
//!
//! DESIGN
//! ======
//! Each field belongs to exactly one behavior. Nothing else is kept between
//! events: class lists, styles and form values stay in the DOM.

use crate::behavior::contact::PendingSubmission;
use crate::behavior::notify::ActiveNotification;
use crate::behavior::theme::Theme;
use crate::behavior::typing::Typing;

#[derive(Clone, Debug)]
pub struct AppState<N> {
    pub theme: Theme,
    pub typing: Option<Typing<N>>,
    pub notification: Option<ActiveNotification<N>>,
    pub next_notification: u64,
    pub submission: Option<PendingSubmission<N>>,
}

impl<N> Default for AppState<N> {
    fn default() -> Self {
        Self { theme: Theme::Dark, typing: None, notification: None, next_notification: 0, submission: None }
    }
}
