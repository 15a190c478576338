//! Page behaviors, one module each.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module adds an `impl<P: Platform> App<P>` block with its initializer
//! and event handlers, plus the pure helpers those handlers are built from.
//! Behaviors do not call each other, except that a theme change recomputes
//! the navbar background and the contact form reports through `notify`.

pub mod contact;
pub mod hover;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod smooth_scroll;
pub mod style;
pub mod theme;
pub mod typing;
