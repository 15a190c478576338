//! # folio-script
//!
//! Client-side behavior for a static personal portfolio page: theme switching,
//! the mobile navigation menu, smooth in-page scrolling, scroll-triggered
//! reveals, the contact form, a typing effect on the hero title, scroll
//! effects and hover embellishments.
//!
//! Behaviors run inside [`app::App`], which talks to the page only through
//! four ports ([`dom::Dom`], [`timer::Scheduler`], [`storage::PreferenceStore`],
//! [`net::form::FormTransport`]). The `hydrate` feature adds the browser
//! implementations and the wasm entry point in `web`.

pub mod app;
pub mod behavior;
pub mod bindings;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod net;
pub mod state;
pub mod storage;
pub mod timer;
#[cfg(feature = "hydrate")]
pub mod web;

pub use error::{Error, Result};
