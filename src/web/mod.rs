//! Browser runtime: live port implementations and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listeners, timers and the form transport all feed one unbounded channel.
//! A single local task drains it into [`App::handle`], so the app is only
//! ever touched from that task and needs no `Rc<RefCell<..>>` sharing.

mod dom;
mod http;
mod storage;
mod timer;

use futures::StreamExt;
use futures::channel::mpsc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Element};

pub use self::dom::BrowserDom;
pub use self::http::FetchTransport;
pub use self::storage::LocalStore;
pub use self::timer::BrowserScheduler;
use crate::app::{App, Message, Platform};
use crate::config::Config;
use crate::error::{Error, Result};

/// Id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// The live browser ports.
pub struct Browser;

impl Platform for Browser {
    type Dom = BrowserDom;
    type Timers = BrowserScheduler;
    type Prefs = LocalStore;
    type Transport = FetchTransport;
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = web_sys::window().and_then(|w| w.document());
    let parsed = match &document {
        Some(document) => read_config(document),
        None => Ok(None),
    };
    let config = match &parsed {
        Ok(Some(config)) => config.clone(),
        _ => Config::default(),
    };
    // Fails only if a logger is already installed.
    console_log::init_with_level(config.level()).ok();
    if let Err(e) = &parsed {
        log::warn!("ignoring inline configuration: {e}");
    }

    let Some(document) = document else {
        log::error!("{}", Error::Environment("no document"));
        return;
    };
    if document.ready_state() == DocumentReadyState::Loading {
        let boot = Closure::once_into_js(move || launch(config));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", boot.unchecked_ref()) {
            log::error!("could not wait for DOMContentLoaded: {e:?}");
        }
    } else {
        launch(config);
    }
}

/// Parse the inline configuration block, if the page has one.
fn read_config(document: &Document) -> Result<Option<Config>> {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Ok(None);
    };
    Config::from_json(&raw).map(Some)
}

fn launch(config: Config) {
    if let Err(e) = run(config) {
        log::error!("page behaviors not started: {e}");
    }
}

fn run(config: Config) -> Result<()> {
    let window = web_sys::window().ok_or(Error::Environment("no window"))?;
    let document = window.document().ok_or(Error::Environment("no document"))?;

    let (tx, mut rx) = mpsc::unbounded::<Message<Element>>();
    let dom = BrowserDom::new(window.clone(), document, tx.clone());
    let timers = BrowserScheduler::new(tx.clone());
    let prefs = LocalStore::new(&window);
    let transport = FetchTransport::new(tx);

    let mut app: App<Browser> = App::new(config, dom, timers, prefs, transport);
    app.init();

    wasm_bindgen_futures::spawn_local(async move {
        while let Some(message) = rx.next().await {
            app.handle(message);
        }
    });
    Ok(())
}
