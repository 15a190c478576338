//! [`Dom`] over the live document via `web_sys`.
//!
//! Listeners are `Closure`s leaked with `forget`: they live as long as the
//! page, exactly like listeners added from a plain script. Each one does the
//! minimum synchronously (cancel the default action when the handler asks
//! for it) and queues a [`Message::Event`] for the app loop.

use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::app::Message;
use crate::bindings::{Event, EventKind, Handler};
use crate::dom::Dom;

pub struct BrowserDom {
    window: Window,
    document: Document,
    tx: UnboundedSender<Message<Element>>,
}

impl BrowserDom {
    pub fn new(window: Window, document: Document, tx: UnboundedSender<Message<Element>>) -> Self {
        Self { window, document, tx }
    }

    /// Attach `handler` for `kind` on `target`. `current` is what the app sees
    /// as the listener's node.
    fn add_listener(&self, target: &web_sys::EventTarget, current: Option<Element>, kind: EventKind, handler: Handler) {
        let tx = self.tx.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if handler.prevents_default() {
                event.prevent_default();
            }
            let origin = event.target().and_then(|t| t.dyn_into::<Element>().ok());
            let message = Message::Event(handler, Event { current: current.clone(), target: origin, intersecting: false });
            if tx.unbounded_send(message).is_err() {
                log::debug!("app loop gone; dropping {handler:?}");
            }
        });
        if let Err(e) = target.add_event_listener_with_callback(kind.dom_name(), callback.as_ref().unchecked_ref()) {
            log::warn!("addEventListener({}) failed: {e:?}", kind.dom_name());
            return;
        }
        callback.forget();
    }
}

fn html(node: &Element) -> Option<&HtmlElement> {
    node.dyn_ref::<HtmlElement>()
}

impl Dom for BrowserDom {
    type Node = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn head(&self) -> Option<Element> {
        self.document.head().map(Into::into)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::warn!("invalid selector {selector}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_in(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.parent_node().is_some()
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        if let Err(e) = parent.append_child(child) {
            log::warn!("appendChild failed: {e:?}");
        }
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            log::debug!("classList.add({class}) failed: {e:?}");
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            log::debug!("classList.remove({class}) failed: {e:?}");
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(e) = node.set_attribute(name, value) {
            log::debug!("setAttribute({name}) failed: {e:?}");
        }
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        html(node)?.style().get_property_value(property).ok().filter(|v| !v.is_empty())
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        let Some(el) = html(node) else {
            return;
        };
        if let Err(e) = el.style().set_property(property, value) {
            log::debug!("style.{property} rejected: {e:?}");
        }
    }

    fn set_css_text(&mut self, node: &Element, css: &str) {
        if let Some(el) = html(node) {
            el.style().set_css_text(css);
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn is_checked(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlInputElement>().is_some_and(HtmlInputElement::checked)
    }

    fn set_checked(&mut self, node: &Element, checked: bool) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn is_disabled(&self, node: &Element) -> bool {
        match node.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => node.has_attribute("disabled"),
        }
    }

    fn set_disabled(&mut self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            self.set_attribute(node, "disabled", "");
        } else if let Err(e) = node.remove_attribute("disabled") {
            log::debug!("removeAttribute(disabled) failed: {e:?}");
        }
    }

    fn form_entries(&self, form: &Element) -> Vec<(String, String)> {
        let Some(form) = form.dyn_ref::<HtmlFormElement>() else {
            return Vec::new();
        };
        let Ok(data) = FormData::new_with_form(form) else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                // File inputs yield blobs; only string entries are sent.
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn form_action(&self, form: &Element) -> String {
        form.dyn_ref::<HtmlFormElement>().map(HtmlFormElement::action).unwrap_or_default()
    }

    fn reset_form(&mut self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        html(node).map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn client_height(&self, node: &Element) -> f64 {
        f64::from(node.client_height())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn listen(&mut self, node: &Element, kind: EventKind, handler: Handler) {
        self.add_listener(node.as_ref(), Some(node.clone()), kind, handler);
    }

    fn listen_window(&mut self, kind: EventKind, handler: Handler) {
        let window = self.window.clone();
        self.add_listener(window.as_ref(), None, kind, handler);
    }

    fn listen_document(&mut self, kind: EventKind, handler: Handler) {
        let document = self.document.clone();
        self.add_listener(document.as_ref(), None, kind, handler);
    }

    fn observe_intersections(&mut self, nodes: &[Element], threshold: f64, root_margin: &str, handler: Handler) {
        let tx = self.tx.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let event = Event::intersection(entry.target(), entry.is_intersecting());
                    if tx.unbounded_send(Message::Event(handler, event)).is_err() {
                        log::debug!("app loop gone; dropping intersection entry");
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        options.set_root_margin(root_margin);
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {e:?}");
                return;
            }
        };
        for node in nodes {
            observer.observe(node);
        }
        callback.forget();
    }
}
