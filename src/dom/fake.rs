//! In-memory DOM used by the behavior tests.
//!
//! Supports the selector subset the page uses: comma lists of compounds built
//! from a tag, `#id`, `.class` and `[attr]` / `[attr="v"]` / `[attr^="v"]`.
//! Click, change and submit events bubble to ancestors and then to document
//! listeners; pointer enter/leave do not bubble.

use std::collections::BTreeMap;

use crate::bindings::{Event, EventKind, Handler};
use crate::dom::Dom;

/// Arena index of a fake element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);
const HEAD: NodeId = NodeId(1);
const BODY: NodeId = NodeId(2);

#[derive(Clone, Debug, Default)]
struct FakeNode {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    value: String,
    default_value: String,
    checked: bool,
    disabled: bool,
    offset_top: f64,
    client_height: f64,
}

#[derive(Clone, Debug)]
enum Scope {
    Node(NodeId),
    Window,
    Document,
}

#[derive(Clone, Debug)]
struct Listener {
    scope: Scope,
    kind: EventKind,
    handler: Handler,
}

/// Intersection observer registration captured by the fake.
#[derive(Clone, Debug, PartialEq)]
pub struct Observer {
    pub nodes: Vec<NodeId>,
    pub threshold: f64,
    pub root_margin: String,
    pub handler: Handler,
}

/// The fake document: `<html>` with a `<head>` and a `<body>`.
#[derive(Clone, Debug)]
pub struct FakeDom {
    nodes: Vec<FakeNode>,
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    scroll_y: f64,
    scroll_requests: Vec<f64>,
    base_url: String,
}

impl Default for FakeDom {
    fn default() -> Self {
        let mut dom = Self {
            nodes: vec![FakeNode { tag: "html".to_owned(), ..FakeNode::default() }],
            listeners: Vec::new(),
            observers: Vec::new(),
            scroll_y: 0.0,
            scroll_requests: Vec::new(),
            base_url: "https://portfolio.test/".to_owned(),
        };
        dom.element(ROOT, "head", &[]);
        dom.element(ROOT, "body", &[]);
        dom
    }
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_id(&self) -> NodeId {
        BODY
    }

    pub fn head_id(&self) -> NodeId {
        HEAD
    }

    /// Append a new element under `parent`. `class` is split on whitespace.
    pub fn element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = FakeNode { tag: tag.to_ascii_lowercase(), parent: Some(parent), ..FakeNode::default() };
        for (name, value) in attrs {
            match *name {
                "class" => node.classes = value.split_whitespace().map(ToOwned::to_owned).collect(),
                "value" => {
                    node.value = (*value).to_owned();
                    node.default_value = (*value).to_owned();
                }
                _ => {
                    node.attributes.insert((*name).to_owned(), (*value).to_owned());
                }
            }
        }
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append an element carrying text content.
    pub fn text_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)], text: &str) -> NodeId {
        let id = self.element(parent, tag, attrs);
        self.nodes[id.0].text = text.to_owned();
        id
    }

    pub fn set_layout(&mut self, node: NodeId, offset_top: f64, client_height: f64) {
        let n = &mut self.nodes[node.0];
        n.offset_top = offset_top;
        n.client_height = client_height;
    }

    /// Type into a form control, as a user would.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.nodes[node.0].value = value.to_owned();
    }

    pub fn value(&self, node: NodeId) -> &str {
        &self.nodes[node.0].value
    }

    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    pub fn observers(&self) -> &[Observer] {
        &self.observers
    }

    /// Number of listeners attached to `node` for `kind`.
    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.listeners
            .iter()
            .filter(|l| matches!(l.scope, Scope::Node(n) if n == node) && l.kind == kind)
            .count()
    }

    /// Fire `kind` at `node`, returning the handler invocations in delivery order.
    pub fn dispatch(&self, node: NodeId, kind: EventKind) -> Vec<(Handler, Event<NodeId>)> {
        let mut path = vec![node];
        if bubbles(kind) {
            let mut cursor = self.nodes[node.0].parent;
            while let Some(parent) = cursor {
                path.push(parent);
                cursor = self.nodes[parent.0].parent;
            }
        }

        let mut out = Vec::new();
        for current in path {
            for listener in &self.listeners {
                if listener.kind == kind && matches!(listener.scope, Scope::Node(n) if n == current) {
                    let event = Event { current: Some(current), target: Some(node), intersecting: false };
                    out.push((listener.handler, event));
                }
            }
        }
        if bubbles(kind) && self.is_attached(&node) {
            for listener in &self.listeners {
                if listener.kind == kind && matches!(listener.scope, Scope::Document) {
                    out.push((listener.handler, Event::global(Some(node))));
                }
            }
        }
        out
    }

    /// Fire `kind` at the window.
    pub fn dispatch_window(&self, kind: EventKind) -> Vec<(Handler, Event<NodeId>)> {
        self.listeners
            .iter()
            .filter(|l| l.kind == kind && matches!(l.scope, Scope::Window))
            .map(|l| (l.handler, Event::global(None)))
            .collect()
    }

    /// Deliver an intersection entry for `node` to every observer watching it.
    pub fn intersect(&self, node: NodeId, intersecting: bool) -> Vec<(Handler, Event<NodeId>)> {
        self.observers
            .iter()
            .filter(|o| o.nodes.contains(&node))
            .map(|o| (o.handler, Event::intersection(node, intersecting)))
            .collect()
    }

    fn descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[root.0].children {
            out.push(child);
            self.descendants(child, out);
        }
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        selector.split(',').any(|part| {
            let compound = Compound::parse(part);
            compound.matches(&self.nodes[node.0])
        })
    }

    fn find_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let mut all = Vec::new();
        self.descendants(root, &mut all);
        all.into_iter().filter(|&n| self.matches(n, selector)).collect()
    }
}

fn bubbles(kind: EventKind) -> bool {
    matches!(kind, EventKind::Click | EventKind::Change | EventKind::Submit)
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

#[derive(Debug)]
enum AttrTest {
    Exists(String),
    Equals(String, String),
    Prefix(String, String),
}

fn is_boundary(ch: char) -> bool {
    ch == '.' || ch == '#' || ch == '['
}

impl Compound {
    fn parse(src: &str) -> Self {
        let mut compound = Self::default();
        let mut rest = src.trim();

        let tag_end = rest.find(is_boundary).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(first) = rest.chars().next() {
            match first {
                '.' | '#' => {
                    let body = &rest[1..];
                    let end = body.find(is_boundary).unwrap_or(body.len());
                    let name = body[..end].to_owned();
                    if first == '.' {
                        compound.classes.push(name);
                    } else {
                        compound.id = Some(name);
                    }
                    rest = &body[end..];
                }
                '[' => {
                    let end = rest.find(']').unwrap_or(rest.len());
                    compound.attrs.push(AttrTest::parse(&rest[1..end]));
                    rest = rest.get(end + 1..).unwrap_or("");
                }
                _ => break,
            }
        }
        compound
    }

    fn matches(&self, node: &FakeNode) -> bool {
        if self.tag.as_ref().is_some_and(|t| *t != node.tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if node.attributes.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|test| match test {
            AttrTest::Exists(name) => attribute_of(node, name).is_some(),
            AttrTest::Equals(name, value) => attribute_of(node, name).as_deref() == Some(value.as_str()),
            AttrTest::Prefix(name, value) => attribute_of(node, name).is_some_and(|v| v.starts_with(value.as_str())),
        })
    }
}

impl AttrTest {
    fn parse(inner: &str) -> Self {
        let unquote = |v: &str| v.trim().trim_matches('"').trim_matches('\'').to_owned();
        if let Some((name, value)) = inner.split_once("^=") {
            Self::Prefix(name.trim().to_owned(), unquote(value))
        } else if let Some((name, value)) = inner.split_once('=') {
            Self::Equals(name.trim().to_owned(), unquote(value))
        } else {
            Self::Exists(inner.trim().to_owned())
        }
    }
}

fn attribute_of(node: &FakeNode, name: &str) -> Option<String> {
    if name == "class" {
        if node.classes.is_empty() {
            return None;
        }
        return Some(node.classes.join(" "));
    }
    node.attributes.get(name).cloned()
}

fn is_form_control(tag: &str) -> bool {
    matches!(tag, "input" | "textarea" | "select")
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn head(&self) -> Option<NodeId> {
        Some(HEAD)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.find_all(ROOT, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.find_all(ROOT, selector)
    }

    fn query_in(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        self.find_all(*root, selector).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut all = Vec::new();
        self.descendants(ROOT, &mut all);
        all.into_iter().find(|n| self.nodes[n.0].attributes.get("id").is_some_and(|v| v == id))
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = self.nodes[current.0].parent;
        }
        false
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        self.contains(&ROOT, node)
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(FakeNode { tag: tag.to_ascii_lowercase(), ..FakeNode::default() });
        Some(id)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.remove(child);
        self.nodes[child.0].parent = Some(*parent);
        self.nodes[parent.0].children.push(*child);
    }

    fn remove(&mut self, node: &NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| c != node);
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        attribute_of(&self.nodes[node.0], name)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if name == "class" {
            self.nodes[node.0].classes = value.split_whitespace().map(ToOwned::to_owned).collect();
        } else {
            self.nodes[node.0].attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.nodes[node.0].style.get(property).cloned()
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.nodes[node.0].style.insert(property.to_owned(), value.to_owned());
    }

    fn set_css_text(&mut self, node: &NodeId, css: &str) {
        let style = &mut self.nodes[node.0].style;
        style.clear();
        for declaration in css.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                style.insert(property.trim().to_owned(), value.trim().to_owned());
            }
        }
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = self.nodes[node.0].text.clone();
        for child in &self.nodes[node.0].children {
            out.push_str(&self.text(child));
        }
        out
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        self.nodes[node.0].text = text.to_owned();
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self.nodes[node.0].checked
    }

    fn set_checked(&mut self, node: &NodeId, checked: bool) {
        self.nodes[node.0].checked = checked;
    }

    fn is_disabled(&self, node: &NodeId) -> bool {
        self.nodes[node.0].disabled
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) {
        self.nodes[node.0].disabled = disabled;
    }

    fn form_entries(&self, form: &NodeId) -> Vec<(String, String)> {
        let mut all = Vec::new();
        self.descendants(*form, &mut all);
        all.into_iter()
            .filter(|n| is_form_control(&self.nodes[n.0].tag))
            .filter_map(|n| {
                let node = &self.nodes[n.0];
                let name = node.attributes.get("name")?;
                Some((name.clone(), node.value.clone()))
            })
            .collect()
    }

    fn form_action(&self, form: &NodeId) -> String {
        match self.nodes[form.0].attributes.get("action") {
            Some(action) if action.starts_with("http") => action.clone(),
            Some(action) => format!("{}{}", self.base_url, action.trim_start_matches('/')),
            None => self.base_url.clone(),
        }
    }

    fn reset_form(&mut self, form: &NodeId) {
        let mut all = Vec::new();
        self.descendants(*form, &mut all);
        for n in all {
            let node = &mut self.nodes[n.0];
            if is_form_control(&node.tag) {
                node.value = node.default_value.clone();
            }
        }
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].offset_top
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].client_height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
    }

    fn listen(&mut self, node: &NodeId, kind: EventKind, handler: Handler) {
        self.listeners.push(Listener { scope: Scope::Node(*node), kind, handler });
    }

    fn listen_window(&mut self, kind: EventKind, handler: Handler) {
        self.listeners.push(Listener { scope: Scope::Window, kind, handler });
    }

    fn listen_document(&mut self, kind: EventKind, handler: Handler) {
        self.listeners.push(Listener { scope: Scope::Document, kind, handler });
    }

    fn observe_intersections(&mut self, nodes: &[NodeId], threshold: f64, root_margin: &str, handler: Handler) {
        self.observers.push(Observer {
            nodes: nodes.to_vec(),
            threshold,
            root_margin: root_margin.to_owned(),
            handler,
        });
    }
}
