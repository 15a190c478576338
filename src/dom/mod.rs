//! The DOM port.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors never touch `web_sys` directly. They talk to a [`Dom`], which the
//! browser runtime implements over the live document (`web::dom`) and tests
//! implement with the in-memory [`fake::FakeDom`]. The surface is exactly what
//! the page behaviors need and nothing more.
//!
//! Mutators take `&mut self` even though the browser calls are `&self`, so the
//! fake can stay a plain owned struct.

#[cfg(test)]
pub mod fake;

use crate::bindings::{EventKind, Handler};

/// Access to the page document, its window and its listeners.
pub trait Dom {
    /// Handle to an element. Cheap to clone.
    type Node: Clone + PartialEq + std::fmt::Debug;

    // --- Lookup ---

    fn body(&self) -> Option<Self::Node>;
    fn head(&self) -> Option<Self::Node>;
    /// First element in document order matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;
    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// First descendant of `root` matching `selector`.
    fn query_in(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;
    /// Whether `node` still has a parent.
    fn is_attached(&self, node: &Self::Node) -> bool;

    // --- Tree mutation ---

    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Detach `node` from its parent. No-op when already detached.
    fn remove(&mut self, node: &Self::Node);

    // --- Classes, attributes, styles, text ---

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Flip `class` on `node`, returning whether it is now present.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    /// Replace the whole inline style declaration.
    fn set_css_text(&mut self, node: &Self::Node, css: &str);
    /// The node's `textContent`.
    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&mut self, node: &Self::Node, text: &str);

    // --- Form controls ---

    fn is_checked(&self, node: &Self::Node) -> bool;
    fn set_checked(&mut self, node: &Self::Node, checked: bool);
    fn is_disabled(&self, node: &Self::Node) -> bool;
    fn set_disabled(&mut self, node: &Self::Node, disabled: bool);
    /// Named string entries the form would submit, in control order.
    fn form_entries(&self, form: &Self::Node) -> Vec<(String, String)>;
    /// The resolved submission URL of the form.
    fn form_action(&self, form: &Self::Node) -> String;
    fn reset_form(&mut self, form: &Self::Node);

    // --- Layout and scrolling ---

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn client_height(&self, node: &Self::Node) -> f64;
    fn scroll_y(&self) -> f64;
    /// Animated scroll of the window to `top`.
    fn smooth_scroll_to(&mut self, top: f64);

    // --- Event sources ---

    fn listen(&mut self, node: &Self::Node, kind: EventKind, handler: Handler);
    fn listen_window(&mut self, kind: EventKind, handler: Handler);
    fn listen_document(&mut self, kind: EventKind, handler: Handler);
    /// Watch `nodes` with one intersection observer delivering `handler`.
    fn observe_intersections(&mut self, nodes: &[Self::Node], threshold: f64, root_margin: &str, handler: Handler);
}
