//! The host document the builder creates nodes in.
//!
//! The builder only ever talks to the host through [`NodeFactory`] and [`Node`],
//! so it can create elements for any tree that implements them. [`Document`]
//! is the default host, it creates in-memory [`Element`]s.

use std::{cell::Cell, sync::Arc};

use crate::html::Element;

/// A callback run with the event that triggered it.
pub type Listener = Arc<dyn Fn(&Event) + Send + Sync + 'static>;

#[derive(Debug)]
pub struct Event {
    kind: String,
    default_prevented: Cell<bool>,
}

impl Event {
    pub fn new(kind: impl ToString) -> Self {
        Self {
            kind: kind.to_string(),
            default_prevented: Cell::new(false),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Mutations the builder performs on a freshly created node.
pub trait Node {
    fn set_id(&mut self, id: &str);
    fn add_class(&mut self, class: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Adds a boolean attribute when `on` is true, removes it otherwise
    fn toggle_attribute(&mut self, name: &str, on: bool);
    /// Replaces all children with a single text node
    fn set_text(&mut self, text: &str);
    /// Replaces all children with the given markup
    fn set_inner_html(&mut self, html: &str);
    fn add_event_listener(&mut self, kind: &str, listener: Listener);
}

pub trait NodeFactory {
    type Node: Node;

    fn create_element(&self, tag: &str) -> Self::Node;
}

/// Creates detached, in-memory [`Element`]s.
#[derive(Default, Debug, Clone, Copy)]
pub struct Document;

impl NodeFactory for Document {
    type Node = Element;

    fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }
}

impl Node for Element {
    fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name, value);
    }

    fn toggle_attribute(&mut self, name: &str, on: bool) {
        if on {
            self.attributes.insert(name, ());
        } else {
            self.attributes.remove(name);
        }
    }

    fn set_text(&mut self, text: &str) {
        self.content = text.into();
    }

    fn set_inner_html(&mut self, html: &str) {
        self.content = crate::html::Content::Raw(html.to_string());
    }

    fn add_event_listener(&mut self, kind: &str, listener: Listener) {
        self.listeners.push((kind.to_string(), listener));
    }
}
