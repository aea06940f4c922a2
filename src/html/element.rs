use std::fmt::Debug;

use crate::node::{Event, Listener};

use super::{Attribute, Attributes, Content, VOID_ELEMENTS};

macro_rules! push_strs {
    ( $output:ident => $($vals:expr),* $(,)? ) => {
        $(
            $output.push_str($vals);
        )*
    };
}

/// An in-memory HTML element, owned by whoever created it.
#[derive(Clone)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Attributes,
    pub(crate) content: Content,
    pub(crate) listeners: Vec<(String, Listener)>,
}

impl Element {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: Attributes::default(),
            content: Content::Empty,
            listeners: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Value of the `class` attribute, if any class is set
    pub fn class_name(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        self.content.text(&mut output);
        output
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.content.children()
    }

    pub fn append_child(&mut self, child: impl Into<Content>) -> &mut Self {
        self.content.push(child.into());
        self
    }

    /// Searches this element and its descendants, depth first.
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }

        self.content.find_by_id(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }

        self.content.find_by_id_mut(id)
    }

    /// Detaches the first descendant with the given id and hands it back.
    pub fn remove_child_by_id(&mut self, id: &str) -> Option<Element> {
        self.content.remove_by_id(id)
    }

    /// Runs every listener registered for `kind`, in registration order.
    pub fn dispatch(&self, kind: &str) -> Event {
        let event = Event::new(kind);

        for (_, listener) in self.listeners.iter().filter(|(k, _)| k == kind) {
            listener(&event);
        }

        event
    }

    pub fn click(&self) -> Event {
        self.dispatch("click")
    }

    pub fn listener_count(&self, kind: &str) -> usize {
        self.listeners.iter().filter(|(k, _)| k == kind).count()
    }

    /// Returns how many listeners were removed.
    pub fn remove_event_listeners(&mut self, kind: &str) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|(k, _)| k != kind);
        before - self.listeners.len()
    }

    pub fn render(&self, output: &mut String) {
        output.push('<');
        output.push_str(&self.name);

        if let Some(id) = &self.id {
            let id = html_escape::encode_double_quoted_attribute(id);
            push_strs!(output => " id=\"", &id, "\"");
        }

        if let Some(class) = self.class_name() {
            let class = html_escape::encode_double_quoted_attribute(&class);
            push_strs!(output => " class=\"", &class, "\"");
        }

        if !self.attributes.is_empty() {
            output.push(' ');
            self.attributes.render(output);
        }

        // void elements cannot have a closing tag
        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            output.push_str(" />");
            return;
        }

        output.push('>');

        self.content.render(output);

        push_strs!(output => "</", &self.name, ">");
    }

    pub fn to_html(&self) -> String {
        let mut output = String::new();
        self.render(&mut output);
        output
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("attributes", &self.attributes)
            .field("content", &self.content)
            .field(
                "listeners",
                &self.listeners.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}
