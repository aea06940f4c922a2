use super::element::Element;

#[derive(Default, Debug, Clone)]
pub enum Content {
    #[default]
    Empty,
    /// Markup that is rendered as is
    Raw(String),
    /// Text that gets escaped when rendered
    Text(String),
    Element(Box<Element>),
    List(Vec<Content>),
}

impl Content {
    /// Appends to the end of this content, turning it into a list if needed.
    pub(crate) fn push(&mut self, content: Content) {
        match self {
            Content::Empty => *self = content,
            Content::List(list) => list.push(content),
            _ => {
                let current = std::mem::take(self);
                *self = Content::List(vec![current, content]);
            }
        }
    }

    pub(crate) fn text(&self, output: &mut String) {
        match self {
            Content::Empty => {}
            Content::Raw(raw) => output.push_str(raw),
            Content::Text(text) => output.push_str(text),
            Content::Element(element) => element.content.text(output),
            Content::List(list) => {
                for content in list {
                    content.text(output);
                }
            }
        }
    }

    pub(crate) fn children(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        match self {
            Content::Element(element) => Box::new(std::iter::once(element.as_ref())),
            Content::List(list) => Box::new(list.iter().flat_map(Content::children)),
            _ => Box::new(std::iter::empty()),
        }
    }

    pub(crate) fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.children().find_map(|child| child.get_element_by_id(id))
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        match self {
            Content::Element(element) => element.get_element_by_id_mut(id),
            Content::List(list) => list.iter_mut().find_map(|c| c.find_by_id_mut(id)),
            _ => None,
        }
    }

    /// Removes the first descendant element with the given id.
    ///
    /// If this content is itself the matching element, it's left `Empty`.
    pub(crate) fn remove_by_id(&mut self, id: &str) -> Option<Element> {
        match std::mem::take(self) {
            Content::Element(element) if element.id() == Some(id) => Some(*element),
            mut content => {
                let removed = content.remove_nested_by_id(id);
                *self = content;
                removed
            }
        }
    }

    fn remove_nested_by_id(&mut self, id: &str) -> Option<Element> {
        match self {
            Content::Element(element) => element.remove_child_by_id(id),
            Content::List(list) => {
                for i in 0..list.len() {
                    if let Some(removed) = list[i].remove_by_id(id) {
                        // don't leave holes behind
                        list.retain(|c| !matches!(c, Content::Empty));
                        return Some(removed);
                    }
                }
                None
            }
            _ => None,
        }
    }

    pub(crate) fn render(&self, output: &mut String) {
        match self {
            Content::Empty => {}
            Content::Raw(raw) => output.push_str(raw),
            Content::Text(escaped) => output.push_str(&html_escape::encode_text(escaped)),
            Content::Element(child) => child.render(output),
            Content::List(list) => {
                for content in list {
                    content.render(output);
                }
            }
        }
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}
impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl<'a> From<&'a str> for Content {
    fn from(value: &'a str) -> Self {
        Self::Text(value.to_string())
    }
}
impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Self::Element(Box::new(element))
    }
}
impl From<Vec<Content>> for Content {
    fn from(value: Vec<Content>) -> Self {
        Self::List(value)
    }
}
