use std::sync::Arc;

use crate::html::{self, Element, DOCTYPE_HTML};

/// Configuration for rendering full pages.
///
/// Cheap to clone, so it can be shared between request handlers.
#[derive(Clone)]
pub struct Config {
    pub(crate) layout: Arc<dyn Layout + Send + Sync + 'static>,
}

impl Config {
    /// Uses `layout` to wrap page content into an `<html>` element
    pub fn with_layout<F>(layout: F) -> Self
    where
        F: Fn(Element) -> Element + Send + Sync + 'static,
    {
        Config {
            layout: Arc::new(layout),
        }
    }

    /// Renders `content` inside the layout, including the doctype.
    pub fn render(&self, content: Element) -> String {
        let mut output = DOCTYPE_HTML.to_string();
        self.layout.call(content).render(&mut output);
        output
    }
}

impl Default for Config {
    fn default() -> Self {
        use crate::html::{body, head, title, Content};

        Config::with_layout(|content| {
            html::html(Content::List(vec![
                head(title(())).into(),
                body(content).into(),
            ]))
        })
    }
}

pub trait Layout {
    fn call(&self, content: Element) -> Element;
}
impl<F> Layout for F
where
    F: Fn(Element) -> Element,
{
    fn call(&self, content: Element) -> Element {
        (self)(content)
    }
}
