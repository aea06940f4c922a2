use super::{Content, Element};

macro_rules! make_elements_funcs {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(content: impl Into<Content>) -> Element {
                Element {
                    content: content.into(),
                    ..Element::new(stringify!($name))
                }
            }
        )*
    };
}

// document scaffolding, used by layouts. Page content goes through the builder
make_elements_funcs!(html, head, body, title, style, script);

/// HTML elements that cannot have any child nodes
///
/// https://developer.mozilla.org/en-US/docs/Glossary/Void_element
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub(crate) const DOCTYPE_HTML: &str = "<!DOCTYPE html>";
