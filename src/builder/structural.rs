use std::sync::Arc;

use crate::{
    bounded::HeadingLevel,
    class_list::ClassList,
    node::{Event, Node, NodeFactory},
};

use super::{set_str, Nodeworthy};

macro_rules! make_container_funcs {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates an empty `<", stringify!($name), ">`")]
            pub fn $name(&self, class_list: impl Into<ClassList>, id: &str) -> F::Node {
                self.element(stringify!($name), class_list, id)
            }
        )*
    };
}

macro_rules! make_text_funcs {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates a `<", stringify!($name), ">`, with `text` if it's not empty")]
            pub fn $name(&self, text: &str, class_list: impl Into<ClassList>, id: &str) -> F::Node {
                let mut node = self.element(stringify!($name), class_list, id);
                if !text.is_empty() {
                    node.set_text(text);
                }
                node
            }
        )*
    };
}

impl<F: NodeFactory> Nodeworthy<F> {
    make_container_funcs!(div, header, footer, nav, main, ol, ul, table, thead, tbody, tr);

    make_text_funcs!(p, span, li, button);

    /// Creates a heading of the given level, `<h1>` to `<h6>`.
    ///
    /// Levels outside of `1..=6` produce an `<h1>`.
    pub fn h(&self, text: &str, level: i64, class_list: impl Into<ClassList>, id: &str) -> F::Node {
        self.heading(text, HeadingLevel::normalize(level), class_list, id)
    }

    pub fn heading(
        &self,
        text: &str,
        level: HeadingLevel,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        let mut node = self.element(level.tag(), class_list, id);
        node.set_text(text);
        node
    }

    /// Creates a link. `text` is always set, `href` only when it's not empty
    pub fn a(&self, href: &str, text: &str, class_list: impl Into<ClassList>, id: &str) -> F::Node {
        let mut node = self.element("a", class_list, id);
        set_str(&mut node, "href", Some(href));
        node.set_text(text);
        node
    }

    /// Creates a button that runs `on_click` every time it's clicked.
    ///
    /// Detaching the handler is up to the caller.
    pub fn button_on_click<H>(
        &self,
        text: &str,
        on_click: H,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node
    where
        H: Fn(&Event) + Send + Sync + 'static,
    {
        let mut node = self.button(text, class_list, id);
        node.add_event_listener("click", Arc::new(on_click));
        node
    }

    pub fn img(&self, src: &str, alt: &str, class_list: impl Into<ClassList>, id: &str) -> F::Node {
        let mut node = self.element("img", class_list, id);
        set_str(&mut node, "src", Some(src));
        set_str(&mut node, "alt", Some(alt));
        node
    }

    /// Creates a label for the control with id `for_id`
    pub fn label(
        &self,
        text: &str,
        for_id: &str,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        let mut node = self.element("label", class_list, id);
        set_str(&mut node, "for", Some(for_id));
        if !text.is_empty() {
            node.set_text(text);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    };

    use crate::{
        builder::tests::{recording, Op},
        html::Element,
        Nodeworthy,
    };

    #[test]
    fn test_containers() {
        let nw = Nodeworthy::new();

        assert_eq!(
            nw.div("flex-row", "div-lists").to_html(),
            "<div id=\"div-lists\" class=\"flex-row\"></div>"
        );
        assert_eq!(nw.header((), "").to_html(), "<header></header>");
        assert_eq!(
            nw.footer("flex-center", "").to_html(),
            "<footer class=\"flex-center\"></footer>"
        );
        assert_eq!(nw.nav("flex-row", "").name(), "nav");
        assert_eq!(
            nw.main("flex-center flex-column", "").classes(),
            ["flex-center", "flex-column"]
        );
        assert_eq!(nw.ol((), "").name(), "ol");
        assert_eq!(nw.ul((), "").name(), "ul");
        assert_eq!(nw.table((), "").name(), "table");
        assert_eq!(nw.thead((), "").name(), "thead");
        assert_eq!(nw.tbody((), "").name(), "tbody");
        assert_eq!(nw.tr((), "").name(), "tr");
    }

    #[test]
    fn test_text_elements() {
        let nw = Nodeworthy::new();

        assert_eq!(
            nw.p("©2025 - Some Company", (), "").to_html(),
            "<p>©2025 - Some Company</p>"
        );
        assert_eq!(
            nw.span(" span that highlights text!", "text-highlight", "").to_html(),
            "<span class=\"text-highlight\"> span that highlights text!</span>"
        );
        assert_eq!(nw.li("Ordered list item", (), "").text_content(), "Ordered list item");
        assert_eq!(
            nw.button("Login", (), "button-login").to_html(),
            "<button id=\"button-login\">Login</button>"
        );
    }

    #[test]
    fn test_empty_text_is_not_set() {
        let (nw, ops) = recording();
        nw.p("", (), "");

        assert_eq!(ops.take(), [Op::Create("p".into())]);
    }

    #[test]
    fn test_heading() {
        let nw = Nodeworthy::new();

        let h = nw.h("Title", 2, (), "");
        assert_eq!(h.name(), "h2");
        assert_eq!(h.text_content(), "Title");
        assert_eq!(h.id(), None);
        assert!(h.classes().is_empty());
        assert_eq!(h.to_html(), "<h2>Title</h2>");

        assert_eq!(nw.h("While this is an H6", 6, (), "").name(), "h6");
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let nw = Nodeworthy::new();

        assert_eq!(nw.h("X", 9, (), "").to_html(), "<h1>X</h1>");
        for level in [0, -1, 7, i64::MIN] {
            assert_eq!(nw.h("X", level, (), "").name(), "h1");
        }
    }

    #[test]
    fn test_anchor() {
        let nw = Nodeworthy::new();

        assert_eq!(
            nw.a("https://github.com", "GitHub", (), "").to_html(),
            "<a href=\"https://github.com\">GitHub</a>"
        );
        assert_eq!(nw.a("", "nowhere", (), "").to_html(), "<a>nowhere</a>");
    }

    #[test]
    fn test_anchor_text_is_always_set() {
        let (nw, ops) = recording();
        nw.a("https://picsum.photos/", "", (), "");

        assert_eq!(
            ops.take(),
            [
                Op::Create("a".into()),
                Op::SetAttribute("href".into(), "https://picsum.photos/".into()),
                Op::SetText("".into()),
            ]
        );
    }

    #[test]
    fn test_img_and_label() {
        let nw = Nodeworthy::new();

        assert_eq!(
            nw.img("https://picsum.photos/200", "A Picsum Image", (), "").to_html(),
            "<img src=\"https://picsum.photos/200\" alt=\"A Picsum Image\" />"
        );
        assert_eq!(nw.img("", "", (), "").to_html(), "<img />");
        assert_eq!(
            nw.label("Name:", "input-name", "text-right", "").to_html(),
            "<label class=\"text-right\" for=\"input-name\">Name:</label>"
        );
    }

    #[test]
    fn test_button_on_click() {
        let clicked = Arc::new(AtomicBool::new(false));
        let nw = Nodeworthy::new();

        let flag = clicked.clone();
        let button = nw.button_on_click(
            "Click me!",
            move |_| flag.store(true, Ordering::SeqCst),
            (),
            "button-img",
        );

        assert_eq!(button.listener_count("click"), 1);
        button.click();
        assert!(clicked.load(Ordering::SeqCst));
    }

    #[test]
    fn test_reentrant_calls_from_a_handler() {
        let nw = Nodeworthy::new();
        let built: Arc<Mutex<Vec<Element>>> = Default::default();

        let sink = built.clone();
        let button = nw.button_on_click(
            "Click me!",
            move |event| {
                event.prevent_default();

                let mut div = nw.div("flex-center flex-row", "div-img");
                let mut a = nw.a("https://picsum.photos/", "", (), "");
                a.append_child(nw.img("https://picsum.photos/200", "A Picsum Image", (), ""));
                div.append_child(a);

                if let Ok(mut built) = sink.lock() {
                    built.push(div);
                }
            },
            (),
            "",
        );

        assert!(button.click().default_prevented());
        button.click();

        let built = built.lock().unwrap();
        assert_eq!(built.len(), 2);
        assert_eq!(built[0].to_html(), built[1].to_html());
        assert!(built[0].get_element_by_id("div-img").is_some());
    }

    #[test]
    fn test_calls_are_independent() {
        let nw = Nodeworthy::new();

        let mut first = nw.li("item", "row", "");
        let second = nw.li("item", "row", "");
        assert_eq!(first.to_html(), second.to_html());

        first.append_child("!");
        assert_eq!(second.to_html(), "<li class=\"row\">item</li>");
    }
}
