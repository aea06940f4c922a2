use serde::Deserialize;

use crate::{
    bounded::Span,
    class_list::ClassList,
    node::{Node, NodeFactory},
};

use super::{decorate, lenient, Nodeworthy};

/// Spans of a table cell. Anything that isn't a positive integer is left unset.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CellOptions {
    #[serde(deserialize_with = "lenient")]
    pub colspan: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub rowspan: Option<i64>,
}

impl CellOptions {
    pub fn colspan(colspan: i64) -> Self {
        Self {
            colspan: Some(colspan),
            ..Default::default()
        }
    }

    pub fn rowspan(rowspan: i64) -> Self {
        Self {
            rowspan: Some(rowspan),
            ..Default::default()
        }
    }
}

impl<F: NodeFactory> Nodeworthy<F> {
    /// Creates a data cell with `html` as its content
    pub fn td(
        &self,
        html: &str,
        options: CellOptions,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        self.cell("td", html, options, class_list, id)
    }

    /// Creates a header cell with `html` as its content
    pub fn th(
        &self,
        html: &str,
        options: CellOptions,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        self.cell("th", html, options, class_list, id)
    }

    fn cell(
        &self,
        tag: &str,
        html: &str,
        options: CellOptions,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        let mut node = self.factory.create_element(tag);

        set_span(&mut node, "colspan", options.colspan);
        set_span(&mut node, "rowspan", options.rowspan);

        // empty cells are fine
        node.set_inner_html(html);

        decorate(node, class_list, id)
    }
}

fn set_span<N: Node>(node: &mut N, name: &str, span: Option<i64>) {
    let Some(span) = span else { return };

    match Span::new(span) {
        Ok(span) => node.set_attribute(name, &span.to_string()),
        Err(error) => tracing::trace!(attribute = name, %error, "leaving span unset"),
    }
}
