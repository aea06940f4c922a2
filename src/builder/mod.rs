use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::{
    class_list::ClassList,
    node::{Document, Node, NodeFactory},
};

mod form;
mod structural;
mod table;

pub use form::{EmailInputOptions, FormOptions, NumberInputOptions, TextInputOptions};
pub use table::CellOptions;

/// Creates single elements with an id, classes and tag specific attributes.
///
/// Every factory creates a fresh node and hands it over to the caller, nothing
/// is kept around between calls. Optional attributes that are empty or out of
/// range are left unset instead of failing.
///
/// ```ignore
/// let nw = Nodeworthy::new();
///
/// let mut header = nw.header((), "");
/// header.append_child(nw.h("This is an H1...", 1, "text-center", "title"));
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct Nodeworthy<F = Document> {
    factory: F,
}

impl Nodeworthy {
    pub fn new() -> Self {
        Self { factory: Document }
    }
}

impl<F: NodeFactory> Nodeworthy<F> {
    pub fn with_factory(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Creates a decorated element of any tag
    pub fn element(&self, tag: &str, class_list: impl Into<ClassList>, id: &str) -> F::Node {
        decorate(self.factory.create_element(tag), class_list, id)
    }
}

/// Applies an id and a class list to `node`, and returns it.
///
/// The id is only set if it's not empty. Class names that are empty or contain
/// a space are skipped, the rest are added in order.
pub fn decorate<N: Node>(mut node: N, class_list: impl Into<ClassList>, id: &str) -> N {
    if !id.is_empty() {
        node.set_id(id);
    }

    for class in class_list.into().tokens() {
        node.add_class(class);
    }

    node
}

/// Deserializes an optional field, turning values of the wrong type into `None`.
///
/// Options coming from JSON follow the same rule as the ones built in code: a
/// bad value leaves the attribute unset instead of rejecting the whole bag.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match T::deserialize(&value) {
        Ok(value) => Ok(Some(value)),
        Err(error) => {
            tracing::trace!(%value, %error, "ignoring mistyped option");
            Ok(None)
        }
    }
}

// attribute helpers shared by the factories. each one checks a single value and
// leaves the attribute unset when the check fails

fn set_str<N: Node>(node: &mut N, name: &str, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => node.set_attribute(name, value),
        Some(_) => tracing::trace!(attribute = name, "ignoring empty value"),
        None => {}
    }
}

fn set_flag<N: Node>(node: &mut N, name: &str, value: Option<bool>) {
    if value == Some(true) {
        node.toggle_attribute(name, true);
    }
}

/// Sets an integer attribute if it's at least `min`
fn set_int<N: Node>(node: &mut N, name: &str, value: Option<i64>, min: i64) {
    match value {
        Some(value) if value >= min => node.set_attribute(name, &value.to_string()),
        Some(value) => {
            tracing::trace!(attribute = name, value, min, "ignoring out of range value")
        }
        None => {}
    }
}

fn set_number<N: Node>(node: &mut N, name: &str, value: Option<f64>) {
    match value {
        Some(value) if value.is_finite() => node.set_attribute(name, &value.to_string()),
        Some(value) => tracing::trace!(attribute = name, value, "ignoring non-finite value"),
        None => {}
    }
}
