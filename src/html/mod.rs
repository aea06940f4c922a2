#[macro_export]
macro_rules! attrs {
    ( $( $attr:expr => $value:expr ),* $(,)?) => {
        {
            let mut attributes = $crate::html::Attributes::default();

            $(
                attributes.insert($attr, $value);
            )*

            attributes
        }
    };
}

mod attributes;
mod content;
mod element;
mod funcs;

pub use attributes::{Attribute, Attributes};
pub use content::Content;
pub use element::Element;
pub use funcs::*;
