//! Helpers for creating single HTML elements, with an id, a class list and tag
//! specific attributes already applied.
//!
//! ```ignore
//! use nodeworthy::Nodeworthy;
//!
//! let nw = Nodeworthy::new();
//!
//! let mut row = nw.tr((), "");
//! row.append_child(nw.td("Email", CellOptions::colspan(3), "text-center", ""));
//! ```

mod bounded;
mod builder;
mod class_list;
mod config;
mod error;
pub mod html;
pub mod node;

pub use bounded::{HeadingLevel, Span};
pub use builder::{
    decorate, CellOptions, EmailInputOptions, FormOptions, NumberInputOptions, Nodeworthy,
    TextInputOptions,
};
pub use class_list::ClassList;
pub use config::{Config, Layout};
pub use error::Error;
