use thiserror::Error;

/// Errors reported by the strict constructors of the bounded attribute types.
///
/// The builder itself never surfaces these, it falls back to a default instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("heading level {0} is outside of 1..=6")]
    HeadingLevel(i64),
    #[error("span {0} is not a positive integer")]
    Span(i64),
}
