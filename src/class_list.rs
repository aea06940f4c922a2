use serde::Deserialize;

/// An ordered list of candidate class names.
///
/// Candidates are kept as given. Only the ones that are valid class names are
/// applied to a node, see [`ClassList::tokens`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct ClassList {
    candidates: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a space delimited list, `"flex-row border-bottom"`.
    pub fn parse(list: &str) -> Self {
        let trimmed = list.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        Self {
            candidates: trimmed.split(' ').map(str::to_string).collect(),
        }
    }

    pub fn push(&mut self, class: impl ToString) {
        self.candidates.push(class.to_string());
    }

    /// Tokens that can be applied as class names, in order.
    ///
    /// Empty tokens and tokens containing a space are skipped.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str).filter(|token| {
            let valid = is_class_name(token);
            if !valid {
                tracing::trace!(token, "ignoring invalid class name");
            }
            valid
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }
}

fn is_class_name(token: &str) -> bool {
    !token.is_empty() && !token.contains(' ')
}

impl From<()> for ClassList {
    fn from(_: ()) -> Self {
        Self::default()
    }
}
impl<'a> From<&'a str> for ClassList {
    fn from(value: &'a str) -> Self {
        Self::parse(value)
    }
}
impl From<String> for ClassList {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}
impl<'a> From<&'a String> for ClassList {
    fn from(value: &'a String) -> Self {
        Self::parse(value)
    }
}
impl<'a> From<&'a ClassList> for ClassList {
    fn from(value: &'a ClassList) -> Self {
        value.clone()
    }
}
impl<T: ToString> From<Vec<T>> for ClassList {
    fn from(value: Vec<T>) -> Self {
        Self {
            candidates: value.iter().map(ToString::to_string).collect(),
        }
    }
}
impl<'a, T: ToString> From<&'a [T]> for ClassList {
    fn from(value: &'a [T]) -> Self {
        Self {
            candidates: value.iter().map(ToString::to_string).collect(),
        }
    }
}
impl<T: ToString, const N: usize> From<[T; N]> for ClassList {
    fn from(value: [T; N]) -> Self {
        Self {
            candidates: value.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Strings are parsed as delimited lists. In arrays, anything that isn't a
/// string is skipped. Every other value is an empty list.
impl From<serde_json::Value> for ClassList {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(list) => Self::parse(&list),
            serde_json::Value::Array(items) => Self {
                candidates: items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(token) => Some(token),
                        other => {
                            tracing::trace!(token = %other, "ignoring non-string class name");
                            None
                        }
                    })
                    .collect(),
            },
            _ => Self::default(),
        }
    }
}

impl FromIterator<String> for ClassList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}
