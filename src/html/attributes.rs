#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// A boolean attribute, rendered as just its name
    Empty,
    Value(String),
}

impl Attribute {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Value(value) => Some(value),
        }
    }

    pub(crate) fn render(&self, output: &mut String) {
        match self {
            Self::Empty => {}
            Self::Value(value) => {
                output.push_str(&html_escape::encode_double_quoted_attribute(value))
            }
        }
    }
}

impl From<()> for Attribute {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}
impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}
impl<'a> From<&'a str> for Attribute {
    fn from(value: &'a str) -> Self {
        Self::Value(value.to_string())
    }
}

/// Attributes of an element, in the order they were first set.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    list: Vec<(String, Attribute)>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Sets an attribute, replacing the value if it's already present.
    ///
    /// The attribute keeps the position it was first inserted at.
    pub fn insert(&mut self, key: impl ToString, attribute: impl Into<Attribute>) {
        let key = key.to_string();
        let attribute = attribute.into();

        match self.list.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = attribute,
            None => self.list.push((key, attribute)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Attribute> {
        let position = self.list.iter().position(|(k, _)| k == key)?;
        Some(self.list.remove(position).1)
    }

    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.list.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.list.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn render(&self, output: &mut String) {
        for (i, (key, attr)) in self.list.iter().enumerate() {
            output.push_str(key);

            if let Attribute::Value(_) = attr {
                output.push_str("=\"");
                attr.render(output);
                output.push('"');
            }

            if i + 1 != self.list.len() {
                output.push(' ');
            }
        }
    }
}
