use std::{fmt::Display, num::NonZeroU32};

use serde::{Deserialize, Deserializer};

use crate::Error;

/// Level of a heading element, always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: HeadingLevel = HeadingLevel(1);
    pub const MAX: HeadingLevel = HeadingLevel(6);

    pub fn new(level: i64) -> Result<Self, Error> {
        if (1..=6).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(Error::HeadingLevel(level))
        }
    }

    /// Like [`HeadingLevel::new`], but anything out of range becomes level 1.
    pub fn normalize(level: i64) -> Self {
        Self::new(level).unwrap_or_else(|error| {
            tracing::debug!(%error, "falling back to h1");
            Self::MIN
        })
    }

    /// Non-integral values become level 1.
    pub fn normalize_f64(level: f64) -> Self {
        if level.is_finite() && level.fract() == 0.0 {
            Self::normalize(level as i64)
        } else {
            tracing::debug!(level, "heading level is not an integer, falling back to h1");
            Self::MIN
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn tag(self) -> &'static str {
        match self.0 {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// a heading must always resolve to a tag, so this never fails
impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        Ok(match value {
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(level) => Self::normalize(level),
                None => Self::normalize_f64(number.as_f64().unwrap_or(f64::NAN)),
            },
            other => {
                tracing::debug!(
                    level = %other,
                    "heading level is not a number, falling back to h1"
                );
                Self::MIN
            }
        })
    }
}

/// Number of columns or rows a table cell occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span(NonZeroU32);

impl Span {
    pub fn new(span: i64) -> Result<Self, Error> {
        u32::try_from(span)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(Error::Span(span))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_heading_levels_in_range() {
        for level in 1..=6 {
            let heading = HeadingLevel::new(level).unwrap();
            assert_eq!(heading.get() as i64, level);
            assert_eq!(heading.tag(), format!("h{level}"));
        }
    }

    #[test]
    fn test_heading_levels_out_of_range() {
        assert_eq!(HeadingLevel::new(0), Err(Error::HeadingLevel(0)));
        assert_eq!(HeadingLevel::new(7), Err(Error::HeadingLevel(7)));

        for level in [-3, 0, 7, 9, i64::MAX] {
            assert_eq!(HeadingLevel::normalize(level), HeadingLevel::MIN);
        }
    }

    #[test]
    fn test_non_integer_heading_levels() {
        assert_eq!(HeadingLevel::normalize_f64(2.5), HeadingLevel::MIN);
        assert_eq!(HeadingLevel::normalize_f64(f64::NAN), HeadingLevel::MIN);
        assert_eq!(HeadingLevel::normalize_f64(3.0).get(), 3);
    }

    #[test]
    fn test_deserialize_heading_level() {
        let level = |value| serde_json::from_value::<HeadingLevel>(value).unwrap();

        assert_eq!(level(json!(4)).get(), 4);
        assert_eq!(level(json!(4.5)), HeadingLevel::MIN);
        assert_eq!(level(json!(12)), HeadingLevel::MIN);
        assert_eq!(level(json!("3")), HeadingLevel::MIN);
        assert_eq!(level(json!(null)), HeadingLevel::MIN);
    }

    #[test]
    fn test_spans() {
        assert_eq!(Span::new(3).unwrap().get(), 3);
        assert_eq!(Span::new(0), Err(Error::Span(0)));
        assert_eq!(Span::new(-2), Err(Error::Span(-2)));
        assert_eq!(Span::new(i64::MAX), Err(Error::Span(i64::MAX)));
    }
}
