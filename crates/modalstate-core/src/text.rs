#![forbid(unsafe_code)]

//! Opaque display text for titles, messages and button labels.

use std::borrow::Cow;
use std::fmt;
use std::ops::Add;

/// Text shown by a dialog.
///
/// `TextState` is deliberately opaque: it compares, hashes and displays like a
/// string, but callers should not depend on how it is stored. Static strings
/// are kept borrowed, so constructing dialogs from literals does not allocate.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TextState(Cow<'static, str>);

impl TextState {
    /// Create text from anything string-like.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// Create text from a static string without allocating.
    pub const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// The renderable form of this text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for TextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for TextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for TextState {
    fn from(text: &'static str) -> Self {
        Self::from_static(text)
    }
}

impl From<String> for TextState {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for TextState {
    fn from(text: Cow<'static, str>) -> Self {
        Self(text)
    }
}

impl AsRef<str> for TextState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Add for TextState {
    type Output = TextState;

    fn add(self, rhs: TextState) -> TextState {
        if rhs.is_empty() {
            return self;
        }
        let mut joined = self.0.into_owned();
        joined.push_str(rhs.as_str());
        Self(Cow::Owned(joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_text_compare_equal() {
        let a = TextState::from("Delete");
        let b = TextState::from(String::from("Delete"));
        assert_eq!(a, b);
    }

    #[test]
    fn debug_quotes_display_does_not() {
        let text = TextState::from("Alert!");
        assert_eq!(format!("{text:?}"), "\"Alert!\"");
        assert_eq!(text.to_string(), "Alert!");
    }

    #[test]
    fn concatenation_joins_in_order() {
        let text = TextState::from("Delete ") + TextState::from("3 files");
        assert_eq!(text.as_str(), "Delete 3 files");
    }

    #[test]
    fn concatenating_empty_keeps_left() {
        let text = TextState::from("Title") + TextState::default();
        assert_eq!(text.as_str(), "Title");
    }

    #[test]
    fn debug_escapes_quotes() {
        let text = TextState::from("say \"hi\"");
        assert_eq!(format!("{text:?}"), r#""say \"hi\"""#);
    }
}
