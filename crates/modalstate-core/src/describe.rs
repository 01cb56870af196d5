#![forbid(unsafe_code)]

//! Structural descriptions for deterministic dumps.
//!
//! The core does not format dumps itself. It exposes an ordered, labelled tree
//! describing each value, and a formatter (see `modalstate-harness`) turns that
//! tree into text. Field order in a [`Description::Record`] is significant and
//! stable.
//!
//! # Invariants
//!
//! 1. Records list fields in declaration order: a dialog is `title`, then
//!    `actions`, then `message`; a button is `role`, `action`, `label`.
//! 2. Absent optional fields are omitted rather than described as empty.
//! 3. Text leaves are quoted; action payloads use their `Debug` form.

use std::borrow::Cow;
use std::fmt;

use crate::text::TextState;

/// An ordered structural description of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// A named record with labelled fields, e.g. `ButtonState(label: "OK")`.
    Record {
        /// Type name shown before the field list.
        name: Cow<'static, str>,
        /// Labelled fields in display order.
        fields: Vec<(&'static str, Description)>,
    },
    /// An indexed list of elements.
    List(Vec<Description>),
    /// An enum case, e.g. `.cancel` or `.send(true, animation: .default)`.
    Case {
        /// Case name without the leading dot.
        name: &'static str,
        /// Positional (`None`) or labelled arguments.
        args: Vec<(Option<&'static str>, Description)>,
    },
    /// A value rendered verbatim.
    Leaf(String),
}

impl Description {
    /// A record with no fields yet.
    pub fn record(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Record {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field to a record. No-op for other variants.
    #[must_use]
    pub fn field(mut self, label: &'static str, value: Description) -> Self {
        if let Self::Record { fields, .. } = &mut self {
            fields.push((label, value));
        }
        self
    }

    /// A case without arguments.
    pub fn case(name: &'static str) -> Self {
        Self::Case {
            name,
            args: Vec::new(),
        }
    }

    /// Append an argument to a case. No-op for other variants.
    #[must_use]
    pub fn arg(mut self, label: Option<&'static str>, value: Description) -> Self {
        if let Self::Case { args, .. } = &mut self {
            args.push((label, value));
        }
        self
    }

    /// A quoted text leaf.
    pub fn text(text: &TextState) -> Self {
        Self::Leaf(format!("{text:?}"))
    }

    /// A leaf using the value's `Debug` form.
    pub fn value(value: &impl fmt::Debug) -> Self {
        Self::Leaf(format!("{value:?}"))
    }
}

/// Types that can describe their own structure.
pub trait Describe {
    /// Produce the structural description of `self`.
    fn describe(&self) -> Description;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> Description {
        (**self).describe()
    }
}

impl Describe for TextState {
    fn describe(&self) -> Description {
        Description::text(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_field_order() {
        let desc = Description::record("Point")
            .field("x", Description::value(&1))
            .field("y", Description::value(&2));
        let Description::Record { fields, .. } = desc else {
            panic!("expected record");
        };
        let labels: Vec<_> = fields.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["x", "y"]);
    }

    #[test]
    fn field_on_leaf_is_noop() {
        let leaf = Description::Leaf("1".into());
        assert_eq!(leaf.clone().field("x", Description::value(&2)), leaf);
    }

    #[test]
    fn text_leaf_is_quoted() {
        let desc = TextState::from("Hi").describe();
        assert_eq!(desc, Description::Leaf("\"Hi\"".into()));
    }
}
