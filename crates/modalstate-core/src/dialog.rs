#![forbid(unsafe_code)]

//! Dialog descriptors.
//!
//! A [`DialogState`] fully describes one blocking dialog: a title, an optional
//! message and an ordered list of buttons. The presentation flavor is a
//! zero-sized type parameter, so [`AlertState`] and [`ConfirmationDialogState`]
//! share one data model while remaining distinct types.
//!
//! # Invariants
//!
//! - Equality and hashing ignore the identity token and compare title,
//!   message and buttons in order.
//! - Zero buttons is valid and means "dismiss only".
//! - Descriptors are never mutated after construction. To change what is
//!   shown, build a new value and replace the stored one.
//!
//! # Example
//!
//! ```
//! use modalstate_core::{AlertState, ButtonState};
//!
//! let alert = AlertState::builder("Delete file?")
//!     .button(ButtonState::destructive("Delete").send("delete"))
//!     .button(ButtonState::cancel("Cancel"))
//!     .message("This cannot be undone.")
//!     .build();
//!
//! assert_eq!(alert.buttons().len(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::builder::DialogBuilder;
use crate::button::ButtonState;
use crate::describe::{Describe, Description};
use crate::id::DialogId;
use crate::text::TextState;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Alert {}
    impl Sealed for super::ConfirmationDialog {}
}

/// Host presentation family for a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogStyle {
    /// Inline alert.
    Alert,
    /// Sheet-style action list.
    ConfirmationDialog,
}

/// Type-level tag selecting a dialog's presentation flavor.
pub trait DialogKind: sealed::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    /// Type name used in structural dumps.
    const TYPE_NAME: &'static str;
    /// Host presentation family.
    const STYLE: DialogStyle;
}

/// Alert flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alert;

impl DialogKind for Alert {
    const TYPE_NAME: &'static str = "AlertState";
    const STYLE: DialogStyle = DialogStyle::Alert;
}

/// Confirmation dialog (action sheet) flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConfirmationDialog;

impl DialogKind for ConfirmationDialog {
    const TYPE_NAME: &'static str = "ConfirmationDialogState";
    const STYLE: DialogStyle = DialogStyle::ConfirmationDialog;
}

/// An alert descriptor.
pub type AlertState<A> = DialogState<A, Alert>;

/// A confirmation dialog descriptor.
pub type ConfirmationDialogState<A> = DialogState<A, ConfirmationDialog>;

/// A dialog descriptor, generic over the action type `A` and flavor `K`.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: serde::Serialize",
        deserialize = "A: serde::Deserialize<'de>"
    ))
)]
pub struct DialogState<A, K: DialogKind> {
    #[cfg_attr(feature = "serde", serde(skip, default = "DialogId::next"))]
    id: DialogId,
    title: TextState,
    #[cfg_attr(feature = "serde", serde(default))]
    message: Option<TextState>,
    #[cfg_attr(feature = "serde", serde(default))]
    buttons: Vec<ButtonState<A>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    kind: PhantomData<K>,
}

impl<A, K: DialogKind> DialogState<A, K> {
    /// A dismiss-only dialog with just a title.
    pub fn new(title: impl Into<TextState>) -> Self {
        Self::from_parts(title, Vec::new(), None)
    }

    /// Assemble a dialog from its parts.
    pub fn from_parts(
        title: impl Into<TextState>,
        buttons: Vec<ButtonState<A>>,
        message: Option<TextState>,
    ) -> Self {
        Self {
            id: DialogId::next(),
            title: title.into(),
            message,
            buttons,
            kind: PhantomData,
        }
    }

    /// Assemble a dialog from title, buttons and message steps.
    ///
    /// Each step is evaluated once, in that order.
    pub fn from_steps<T, B, M>(title: T, buttons: B, message: Option<M>) -> Self
    where
        T: FnOnce() -> TextState,
        B: FnOnce() -> Vec<ButtonState<A>>,
        M: FnOnce() -> TextState,
    {
        let title = title();
        let buttons = buttons();
        let message = message.map(|step| step());
        Self::from_parts(title, buttons, message)
    }

    /// Start a fluent builder.
    pub fn builder(title: impl Into<TextState>) -> DialogBuilder<A, K> {
        DialogBuilder::new(title)
    }

    /// Identity token. Not part of equality.
    #[inline]
    pub fn id(&self) -> DialogId {
        self.id
    }

    /// Title text.
    #[inline]
    pub fn title(&self) -> &TextState {
        &self.title
    }

    /// Optional message text.
    #[inline]
    pub fn message(&self) -> Option<&TextState> {
        self.message.as_ref()
    }

    /// Buttons in display order.
    #[inline]
    pub fn buttons(&self) -> &[ButtonState<A>] {
        &self.buttons
    }

    /// Host presentation family.
    #[inline]
    pub fn style(&self) -> DialogStyle {
        K::STYLE
    }

    /// Transform the action type of every button.
    ///
    /// Identity tokens of the dialog and its buttons are preserved.
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> DialogState<B, K> {
        DialogState {
            id: self.id,
            title: self.title,
            message: self.message,
            buttons: self
                .buttons
                .into_iter()
                .map(|button| button.map(&mut f))
                .collect(),
            kind: PhantomData,
        }
    }
}

impl<A: PartialEq, K: DialogKind> PartialEq for DialogState<A, K> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.message == other.message && self.buttons == other.buttons
    }
}

impl<A: Eq, K: DialogKind> Eq for DialogState<A, K> {}

impl<A: Hash, K: DialogKind> Hash for DialogState<A, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.message.hash(state);
        self.buttons.hash(state);
    }
}

impl<A: fmt::Debug, K: DialogKind> fmt::Debug for DialogState<A, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::TYPE_NAME)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("buttons", &self.buttons)
            .finish()
    }
}

impl<A: fmt::Debug, K: DialogKind> Describe for DialogState<A, K> {
    fn describe(&self) -> Description {
        let mut desc = Description::record(K::TYPE_NAME).field("title", self.title.describe());
        if !self.buttons.is_empty() {
            let actions = self.buttons.iter().map(Describe::describe).collect();
            desc = desc.field("actions", Description::List(actions));
        }
        if let Some(message) = &self.message {
            desc = desc.field("message", message.describe());
        }
        desc
    }
}
