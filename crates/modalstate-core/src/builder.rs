#![forbid(unsafe_code)]

//! Fluent construction for dialog descriptors.

use crate::button::ButtonState;
use crate::dialog::{DialogKind, DialogState};
use crate::text::TextState;

/// Builder for [`DialogState`].
///
/// Buttons keep the order in which they are added. Building cannot fail.
#[derive(Debug, Clone)]
pub struct DialogBuilder<A, K: DialogKind> {
    title: TextState,
    buttons: Vec<ButtonState<A>>,
    message: Option<TextState>,
    kind: std::marker::PhantomData<K>,
}

impl<A, K: DialogKind> DialogBuilder<A, K> {
    /// Start a builder with the required title.
    pub fn new(title: impl Into<TextState>) -> Self {
        Self {
            title: title.into(),
            buttons: Vec::new(),
            message: None,
            kind: std::marker::PhantomData,
        }
    }

    /// Add a button.
    #[must_use]
    pub fn button(mut self, button: ButtonState<A>) -> Self {
        self.buttons.push(button);
        self
    }

    /// Add several buttons in iteration order.
    #[must_use]
    pub fn buttons(mut self, buttons: impl IntoIterator<Item = ButtonState<A>>) -> Self {
        self.buttons.extend(buttons);
        self
    }

    /// Add a button only when `condition` holds. `make` runs only then.
    #[must_use]
    pub fn button_if(self, condition: bool, make: impl FnOnce() -> ButtonState<A>) -> Self {
        if condition { self.button(make()) } else { self }
    }

    /// Add a button if one is given.
    #[must_use]
    pub fn maybe_button(self, button: Option<ButtonState<A>>) -> Self {
        self.buttons(button)
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<TextState>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the message from a step.
    #[must_use]
    pub fn message_with(self, make: impl FnOnce() -> TextState) -> Self {
        self.message(make())
    }

    /// Build the dialog.
    pub fn build(self) -> DialogState<A, K> {
        DialogState::from_parts(self.title, self.buttons, self.message)
    }
}

impl<A, K: DialogKind> From<DialogBuilder<A, K>> for DialogState<A, K> {
    fn from(builder: DialogBuilder<A, K>) -> Self {
        builder.build()
    }
}
