#![forbid(unsafe_code)]

//! Reference host producing plain native dialog values.
//!
//! [`NativeHost`] is the host used by [`present`](crate::present). Its output
//! is inspectable, and buttons can be tapped programmatically, which makes it
//! the natural target for tests and for embedding in a custom renderer.

use std::fmt;

use modalstate_core::{Animation, DialogStyle, TextState};

use crate::host::{DialogHost, NativeRole, Slots, TapCallback};

/// A native dialog button.
pub struct NativeButton {
    label: String,
    role: NativeRole,
    animation: Option<Animation>,
    on_tap: Option<TapCallback>,
}

impl NativeButton {
    /// Rendered label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Native styling.
    pub fn role(&self) -> NativeRole {
        self.role
    }

    /// Transition hint attached to the tap.
    pub fn animation(&self) -> Option<Animation> {
        self.animation
    }

    /// Whether tapping emits an action, as opposed to only dismissing.
    pub fn sends_action(&self) -> bool {
        self.on_tap.is_some()
    }

    /// Simulate a tap.
    pub fn tap(&self) {
        if let Some(on_tap) = &self.on_tap {
            on_tap();
        }
    }
}

impl fmt::Debug for NativeButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeButton")
            .field("label", &self.label)
            .field("role", &self.role)
            .field("animation", &self.animation)
            .field("sends_action", &self.sends_action())
            .finish()
    }
}

/// A native dialog value.
#[derive(Debug)]
pub struct NativeDialog {
    style: DialogStyle,
    title: String,
    message: Option<String>,
    slots: Slots<NativeButton>,
}

impl NativeDialog {
    /// Constructor family used.
    pub fn style(&self) -> DialogStyle {
        self.style
    }

    /// Rendered title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendered message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Button slots.
    pub fn slots(&self) -> &Slots<NativeButton> {
        &self.slots
    }

    /// Primary button of a two-button dialog.
    pub fn primary(&self) -> Option<&NativeButton> {
        match &self.slots {
            Slots::PrimarySecondary { primary, .. } => Some(primary),
            Slots::Dismiss(_) => None,
        }
    }

    /// Secondary button of a two-button dialog.
    pub fn secondary(&self) -> Option<&NativeButton> {
        match &self.slots {
            Slots::PrimarySecondary { secondary, .. } => Some(secondary),
            Slots::Dismiss(_) => None,
        }
    }

    /// Dismiss button of a zero- or one-button dialog.
    pub fn dismiss_button(&self) -> Option<&NativeButton> {
        match &self.slots {
            Slots::Dismiss(button) => button.as_ref(),
            Slots::PrimarySecondary { .. } => None,
        }
    }

    /// Shown buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &NativeButton> {
        self.slots.iter()
    }
}

/// Host that builds [`NativeDialog`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl NativeHost {
    fn dialog(
        style: DialogStyle,
        title: &TextState,
        message: Option<&TextState>,
        slots: Slots<NativeButton>,
    ) -> NativeDialog {
        NativeDialog {
            style,
            title: title.to_string(),
            message: message.map(ToString::to_string),
            slots,
        }
    }
}

impl DialogHost for NativeHost {
    type Button = NativeButton;
    type Dialog = NativeDialog;

    fn button(
        &mut self,
        label: &TextState,
        role: NativeRole,
        animation: Option<Animation>,
        on_tap: Option<TapCallback>,
    ) -> NativeButton {
        NativeButton {
            label: label.to_string(),
            role,
            animation,
            on_tap,
        }
    }

    fn alert(
        &mut self,
        title: &TextState,
        message: Option<&TextState>,
        slots: Slots<NativeButton>,
    ) -> NativeDialog {
        Self::dialog(DialogStyle::Alert, title, message, slots)
    }

    fn action_sheet(
        &mut self,
        title: &TextState,
        message: Option<&TextState>,
        slots: Slots<NativeButton>,
    ) -> NativeDialog {
        Self::dialog(DialogStyle::ConfirmationDialog, title, message, slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn tap_without_callback_is_noop() {
        let button = NativeHost.button(&"Close".into(), NativeRole::Cancel, None, None);
        assert!(!button.sends_action());
        button.tap();
        assert_eq!(button.label(), "Close");
        assert_eq!(button.role(), NativeRole::Cancel);
    }

    #[test]
    fn tap_invokes_callback_each_time() {
        let taps = Rc::new(Cell::new(0));
        let counter = Rc::clone(&taps);
        let button = NativeHost.button(
            &"OK".into(),
            NativeRole::Default,
            Some(Animation::Linear),
            Some(Box::new(move || counter.set(counter.get() + 1))),
        );
        button.tap();
        button.tap();
        assert_eq!(taps.get(), 2);
        assert_eq!(button.animation(), Some(Animation::Linear));
    }

    #[test]
    fn slot_accessors() {
        let mut host = NativeHost;
        let a = host.button(&"A".into(), NativeRole::Default, None, None);
        let b = host.button(&"B".into(), NativeRole::Cancel, None, None);
        let dialog = host.alert(
            &"Title".into(),
            None,
            Slots::PrimarySecondary {
                primary: a,
                secondary: b,
            },
        );
        assert_eq!(dialog.style(), DialogStyle::Alert);
        assert_eq!(dialog.primary().map(NativeButton::label), Some("A"));
        assert_eq!(dialog.secondary().map(NativeButton::label), Some("B"));
        assert!(dialog.dismiss_button().is_none());
        assert_eq!(dialog.buttons().count(), 2);
    }

    #[test]
    fn action_sheet_style() {
        let dialog =
            NativeHost.action_sheet(&"Menu".into(), Some(&"Pick".into()), Slots::Dismiss(None));
        assert_eq!(dialog.style(), DialogStyle::ConfirmationDialog);
        assert_eq!(dialog.message(), Some("Pick"));
        assert!(dialog.primary().is_none());
        assert!(dialog.dismiss_button().is_none());
    }
}
