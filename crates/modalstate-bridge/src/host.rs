#![forbid(unsafe_code)]

//! The host framework's fixed-arity dialog surface.
//!
//! Hosts can only build a dialog with no buttons, one dismiss button, or
//! exactly two buttons. [`Slots`] encodes those three shapes, so a host
//! implementation cannot be handed anything else.

use std::fmt;

use modalstate_core::{Animation, ButtonRole, TextState};

/// Invoked by the host when a native button is tapped.
pub type TapCallback = Box<dyn Fn()>;

/// Native button styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NativeRole {
    /// Regular button.
    #[default]
    Default,
    /// Destructive styling.
    Destructive,
    /// Cancel semantics.
    Cancel,
}

impl From<Option<ButtonRole>> for NativeRole {
    fn from(role: Option<ButtonRole>) -> Self {
        match role {
            None => Self::Default,
            Some(ButtonRole::Destructive) => Self::Destructive,
            Some(ButtonRole::Cancel) => Self::Cancel,
        }
    }
}

/// Button slots accepted by the host's dialog constructors.
#[derive(Clone, PartialEq, Eq)]
pub enum Slots<B> {
    /// Dismiss-button constructor. `None` is a dismiss-only dialog.
    Dismiss(Option<B>),
    /// Two-button constructor.
    PrimarySecondary {
        /// First button.
        primary: B,
        /// Second button.
        secondary: B,
    },
}

impl<B> Slots<B> {
    /// Number of buttons the host will show.
    pub fn len(&self) -> usize {
        match self {
            Self::Dismiss(None) => 0,
            Self::Dismiss(Some(_)) => 1,
            Self::PrimarySecondary { .. } => 2,
        }
    }

    /// Whether no button is shown.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform every slot.
    pub fn map<C>(self, mut f: impl FnMut(B) -> C) -> Slots<C> {
        match self {
            Self::Dismiss(button) => Slots::Dismiss(button.map(f)),
            Self::PrimarySecondary { primary, secondary } => {
                let primary = f(primary);
                Slots::PrimarySecondary {
                    primary,
                    secondary: f(secondary),
                }
            }
        }
    }

    /// Borrow every slot.
    pub fn as_ref(&self) -> Slots<&B> {
        match self {
            Self::Dismiss(button) => Slots::Dismiss(button.as_ref()),
            Self::PrimarySecondary { primary, secondary } => {
                Slots::PrimarySecondary { primary, secondary }
            }
        }
    }

    /// Shown buttons in display order.
    pub fn iter(&self) -> impl Iterator<Item = &B> {
        let (first, second) = match self.as_ref() {
            Slots::Dismiss(button) => (button, None),
            Slots::PrimarySecondary { primary, secondary } => (Some(primary), Some(secondary)),
        };
        first.into_iter().chain(second)
    }
}

impl<B: fmt::Debug> fmt::Debug for Slots<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dismiss(button) => f.debug_tuple("Dismiss").field(button).finish(),
            Self::PrimarySecondary { primary, secondary } => f
                .debug_struct("PrimarySecondary")
                .field("primary", primary)
                .field("secondary", secondary)
                .finish(),
        }
    }
}

/// A host framework able to render dialogs.
///
/// The bridge calls [`button`](Self::button) once per shown button, then
/// exactly one dialog constructor chosen by the descriptor's flavor.
pub trait DialogHost {
    /// Native button value.
    type Button;
    /// Native dialog value.
    type Dialog;

    /// Build a native button. `on_tap` is `None` when tapping only dismisses.
    fn button(
        &mut self,
        label: &TextState,
        role: NativeRole,
        animation: Option<Animation>,
        on_tap: Option<TapCallback>,
    ) -> Self::Button;

    /// Build an inline alert.
    fn alert(
        &mut self,
        title: &TextState,
        message: Option<&TextState>,
        slots: Slots<Self::Button>,
    ) -> Self::Dialog;

    /// Build a sheet-style confirmation dialog.
    fn action_sheet(
        &mut self,
        title: &TextState,
        message: Option<&TextState>,
        slots: Slots<Self::Button>,
    ) -> Self::Dialog;
}
