#![forbid(unsafe_code)]

//! Button descriptors.
//!
//! A [`ButtonState`] describes one dialog button: its label, an optional
//! semantic role, and an optional action emitted when tapped.
//!
//! # Invariants
//!
//! - A button is immutable once built; the chained setters consume `self`.
//! - Equality and hashing cover role, action (payload and animation hint) and
//!   label. The identity token is excluded.
//! - Equality exists only when the action type supports it. A `ButtonState`
//!   over a non-comparable action still exists, it just is not `PartialEq`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::describe::{Describe, Description};
use crate::id::ButtonId;
use crate::text::TextState;

/// Semantic role of a button.
///
/// Roles only affect how the host styles the button. They never change which
/// action is sent or where the button is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ButtonRole {
    /// The button performs a destructive operation.
    Destructive,
    /// The button cancels the dialog.
    Cancel,
}

impl ButtonRole {
    /// Name used in dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Destructive => "destructive",
            Self::Cancel => "cancel",
        }
    }
}

impl Describe for ButtonRole {
    fn describe(&self) -> Description {
        Description::case(self.name())
    }
}

/// Animation hint attached to an action for the host's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Animation {
    /// The host's default transition.
    #[default]
    Default,
    /// Constant-speed transition.
    Linear,
    /// Starts slow.
    EaseIn,
    /// Ends slow.
    EaseOut,
    /// Starts and ends slow.
    EaseInOut,
    /// Spring-driven transition.
    Spring,
}

impl Animation {
    /// Name used in dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Linear => "linear",
            Self::EaseIn => "ease_in",
            Self::EaseOut => "ease_out",
            Self::EaseInOut => "ease_in_out",
            Self::Spring => "spring",
        }
    }
}

impl Describe for Animation {
    fn describe(&self) -> Description {
        Description::case(self.name())
    }
}

/// What a button emits when tapped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ButtonAction<A> {
    /// Send the action.
    Send(A),
    /// Send the action inside an animated transition.
    AnimatedSend {
        /// The action to send.
        action: A,
        /// Transition hint for the host.
        animation: Animation,
    },
}

impl<A> ButtonAction<A> {
    /// The embedded action.
    pub fn action(&self) -> &A {
        match self {
            Self::Send(action) | Self::AnimatedSend { action, .. } => action,
        }
    }

    /// Consume and return the embedded action.
    pub fn into_action(self) -> A {
        match self {
            Self::Send(action) | Self::AnimatedSend { action, .. } => action,
        }
    }

    /// The animation hint, if any.
    pub fn animation(&self) -> Option<Animation> {
        match self {
            Self::Send(_) => None,
            Self::AnimatedSend { animation, .. } => Some(*animation),
        }
    }

    /// Transform the embedded action, keeping the animation hint.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> ButtonAction<B> {
        match self {
            Self::Send(action) => ButtonAction::Send(f(action)),
            Self::AnimatedSend { action, animation } => ButtonAction::AnimatedSend {
                action: f(action),
                animation,
            },
        }
    }
}

impl<A: fmt::Debug> Describe for ButtonAction<A> {
    fn describe(&self) -> Description {
        let desc = Description::case("send").arg(None, Description::value(self.action()));
        match self.animation() {
            Some(animation) => desc.arg(Some("animation"), animation.describe()),
            None => desc,
        }
    }
}

/// A dialog button.
///
/// Built from a label, then refined with [`with_role`](Self::with_role),
/// [`send`](Self::send) or [`send_animated`](Self::send_animated).
///
/// ```
/// use modalstate_core::{ButtonRole, ButtonState};
///
/// let button = ButtonState::new("Delete").with_role(ButtonRole::Destructive).send(1_u32);
/// assert_eq!(button.role(), Some(ButtonRole::Destructive));
/// assert_eq!(button.action().map(|a| *a.action()), Some(1));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: serde::Serialize",
        deserialize = "A: serde::Deserialize<'de>"
    ))
)]
pub struct ButtonState<A> {
    #[cfg_attr(feature = "serde", serde(skip, default = "ButtonId::next"))]
    id: ButtonId,
    #[cfg_attr(feature = "serde", serde(default))]
    role: Option<ButtonRole>,
    #[cfg_attr(feature = "serde", serde(default))]
    action: Option<ButtonAction<A>>,
    label: TextState,
}

impl<A> ButtonState<A> {
    /// A plain button that only dismisses the dialog.
    pub fn new(label: impl Into<TextState>) -> Self {
        Self {
            id: ButtonId::next(),
            role: None,
            action: None,
            label: label.into(),
        }
    }

    /// A cancel-role button that only dismisses the dialog.
    pub fn cancel(label: impl Into<TextState>) -> Self {
        Self::new(label).with_role(ButtonRole::Cancel)
    }

    /// A destructive-role button with no action yet.
    pub fn destructive(label: impl Into<TextState>) -> Self {
        Self::new(label).with_role(ButtonRole::Destructive)
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: ButtonRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Emit `action` when tapped.
    #[must_use]
    pub fn send(mut self, action: A) -> Self {
        self.action = Some(ButtonAction::Send(action));
        self
    }

    /// Emit `action` inside an `animation` transition when tapped.
    #[must_use]
    pub fn send_animated(mut self, action: A, animation: Animation) -> Self {
        self.action = Some(ButtonAction::AnimatedSend { action, animation });
        self
    }

    /// Identity token. Not part of equality.
    #[inline]
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Semantic role, `None` for a plain button.
    #[inline]
    pub fn role(&self) -> Option<ButtonRole> {
        self.role
    }

    /// Tap handler, `None` when tapping only dismisses.
    #[inline]
    pub fn action(&self) -> Option<&ButtonAction<A>> {
        self.action.as_ref()
    }

    /// Display label.
    #[inline]
    pub fn label(&self) -> &TextState {
        &self.label
    }

    /// Hand the embedded action (if any) to `perform`.
    pub fn with_action<R>(&self, perform: impl FnOnce(Option<&A>) -> R) -> R {
        perform(self.action.as_ref().map(ButtonAction::action))
    }

    /// Transform the action type. The identity token is preserved.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> ButtonState<B> {
        ButtonState {
            id: self.id,
            role: self.role,
            action: self.action.map(|action| action.map(f)),
            label: self.label,
        }
    }
}

impl<A: PartialEq> PartialEq for ButtonState<A> {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.action == other.action && self.label == other.label
    }
}

impl<A: Eq> Eq for ButtonState<A> {}

impl<A: Hash> Hash for ButtonState<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.role.hash(state);
        self.action.hash(state);
        self.label.hash(state);
    }
}

impl<A: fmt::Debug> fmt::Debug for ButtonState<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonState")
            .field("role", &self.role)
            .field("action", &self.action)
            .field("label", &self.label)
            .finish()
    }
}

impl<A: fmt::Debug> Describe for ButtonState<A> {
    fn describe(&self) -> Description {
        let mut desc = Description::record("ButtonState");
        if let Some(role) = self.role {
            desc = desc.field("role", role.describe());
        }
        if let Some(action) = &self.action {
            desc = desc.field("action", action.describe());
        }
        desc.field("label", self.label.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_button_is_plain_and_dismiss_only() {
        let button = ButtonState::<u8>::new("OK");
        assert_eq!(button.role(), None);
        assert!(button.action().is_none());
        assert_eq!(button.label().as_str(), "OK");
    }

    #[test]
    fn convenience_constructors_set_role() {
        assert_eq!(
            ButtonState::<u8>::cancel("Cancel").role(),
            Some(ButtonRole::Cancel)
        );
        assert_eq!(
            ButtonState::<u8>::destructive("Delete").role(),
            Some(ButtonRole::Destructive)
        );
    }

    #[test]
    fn equality_ignores_identity() {
        let a = ButtonState::new("OK").send(1);
        let b = ButtonState::new("OK").send(1);
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_covers_every_field() {
        let base = ButtonState::new("OK").send(1);
        assert_ne!(base, ButtonState::new("Ok").send(1));
        assert_ne!(base, ButtonState::new("OK").send(2));
        assert_ne!(base, ButtonState::cancel("OK").send(1));
        assert_ne!(base, ButtonState::new("OK"));
        assert_ne!(
            base,
            ButtonState::new("OK").send_animated(1, Animation::Default)
        );
    }

    #[test]
    fn animation_hint_participates_in_equality() {
        let a = ButtonState::new("Go").send_animated(1, Animation::EaseIn);
        let b = ButtonState::new("Go").send_animated(1, Animation::EaseOut);
        assert_ne!(a, b);
    }

    #[test]
    fn button_action_accessors() {
        let plain = ButtonAction::Send("a");
        assert_eq!(*plain.action(), "a");
        assert_eq!(plain.animation(), None);

        let animated = ButtonAction::AnimatedSend {
            action: "b",
            animation: Animation::Spring,
        };
        assert_eq!(animated.animation(), Some(Animation::Spring));
        assert_eq!(animated.into_action(), "b");
    }

    #[test]
    fn with_action_passes_payload() {
        let button = ButtonState::new("OK").send(7);
        assert_eq!(button.with_action(|a| a.copied()), Some(7));

        let dismiss = ButtonState::<i32>::new("Close");
        assert_eq!(dismiss.with_action(|a| a.copied()), None);
    }

    #[test]
    fn map_preserves_identity_and_hint() {
        let button = ButtonState::destructive("Delete").send_animated(2, Animation::Linear);
        let id = button.id();
        let mapped = button.map(|n| format!("delete-{n}"));
        assert_eq!(mapped.id(), id);
        assert_eq!(mapped.role(), Some(ButtonRole::Destructive));
        assert_eq!(
            mapped.action(),
            Some(&ButtonAction::AnimatedSend {
                action: "delete-2".to_string(),
                animation: Animation::Linear,
            })
        );
    }

    #[test]
    fn non_comparable_actions_still_build() {
        struct Opaque;
        let button = ButtonState::new("Run").send(Opaque);
        assert!(button.action().is_some());
    }

    #[test]
    fn describe_omits_absent_role_and_action() {
        let desc = ButtonState::<bool>::new("OK").describe();
        assert_eq!(
            desc,
            Description::record("ButtonState").field("label", Description::Leaf("\"OK\"".into()))
        );
    }

    #[test]
    fn describe_animated_send() {
        let desc = ButtonState::destructive("Destroy")
            .send_animated(true, Animation::Default)
            .describe();
        let expected = Description::record("ButtonState")
            .field("role", Description::case("destructive"))
            .field(
                "action",
                Description::case("send")
                    .arg(None, Description::Leaf("true".into()))
                    .arg(Some("animation"), Description::case("default")),
            )
            .field("label", Description::Leaf("\"Destroy\"".into()));
        assert_eq!(desc, expected);
    }
}
