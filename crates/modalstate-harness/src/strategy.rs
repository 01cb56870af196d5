#![forbid(unsafe_code)]

//! Proptest strategies for dialog descriptors.

use std::fmt;

use modalstate_core::{Animation, ButtonRole, ButtonState, DialogKind, DialogState, TextState};
use proptest::prelude::*;

/// Short printable text.
pub fn text() -> impl Strategy<Value = TextState> {
    "[A-Za-z0-9 .!?]{0,12}".prop_map(TextState::from)
}

/// Any role, including none.
pub fn role() -> impl Strategy<Value = Option<ButtonRole>> {
    prop_oneof![
        Just(None),
        Just(Some(ButtonRole::Destructive)),
        Just(Some(ButtonRole::Cancel)),
    ]
}

/// Any animation hint.
pub fn animation() -> impl Strategy<Value = Animation> {
    prop_oneof![
        Just(Animation::Default),
        Just(Animation::Linear),
        Just(Animation::EaseIn),
        Just(Animation::EaseOut),
        Just(Animation::EaseInOut),
        Just(Animation::Spring),
    ]
}

/// Buttons with actions drawn from `action`.
pub fn button<A, S>(action: S) -> impl Strategy<Value = ButtonState<A>>
where
    A: fmt::Debug,
    S: Strategy<Value = A>,
{
    (
        text(),
        role(),
        proptest::option::of((action, proptest::option::of(animation()))),
    )
        .prop_map(|(label, role, handler)| {
            let button = ButtonState::new(label);
            let button = match role {
                Some(role) => button.with_role(role),
                None => button,
            };
            match handler {
                None => button,
                Some((action, None)) => button.send(action),
                Some((action, Some(animation))) => button.send_animated(action, animation),
            }
        })
}

/// Dialogs with up to `max_buttons` buttons.
pub fn dialog<A, K, S>(action: S, max_buttons: usize) -> impl Strategy<Value = DialogState<A, K>>
where
    A: fmt::Debug,
    K: DialogKind,
    S: Strategy<Value = A>,
{
    (
        text(),
        proptest::collection::vec(button(action), 0..=max_buttons),
        proptest::option::of(text()),
    )
        .prop_map(|(title, buttons, message)| {
            DialogState::<A, K>::from_parts(title, buttons, message)
        })
}
