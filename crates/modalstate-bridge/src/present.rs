#![forbid(unsafe_code)]

//! Mapping dialog descriptors onto the host's fixed-arity constructors.
//!
//! # Slot policy
//!
//! | Buttons | Host constructor | Shown |
//! |---------|------------------|-------|
//! | 0 | dismiss | none |
//! | 1 | dismiss | `buttons[0]` |
//! | 2 | primary/secondary | `buttons[0]`, `buttons[1]` |
//! | 3+ | dismiss | `buttons[0]` |
//!
//! Buttons are never reordered by role. With three or more buttons everything
//! after the first is dropped; the result is unchanged, but a warning is logged
//! unless [`BridgeConfig::warn_on_dropped_buttons`] is off.
//!
//! # Invariants
//!
//! 1. The mapping is total: every descriptor produces exactly one host dialog.
//! 2. Each shown button whose action is set invokes the callback once per tap
//!    with a clone of that action. Buttons without an action only dismiss.
//! 3. The flavor picks the host constructor family; the slot policy is shared.

use std::rc::Rc;

use modalstate_core::{ButtonState, DialogKind, DialogState, DialogStyle};

use crate::host::{DialogHost, NativeRole, Slots, TapCallback};
use crate::native::{NativeDialog, NativeHost};

/// Bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Log a warning when buttons are dropped.
    pub warn_on_dropped_buttons: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            warn_on_dropped_buttons: true,
        }
    }
}

impl BridgeConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether dropped buttons are reported.
    #[must_use]
    pub fn warn_on_dropped_buttons(mut self, warn: bool) -> Self {
        self.warn_on_dropped_buttons = warn;
        self
    }
}

/// Which buttons of a descriptor the host will show.
#[derive(Debug)]
pub struct SlotPlan<'a, A> {
    /// Buttons placed into host slots.
    pub slots: Slots<&'a ButtonState<A>>,
    /// Buttons the host cannot show.
    pub dropped: &'a [ButtonState<A>],
}

/// Apply the slot policy to an ordered button list.
pub fn plan_slots<A>(buttons: &[ButtonState<A>]) -> SlotPlan<'_, A> {
    match buttons {
        [primary, secondary] => SlotPlan {
            slots: Slots::PrimarySecondary { primary, secondary },
            dropped: &buttons[2..],
        },
        [first, rest @ ..] => SlotPlan {
            slots: Slots::Dismiss(Some(first)),
            dropped: rest,
        },
        [] => SlotPlan {
            slots: Slots::Dismiss(None),
            dropped: buttons,
        },
    }
}

/// Map `dialog` onto the reference [`NativeHost`] with default configuration.
///
/// Tapping a shown button that carries an action calls `on_action` with it.
pub fn present<A, K>(dialog: &DialogState<A, K>, on_action: impl Fn(A) + 'static) -> NativeDialog
where
    A: Clone + 'static,
    K: DialogKind,
{
    present_with(
        &mut NativeHost,
        &BridgeConfig::default(),
        dialog,
        Rc::new(on_action),
    )
}

/// Map `dialog` onto an arbitrary host.
pub fn present_with<H, A, K>(
    host: &mut H,
    config: &BridgeConfig,
    dialog: &DialogState<A, K>,
    on_action: Rc<dyn Fn(A)>,
) -> H::Dialog
where
    H: DialogHost,
    A: Clone + 'static,
    K: DialogKind,
{
    let _span = tracing::debug_span!(
        "present_dialog",
        kind = K::TYPE_NAME,
        id = dialog.id().id(),
        buttons = dialog.buttons().len()
    )
    .entered();

    let plan = plan_slots(dialog.buttons());
    if !plan.dropped.is_empty() && config.warn_on_dropped_buttons {
        tracing::warn!(
            kind = K::TYPE_NAME,
            id = dialog.id().id(),
            total = dialog.buttons().len(),
            dropped = plan.dropped.len(),
            "host shows at most one button unless exactly two are given; extra buttons dropped"
        );
    }

    let slots = plan
        .slots
        .map(|button| native_button(host, button, &on_action));

    match K::STYLE {
        DialogStyle::Alert => host.alert(dialog.title(), dialog.message(), slots),
        DialogStyle::ConfirmationDialog => {
            host.action_sheet(dialog.title(), dialog.message(), slots)
        }
    }
}

fn native_button<H, A>(
    host: &mut H,
    button: &ButtonState<A>,
    on_action: &Rc<dyn Fn(A)>,
) -> H::Button
where
    H: DialogHost,
    A: Clone + 'static,
{
    let animation = button.action().and_then(|action| action.animation());
    let on_tap = button.action().map(|action| {
        let action = action.action().clone();
        let send = Rc::clone(on_action);
        Box::new(move || send(action.clone())) as TapCallback
    });
    host.button(
        button.label(),
        NativeRole::from(button.role()),
        animation,
        on_tap,
    )
}
