#![forbid(unsafe_code)]

//! Snapshot tests for dialog dumps.
//!
//! Run `BLESS=1 cargo test --package modalstate-harness` to create/update snapshots.

use modalstate_core::{AlertState, Animation, ButtonState, ConfirmationDialogState};
use modalstate_harness::assert_snapshot;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ShareAction {
    Copy,
    Mail { to: &'static str },
}

#[test]
fn snapshot_alert_destroy_cancel() {
    let alert = AlertState::builder("Alert!")
        .button(ButtonState::destructive("Destroy").send_animated(true, Animation::Default))
        .button(ButtonState::cancel("Cancel").send(false))
        .message("Something went wrong...")
        .build();
    assert_snapshot!("alert_destroy_cancel", &alert);
}

#[test]
fn snapshot_alert_title_only() {
    let alert = AlertState::<bool>::new("Saved");
    assert_snapshot!("alert_title_only", &alert);
}

#[test]
fn snapshot_confirmation_dialog_actions() {
    let dialog = ConfirmationDialogState::builder("Share")
        .button(ButtonState::new("Copy link").send(ShareAction::Copy))
        .button(
            ButtonState::new("Mail").send_animated(ShareAction::Mail { to: "team" }, Animation::EaseInOut),
        )
        .button(ButtonState::cancel("Cancel"))
        .build();
    assert_snapshot!("confirmation_dialog_actions", &dialog);
}
