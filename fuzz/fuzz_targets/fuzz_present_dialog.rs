#![no_main]

use std::cell::RefCell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use modalstate_bridge::{BridgeConfig, NativeHost, present_with};
use modalstate_core::{
    AlertState, Animation, ButtonState, ConfirmationDialogState, DialogKind, DialogState,
};

#[derive(Debug, Arbitrary)]
enum Role {
    Plain,
    Destructive,
    Cancel,
}

#[derive(Debug, Arbitrary)]
struct Button {
    label: String,
    role: Role,
    action: Option<(u8, bool)>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    sheet: bool,
    title: String,
    message: Option<String>,
    buttons: Vec<Button>,
}

fn build<K: DialogKind>(input: &Input) -> DialogState<u8, K> {
    let buttons = input
        .buttons
        .iter()
        .map(|b| {
            let button = match b.role {
                Role::Plain => ButtonState::new(b.label.clone()),
                Role::Destructive => ButtonState::destructive(b.label.clone()),
                Role::Cancel => ButtonState::cancel(b.label.clone()),
            };
            match b.action {
                None => button,
                Some((action, false)) => button.send(action),
                Some((action, true)) => button.send_animated(action, Animation::Default),
            }
        })
        .collect();
    DialogState::from_parts(
        input.title.clone(),
        buttons,
        input.message.clone().map(Into::into),
    )
}

fn check<K: DialogKind>(dialog: &DialogState<u8, K>) {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&sent);
    let config = BridgeConfig::new().warn_on_dropped_buttons(false);
    let native = present_with(
        &mut NativeHost,
        &config,
        dialog,
        Rc::new(move |action: u8| sink.borrow_mut().push(action)),
    );

    let expected_shown = match dialog.buttons().len() {
        0 => 0,
        2 => 2,
        _ => 1,
    };
    assert_eq!(native.buttons().count(), expected_shown);
    assert_eq!(native.title(), dialog.title().as_str());

    let mut expected = Vec::new();
    for (shown, button) in native.buttons().zip(dialog.buttons()) {
        shown.tap();
        if let Some(action) = button.action() {
            expected.push(*action.action());
        }
    }
    assert_eq!(*sent.borrow(), expected);
}

fuzz_target!(|input: Input| {
    if input.sheet {
        let dialog: ConfirmationDialogState<u8> = build(&input);
        assert_eq!(dialog, build(&input));
        check(&dialog);
    } else {
        let dialog: AlertState<u8> = build(&input);
        assert_eq!(dialog, build(&input));
        check(&dialog);
    }
});
