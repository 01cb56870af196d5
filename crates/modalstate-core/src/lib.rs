#![forbid(unsafe_code)]

//! Comparable value model for alerts and confirmation dialogs.
//!
//! Application logic describes a blocking dialog as a plain value: a
//! [`DialogState`] holding a title, an optional message and an ordered list of
//! [`ButtonState`]s, each carrying the application action it emits on tap.
//! The value is stored in application state (typically as an `Option`) and a
//! presentation layer maps it to the host's native dialog.
//!
//! Equality and hashing are structural and available exactly when the action
//! type supports them.

pub mod builder;
pub mod button;
pub mod describe;
pub mod dialog;
pub mod id;
pub mod text;

pub use builder::DialogBuilder;
pub use button::{Animation, ButtonAction, ButtonRole, ButtonState};
pub use describe::{Describe, Description};
pub use dialog::{
    Alert, AlertState, ConfirmationDialog, ConfirmationDialogState, DialogKind, DialogState,
    DialogStyle,
};
pub use id::{ButtonId, DialogId};
pub use text::TextState;
