#![forbid(unsafe_code)]

//! modalstate public facade.
//!
//! Re-exports the dialog value model and, with the default `bridge` feature,
//! the host bridge. Most applications only need the [`prelude`].
//!
//! ```
//! use modalstate::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Action {
//!     Delete,
//! }
//!
//! let alert: AlertState<Action> = AlertState::builder("Delete?")
//!     .button(ButtonState::destructive("Delete").send(Action::Delete))
//!     .button(ButtonState::cancel("Cancel"))
//!     .build();
//!
//! let native = present(&alert, |_action| {});
//! assert_eq!(native.primary().map(|b| b.label()), Some("Delete"));
//! ```

pub use modalstate_core as model;
pub use modalstate_core::*;

#[cfg(feature = "bridge")]
pub use modalstate_bridge as bridge;

/// Commonly used types.
pub mod prelude {
    pub use modalstate_core::{
        AlertState, Animation, ButtonAction, ButtonRole, ButtonState, ConfirmationDialogState,
        Describe, DialogState, TextState,
    };

    #[cfg(feature = "bridge")]
    pub use modalstate_bridge::{BridgeConfig, DialogHost, NativeDialog, present, present_with};
}
