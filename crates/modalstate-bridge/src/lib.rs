#![forbid(unsafe_code)]

//! Host bridge for modalstate dialogs.
//!
//! Host frameworks typically build dialogs through fixed-arity constructors:
//! no button, one dismiss button, or exactly two buttons. This crate maps an
//! arbitrary [`DialogState`](modalstate_core::DialogState) onto that surface
//! and wires each shown button's action to an application callback.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use modalstate_bridge::present;
//! use modalstate_core::{AlertState, ButtonState};
//!
//! let alert = AlertState::builder("Delete?")
//!     .button(ButtonState::destructive("Delete").send("delete"))
//!     .button(ButtonState::cancel("Cancel"))
//!     .build();
//!
//! let sent = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&sent);
//! let native = present(&alert, move |action| sink.borrow_mut().push(action));
//!
//! native.primary().unwrap().tap();
//! native.secondary().unwrap().tap();
//! assert_eq!(*sent.borrow(), ["delete"]);
//! ```

pub mod host;
pub mod native;
pub mod present;

pub use host::{DialogHost, NativeRole, Slots, TapCallback};
pub use native::{NativeButton, NativeDialog, NativeHost};
pub use present::{BridgeConfig, SlotPlan, plan_slots, present, present_with};
