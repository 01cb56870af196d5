#![forbid(unsafe_code)]

//! Test harness for modalstate.
//!
//! - [`dump`] renders any [`Describe`](modalstate_core::Describe) value into
//!   the stable text form used for snapshots and diffs.
//! - [`assert_snapshot!`] compares a dump against `tests/snapshots/*.snap`.
//!   Run `BLESS=1 cargo test` to create or update snapshots.
//! - [`strategy`] provides proptest strategies for descriptors.

pub mod dump;
pub mod snapshot;
pub mod strategy;

pub use dump::{dump, render};
pub use snapshot::{SnapshotError, check_snapshot};
