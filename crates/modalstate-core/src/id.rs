#![forbid(unsafe_code)]

//! Process-unique identity tokens.
//!
//! Identity tokens let a presentation layer tell two dialogs apart in lists or
//! diffs. They never participate in equality or hashing of the values that
//! carry them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for dialog identities.
static DIALOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Global counter for button identities.
static BUTTON_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a dialog descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(u64);

impl DialogId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        Self(DIALOG_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DialogId({})", self.0)
    }
}

/// Identity of a button descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(u64);

impl ButtonId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        Self(BUTTON_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ButtonId({})", self.0)
    }
}
