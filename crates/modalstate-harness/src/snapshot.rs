#![forbid(unsafe_code)]

//! File-backed snapshot assertions.
//!
//! Snapshots live in `tests/snapshots/<name>.snap` under the calling crate.
//! Run with `BLESS=1` to create or update them.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing snapshot | No `.snap` file and `BLESS` unset | `SnapshotError::Missing` |
//! | Mismatch | Dump differs from file (ignoring trailing whitespace) | `SnapshotError::Mismatch` |
//! | I/O error | Read or write failed | `SnapshotError::Io` |

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that switches assertions into update mode.
pub const BLESS_ENV: &str = "BLESS";

/// Errors from snapshot checks.
#[derive(Debug)]
pub enum SnapshotError {
    /// The snapshot file could not be read or written.
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// No snapshot exists and blessing is off.
    Missing {
        /// Expected file location.
        path: PathBuf,
    },
    /// The stored snapshot differs from the actual dump.
    Mismatch {
        /// Snapshot name.
        name: String,
        /// Stored contents.
        expected: String,
        /// Actual dump.
        actual: String,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "snapshot i/o error at {}: {source}", path.display())
            }
            Self::Missing { path } => write!(
                f,
                "snapshot missing: {} (run with {BLESS_ENV}=1 to create it)",
                path.display()
            ),
            Self::Mismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "snapshot '{name}' mismatch\n--- expected\n{expected}\n--- actual\n{actual}"
            ),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Whether snapshot blessing is enabled in the environment.
pub fn bless_enabled() -> bool {
    std::env::var(BLESS_ENV).is_ok_and(|v| v == "1")
}

/// Compare `actual` with the snapshot `name` stored in `dir`.
///
/// When `bless` is set the snapshot is (re)written instead.
pub fn check_snapshot(
    dir: &Path,
    name: &str,
    actual: &str,
    bless: bool,
) -> Result<(), SnapshotError> {
    let path = dir.join(format!("{name}.snap"));

    if bless {
        fs::create_dir_all(dir).map_err(|source| SnapshotError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut contents = actual.trim_end().to_string();
        contents.push('\n');
        return fs::write(&path, contents).map_err(|source| SnapshotError::Io { path, source });
    }

    let expected = match fs::read_to_string(&path) {
        Ok(expected) => expected,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(SnapshotError::Missing { path });
        }
        Err(source) => return Err(SnapshotError::Io { path, source }),
    };

    if expected.trim_end() == actual.trim_end() {
        Ok(())
    } else {
        Err(SnapshotError::Mismatch {
            name: name.to_string(),
            expected: expected.trim_end().to_string(),
            actual: actual.trim_end().to_string(),
        })
    }
}

/// Panic unless `actual` matches the stored snapshot. Used by [`assert_snapshot!`](crate::assert_snapshot).
#[track_caller]
pub fn assert_snapshot_in(dir: &Path, name: &str, actual: &str) {
    if let Err(err) = check_snapshot(dir, name, actual, bless_enabled()) {
        panic!("{err}");
    }
}

/// Assert that a describable value dumps to the named snapshot.
///
/// ```ignore
/// assert_snapshot!("alert_basic", &alert);
/// ```
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $value:expr) => {
        $crate::snapshot::assert_snapshot_in(
            &::std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("tests")
                .join("snapshots"),
            $name,
            &$crate::dump($value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn scratch_dir() -> PathBuf {
        let n = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "modalstate-harness-{}-{n}",
            std::process::id()
        ))
    }

    #[test]
    fn missing_snapshot_is_reported() {
        let dir = scratch_dir();
        let err = check_snapshot(&dir, "absent", "x", false).unwrap_err();
        assert!(matches!(err, SnapshotError::Missing { .. }));
        assert!(err.to_string().contains("BLESS=1"));
    }

    #[test]
    fn bless_then_match() {
        let dir = scratch_dir();
        check_snapshot(&dir, "round", "value\n", true).unwrap();
        check_snapshot(&dir, "round", "value", false).unwrap();
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn mismatch_shows_both_sides() {
        let dir = scratch_dir();
        check_snapshot(&dir, "diff", "old", true).unwrap();
        let err = check_snapshot(&dir, "diff", "new", false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--- expected\nold"));
        assert!(message.contains("--- actual\nnew"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = SnapshotError::Io {
            path: PathBuf::from("x"),
            source: io::Error::other("boom"),
        };
        assert!(err.source().is_some());
    }
}
