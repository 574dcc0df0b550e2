#![forbid(unsafe_code)]

//! Snapshot/golden testing for Veneer.
//!
//! Captures `Buffer` output as plain text, compares against stored
//! `.snap` files, and shows diffs on mismatch.
//!
//! # Quick Start
//!
//! ```ignore
//! use veneer_harness::{MatchMode, assert_snapshot};
//!
//! #[test]
//! fn my_widget_renders_correctly() {
//!     let mut frame = Frame::new(10, 3);
//!     // ... render widget into frame ...
//!     assert_snapshot!("my_widget_basic", &frame.buffer);
//! }
//! ```
//!
//! # Updating Snapshots
//!
//! Run tests with `BLESS=1` to create or update snapshot files. They
//! are stored under `tests/snapshots/` relative to the crate's
//! `CARGO_MANIFEST_DIR`.

pub mod golden;

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

use veneer_render::buffer::Buffer;

pub use golden::{RunLog, buffer_checksum, text_checksum};

/// Convert a `Buffer` to a plain text string, one line per row. Empty
/// cells become spaces.
#[must_use]
pub fn buffer_to_text(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 1) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);
    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }
        out.push_str(&buf.row_text(y));
    }
    out
}

/// Comparison mode for snapshot testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact string comparison.
    Exact,
    /// Trim trailing whitespace on each line before comparing.
    TrimTrailing,
    /// Collapse whitespace runs to single spaces and trim each line.
    Fuzzy,
}

fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .lines()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n"),
        MatchMode::Fuzzy => text
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Line-by-line diff between two texts.
///
/// Lines prefixed ` ` match, `-` appear only in `expected`, `+` only in
/// `actual`. Empty string when the inputs are identical.
#[must_use]
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let max_lines = expected_lines.len().max(actual_lines.len());
    let mut out = String::new();
    let mut has_diff = false;

    for i in 0..max_lines {
        match (expected_lines.get(i).copied(), actual_lines.get(i).copied()) {
            (Some(e), Some(a)) if e == a => {
                let _ = writeln!(out, " {e}");
            }
            (Some(e), Some(a)) => {
                let _ = writeln!(out, "-{e}");
                let _ = writeln!(out, "+{a}");
                has_diff = true;
            }
            (Some(e), None) => {
                let _ = writeln!(out, "-{e}");
                has_diff = true;
            }
            (None, Some(a)) => {
                let _ = writeln!(out, "+{a}");
                has_diff = true;
            }
            (None, None) => {}
        }
    }

    if has_diff { out } else { String::new() }
}

fn snapshot_path(base_dir: &Path, name: &str) -> PathBuf {
    base_dir
        .join("tests")
        .join("snapshots")
        .join(format!("{name}.snap"))
}

fn is_bless() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Assert that a buffer's text representation matches a stored snapshot.
///
/// # Panics
///
/// * If the snapshot file does not exist and `BLESS=1` is **not** set.
/// * If the buffer output does not match the stored snapshot.
pub fn assert_buffer_snapshot(name: &str, buf: &Buffer, base_dir: &str, mode: MatchMode) {
    let path = snapshot_path(Path::new(base_dir), name);
    let actual = buffer_to_text(buf);

    if is_bless() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create snapshot directory");
        }
        std::fs::write(&path, &actual).expect("failed to write snapshot");
        return;
    }

    match std::fs::read_to_string(&path) {
        Ok(expected) => {
            let norm_expected = normalize(&expected, mode);
            let norm_actual = normalize(&actual, mode);
            if norm_expected != norm_actual {
                let diff = diff_text(&norm_expected, &norm_actual);
                panic!(
                    "\n\
                     === Snapshot mismatch: '{name}' ===\n\
                     File: {}\n\
                     Mode: {mode:?}\n\
                     Set BLESS=1 to update.\n\n\
                     Diff (- expected, + actual):\n{diff}",
                    path.display()
                );
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            panic!(
                "\n\
                 === No snapshot found: '{name}' ===\n\
                 Expected at: {}\n\
                 Run with BLESS=1 to create it.\n\n\
                 Actual output ({w}x{h}):\n{actual}",
                path.display(),
                w = buf.width(),
                h = buf.height(),
            );
        }
        Err(e) => {
            panic!("Failed to read snapshot '{}': {e}", path.display());
        }
    }
}

/// Assert that a buffer matches a stored snapshot, trimming trailing
/// whitespace. See [`assert_buffer_snapshot`].
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $buf:expr) => {
        $crate::assert_buffer_snapshot(
            $name,
            $buf,
            env!("CARGO_MANIFEST_DIR"),
            $crate::MatchMode::TrimTrailing,
        )
    };
    ($name:expr, $buf:expr, $mode:expr) => {
        $crate::assert_buffer_snapshot($name, $buf, env!("CARGO_MANIFEST_DIR"), $mode)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_render::cell::Cell;

    #[test]
    fn buffer_to_text_rows_and_spaces() {
        let mut buf = Buffer::new(3, 2);
        buf.set(0, 0, Cell::from_char('a'));
        buf.set(2, 1, Cell::from_char('b'));
        assert_eq!(buffer_to_text(&buf), "a  \n  b");
    }

    #[test]
    fn normalize_modes() {
        let text = "a  b  \nc";
        assert_eq!(normalize(text, MatchMode::Exact), text);
        assert_eq!(normalize(text, MatchMode::TrimTrailing), "a  b\nc");
        assert_eq!(normalize(text, MatchMode::Fuzzy), "a b\nc");
    }

    #[test]
    fn diff_text_marks_changes() {
        let diff = diff_text("a\nb", "a\nc");
        assert!(diff.contains(" a"));
        assert!(diff.contains("-b"));
        assert!(diff.contains("+c"));
        assert_eq!(diff_text("same", "same"), "");
    }

    #[test]
    fn diff_text_handles_length_mismatch() {
        let diff = diff_text("a", "a\nextra");
        assert!(diff.contains("+extra"));
    }
}
