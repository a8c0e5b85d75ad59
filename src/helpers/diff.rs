//! Helpers for revision diff rows.

use serde::{Deserialize, Serialize};

/// How a file changed between two package revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffState {
    Added,
    Deleted,
    Changed,
    /// Unchanged, or any state the caller reports that we do not know.
    #[default]
    #[serde(other)]
    Unchanged,
}

impl DiffState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        }
    }

    /// Parse a state name. Unknown names are treated as unchanged.
    pub fn from_str(s: &str) -> Self {
        match s {
            "added" => Self::Added,
            "deleted" => Self::Deleted,
            "changed" => Self::Changed,
            _ => Self::Unchanged,
        }
    }
}

impl From<&str> for DiffState {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl std::fmt::Display for DiffState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS badge class for a diff state.
pub fn badge_for_diff_state(state: impl Into<DiffState>) -> &'static str {
    match state.into() {
        DiffState::Added => "badge-success",
        DiffState::Deleted => "badge-danger",
        DiffState::Changed => "badge-warning",
        DiffState::Unchanged => "badge-primary",
    }
}

/// Whether a diff row starts expanded.
///
/// Only top-level spec files, changelogs and `_patchinfo` are opened,
/// and never when the file was deleted.
pub fn expand_diff(filename: &str, state: impl Into<DiffState>) -> bool {
    state.into() != DiffState::Deleted
        && !filename.contains('/')
        && (filename == "_patchinfo" || filename.ends_with(".spec") || filename.ends_with(".changes"))
}

/// Revision to link a diff row to.
///
/// A deleted file only exists up to the previous revision. `revision` is
/// parsed leniently (leading integer, 0 when there is none) and the result
/// never goes below zero.
pub fn calculate_revision_on_state(revision: &str, state: impl Into<DiffState>) -> u64 {
    let mut result = parse_leading_int(revision);
    if state.into() == DiffState::Deleted {
        result = result.saturating_sub(1);
    }
    result.max(0) as u64
}

/// Parse the leading integer of `s`, ignoring trailing text.
///
/// Leading whitespace and a sign are accepted. Anything without leading
/// digits parses as 0.
fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if value == 0 && !digits.starts_with(|c: char| c.is_ascii_digit()) {
        tracing::debug!("Revision {:?} is not numeric, using 0", s);
    }

    if negative {
        -value
    } else {
        value
    }
}
