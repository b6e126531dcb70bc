//! Differ Domain Service
//!
//! Line diffs between what is on disk and what synthesis would write.

use similar::{ChangeTag, TextDiff};

/// Result of a diff operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
    /// Unified diff text, empty when nothing changed
    pub unified: String,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Short summary (e.g., "+5, -3")
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Unchanged lines shown around each hunk
const CONTEXT_RADIUS: usize = 3;

/// Differ service for computing file differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Diff `old` against `new`, labelling the unified output with `path`.
    /// A missing file diffs as empty against `/dev/null`.
    pub fn diff(&self, path: &str, old: Option<&str>, new: &str) -> DiffResult {
        let before = old.unwrap_or("");
        let text_diff = TextDiff::from_lines(before, new);

        let mut result = DiffResult::default();
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Delete => result.deletions += 1,
                ChangeTag::Insert => result.additions += 1,
                ChangeTag::Equal => {}
            }
        }

        if result.has_changes() {
            let old_label = match old {
                Some(_) => format!("a/{}", path),
                None => "/dev/null".to_string(),
            };
            result.unified = text_diff
                .unified_diff()
                .context_radius(CONTEXT_RADIUS)
                .header(&old_label, &format!("b/{}", path))
                .to_string();
        }
        result
    }
}
