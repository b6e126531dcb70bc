//! Pattern list value object
//!
//! Backs ignore-style files (`.gitignore`, `.npmignore`). Entries are kept in
//! contribution order and never removed; the consumer of the rendered file
//! applies gitignore last-match-wins semantics.

use ignore::gitignore::GitignoreBuilder;
use std::path::Path;

/// Marker written at the top of every rendered pattern file.
pub const GENERATED_MARKER: &str = "# ~~ Generated by projgen. To modify, edit projgen.toml and run \"projgen synth\".";

/// Whether a pattern excludes or re-includes matching paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Exclude,
    Include,
}

/// A glob tagged include/exclude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub pattern: String,
    pub kind: PatternKind,
}

impl PatternEntry {
    /// Render the entry as a single ignore-file line.
    pub fn to_line(&self) -> String {
        match self.kind {
            PatternKind::Exclude => self.pattern.clone(),
            PatternKind::Include => format!("!{}", self.pattern),
        }
    }
}

/// Ordered set of include/exclude rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternList {
    entries: Vec<PatternEntry>,
}

impl PatternList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append exclude entries in call order.
    pub fn exclude<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_all(patterns, PatternKind::Exclude);
    }

    /// Append include (negated) entries in call order.
    pub fn include<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_all(patterns, PatternKind::Include);
    }

    fn push_all<I, S>(&mut self, patterns: I, kind: PatternKind)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            let pattern = pattern.into();
            tracing::trace!(%pattern, ?kind, "pattern registered");
            self.entries.push(PatternEntry { pattern, kind });
        }
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective ordered lines, without the generated marker.
    pub fn render(&self) -> Vec<String> {
        self.entries.iter().map(PatternEntry::to_line).collect()
    }

    /// Full file body: marker followed by the rendered lines.
    pub fn render_file(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(GENERATED_MARKER.to_string());
        lines.extend(self.render());
        lines
    }

    /// Evaluate the rendered list against a relative path.
    ///
    /// Uses the same last-match-wins rules git and npm apply to the file.
    /// Entries the glob engine rejects are skipped.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        let mut builder = GitignoreBuilder::new("");
        for line in self.render() {
            if let Err(err) = builder.add_line(None, &line) {
                tracing::debug!(%line, %err, "skipping unparsable pattern");
            }
        }
        match builder.build() {
            Ok(matcher) => matcher
                .matched_path_or_any_parents(rel_path, is_dir)
                .is_ignore(),
            Err(_) => false,
        }
    }
}
