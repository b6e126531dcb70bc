//! Synthesis driver
//!
//! Renders each emitter against what is on disk and writes the result. Files
//! are independent: one failure is recorded and the rest still render.

use std::path::{Path, PathBuf};

use crate::domain::entities::{FileEmitter, RenderMode, Rendered};
use crate::domain::ports::FileSystem;
use crate::error::{ProjgenError, ProjgenResult};

/// A file that could not be rendered or written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for FileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Result of a synthesis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthReport {
    /// Files written
    pub written: Vec<String>,
    /// Files whose bytes already matched
    pub unchanged: Vec<String>,
    /// Create-only files left alone because they exist
    pub skipped: Vec<String>,
    /// Files that failed
    pub errors: Vec<FileFailure>,
}

impl SynthReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of files visited
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len() + self.skipped.len() + self.errors.len()
    }

    /// Turn recorded failures into an error; files already written stay.
    pub fn into_result(self) -> ProjgenResult<Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(ProjgenError::SynthFailed {
                failed: self.errors.len(),
                paths: self.errors.iter().map(|e| e.path.clone()).collect(),
            })
        }
    }
}

/// One emitter rendered against the current disk state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// Existing content, if any; invalid UTF-8 is replaced for display
    pub existing: Option<String>,
    pub outcome: Result<Rendered, String>,
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn render_one(
    emitter: &FileEmitter,
    fs: &dyn FileSystem,
    target: &Path,
) -> (Option<String>, ProjgenResult<Rendered>) {
    // Create-only files are never read.
    if emitter.mode() == RenderMode::CreateOnly && fs.exists(target) {
        return (None, Ok(Rendered::Skipped));
    }
    let existing = match fs.read_bytes_if_exists(target) {
        Ok(existing) => existing,
        Err(err) => return (None, Err(err.into())),
    };
    let rendered = emitter.render(existing.as_deref());
    let existing = existing.map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
    (existing, rendered)
}

pub(crate) fn plan(
    emitters: &[FileEmitter],
    fs: &dyn FileSystem,
    outdir: &Path,
) -> Vec<PlannedFile> {
    emitters
        .iter()
        .map(|emitter| {
            let target = outdir.join(emitter.path());
            let (existing, outcome) = render_one(emitter, fs, &target);
            PlannedFile {
                path: emitter.path().to_path_buf(),
                existing,
                outcome: outcome.map_err(|e| e.to_string()),
            }
        })
        .collect()
}

pub(crate) fn synth(emitters: &[FileEmitter], fs: &dyn FileSystem, outdir: &Path) -> SynthReport {
    let mut report = SynthReport::new();

    for emitter in emitters {
        let rel = display(emitter.path());
        let target = outdir.join(emitter.path());

        let (_, rendered) = render_one(emitter, fs, &target);
        let outcome = rendered.and_then(|rendered| match rendered {
            Rendered::Write(content) => fs
                .write(&target, &content)
                .map(|_| Rendered::Write(content))
                .map_err(ProjgenError::from),
            other => Ok(other),
        });

        match outcome {
            Ok(Rendered::Write(_)) => {
                tracing::debug!(path = %rel, "written");
                report.written.push(rel);
            }
            Ok(Rendered::Unchanged) => {
                tracing::trace!(path = %rel, "unchanged");
                report.unchanged.push(rel);
            }
            Ok(Rendered::Skipped) => {
                tracing::debug!(path = %rel, "exists, left untouched");
                report.skipped.push(rel);
            }
            Err(err) => {
                tracing::warn!(path = %rel, error = %err, "failed to synthesize file");
                report.errors.push(FileFailure {
                    path: rel,
                    message: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        written = report.written.len(),
        unchanged = report.unchanged.len(),
        skipped = report.skipped.len(),
        errors = report.errors.len(),
        "synthesis finished"
    );
    report
}
