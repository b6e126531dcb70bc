//! Structured file emitter
//!
//! An in-memory representation of one output file plus its render mode.
//! Rendering is a pure function of the held content and the bytes already on
//! disk. Only merge-preserve interprets those bytes; the other modes compare
//! them as-is. Writing is left to the synthesis driver.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::services::json_merge::merge_preserving;
use crate::error::{ProjgenError, ProjgenResult};

/// How an emitter treats a file that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Overwrite unconditionally
    #[default]
    Replace,
    /// Merge held top-level JSON keys into the existing object, keeping unknown keys
    MergePreserve,
    /// Write only when nothing exists at the path
    CreateOnly,
}

/// What an emitter holds
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Json(Value),
    Lines(Vec<String>),
    Text(String),
}

impl FileContent {
    /// Serialize without regard to existing state.
    ///
    /// JSON is pretty-printed with two-space indentation; every format ends
    /// with a single newline.
    pub fn serialize(&self) -> ProjgenResult<String> {
        match self {
            FileContent::Json(value) => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
            FileContent::Lines(lines) => {
                let mut out = lines.join("\n");
                out.push('\n');
                Ok(out)
            }
            FileContent::Text(text) => {
                if text.ends_with('\n') {
                    Ok(text.clone())
                } else {
                    Ok(format!("{}\n", text))
                }
            }
        }
    }
}

/// Result of rendering one emitter against the current disk state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Bytes to write
    Write(String),
    /// Existing file already holds exactly these bytes
    Unchanged,
    /// Create-only file already present; left alone
    Skipped,
}

/// One output file
#[derive(Debug, Clone, PartialEq)]
pub struct FileEmitter {
    path: PathBuf,
    content: FileContent,
    mode: RenderMode,
    /// Merge-preserve keys removed from the existing object when not held
    managed_keys: Vec<String>,
}

impl FileEmitter {
    pub fn new(path: impl Into<PathBuf>, content: FileContent, mode: RenderMode) -> Self {
        Self {
            path: path.into(),
            content,
            mode,
            managed_keys: Vec::new(),
        }
    }

    /// JSON file overwritten on every synthesis
    pub fn json(path: impl Into<PathBuf>, value: Value) -> Self {
        Self::new(path, FileContent::Json(value), RenderMode::Replace)
    }

    /// JSON file merged into whatever a human left on disk
    pub fn json_merged(path: impl Into<PathBuf>, value: Value) -> Self {
        Self::new(path, FileContent::Json(value), RenderMode::MergePreserve)
    }

    /// Line-oriented text file overwritten on every synthesis
    pub fn lines(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self::new(path, FileContent::Lines(lines), RenderMode::Replace)
    }

    /// Text file written once and then owned by the user
    pub fn text_once(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self::new(path, FileContent::Text(text.into()), RenderMode::CreateOnly)
    }

    /// Declare top-level keys this emitter owns. A managed key absent from
    /// the held object is dropped from the existing file instead of kept.
    pub fn with_managed_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.managed_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &FileContent {
        &self.content
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Compute the file's bytes given the existing file contents (if any).
    ///
    /// Merge-preserve applies only to JSON content; other content kinds
    /// render as in replace mode. Existing bytes need not be UTF-8 unless
    /// they are merged.
    pub fn render(&self, existing: Option<&[u8]>) -> ProjgenResult<Rendered> {
        let output = match (self.mode, existing) {
            (RenderMode::CreateOnly, Some(_)) => return Ok(Rendered::Skipped),
            (RenderMode::MergePreserve, Some(current)) => match &self.content {
                FileContent::Json(held) => self.merge_into(current, held)?,
                other => other.serialize()?,
            },
            _ => self.content.serialize()?,
        };

        if existing == Some(output.as_bytes()) {
            Ok(Rendered::Unchanged)
        } else {
            Ok(Rendered::Write(output))
        }
    }

    fn merge_into(&self, current: &[u8], held: &Value) -> ProjgenResult<String> {
        let current =
            std::str::from_utf8(current).map_err(|e| ProjgenError::InvalidExistingFile {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        if current.trim().is_empty() {
            return FileContent::Json(held.clone()).serialize();
        }

        let mut on_disk: Value =
            serde_json::from_str(current).map_err(|e| ProjgenError::InvalidExistingFile {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        if !on_disk.is_object() {
            return Err(ProjgenError::InvalidExistingFile {
                path: self.path.clone(),
                message: "expected a JSON object at the top level".to_string(),
            });
        }

        if let Value::Object(map) = &mut on_disk {
            for key in &self.managed_keys {
                if held.get(key).is_none() {
                    map.remove(key);
                }
            }
        }

        FileContent::Json(merge_preserving(on_disk, held.clone())).serialize()
    }
}
