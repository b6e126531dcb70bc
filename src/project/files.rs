//! File registry
//!
//! Owns every emitter bound during construction and rejects a second emitter
//! for a path that is already taken.

use std::collections::BTreeSet;
use std::path::{Component as PathComponent, Path, PathBuf};

use crate::domain::entities::FileEmitter;
use crate::error::{ProjgenError, ProjgenResult};

#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    emitters: Vec<FileEmitter>,
    taken: BTreeSet<PathBuf>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a path without binding an emitter yet (project-owned files)
    pub fn reserve(&mut self, path: &Path) -> ProjgenResult<PathBuf> {
        let normalized = normalize(path)?;
        if !self.taken.insert(normalized.clone()) {
            return Err(ProjgenError::FileCollision { path: normalized });
        }
        Ok(normalized)
    }

    pub fn add(&mut self, emitter: FileEmitter) -> ProjgenResult<()> {
        let path = self.reserve(emitter.path())?;
        tracing::debug!(path = %path.display(), mode = ?emitter.mode(), "file registered");
        self.emitters.push(emitter);
        Ok(())
    }

    pub fn is_taken(&self, path: &Path) -> bool {
        normalize(path)
            .map(|p| self.taken.contains(&p))
            .unwrap_or(false)
    }

    /// Emitters in registration order
    pub fn emitters(&self) -> &[FileEmitter] {
        &self.emitters
    }

    pub fn find(&self, path: &Path) -> Option<&FileEmitter> {
        let wanted = normalize(path).ok()?;
        self.emitters
            .iter()
            .find(|e| normalize(e.path()).ok().as_deref() == Some(wanted.as_path()))
    }
}

/// Strip `.` segments and reject absolute or parent-escaping paths.
pub fn normalize(path: &Path) -> ProjgenResult<PathBuf> {
    let mut out = PathBuf::new();
    for part in path.components() {
        match part {
            PathComponent::Normal(seg) => out.push(seg),
            PathComponent::CurDir => {}
            PathComponent::ParentDir | PathComponent::RootDir | PathComponent::Prefix(_) => {
                return Err(ProjgenError::PathEscape {
                    path: path.to_path_buf(),
                })
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(ProjgenError::PathEscape {
            path: path.to_path_buf(),
        });
    }
    Ok(out)
}
