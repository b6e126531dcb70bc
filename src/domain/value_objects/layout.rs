//! Source-tree layout value object
//!
//! The three directory names every path computation is derived from.

use serde::{Deserialize, Serialize};

/// Source, compiled-output and test directory names (relative to the project root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub srcdir: String,
    pub libdir: String,
    pub testdir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            srcdir: "src".to_string(),
            libdir: "lib".to_string(),
            testdir: "test".to_string(),
        }
    }
}

impl Layout {
    /// Root-anchored ignore pattern for a directory (`/lib`)
    pub fn anchored(dir: &str) -> String {
        format!("/{}", dir.trim_matches('/'))
    }

    /// Glob covering every TypeScript source under a directory (`src/**/*.ts`)
    pub fn ts_glob(dir: &str) -> String {
        format!("{}/**/*.ts", dir.trim_matches('/'))
    }

    /// Declaration file for an entrypoint (`lib/index.js` -> `lib/index.d.ts`)
    pub fn types_for(entrypoint: &str) -> Option<String> {
        let stem = entrypoint.strip_suffix(".js")?;
        if stem.is_empty() {
            return None;
        }
        Some(format!("{}.d.ts", stem))
    }

    /// Default entrypoint under the compiled-output directory
    pub fn default_entrypoint(&self) -> String {
        format!("{}/index.js", self.libdir.trim_matches('/'))
    }

    /// Whether a directory name is safe to splice into scripts and globs
    pub fn is_plain(dir: &str) -> bool {
        !dir.is_empty()
            && dir
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/' | '@' | '+'))
    }

    /// Directory as a single POSIX shell word; plain names stay bare
    pub fn shell_word(dir: &str) -> String {
        if Self::is_plain(dir) {
            dir.to_string()
        } else {
            format!("'{}'", dir.replace('\'', "'\\''"))
        }
    }
}
