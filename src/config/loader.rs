//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::domain::services::overlay_shallow;
use crate::domain::value_objects::PackageManager;
use crate::error::{ProjgenError, ProjgenResult};
use crate::presets::Preset;

use super::types::ProjectOptions;

pub const CONFIG_FILE: &str = "projgen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        write!(f, ": unknown key '{}'", self.key)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ProjgenResult<(ProjectOptions, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content, path)
}

/// Parse `content` as if read from `path`.
pub fn from_toml_str(
    content: &str,
    path: &Path,
) -> ProjgenResult<(ProjectOptions, Vec<ConfigWarning>)> {
    let invalid = |message: String| ProjgenError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let table: toml::Table = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let file_layer = serde_json::to_value(&table)?;

    let preset = match file_layer.get("preset") {
        Some(raw) => {
            if raw.as_str() == Some("typescript") {
                tracing::warn!(file = %path.display(), "preset 'typescript' is deprecated, use 'library'");
            }
            Preset::deserialize(raw).map_err(|_| {
                invalid(format!(
                    "unknown preset {} (expected one of: {})",
                    raw,
                    Preset::names().join(", ")
                ))
            })?
        }
        None => Preset::default(),
    };
    let name = file_layer
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let preset_layer = serde_json::to_value(preset.options(name))?;

    let merged = overlay_shallow(preset_layer, file_layer);

    let mut unknown_paths: Vec<String> = Vec::new();
    let options: ProjectOptions = serde_ignored::deserialize(merged, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid(e.to_string()))?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .filter(|path_str| !is_passthrough(path_str))
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!(%warning, "ignored configuration key");
    }

    Ok((options, warnings))
}

/// Apply environment variable overrides (PROJGEN_* prefix)
pub fn with_env_overrides(options: ProjectOptions) -> ProjectOptions {
    with_overrides_from(options, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from<F>(mut options: ProjectOptions, lookup: F) -> ProjectOptions
where
    F: Fn(&str) -> Option<String>,
{
    // PROJGEN_PACKAGE_MANAGER
    if let Some(pm) = lookup("PROJGEN_PACKAGE_MANAGER") {
        match PackageManager::parse(&pm) {
            Some(pm) => options.package_manager = pm,
            None => tracing::warn!(value = %pm, "ignoring unknown PROJGEN_PACKAGE_MANAGER"),
        }
    }

    // PROJGEN_TYPESCRIPT_VERSION
    if let Some(version) = lookup("PROJGEN_TYPESCRIPT_VERSION") {
        if !version.trim().is_empty() {
            options.typescript_version = version.trim().to_string();
        }
    }

    options
}

/// Compiler options without a typed field are accepted verbatim.
fn is_passthrough(path: &str) -> bool {
    path.starts_with("compiler_options.")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "preset",
        "name",
        "description",
        "version",
        "license",
        "entrypoint",
        "package_manager",
        "typescript_version",
        "min_node_version",
        "dependencies",
        "dev_dependencies",
        "peer_dependencies",
        "jest",
        "eslint",
        "docgen",
        "package",
        "npmignore",
        "disable_tsconfig",
        "compile_before_test",
        "sample_code",
        "layout",
        "srcdir",
        "libdir",
        "testdir",
        "compiler_options",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
