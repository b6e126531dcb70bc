//! Caller-facing project options

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::CompilerOptions;
use crate::domain::value_objects::{Layout, PackageManager};
use crate::error::{ProjgenError, ProjgenResult};
use crate::presets::Preset;
use crate::project::ProjectSettings;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_TYPESCRIPT_VERSION: &str = "^3.9.5";

/// Everything a caller can say about a project. Resolved once, then read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    pub preset: Preset,
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    /// Compiled entrypoint; `None` derives `<libdir>/index.js`, `""` means none
    pub entrypoint: Option<String>,
    pub package_manager: PackageManager,
    pub typescript_version: String,
    pub min_node_version: Option<String>,

    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub peer_dependencies: BTreeMap<String, String>,

    pub jest: bool,
    pub eslint: bool,
    pub docgen: bool,
    pub package: bool,
    pub npmignore: bool,
    pub disable_tsconfig: bool,
    pub compile_before_test: bool,
    pub sample_code: bool,

    pub layout: Layout,
    pub compiler_options: CompilerOptions,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            name: String::new(),
            description: None,
            version: None,
            license: Some("Apache-2.0".to_string()),
            entrypoint: None,
            package_manager: PackageManager::default(),
            typescript_version: DEFAULT_TYPESCRIPT_VERSION.to_string(),
            min_node_version: None,
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            peer_dependencies: BTreeMap::new(),
            jest: true,
            eslint: true,
            docgen: false,
            package: true,
            npmignore: true,
            disable_tsconfig: false,
            compile_before_test: false,
            sample_code: true,
            layout: Layout::default(),
            compiler_options: CompilerOptions::default(),
        }
    }
}

impl ProjectOptions {
    /// Load `projgen.toml` on top of its preset; unknown keys become warnings.
    pub fn load(path: &Path) -> ProjgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Defaults, preset, file (if any) and environment, in that order.
    pub fn resolve(path: Option<&Path>) -> ProjgenResult<(Self, Vec<ConfigWarning>)> {
        let (options, warnings) = match path {
            Some(path) => Self::load(path)?,
            None => (Self::default(), Vec::new()),
        };
        Ok((loader::with_env_overrides(options), warnings))
    }

    /// Fail on options construction cannot start from.
    pub fn validate(&self, file: &Path) -> ProjgenResult<()> {
        if self.name.trim().is_empty() {
            return Err(ProjgenError::InvalidConfig {
                file: file.to_path_buf(),
                message: "project name is empty".to_string(),
            });
        }
        let layout = self.resolved_layout();
        for dir in [&layout.srcdir, &layout.libdir, &layout.testdir] {
            crate::project::normalize(Path::new(dir)).map_err(|_| {
                ProjgenError::InvalidConfig {
                    file: file.to_path_buf(),
                    message: format!("layout directory '{}' must be relative", dir),
                }
            })?;
            if !Layout::is_plain(dir) {
                return Err(ProjgenError::InvalidConfig {
                    file: file.to_path_buf(),
                    message: format!(
                        "layout directory '{}' may only use letters, digits and . _ - / @ +",
                        dir
                    ),
                });
            }
        }
        Ok(())
    }

    /// Layout with a `compiler_options.outDir` override folded into `libdir`,
    /// so ignore files, entrypoint and cleanup follow the compiler's output.
    pub fn resolved_layout(&self) -> Layout {
        let mut layout = self.layout.clone();
        if let Some(out_dir) = &self.compiler_options.out_dir {
            layout.libdir = out_dir.clone();
        }
        layout
    }

    /// Identity and layout handed to `Project::new`
    pub fn settings(&self) -> ProjectSettings {
        let layout = self.resolved_layout();
        let entrypoint = self
            .entrypoint
            .clone()
            .unwrap_or_else(|| layout.default_entrypoint());
        ProjectSettings {
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            license: self.license.clone(),
            entrypoint,
            package_manager: self.package_manager,
            layout,
            min_node_version: self.min_node_version.clone(),
            npmignore: self.npmignore,
        }
    }
}
