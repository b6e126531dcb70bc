//! TypeScript compiler configuration (`tsconfig.json` and variants)
//!
//! Two states: `Unconfigured` when disabled (nothing is emitted, nothing is
//! contributed) and `Configured` with exactly one emitter bound. The options
//! are resolved once at registration from three layers, later wins:
//! 1. `CompilerOptions::defaults()`
//! 2. fields computed from the project layout
//! 3. caller overrides

use std::any::Any;
use std::path::{Path, PathBuf};

use serde_json::json;

use super::compiler_options::CompilerOptions;
use crate::domain::entities::FileEmitter;
use crate::domain::value_objects::Layout;
use crate::error::ProjgenResult;
use crate::project::{Component, Project};

pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const TSCONFIG_TEST_FILE: &str = "tsconfig.jest.json";

/// What a configuration file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPurpose {
    /// Compiles `srcdir` into `libdir`
    Build,
    /// Type-checks sources and tests for the test runner; emits nothing
    Test,
}

#[derive(Debug, Clone)]
pub struct TypeScriptConfigOptions {
    pub purpose: ConfigPurpose,
    /// Output file name, relative to the project root
    pub file_name: String,
    /// Include globs; empty means "derive from the layout"
    pub include: Vec<String>,
    /// Exclude globs; empty means "derive from the layout"
    pub exclude: Vec<String>,
    pub overrides: CompilerOptions,
    pub disabled: bool,
}

impl TypeScriptConfigOptions {
    pub fn build() -> Self {
        Self {
            purpose: ConfigPurpose::Build,
            file_name: TSCONFIG_FILE.to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
            overrides: CompilerOptions::default(),
            disabled: false,
        }
    }

    pub fn test() -> Self {
        Self {
            purpose: ConfigPurpose::Test,
            file_name: TSCONFIG_TEST_FILE.to_string(),
            ..Self::build()
        }
    }

    pub fn with_overrides(mut self, overrides: CompilerOptions) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeScriptConfigState {
    Unconfigured,
    Configured {
        file: PathBuf,
        compiler_options: CompilerOptions,
        include: Vec<String>,
        exclude: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct TypeScriptConfig {
    purpose: ConfigPurpose,
    state: TypeScriptConfigState,
}

impl TypeScriptConfig {
    /// Resolve options, bind the emitter and contribute ignores and manifest
    /// fields. A disabled config is still added to the tree, unconfigured.
    pub fn register(project: &mut Project, options: TypeScriptConfigOptions) -> ProjgenResult<()> {
        if options.disabled {
            tracing::debug!(file = %options.file_name, "tsconfig disabled");
            project.add_component(Self {
                purpose: options.purpose,
                state: TypeScriptConfigState::Unconfigured,
            });
            return Ok(());
        }

        let layout = project.layout().clone();
        let computed = computed_options(options.purpose, &layout);
        let compiler_options =
            CompilerOptions::layered([CompilerOptions::defaults(), computed, options.overrides])?;

        let include = if options.include.is_empty() {
            default_include(options.purpose, &layout)
        } else {
            options.include
        };
        let exclude = if options.exclude.is_empty() {
            default_exclude(options.purpose, &layout)
        } else {
            options.exclude
        };

        let file = PathBuf::from(&options.file_name);
        project.add_file(FileEmitter::json(
            file.clone(),
            json!({
                "compilerOptions": compiler_options.to_value()?,
                "include": include,
                "exclude": exclude,
            }),
        ))?;

        if let Some(npmignore) = project.npmignore_mut() {
            npmignore.exclude([Layout::anchored(&options.file_name)]);
        }

        if options.purpose == ConfigPurpose::Build {
            contribute_build_outputs(project, &compiler_options);
        }

        project.add_component(Self {
            purpose: options.purpose,
            state: TypeScriptConfigState::Configured {
                file,
                compiler_options,
                include,
                exclude,
            },
        });
        Ok(())
    }

    pub fn purpose(&self) -> ConfigPurpose {
        self.purpose
    }

    pub fn state(&self) -> &TypeScriptConfigState {
        &self.state
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, TypeScriptConfigState::Configured { .. })
    }

    /// Emitted file, if configured
    pub fn file(&self) -> Option<&Path> {
        match &self.state {
            TypeScriptConfigState::Configured { file, .. } => Some(file),
            TypeScriptConfigState::Unconfigured => None,
        }
    }

    pub fn compiler_options(&self) -> Option<&CompilerOptions> {
        match &self.state {
            TypeScriptConfigState::Configured {
                compiler_options, ..
            } => Some(compiler_options),
            TypeScriptConfigState::Unconfigured => None,
        }
    }
}

impl Component for TypeScriptConfig {
    fn kind(&self) -> &'static str {
        match self.purpose {
            ConfigPurpose::Build => "tsconfig",
            ConfigPurpose::Test => "tsconfig-test",
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn computed_options(purpose: ConfigPurpose, layout: &Layout) -> CompilerOptions {
    match purpose {
        ConfigPurpose::Build => CompilerOptions {
            root_dir: Some(layout.srcdir.clone()),
            out_dir: Some(layout.libdir.clone()),
            ..CompilerOptions::default()
        },
        ConfigPurpose::Test => CompilerOptions {
            no_emit: Some(true),
            ..CompilerOptions::default()
        },
    }
}

fn default_include(purpose: ConfigPurpose, layout: &Layout) -> Vec<String> {
    match purpose {
        ConfigPurpose::Build => vec![Layout::ts_glob(&layout.srcdir)],
        ConfigPurpose::Test => vec![
            Layout::ts_glob(&layout.srcdir),
            Layout::ts_glob(&layout.testdir),
        ],
    }
}

fn default_exclude(purpose: ConfigPurpose, layout: &Layout) -> Vec<String> {
    match purpose {
        ConfigPurpose::Build => vec!["node_modules".to_string(), layout.libdir.clone()],
        ConfigPurpose::Test => vec!["node_modules".to_string()],
    }
}

/// Ship declarations and point the manifest at them.
fn contribute_build_outputs(project: &mut Project, options: &CompilerOptions) {
    let out_dir = options
        .out_dir
        .clone()
        .unwrap_or_else(|| project.layout().libdir.clone());
    let anchored = Layout::anchored(&out_dir);

    if let Some(npmignore) = project.npmignore_mut() {
        npmignore.include([
            format!("{}/**/*.js", anchored),
            format!("{}/**/*.d.ts", anchored),
        ]);
    }

    if options.declaration == Some(true) {
        let entrypoint = project.settings().entrypoint.clone();
        if let Some(types) = Layout::types_for(&entrypoint) {
            project.add_manifest_field("types", json!(types));
        }
    }
}
