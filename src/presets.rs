//! Project presets
//!
//! One configurable project type, `TypeScriptProject`, plus factory functions
//! that pick sensible option defaults for common shapes of project.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::components::{
    Docgen, Eslint, EslintOptions, Jest, JestOptions, Packaging, Sample, SampleOptions,
    TypeScriptConfig, TypeScriptConfigOptions,
};
use crate::config::ProjectOptions;
use crate::domain::entities::DependencyKind;
use crate::domain::value_objects::Layout;
use crate::error::ProjgenResult;
use crate::project::{Component, Project};

/// Named starting point for `ProjectOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Publishable library with an entrypoint and a packaging step
    #[default]
    #[serde(alias = "typescript")]
    Library,
    /// Application: no entrypoint, nothing packaged
    App,
}

impl Preset {
    pub fn options(self, name: impl Into<String>) -> ProjectOptions {
        match self {
            Preset::Library => library(name),
            Preset::App => app(name),
        }
    }

    /// Preset names accepted in `projgen.toml`, deprecated aliases excluded
    pub fn names() -> &'static [&'static str] {
        &["library", "app"]
    }
}

pub fn library(name: impl Into<String>) -> ProjectOptions {
    ProjectOptions {
        name: name.into(),
        preset: Preset::Library,
        ..ProjectOptions::default()
    }
}

pub fn app(name: impl Into<String>) -> ProjectOptions {
    ProjectOptions {
        name: name.into(),
        preset: Preset::App,
        entrypoint: Some(String::new()),
        package: false,
        ..ProjectOptions::default()
    }
}

#[deprecated(since = "0.3.0", note = "use presets::library instead")]
pub fn typescript(name: impl Into<String>) -> ProjectOptions {
    library(name)
}

/// A TypeScript project composed from resolved options
#[derive(Debug, Clone)]
pub struct TypeScriptProject {
    options: ProjectOptions,
}

impl TypeScriptProject {
    /// Build the component tree. Registration order decides script step
    /// order and which config files later tools reference.
    pub fn build(options: &ProjectOptions) -> ProjgenResult<Project> {
        let mut project = Project::new(options.settings())?;
        let layout = project.layout().clone();

        project.add_dev_dependencies([("typescript", options.typescript_version.as_str())])?;
        project.add_script("compile", ["tsc"]);
        project.add_script("watch", ["tsc -w"]);

        project.gitignore_mut().exclude([Layout::anchored(&layout.libdir)]);
        if let Some(npmignore) = project.npmignore_mut() {
            npmignore.exclude([Layout::anchored(&layout.srcdir)]);
            npmignore.include([Layout::anchored(&layout.libdir)]);
        }

        TypeScriptConfig::register(
            &mut project,
            TypeScriptConfigOptions::build()
                .with_overrides(options.compiler_options.clone())
                .disabled(options.disable_tsconfig),
        )?;

        let jest = JestOptions {
            compile_before_test: options.compile_before_test,
            tsconfig_overrides: options.compiler_options.clone(),
        };
        if options.jest && !options.compile_before_test {
            Jest::register(&mut project, jest.clone())?;
        }

        let run_compile = project.run_script("compile");
        project.add_script("build", [run_compile]);

        if options.jest && options.compile_before_test {
            Jest::register(&mut project, jest)?;
        }
        if options.eslint {
            Eslint::register(&mut project, EslintOptions::default())?;
        }
        if options.docgen {
            Docgen::register(&mut project)?;
        }
        if options.package {
            Packaging::register(&mut project)?;
        }
        if options.sample_code {
            Sample::register(
                &mut project,
                SampleOptions {
                    with_test: options.jest,
                },
            )?;
        }

        // Caller pins go last so they win over tool defaults.
        project.add_dependencies(DependencyKind::Runtime, &options.dependencies)?;
        project.add_dependencies(DependencyKind::Dev, &options.dev_dependencies)?;
        project.add_dependencies(DependencyKind::Peer, &options.peer_dependencies)?;

        project.add_component(Self {
            options: options.clone(),
        });
        tracing::info!(
            name = %options.name,
            components = project.component_kinds().len(),
            files = project.files().emitters().len(),
            "project constructed"
        );
        Ok(project)
    }

    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }
}

impl Component for TypeScriptProject {
    fn kind(&self) -> &'static str {
        "typescript-project"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
