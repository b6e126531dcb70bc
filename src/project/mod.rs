//! Project: the component tree and the state every component contributes to
//!
//! Lifecycle:
//! 1. **Construction** - `Project::new`, then components register in caller
//!    order. Each one sees everything registered before it.
//! 2. **Synthesis** - `Project::synth` renders every file exactly once from a
//!    snapshot of the state. It takes `&self`; nothing is mutated.

mod component;
mod files;
mod manifest;
mod synth;


use std::path::Path;

use serde_json::Value;

use crate::domain::entities::{DependencyKind, DependencySet, FileEmitter, ScriptRegistry};
use crate::domain::value_objects::{Layout, PackageManager, PatternList};
use crate::domain::ports::FileSystem;
use crate::error::ProjgenResult;

pub use component::Component;
pub use files::{normalize, FileRegistry};
pub use manifest::{
    ProjectSettings, GITIGNORE_FILE, MANAGED_MANIFEST_KEYS, MANIFEST_FILE, NPMIGNORE_FILE,
};
pub use synth::{FileFailure, PlannedFile, SynthReport};

/// Everything components write into during construction
#[derive(Debug, Clone)]
pub struct ProjectState {
    pub settings: ProjectSettings,
    pub gitignore: PatternList,
    pub npmignore: Option<PatternList>,
    pub scripts: ScriptRegistry,
    pub dependencies: DependencySet,
    pub dev_dependencies: DependencySet,
    pub peer_dependencies: DependencySet,
    /// Extra top-level manifest keys (`types`, `jest`, ...)
    pub manifest_fields: serde_json::Map<String, Value>,
    pub files: FileRegistry,
}

/// Root aggregate: state plus the components that produced it
#[derive(Debug)]
pub struct Project {
    state: ProjectState,
    components: Vec<Box<dyn Component>>,
}

impl Project {
    /// Create a project with its manifest and ignore files reserved.
    pub fn new(settings: ProjectSettings) -> ProjgenResult<Self> {
        let mut files = FileRegistry::new();
        files.reserve(Path::new(MANIFEST_FILE))?;
        files.reserve(Path::new(GITIGNORE_FILE))?;

        let mut gitignore = PatternList::new();
        gitignore.exclude(["node_modules/", "*.tgz", "*.tsbuildinfo"]);

        let npmignore = if settings.npmignore {
            files.reserve(Path::new(NPMIGNORE_FILE))?;
            let mut list = PatternList::new();
            list.exclude(["/projgen.toml", "/.gitignore", "/.github"]);
            Some(list)
        } else {
            None
        };

        tracing::debug!(name = %settings.name, "project created");

        Ok(Self {
            state: ProjectState {
                settings,
                gitignore,
                npmignore,
                scripts: ScriptRegistry::new(),
                dependencies: DependencySet::new(DependencyKind::Runtime),
                dev_dependencies: DependencySet::new(DependencyKind::Dev),
                peer_dependencies: DependencySet::new(DependencyKind::Peer),
                manifest_fields: serde_json::Map::new(),
                files,
            },
            components: Vec::new(),
        })
    }

    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.state.settings
    }

    pub fn layout(&self) -> &Layout {
        &self.state.settings.layout
    }

    pub fn package_manager(&self) -> PackageManager {
        self.state.settings.package_manager
    }

    /// Command that runs another script of this project
    pub fn run_script(&self, name: &str) -> String {
        self.package_manager().run_script(name)
    }

    // --- registries -------------------------------------------------------

    pub fn add_script<I, S>(&mut self, name: &str, commands: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.scripts.add_script(name, commands);
    }

    pub fn scripts(&self) -> &ScriptRegistry {
        &self.state.scripts
    }

    pub fn add_dependencies<I, K, V>(&mut self, kind: DependencyKind, deps: I) -> ProjgenResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        self.dependency_set_mut(kind).add_dependencies(deps)
    }

    pub fn add_dev_dependencies<I, K, V>(&mut self, deps: I) -> ProjgenResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        self.add_dependencies(DependencyKind::Dev, deps)
    }

    pub fn dependency_set(&self, kind: DependencyKind) -> &DependencySet {
        match kind {
            DependencyKind::Runtime => &self.state.dependencies,
            DependencyKind::Dev => &self.state.dev_dependencies,
            DependencyKind::Peer => &self.state.peer_dependencies,
        }
    }

    fn dependency_set_mut(&mut self, kind: DependencyKind) -> &mut DependencySet {
        match kind {
            DependencyKind::Runtime => &mut self.state.dependencies,
            DependencyKind::Dev => &mut self.state.dev_dependencies,
            DependencyKind::Peer => &mut self.state.peer_dependencies,
        }
    }

    /// True if `name` is declared in any dependency class
    pub fn has_dependency(&self, name: &str) -> bool {
        self.state.dependencies.contains(name)
            || self.state.dev_dependencies.contains(name)
            || self.state.peer_dependencies.contains(name)
    }

    pub fn gitignore(&self) -> &PatternList {
        &self.state.gitignore
    }

    pub fn gitignore_mut(&mut self) -> &mut PatternList {
        &mut self.state.gitignore
    }

    pub fn npmignore(&self) -> Option<&PatternList> {
        self.state.npmignore.as_ref()
    }

    /// `None` when the project does not publish a package-ignore file
    pub fn npmignore_mut(&mut self) -> Option<&mut PatternList> {
        self.state.npmignore.as_mut()
    }

    /// Set a top-level manifest key; a later call for the same key wins.
    pub fn add_manifest_field(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        tracing::debug!(%key, "manifest field set");
        self.state.manifest_fields.insert(key, value);
    }

    pub fn manifest_field(&self, key: &str) -> Option<&Value> {
        self.state.manifest_fields.get(key)
    }

    /// Bind an emitter; fails if another emitter already owns the path.
    pub fn add_file(&mut self, emitter: FileEmitter) -> ProjgenResult<()> {
        self.state.files.add(emitter)
    }

    pub fn files(&self) -> &FileRegistry {
        &self.state.files
    }

    // --- component tree ---------------------------------------------------

    /// Take ownership of a component after it registered its contributions.
    pub fn add_component<C: Component>(&mut self, component: C) {
        tracing::debug!(kind = component.kind(), "component added");
        self.components.push(Box::new(component));
    }

    /// First component of type `T`, in registration order
    pub fn find<T: Component>(&self) -> Option<&T> {
        self.find_all::<T>().next()
    }

    /// Every component of type `T`, in registration order
    pub fn find_all<T: Component>(&self) -> impl Iterator<Item = &T> {
        self.components
            .iter()
            .filter_map(|c| c.as_any().downcast_ref::<T>())
    }

    pub fn components(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|c| c.as_ref())
    }

    pub fn component_kinds(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.kind()).collect()
    }

    // --- synthesis --------------------------------------------------------

    /// Manifest object derived from the current state
    pub fn manifest(&self) -> Value {
        manifest::render(&self.state)
    }

    /// Every emitter synthesis renders: project-owned files first, then the
    /// component files in registration order.
    pub fn emitters(&self) -> Vec<FileEmitter> {
        let mut out = Vec::with_capacity(self.state.files.emitters().len() + 3);
        out.push(
            FileEmitter::json_merged(MANIFEST_FILE, self.manifest())
                .with_managed_keys(MANAGED_MANIFEST_KEYS.iter().copied()),
        );
        out.push(FileEmitter::lines(
            GITIGNORE_FILE,
            self.state.gitignore.render_file(),
        ));
        if let Some(npmignore) = &self.state.npmignore {
            out.push(FileEmitter::lines(NPMIGNORE_FILE, npmignore.render_file()));
        }
        out.extend(self.state.files.emitters().iter().cloned());
        out
    }

    /// Render every emitter against `outdir` without writing anything.
    pub fn plan(&self, fs: &dyn FileSystem, outdir: &Path) -> Vec<PlannedFile> {
        synth::plan(&self.emitters(), fs, outdir)
    }

    /// Render and write every emitter under `outdir`.
    ///
    /// A failing file is recorded in the report and the remaining files are
    /// still written; nothing is rolled back.
    pub fn synth(&self, fs: &dyn FileSystem, outdir: &Path) -> SynthReport {
        synth::synth(&self.emitters(), fs, outdir)
    }
}
