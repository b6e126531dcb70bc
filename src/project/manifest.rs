//! Package manifest (`package.json`) rendering

use serde_json::{json, Map, Value};

use super::ProjectState;
use crate::domain::value_objects::{Layout, PackageManager};

pub const MANIFEST_FILE: &str = "package.json";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const NPMIGNORE_FILE: &str = ".npmignore";

/// Manifest sections derived from project state. Dropped from an existing
/// `package.json` when current state no longer produces them; every other key
/// a human added is kept.
pub const MANAGED_MANIFEST_KEYS: &[&str] = &[
    "main",
    "types",
    "engines",
    "scripts",
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "jest",
];

/// Resolved identity and layout of a project, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    /// Compiled entrypoint relative to the project root; empty for none
    pub entrypoint: String,
    pub package_manager: PackageManager,
    pub layout: Layout,
    pub min_node_version: Option<String>,
    /// Whether a package-ignore file is generated
    pub npmignore: bool,
}

impl ProjectSettings {
    pub fn new(name: impl Into<String>) -> Self {
        let layout = Layout::default();
        Self {
            name: name.into(),
            description: None,
            version: None,
            license: None,
            entrypoint: layout.default_entrypoint(),
            package_manager: PackageManager::default(),
            layout,
            min_node_version: None,
            npmignore: true,
        }
    }

    pub fn has_entrypoint(&self) -> bool {
        !self.entrypoint.is_empty()
    }
}

/// Build the manifest object. Pure: same state, same value.
pub(crate) fn render(state: &ProjectState) -> Value {
    let settings = &state.settings;
    let mut manifest = Map::new();

    manifest.insert("name".to_string(), Value::from(settings.name.clone()));
    if let Some(description) = &settings.description {
        manifest.insert("description".to_string(), Value::from(description.clone()));
    }
    if let Some(version) = &settings.version {
        manifest.insert("version".to_string(), Value::from(version.clone()));
    }
    if let Some(license) = &settings.license {
        manifest.insert("license".to_string(), Value::from(license.clone()));
    }
    if settings.has_entrypoint() {
        manifest.insert("main".to_string(), Value::from(settings.entrypoint.clone()));
    }
    if let Some(node) = &settings.min_node_version {
        manifest.insert("engines".to_string(), json!({ "node": format!(">= {}", node) }));
    }

    manifest.insert("scripts".to_string(), Value::Object(state.scripts.render()));

    for set in [
        &state.dependencies,
        &state.dev_dependencies,
        &state.peer_dependencies,
    ] {
        if !set.is_empty() {
            manifest.insert(
                set.kind().manifest_key().to_string(),
                Value::Object(set.render()),
            );
        }
    }

    for (key, value) in &state.manifest_fields {
        manifest.insert(key.clone(), value.clone());
    }

    Value::Object(manifest)
}
