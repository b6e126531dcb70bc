//! Script registry
//!
//! Named, ordered command lists. Several components may contribute steps to
//! the same script; steps keep exact contribution order and are never removed
//! or reordered.

use std::collections::BTreeMap;

/// Separator used when a script is rendered into the manifest.
///
/// `&&` runs the steps sequentially and stops at the first failure.
pub const STEP_SEPARATOR: &str = " && ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptRegistry {
    scripts: BTreeMap<String, Vec<String>>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `name` with `commands`, or append them to the existing script.
    pub fn add_script<I, S>(&mut self, name: &str, commands: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = self.scripts.entry(name.to_string()).or_default();
        let before = steps.len();
        steps.extend(commands.into_iter().map(Into::into));
        tracing::debug!(
            script = name,
            added = steps.len() - before,
            total = steps.len(),
            "script steps registered"
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    /// Ordered steps of a script
    pub fn commands(&self, name: &str) -> Option<&[String]> {
        self.scripts.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Manifest `scripts` object: one fail-fast command line per script
    pub fn render(&self) -> serde_json::Map<String, serde_json::Value> {
        self.scripts
            .iter()
            .map(|(name, steps)| {
                (
                    name.clone(),
                    serde_json::Value::from(steps.join(STEP_SEPARATOR)),
                )
            })
            .collect()
    }
}
