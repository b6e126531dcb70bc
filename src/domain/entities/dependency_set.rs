//! Versioned dependency set
//!
//! Maps package names to version constraints. The last registration for a
//! name wins; ranges are never reconciled against each other.

use std::collections::BTreeMap;

use crate::domain::value_objects::VersionConstraint;
use crate::error::{ProjgenError, ProjgenResult};

/// Which manifest section a set renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Runtime,
    Dev,
    Peer,
}

impl DependencyKind {
    /// Manifest key for this dependency class
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Dev => "devDependencies",
            DependencyKind::Peer => "peerDependencies",
        }
    }
}

/// Package name -> constraint, for one dependency class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    kind: DependencyKind,
    entries: BTreeMap<String, VersionConstraint>,
}

impl DependencySet {
    pub fn new(kind: DependencyKind) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// Merge entries into the set, validating every constraint first.
    ///
    /// A malformed constraint fails the whole call and leaves the set untouched.
    pub fn add_dependencies<I, K, V>(&mut self, deps: I) -> ProjgenResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (name, constraint) in deps {
            let name = name.into();
            let constraint = constraint.as_ref();
            let version = VersionConstraint::parse(constraint).map_err(|e| {
                ProjgenError::InvalidVersionConstraint {
                    package: name.clone(),
                    constraint: constraint.to_string(),
                    reason: e.reason,
                }
            })?;
            parsed.push((name, version));
        }

        for (name, version) in parsed {
            self.insert(name, version);
        }
        Ok(())
    }

    /// Insert an already-validated constraint, overwriting any previous one.
    pub fn insert(&mut self, name: impl Into<String>, version: VersionConstraint) {
        let name = name.into();
        match self.entries.insert(name.clone(), version.clone()) {
            Some(previous) if previous != version => tracing::debug!(
                section = self.kind.manifest_key(),
                package = %name,
                from = %previous,
                to = %version,
                "dependency overridden"
            ),
            _ => tracing::debug!(
                section = self.kind.manifest_key(),
                package = %name,
                version = %version,
                "dependency registered"
            ),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&VersionConstraint> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VersionConstraint)> {
        self.entries.iter()
    }

    /// Sorted JSON object for the manifest
    pub fn render(&self) -> serde_json::Map<String, serde_json::Value> {
        self.entries
            .iter()
            .map(|(name, version)| (name.clone(), serde_json::Value::from(version.as_str())))
            .collect()
    }
}
