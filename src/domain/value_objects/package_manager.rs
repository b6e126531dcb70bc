//! Package manager value object - decides how scripts invoke each other

use serde::{Deserialize, Serialize};

/// Package manager the generated scripts are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Command that runs another script of the same manifest
    pub fn run_script(&self, script: &str) -> String {
        format!("{} run {}", self.command(), script)
    }

    /// Command that produces a package tarball in the current directory
    pub fn pack_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm pack",
            PackageManager::Yarn => "yarn pack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            _ => None,
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}
