use crate::utils::expand_tilde;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Top-level monitor configuration: one store location and four path sets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonitorConfig {
    /// Store file settings.
    pub store: StoreConfig,

    /// Paths to monitor.
    #[serde(default)]
    pub include: PathSet,

    /// Paths to omit from monitoring.
    #[serde(default)]
    pub exclude: PathSet,
}

/// Location of the persisted hash table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Path of the store file.
    pub path: PathBuf,
}

/// A set of directories and a set of individual files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathSet {
    /// Directory paths. For `include` these roots are walked recursively;
    /// for `exclude` the entire subtree under each is omitted.
    #[serde(default)]
    pub directories: HashSet<PathBuf>,

    /// Individual file paths.
    #[serde(default)]
    pub files: HashSet<PathBuf>,
}

impl PathSet {
    fn expand(&mut self) {
        self.directories = std::mem::take(&mut self.directories)
            .into_iter()
            .map(|p| expand_tilde(&p))
            .collect();
        self.files = std::mem::take(&mut self.files)
            .into_iter()
            .map(|p| expand_tilde(&p))
            .collect();
    }
}

impl MonitorConfig {
    /// Load configuration from a TOML file.
    ///
    /// All configured paths have a leading `~` expanded to the home
    /// directory. Path sets are matched by exact string containment during
    /// resolution, so paths should be given in absolute form.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.store.path = expand_tilde(&config.store.path);
        config.include.expand();
        config.exclude.expand();

        Ok(config)
    }
}
