#![warn(missing_docs)]

//! # Vigil - File-Integrity Monitor
//!
//! Vigil enumerates a configured set of files and directories, computes a
//! SHA-1 content hash for each, persists those hashes in a store file, and
//! later re-hashes the same set to detect additions, modifications, and
//! deletions.
//!
//! ## Architecture
//!
//! - [`commands`]: Command implementations (init, show, diff, update)
//! - [`config`]: Configuration parsing (store location, include/exclude sets)
//! - [`resolver`]: Include/exclude resolution into the monitored file set
//! - [`store`]: The persisted hash table and its reconciliation operations
//! - [`utils`]: File hashing and path helpers
//!
//! ## Command lifecycle
//!
//! The four commands are designed to run in this order for correct results:
//! `init` establishes a baseline, repeated `diff` passes observe changes
//! against it, and `update` commits the last observed state as the new
//! baseline.
//!
//! ## Example Usage
//!
//! ```no_run
//! use vigil::MonitorContext;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = MonitorContext::load(Path::new("monitor.toml"))?;
//! vigil::commands::init::execute(&ctx)?;
//! vigil::commands::diff::execute(&ctx)?;
//! # Ok(())
//! # }
//! ```

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing and path expansion.
pub mod config;

/// Resolution of include/exclude rules into the monitored file set.
pub mod resolver;

/// The persisted hash table and the change-detection operations over it.
pub mod store;

/// Utility functions and helpers.
pub mod utils;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Current version of the vigil binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Central context for all monitor operations.
///
/// Holds the loaded configuration and the path it was loaded from. The
/// configuration is passed explicitly into each component rather than held as
/// ambient state, so multiple monitors can coexist in one process.
#[derive(Debug, Clone)]
pub struct MonitorContext {
    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::MonitorConfig,
}

impl MonitorContext {
    /// Creates a context by loading the configuration at `config_path`.
    ///
    /// # Errors
    /// Returns an error if the configuration file cannot be read or parsed.
    /// This is the only fatal, user-visible failure class: it is reported
    /// before any store operation runs.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = config::MonitorConfig::load(config_path)
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        Ok(Self {
            config_path: config_path.to_path_buf(),
            config,
        })
    }

    /// Path of the store file this monitor reads and writes.
    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.config.store.path
    }
}
