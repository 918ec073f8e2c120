//! Resolution of include/exclude rules into the monitored file set.
//!
//! The resolver walks every included directory top-down, pruning excluded
//! directories before descending into them, and filters out individually
//! excluded files. Explicitly included files seed the result set as-is.

use crate::config::MonitorConfig;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Computes the current target set of files to monitor from a configuration.
pub struct FileSetResolver<'a> {
    config: &'a MonitorConfig,
}

impl<'a> FileSetResolver<'a> {
    /// Create a resolver over the given configuration.
    #[must_use]
    pub const fn new(config: &'a MonitorConfig) -> Self {
        Self { config }
    }

    /// Resolve the include/exclude rules against the filesystem.
    ///
    /// Returns the deduplicated set of file paths that should be monitored
    /// right now. A configured include directory that does not exist yields
    /// an empty contribution rather than an error, since it may legitimately
    /// not exist yet. Unreadable directory entries are skipped.
    ///
    /// Exclusion is exact-path set membership: an excluded directory prunes
    /// its entire subtree before traversal, an excluded file is dropped from
    /// the result.
    #[must_use]
    pub fn resolve(&self) -> HashSet<PathBuf> {
        let mut files: HashSet<PathBuf> = self.config.include.files.iter().cloned().collect();

        for root in &self.config.include.directories {
            if !root.is_dir() {
                debug!(root = %root.display(), "include directory missing, skipping");
                continue;
            }

            let walk = WalkDir::new(root).follow_links(false).into_iter().filter_entry(|e| {
                !(e.file_type().is_dir() && self.config.exclude.directories.contains(e.path()))
            });

            for entry in walk {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                        continue;
                    }
                };

                if entry.file_type().is_file() {
                    let path = entry.path().to_path_buf();
                    if !self.config.exclude.files.contains(&path) {
                        files.insert(path);
                    }
                }
            }
        }

        files
    }
}
