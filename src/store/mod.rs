//! The persisted hash table and the change-detection operations over it.
//!
//! One [`Record`] exists per monitored file, keyed by path. A baseline is
//! established by [`Store::rebuild`], observed against the filesystem by
//! [`Store::refresh_existing`] and [`Store::discover_new`], and committed by
//! [`Store::accept_changes`]. The table is serialized with bincode into a
//! single store file; each command loads it, mutates in memory, and saves it
//! back in one write.

use crate::utils::hash;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sentinel for a record that has not been re-hashed since its last baseline.
pub const NOT_CHECKED: &str = "Not checked.";

/// Sentinel for a record whose path could not be read during a diff pass.
pub const FILE_DELETED: &str = "File deleted.";

/// Sentinel baseline for a record created by new-file discovery.
pub const NEW_FILE: &str = "New File.";

/// One monitored file: its identity, accepted baseline, and last observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Filesystem path, unique within the store.
    pub path: PathBuf,
    /// Hex SHA-1 established at the last baseline, or [`NEW_FILE`].
    pub original_hash: String,
    /// Hex SHA-1 from the most recent diff pass, [`NOT_CHECKED`], or
    /// [`FILE_DELETED`].
    pub current_hash: String,
    /// Cached classification from the last diff pass. Stale until the next
    /// one.
    pub is_modified: bool,
}

impl Record {
    /// A freshly baselined record: trusted hash, not yet diffed.
    #[must_use]
    pub fn baseline(path: PathBuf, hash: String) -> Self {
        Self {
            path,
            original_hash: hash,
            current_hash: NOT_CHECKED.to_string(),
            is_modified: false,
        }
    }
}

/// The persisted record table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// Schema version of the store file.
    pub version: u32,
    /// All records, keyed by path.
    pub records: HashMap<PathBuf, Record>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Bincode configuration for the store file. The allocation limit guards
/// against memory exhaustion on corrupt data.
fn codec_config() -> impl bincode::config::Config {
    bincode::config::legacy().with_limit::<{ 64 * 1024 * 1024 }>()
}

impl Store {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: 1,
            records: HashMap::new(),
        }
    }

    /// Load the store from disk. A missing store file loads as an empty
    /// store, not an error.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or deserialized.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read store file: {}", path.display()))?;

        let (store, _bytes_read) = bincode::serde::decode_from_slice(&data, codec_config())
            .context("Failed to deserialize store")?;

        Ok(store)
    }

    /// Save the store to disk as one write, so a whole pass becomes visible
    /// atomically from the caller's perspective.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = bincode::serde::encode_to_vec(self, codec_config())
            .context("Failed to serialize store")?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, &data)
            .with_context(|| format!("Failed to write store file: {}", path.display()))?;

        Ok(())
    }

    /// Build a fresh baseline over `resolved`, discarding any previous state.
    ///
    /// Every readable file gets a record with its hash as the accepted
    /// baseline. Files that cannot be read are skipped: the rebuild
    /// represents "start fresh from what's readable now".
    #[must_use]
    pub fn rebuild(resolved: &HashSet<PathBuf>) -> Self {
        let mut store = Self::new();

        for path in resolved {
            match hash::hash_file(path) {
                Ok(file_hash) => {
                    store
                        .records
                        .insert(path.clone(), Record::baseline(path.clone(), file_hash));
                }
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping unreadable file");
                }
            }
        }

        store
    }

    /// Phase A of a diff pass: re-hash every stored path and classify it
    /// against its baseline.
    ///
    /// A path that cannot be read, whether deleted, permission denied, or any
    /// other I/O failure, is classified as deleted. Baselines are never
    /// touched here.
    pub fn refresh_existing(&mut self) {
        for record in self.records.values_mut() {
            match hash::hash_file(&record.path) {
                Ok(new_hash) => {
                    record.is_modified = new_hash != record.original_hash;
                    record.current_hash = new_hash;
                }
                Err(err) => {
                    debug!(
                        path = %record.path.display(),
                        error = %err,
                        "unreadable file classified as deleted"
                    );
                    record.current_hash = FILE_DELETED.to_string();
                    record.is_modified = true;
                }
            }
        }
    }

    /// Phase B of a diff pass: insert a record for every resolved path not
    /// already present.
    ///
    /// Discovered files get the [`NEW_FILE`] sentinel as their baseline and
    /// are marked modified until an `update` promotes them. A file that
    /// vanishes between resolution and hashing is treated as not yet
    /// existing: no record is created.
    pub fn discover_new(&mut self, resolved: &HashSet<PathBuf>) {
        for path in resolved {
            if self.records.contains_key(path) {
                continue;
            }

            match hash::hash_file(path) {
                Ok(file_hash) => {
                    self.records.insert(
                        path.clone(),
                        Record {
                            path: path.clone(),
                            original_hash: NEW_FILE.to_string(),
                            current_hash: file_hash,
                            is_modified: true,
                        },
                    );
                }
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping vanished new file");
                }
            }
        }
    }

    /// Commit the observed diff into the new baseline.
    ///
    /// Records observed as deleted are dropped from future monitoring. Every
    /// remaining record has its last observation promoted to baseline and its
    /// observation state reset. Calling this without an intervening diff pass
    /// promotes stale sentinel values; that ordering is the caller's
    /// responsibility.
    pub fn accept_changes(&mut self) {
        self.records
            .retain(|_, record| record.current_hash != FILE_DELETED);

        for record in self.records.values_mut() {
            record.original_hash =
                std::mem::replace(&mut record.current_hash, NOT_CHECKED.to_string());
            record.is_modified = false;
        }
    }

    /// All records, in no guaranteed order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records flagged as modified by the last diff pass, in no guaranteed
    /// order.
    pub fn modified_records(&self) -> impl Iterator<Item = &Record> {
        self.records.values().filter(|r| r.is_modified)
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
