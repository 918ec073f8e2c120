use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: a temp directory holding a data dir to monitor, a config
/// file pointing at it, and a store location.
pub struct TestMonitor {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub store_path: PathBuf,
}

impl TestMonitor {
    /// Create the fixture with an empty data directory.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir)?;

        let store_path = temp_dir.path().join("store.bin");
        let config_path = temp_dir.path().join("monitor.toml");
        std::fs::write(
            &config_path,
            format!(
                "[store]\npath = \"{}\"\n\n[include]\ndirectories = [\"{}\"]\n",
                store_path.display(),
                data_dir.display()
            ),
        )?;

        Ok(Self {
            temp_dir,
            data_dir,
            config_path,
            store_path,
        })
    }

    /// Path of a file inside the monitored data directory.
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Write a file inside the monitored data directory.
    pub fn write_data_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.data_file(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}
