//! Property-based coverage for include/exclude resolution: an excluded path
//! must never appear in the resolved set, and everything else under the
//! include roots always does.

use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;
use vigil::config::MonitorConfig;
use vigil::resolver::FileSetResolver;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn excluded_paths_never_resolve(
        dir_count in 1usize..4,
        file_count in 1usize..4,
        excluded_dir in 0usize..4,
        excluded_file in (0usize..4, 0usize..4),
    ) {
        let temp = TempDir::new().unwrap();

        let mut all_files: Vec<PathBuf> = Vec::new();
        for d in 0..dir_count {
            let dir = temp.path().join(format!("d{d}"));
            std::fs::create_dir_all(&dir).unwrap();
            for f in 0..file_count {
                let file = dir.join(format!("f{f}.txt"));
                std::fs::write(&file, format!("content {d}/{f}")).unwrap();
                all_files.push(file);
            }
        }

        let excluded_dir_path = temp.path().join(format!("d{excluded_dir}"));
        let excluded_file_path = temp
            .path()
            .join(format!("d{}", excluded_file.0))
            .join(format!("f{}.txt", excluded_file.1));

        let mut config = MonitorConfig::default();
        config.include.directories.insert(temp.path().to_path_buf());
        config.exclude.directories.insert(excluded_dir_path.clone());
        config.exclude.files.insert(excluded_file_path.clone());

        let resolved: HashSet<PathBuf> = FileSetResolver::new(&config).resolve();

        for file in &all_files {
            let under_excluded_dir = file.starts_with(&excluded_dir_path);
            let individually_excluded = file == &excluded_file_path;

            if under_excluded_dir || individually_excluded {
                prop_assert!(
                    !resolved.contains(file),
                    "excluded path resolved: {}",
                    file.display()
                );
            } else {
                prop_assert!(
                    resolved.contains(file),
                    "included path missing: {}",
                    file.display()
                );
            }
        }
    }
}
