use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Immutable traversal configuration: directory names to prune and file
/// extensions to accept. Built once per run and passed explicitly.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    skip_dirs: HashSet<String>,
    extensions: HashSet<String>,
}

impl WalkOptions {
    pub fn new(skip_dirs: &[&str], extensions: &[&str]) -> Self {
        Self {
            skip_dirs: skip_dirs.iter().map(|name| name.to_string()).collect(),
            extensions: extensions
                .iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect(),
        }
    }

    fn is_skipped_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.skip_dirs.contains(name))
                .unwrap_or(false)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.contains(&ext.to_ascii_lowercase()))
            .unwrap_or(false)
    }
}

/// Collect candidate files under `root` in deterministic traversal order.
///
/// Skip-set directories are pruned before descent, so nothing below them is
/// ever visited, however deep the nesting.
pub fn collect_files(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_skipped_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && options.accepts(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "content").unwrap();
    }

    #[test]
    fn test_collects_only_matching_extensions() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("app.js"));
        touch(&dir.path().join("notes.md"));
        touch(&dir.path().join("style.css"));

        let options = WalkOptions::new(&[], &["js"]);
        let files = collect_files(dir.path(), &options);
        assert_eq!(files, vec![dir.path().join("app.js")]);
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Legacy.JS"));

        let options = WalkOptions::new(&[], &["js"]);
        let files = collect_files(dir.path(), &options);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_skip_dirs_are_pruned_at_any_depth() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("src/app.js"));
        touch(&dir.path().join("node_modules/pkg/index.js"));
        touch(&dir.path().join("src/vendor/node_modules/deep/lib.js"));

        let options = WalkOptions::new(&["node_modules"], &["js"]);
        let files = collect_files(dir.path(), &options);
        assert_eq!(files, vec![dir.path().join("src/app.js")]);
    }

    #[test]
    fn test_skip_name_only_applies_to_directories() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("dist.js"));

        let options = WalkOptions::new(&["dist"], &["js"]);
        let files = collect_files(dir.path(), &options);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_traversal_order_is_deterministic() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.js"));
        touch(&dir.path().join("a.js"));
        touch(&dir.path().join("sub/c.js"));

        let options = WalkOptions::new(&[], &["js"]);
        let first = collect_files(dir.path(), &options);
        let second = collect_files(dir.path(), &options);
        assert_eq!(first, second);
        assert_eq!(first[0], dir.path().join("a.js"));
        assert_eq!(first[1], dir.path().join("b.js"));
    }
}
