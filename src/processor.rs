use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::category::FileCategory;
use crate::comments;
use crate::statements::{self, StatementMatcher};

/// Result of one file's read-transform-write pass.
#[derive(Debug)]
pub struct ProcessedFile {
    pub path: PathBuf,
    /// Statements removed; always zero for the comment stripper, which only
    /// tracks whether the content changed.
    pub removed: usize,
    pub modified: bool,
}

/// Running totals for one invocation. Plain counters, so aggregation does not
/// depend on the order files are processed in.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub modified: usize,
    pub removed: usize,
}

impl RunSummary {
    pub fn record(&mut self, file: &ProcessedFile) {
        self.scanned += 1;
        if file.modified {
            self.modified += 1;
            self.removed += file.removed;
        }
    }

    /// A failed file still counts as scanned, with nothing removed.
    pub fn record_failure(&mut self) {
        self.scanned += 1;
    }

    pub fn unchanged(&self) -> usize {
        self.scanned - self.modified
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    String::from_utf8(bytes).map_err(|_| anyhow!("{} is not valid UTF-8", path.display()))
}

/// Strip comments from one file, rewriting it only when the content changed.
pub fn process_comment_file(path: &Path, category: FileCategory) -> Result<ProcessedFile> {
    let original = read_text(path)?;
    let stripped = comments::strip(category, &original);

    let modified = stripped != original;
    if modified {
        fs::write(path, &stripped)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(ProcessedFile {
        path: path.to_path_buf(),
        removed: 0,
        modified,
    })
}

/// Remove debug statements from one file. Writes only when something was
/// removed and `dry_run` is off; a dry run reports the same counts a live run
/// would.
pub fn process_log_file(
    path: &Path,
    matcher: &StatementMatcher,
    dry_run: bool,
) -> Result<ProcessedFile> {
    let original = read_text(path)?;
    let (cleaned, removed) = statements::remove_statements(&original, matcher);

    let modified = removed > 0;
    if modified && !dry_run {
        fs::write(path, &cleaned)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(ProcessedFile {
        path: path.to_path_buf(),
        removed,
        modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_comment_file_rewritten_only_on_change() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.js");
        fs::write(&path, "// gone\ncode();\n").unwrap();

        let outcome = process_comment_file(&path, FileCategory::Script).unwrap();
        assert!(outcome.modified);
        assert_eq!(fs::read_to_string(&path).unwrap(), "\ncode();\n");
    }

    #[test]
    fn test_comment_free_file_is_not_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clean.css");
        fs::write(&path, ".a { color: red; }\n").unwrap();
        let mtime = fs::metadata(&path).unwrap().modified().unwrap();

        let outcome = process_comment_file(&path, FileCategory::Stylesheet).unwrap();
        assert!(!outcome.modified);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), mtime);
        assert_eq!(fs::read_to_string(&path).unwrap(), ".a { color: red; }\n");
    }

    #[test]
    fn test_log_file_dry_run_reports_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.ts");
        let content = "console.log('x');\nwork();\n";
        fs::write(&path, content).unwrap();

        let matcher = StatementMatcher::default();
        let dry = process_log_file(&path, &matcher, true).unwrap();
        assert!(dry.modified);
        assert_eq!(dry.removed, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);

        let live = process_log_file(&path, &matcher, false).unwrap();
        assert_eq!(live.removed, dry.removed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "work();\n");
    }

    #[test]
    fn test_invalid_utf8_is_an_error_and_leaves_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.js");
        fs::write(&path, [0xff, 0xfe, 0x2f, 0x2f]).unwrap();

        let matcher = StatementMatcher::default();
        let err = process_log_file(&path, &matcher, false).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x2f, 0x2f]);
    }

    #[test]
    fn test_summary_accounting() {
        let mut summary = RunSummary::default();
        summary.record(&ProcessedFile {
            path: PathBuf::from("a.js"),
            removed: 2,
            modified: true,
        });
        summary.record(&ProcessedFile {
            path: PathBuf::from("b.js"),
            removed: 0,
            modified: false,
        });
        summary.record_failure();
        summary.record(&ProcessedFile {
            path: PathBuf::from("c.js"),
            removed: 3,
            modified: true,
        });

        assert_eq!(summary.scanned, 4);
        assert_eq!(summary.modified, 2);
        assert_eq!(summary.removed, 5);
        assert_eq!(summary.unchanged(), 2);
    }
}
