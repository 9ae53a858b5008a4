use std::path::PathBuf;
use std::process;

use codesweep::cli::parse_logs_args;
use codesweep::{RunSummary, StatementMatcher, WalkOptions, collect_files, process_log_file};

/// Directory names never descended into.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "out",
    "__pycache__",
];

/// File extensions eligible for statement removal.
const EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

fn main() {
    let args = parse_logs_args();

    if !args.directory.exists() {
        eprintln!(
            "Error: directory '{}' does not exist",
            args.directory.display()
        );
        process::exit(1);
    }
    let root = args
        .directory
        .canonicalize()
        .unwrap_or_else(|_| args.directory.clone());

    println!("Scanning directory: {}", root.display());
    if args.dry_run {
        println!("DRY RUN MODE - No files will be modified\n");
    }

    let options = WalkOptions::new(SKIP_DIRS, EXTENSIONS);
    let files = collect_files(&root, &options);
    println!("Found {} JavaScript/TypeScript files\n", files.len());

    let matcher = StatementMatcher::default();
    let mut summary = RunSummary::default();
    let mut modified_files: Vec<PathBuf> = Vec::new();

    for path in &files {
        match process_log_file(path, &matcher, args.dry_run) {
            Ok(outcome) => {
                if outcome.modified {
                    if args.verbose {
                        let shown = path.strip_prefix(&root).unwrap_or(path);
                        let prefix = if args.dry_run { "[DRY RUN] " } else { "" };
                        println!(
                            "{}Removed {} console.log(s) from: {}",
                            prefix,
                            outcome.removed,
                            shown.display()
                        );
                    }
                    modified_files.push(path.clone());
                }
                summary.record(&outcome);
            }
            Err(err) => {
                eprintln!("Error processing {}: {:#}", path.display(), err);
                summary.record_failure();
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Files scanned: {}", summary.scanned);
    println!("Files modified: {}", summary.modified);
    println!(
        "Total console.log statements removed: {}",
        summary.removed
    );

    if args.dry_run && !modified_files.is_empty() {
        println!("\nRun without --dry-run to apply changes");
    }

    if args.verbose && !modified_files.is_empty() {
        println!("\nModified files:");
        for path in &modified_files {
            let shown = path.strip_prefix(&root).unwrap_or(path);
            println!("  - {}", shown.display());
        }
    }
}
