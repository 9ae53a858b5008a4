use std::fs;
use std::io::{self, Write};
use std::path::Path;

use codesweep::{FileCategory, RunSummary, WalkOptions, collect_files, process_comment_file};

/// Directory names never descended into.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "__pycache__",
    "venv",
    "env",
];

/// File extensions eligible for comment removal.
const EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "py", "css", "scss", "html", "htm"];

/// Ask for a yes/no confirmation on stdin. Anything other than `y`/`yes`
/// counts as a decline.
fn prompt_bool(prompt: &str) -> io::Result<bool> {
    print!("{prompt} (yes/no): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim().to_lowercase();

    Ok(matches!(input.as_str(), "y" | "yes"))
}

fn sweep_directory(root: &Path, options: &WalkOptions) {
    let shown_root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

    println!("Scanning for code files...");
    println!("Root directory: {}", shown_root.display());
    println!("{}", "-".repeat(60));

    let mut summary = RunSummary::default();

    for path in collect_files(root, options) {
        // The extension filter guarantees a category here.
        let Some(category) = FileCategory::from_path(&path) else {
            continue;
        };

        let shown = path.strip_prefix(root).unwrap_or(&path);
        println!("Processing: {}", shown.display());

        match process_comment_file(&path, category) {
            Ok(outcome) => {
                if outcome.modified {
                    println!("  ✓ Comments removed");
                } else {
                    println!("  - No comments found");
                }
                summary.record(&outcome);
            }
            Err(err) => {
                println!("Error processing {}: {:#}", path.display(), err);
                summary.record_failure();
            }
        }
    }

    println!("{}", "-".repeat(60));
    println!("\nSummary:");
    println!("  Files processed: {}", summary.scanned);
    println!("  Files modified: {}", summary.modified);
    println!("  Files unchanged: {}", summary.unchanged());
    println!("\nDone.");
}

fn main() {
    println!("{}", "=".repeat(60));
    println!("  REMOVE COMMENTS");
    println!("{}", "=".repeat(60));
    println!();
    println!("WARNING: This will remove ALL comments from code files!");
    println!("Supported: JS, TS, Python, CSS, HTML");
    println!();

    // A failed prompt read counts as a decline; this tool always exits 0.
    let confirmed = prompt_bool("Do you want to continue?").unwrap_or(false);
    if !confirmed {
        println!("\nOperation cancelled.");
        return;
    }

    let options = WalkOptions::new(SKIP_DIRS, EXTENSIONS);

    let frontend = Path::new("frontend");
    let backend = Path::new("backend");
    let mut processed_any = false;

    if frontend.exists() {
        println!("\nProcessing frontend...");
        sweep_directory(frontend, &options);
        processed_any = true;
    }

    if backend.exists() {
        println!("\nProcessing backend...");
        sweep_directory(backend, &options);
        processed_any = true;
    }

    if !processed_any {
        println!("\nProcessing current directory...");
        sweep_directory(Path::new("."), &options);
    }
}
