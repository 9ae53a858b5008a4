// Codesweep - tools for stripping comments and debug statements from source trees
// Re-export public modules and types

pub mod category;
pub mod cli;
pub mod comments;
pub mod processor;
pub mod statements;
pub mod walker;

// Re-export main types for convenience
pub use category::FileCategory;
pub use processor::{ProcessedFile, RunSummary, process_comment_file, process_log_file};
pub use statements::{StatementMatcher, remove_statements};
pub use walker::{WalkOptions, collect_files};
