/*!
 * skukozh - Flatten a codebase into a single delimited text artifact
 *
 * This library walks a directory tree under a layered ignore policy,
 * concatenates the selected files into a delimited text artifact, and
 * computes summary statistics over that artifact, for use as context for
 * Large Language Models.
 */

pub mod config;
pub mod error;
pub mod gitignore;
pub mod pattern;
pub mod policy;
pub mod report;
pub mod scanner;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Command, TraversalOptions};
pub use error::{Result, SkukozhError};
pub use gitignore::{IgnoreRule, IgnoreRuleSet};
pub use policy::{IgnorePolicy, RejectReason, Verdict};
pub use report::{AnalysisReport, FileEntry, ReportFormat, Reporter};
pub use scanner::Scanner;
pub use utils::{FILE_LIST_NAME, RESULT_NAME};
pub use writer::ContentWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
