/*!
 * Command-line interface and traversal configuration for skukozh
 */

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Command-line arguments for skukozh
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "skukozh",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flatten a codebase into a single delimited text artifact for LLM context",
    long_about = "Walks a directory tree, selects files by extension and ignore rules, \
concatenates their contents into a delimited text artifact, and reports summary \
statistics over that artifact."
)]
pub struct Args {
    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find files and create the file list
    #[clap(visible_alias = "f")]
    Find {
        /// Directory to scan
        directory: String,

        /// Comma-separated list of file extensions (e.g. 'php,js,ts')
        #[clap(long, value_delimiter = ',')]
        ext: Vec<String>,

        /// Don't apply default ignore patterns for common directories
        #[clap(long = "no-ignore")]
        no_ignore: bool,

        /// Include hidden files and don't follow .gitignore rules
        #[clap(long)]
        hidden: bool,

        /// Show verbose output while finding files
        #[clap(long)]
        verbose: bool,
    },

    /// Generate the content file from the file list
    #[clap(visible_alias = "g")]
    Gen {
        /// Base directory the file list paths are relative to
        directory: String,
    },

    /// Analyze the result file
    #[clap(visible_alias = "a")]
    Analyze {
        /// Number of largest files to show
        #[clap(long, default_value_t = 20)]
        count: usize,
    },
}

/// Configuration for one directory walk
#[derive(Debug, Clone, Default)]
pub struct TraversalOptions {
    /// Lowercase, dot-prefixed extensions; empty means "use the built-in
    /// common-text-extension list as the allow-list"
    pub extension_allow_list: Vec<String>,

    /// Don't auto-exclude hidden entries and don't consult ignore-file rules
    pub include_hidden: bool,

    /// Skip the built-in vendor-directory and binary-extension exclusions
    pub bypass_default_ignores: bool,

    /// Narrate each admit/reject decision; never changes the result set
    pub verbose: bool,
}

impl TraversalOptions {
    /// Normalize raw `--ext` entries: trimmed, lowercased, dot-prefixed
    pub fn normalize_extensions(raw: &[String]) -> Vec<String> {
        raw.iter()
            .map(|ext| ext.trim())
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect()
    }
}
