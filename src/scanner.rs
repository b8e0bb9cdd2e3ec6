/*!
 * Directory discovery for skukozh
 *
 * Depth-first, pre-order traversal that consults the ignore policy at every
 * entry. Rejected directories are pruned without being visited; rejected
 * files are simply left out of the result.
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::config::TraversalOptions;
use crate::error::{Result, SkukozhError};
use crate::gitignore::IgnoreRuleSet;
use crate::policy::{IgnorePolicy, Verdict};
use crate::utils::to_slash;

/// Name of the ignore file consulted at the walk root
const IGNORE_FILE_NAME: &str = ".gitignore";

/// Scanner for one discovery run
pub struct Scanner {
    options: TraversalOptions,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(options: TraversalOptions) -> Self {
        Self { options }
    }

    /// Walk `root` and return the sorted, duplicate-free list of admitted
    /// relative file paths, `/`-separated.
    ///
    /// Fails only when `root` does not exist or is not a directory.
    /// Entry-level errors mid-walk (for example a permission-denied
    /// subdirectory) are narrated under `--verbose` and skipped.
    pub fn discover(&self, root: &Path) -> Result<Vec<String>> {
        let abs_root = root
            .canonicalize()
            .map_err(|source| SkukozhError::RootAccess {
                path: root.to_path_buf(),
                source,
            })?;
        if !abs_root.is_dir() {
            return Err(SkukozhError::NotADirectory(abs_root));
        }

        self.narrate(format!("Scanning directory: {}", abs_root.display()));

        let rules = self.load_ignore_rules(&abs_root);
        let policy = IgnorePolicy::new(&self.options, rules.as_ref());

        let mut files = Vec::new();
        let mut walker = WalkDir::new(&abs_root).min_depth(1).into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.narrate(format!("Error accessing path: {e}"));
                    continue;
                }
            };

            let rel_path = match entry.path().strip_prefix(&abs_root) {
                Ok(rel) => to_slash(rel),
                Err(_) => to_slash(entry.path()),
            };
            let name = entry.file_name().to_string_lossy();
            let is_dir = entry.file_type().is_dir();

            match policy.evaluate(&rel_path, &name, is_dir) {
                Verdict::Admit => {
                    if !is_dir {
                        files.push(rel_path);
                    }
                }
                Verdict::Reject(reason) => {
                    self.narrate(format!("Skipping {rel_path}: {reason}"));
                    if is_dir {
                        walker.skip_current_dir();
                    }
                }
            }
        }

        files.sort();
        files.dedup();

        self.narrate(format!("Found {} files", files.len()));

        Ok(files)
    }

    /// Look for a single ignore file directly in the walk root.
    ///
    /// Skipped entirely in hidden mode. A read failure is narrated and
    /// treated as "no rules" rather than aborting the walk.
    fn load_ignore_rules(&self, abs_root: &Path) -> Option<IgnoreRuleSet> {
        if self.options.include_hidden {
            return None;
        }

        let path = abs_root.join(IGNORE_FILE_NAME);
        if !path.exists() {
            return None;
        }

        match IgnoreRuleSet::load(&path) {
            Ok(rules) => {
                self.narrate(format!(
                    "Found {} with {} rules",
                    IGNORE_FILE_NAME,
                    rules.len()
                ));
                Some(rules)
            }
            Err(e) => {
                self.narrate(format!("Error reading {IGNORE_FILE_NAME}: {e}"));
                None
            }
        }
    }

    fn narrate(&self, message: String) {
        if self.options.verbose {
            eprintln!("{message}");
        }
    }
}
