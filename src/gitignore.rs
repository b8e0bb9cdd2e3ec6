/*!
 * Ignore-file parsing and rule evaluation
 */

use std::fs;
use std::io;
use std::path::Path;

use crate::pattern;

/// One line from an ignore file, normalized for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// Pattern with trailing `/` and leading `!` already stripped
    pub pattern: String,
    /// The original line ended with `/`
    pub dir_only: bool,
    /// The original line began with `!`
    pub negated: bool,
}

impl IgnoreRule {
    /// Whether this rule covers the given path.
    ///
    /// A directory-only rule matched against a file applies only when one of
    /// the file's parent directories matches the pattern; against a
    /// directory it is matched directly.
    fn applies_to(&self, path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            parent_dirs(path).any(|dir| pattern::matches(dir, &self.pattern))
        } else {
            pattern::matches(path, &self.pattern)
        }
    }
}

/// Proper parent-directory prefixes of a `/`-separated relative path,
/// shallowest first (`"a/b/c.txt"` -> `"a"`, `"a/b"`)
fn parent_dirs(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(idx, _)| &path[..idx])
}

/// Ordered set of ignore rules; insertion order is significant because the
/// last matching rule decides the verdict
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRuleSet {
    /// Parse ignore-file text into an ordered rule set.
    ///
    /// Blank lines and `#` comments are skipped. Malformed patterns are
    /// never rejected; whatever remains after stripping the `!`/`/` markers
    /// is stored as a literal pattern.
    pub fn parse(text: &str) -> Self {
        let mut rules = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (negated, line) = match line.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, line),
            };
            let (dir_only, line) = match line.strip_suffix('/') {
                Some(rest) => (true, rest),
                None => (false, line),
            };

            rules.push(IgnoreRule {
                pattern: line.to_string(),
                dir_only,
                negated,
            });
        }

        Self { rules }
    }

    /// Read and parse an ignore file from disk
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate a path against every rule in file order.
    ///
    /// The verdict is that of the last matching rule: a negated match
    /// re-admits a previously excluded path. Implemented as a fold rather
    /// than an early-exit loop so negation ordering stays correct.
    pub fn is_ignored(&self, path: &str, is_dir: bool) -> bool {
        self.rules.iter().fold(false, |verdict, rule| {
            if rule.applies_to(path, is_dir) {
                !rule.negated
            } else {
                verdict
            }
        })
    }
}
