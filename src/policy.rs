/*!
 * Layered ignore policy
 *
 * Combines the built-in exclusions (hidden entries, vendor/build directory
 * names, binary extensions), the parsed ignore-file rules and the extension
 * allow-list into a single admit/reject verdict per candidate path.
 */

use std::fmt;

use crate::config::TraversalOptions;
use crate::gitignore::IgnoreRuleSet;
use crate::utils::{
    contains_ignore_case, extension_of, is_hidden, BINARY_EXTENSIONS, FILE_LIST_NAME, IGNORED_DIRS,
    RESULT_NAME, TEXT_EXTENSIONS,
};

/// Admit/reject decision for one candidate path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Include the file, or descend into the directory
    Admit,
    /// Exclude the file, or prune the directory subtree
    Reject(RejectReason),
}

/// Why a candidate was rejected, for verbose narration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The tool's own file-list or result artifact
    OwnArtifact,
    /// Hidden entry (name starts with `.`)
    Hidden,
    /// Directory name starts with `_` (build-artifact convention)
    BuildArtifactDir,
    /// Well-known vendor/build directory name
    VendorDir,
    /// Excluded by an ignore-file rule
    IgnoreRule,
    /// Well-known binary-format extension
    BinaryExtension,
    /// Extension not in the allow-list
    ExtensionNotAllowed,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::OwnArtifact => "tool artifact",
            Self::Hidden => "hidden entry",
            Self::BuildArtifactDir => "build artifact directory",
            Self::VendorDir => "vendor/build directory",
            Self::IgnoreRule => "ignore-file rule",
            Self::BinaryExtension => "binary extension",
            Self::ExtensionNotAllowed => "extension not allowed",
        };
        f.write_str(reason)
    }
}

/// Ignore policy for one traversal
pub struct IgnorePolicy<'a> {
    options: &'a TraversalOptions,
    rules: Option<&'a IgnoreRuleSet>,
}

impl<'a> IgnorePolicy<'a> {
    pub fn new(options: &'a TraversalOptions, rules: Option<&'a IgnoreRuleSet>) -> Self {
        Self { options, rules }
    }

    /// Decide whether to admit a candidate.
    ///
    /// `rel_path` is relative to the walk root with `/` separators; `name`
    /// is the final path component. Directories decide whether the walker
    /// descends, files whether they land in the result.
    pub fn evaluate(&self, rel_path: &str, name: &str, is_dir: bool) -> Verdict {
        let opts = self.options;

        // The tool must never ingest its own prior output, in any mode
        if !is_dir && (name == FILE_LIST_NAME || name == RESULT_NAME) {
            return Verdict::Reject(RejectReason::OwnArtifact);
        }

        // Hidden exclusion is governed only by --hidden; --no-ignore does
        // not re-admit hidden entries
        if !opts.include_hidden && is_hidden(name) {
            return Verdict::Reject(RejectReason::Hidden);
        }

        // `_`-prefixed directories are skipped regardless of flags
        if is_dir && name.starts_with('_') {
            return Verdict::Reject(RejectReason::BuildArtifactDir);
        }

        if is_dir
            && !opts.include_hidden
            && !opts.bypass_default_ignores
            && contains_ignore_case(&IGNORED_DIRS, name)
        {
            return Verdict::Reject(RejectReason::VendorDir);
        }

        if !opts.include_hidden {
            if let Some(rules) = self.rules {
                if rules.is_ignored(rel_path, is_dir) {
                    return Verdict::Reject(RejectReason::IgnoreRule);
                }
            }
        }

        if !is_dir {
            let ext = extension_of(name);

            if !opts.bypass_default_ignores && BINARY_EXTENSIONS.contains(&ext.as_str()) {
                return Verdict::Reject(RejectReason::BinaryExtension);
            }

            if !opts.extension_allow_list.is_empty() {
                if !opts.extension_allow_list.iter().any(|a| a == &ext) {
                    return Verdict::Reject(RejectReason::ExtensionNotAllowed);
                }
            } else if !opts.bypass_default_ignores && !opts.include_hidden {
                // No explicit allow-list: fall back to the built-in
                // common-text list, except in the permissive modes where an
                // empty list means "admit regardless of extension"
                if !TEXT_EXTENSIONS.contains(&ext.as_str()) {
                    return Verdict::Reject(RejectReason::ExtensionNotAllowed);
                }
            }
        }

        Verdict::Admit
    }
}
