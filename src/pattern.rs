/*!
 * Restricted glob dialect used by ignore-file rules
 *
 * This is deliberately not a general gitignore engine. It supports exact
 * matches, directory-prefix matches, single-segment wildcards and a `**`
 * recursive wildcard with documented, slightly permissive semantics that the
 * rest of the tool (and its interchange format) depends on.
 */

use glob_match::glob_match;

/// Check whether a relative path matches a single ignore pattern.
///
/// Matching is case-sensitive and operates on `/`-separated paths. The
/// pattern is expected to be already normalized (no leading `!`, no trailing
/// `/` — see [`crate::gitignore::IgnoreRuleSet::parse`]).
pub fn matches(path: &str, pattern: &str) -> bool {
    if pattern.contains("**") {
        return match_recursive(path, pattern);
    }

    if pattern.contains(['*', '?', '[']) {
        return match_wildcard(path, pattern);
    }

    // Exact match, or the pattern names a directory the path lives under
    path == pattern || is_under(path, pattern)
}

/// `path` starts with `pattern` followed by a separator
fn is_under(path: &str, pattern: &str) -> bool {
    path.strip_prefix(pattern)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Single-segment wildcard matching (`*`, `?`, bracket classes).
///
/// A pattern without `/` applies to the trailing path component at any
/// depth; a pattern with `/` is matched against the whole path, with `*`
/// confined to one segment. A failed glob match falls back to reading the
/// pattern text as a literal directory prefix of the path.
fn match_wildcard(path: &str, pattern: &str) -> bool {
    let matched = if pattern.contains('/') {
        glob_match(pattern, path)
    } else {
        let name = path.rsplit('/').next().unwrap_or(path);
        glob_match(pattern, name)
    };

    matched || is_under(path, pattern)
}

/// Recursive `**` matching.
///
/// The common `**/*.<ext>` shape gets a fast path: it matches any path whose
/// final segment ends with `.<ext>`, at any depth including depth zero.
///
/// The generic form splits the pattern on `**` and requires each literal
/// piece to appear in order along the path, the final non-empty piece as a
/// suffix. The intermediate scan is a plain substring search, not
/// segment-aligned; that can over-match on pathological inputs, but the
/// behavior is part of the rule-evaluation contract and is kept as is.
fn match_recursive(path: &str, pattern: &str) -> bool {
    if let Some(ext) = pattern.strip_prefix("**/*.") {
        let suffix = format!(".{ext}");
        return path.ends_with(&suffix);
    }

    let pieces: Vec<&str> = pattern.split("**").collect();
    let mut rest = path;

    for (i, piece) in pieces.iter().copied().enumerate() {
        if i + 1 < pieces.len() {
            if piece.is_empty() {
                continue;
            }
            let mut advanced = false;
            for j in 0..rest.len() {
                if !rest.is_char_boundary(j) {
                    continue;
                }
                if rest[..j].ends_with(piece) {
                    rest = &rest[j..];
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                return false;
            }
        } else if !piece.is_empty() {
            return rest.ends_with(piece);
        }
    }

    true
}
