use glob::{MatchOptions, Pattern};
use std::borrow::Cow;
use tracing::warn;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    // `*` stays within one path segment; `**` is the only way across `/`
    require_literal_separator: true,
    // dot-files are ordinary names here, wildcards may match them
    require_literal_leading_dot: false,
};

/// Match a root-relative path against a glob pattern.
///
/// Matching runs against the full path, never a basename alone, so
/// `src/*.test.js` only matches files directly under `src/`. A pattern with
/// no `/` of its own applies at any depth (`*.lock` finds lock files in
/// every directory). A pattern the glob parser rejects degrades to an exact
/// string comparison instead of surfacing an error.
pub fn path_matches(path: &str, pattern: &str) -> bool {
    let rooted: Cow<str> = if pattern.contains('/') {
        Cow::Borrowed(pattern)
    } else {
        Cow::Owned(format!("**/{}", pattern))
    };

    match Pattern::new(&rooted) {
        Ok(p) => p.matches_with(path, MATCH_OPTIONS),
        Err(e) => {
            warn!("unparseable pattern '{}', using exact match: {}", pattern, e);
            path == pattern
        }
    }
}
