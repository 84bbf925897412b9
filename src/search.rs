use crate::matcher::path_matches;
use crate::node::TreeNode;

/// Hard cap on search and preview results; keeps interactive queries
/// bounded on trees with many thousands of files.
pub const MAX_RESULTS: usize = 200;

/// Case-insensitive substring search over a flattened node view.
///
/// Matches rank in two buckets: nodes whose name contains the query come
/// before nodes where only the path contains it. Scanning stops as soon as
/// the combined count reaches [`MAX_RESULTS`]; the truncated result is then
/// re-sorted for display (directories first, then by name). An empty query
/// means search is inactive and yields nothing.
pub fn search<'a>(nodes: &[&'a TreeNode], query: &str) -> Vec<&'a TreeNode> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut name_hits: Vec<&TreeNode> = Vec::new();
    let mut path_hits: Vec<&TreeNode> = Vec::new();
    for &node in nodes {
        if name_hits.len() + path_hits.len() >= MAX_RESULTS {
            break;
        }
        if node.name.to_lowercase().contains(&needle) {
            name_hits.push(node);
        } else if node.path.to_lowercase().contains(&needle) {
            path_hits.push(node);
        }
    }

    name_hits.append(&mut path_hits);
    sort_for_display(&mut name_hits);
    name_hits
}

/// Glob-match every node against a candidate pattern, in flattened order,
/// capped at [`MAX_RESULTS`]. Advisory: hosts should only commit a pattern
/// as a rule when its preview is non-empty.
pub fn preview<'a>(nodes: &[&'a TreeNode], pattern: &str) -> Vec<&'a TreeNode> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let mut hits = Vec::new();
    for &node in nodes {
        if hits.len() >= MAX_RESULTS {
            break;
        }
        if path_matches(&node.path, pattern) {
            hits.push(node);
        }
    }
    hits
}

fn sort_for_display(results: &mut [&TreeNode]) {
    results.sort_by(|a, b| b.is_dir().cmp(&a.is_dir()).then_with(|| a.name.cmp(&b.name)));
}
