pub mod debounce;
pub mod filter;
pub mod matcher;
pub mod node;
pub mod output;
pub mod rules;
pub mod search;

pub use debounce::DebouncedInput;
pub use filter::{is_rule_match, is_selected, selected_paths, summarize, Summary};
pub use matcher::path_matches;
pub use node::{find, flatten, normalize, tree_from_paths, NodeKind, RawNode, TreeNode};
pub use rules::RuleSet;
pub use search::{preview, search, MAX_RESULTS};

/// Parse a raw listing: either a JSON array of tree entries (the shape a
/// repository fetch returns) or a newline-separated file path list, decided
/// by the leading character.
pub fn parse_listing(text: &str) -> Result<Vec<RawNode>, serde_json::Error> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
    } else {
        Ok(tree_from_paths(text.lines()))
    }
}
