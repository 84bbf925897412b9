use crate::matcher::path_matches;
use crate::node::{NodeKind, TreeNode};
use crate::rules::RuleSet;
use serde::Serialize;

/// Whether `node` matches any stored rule, independent of polarity.
///
/// Checks run in fixed order and short-circuit: file glob patterns (files
/// and directories alike), then directory containment, then extensions
/// (files only). A node with an empty path never matches.
pub fn is_rule_match(node: &TreeNode, rules: &RuleSet) -> bool {
    if node.path.is_empty() {
        return false;
    }

    if rules
        .excluded_files
        .iter()
        .any(|pattern| path_matches(&node.path, pattern))
    {
        return true;
    }

    if rules
        .excluded_directories
        .iter()
        .any(|dir| node.path == *dir || is_under(&node.path, dir))
    {
        return true;
    }

    if node.kind == NodeKind::File && matches_extension(&node.name, rules) {
        return true;
    }

    false
}

/// Whether `node` will be parsed under `rules`.
pub fn is_selected(node: &TreeNode, rules: &RuleSet) -> bool {
    if rules.include_mode {
        is_rule_match(node, rules)
    } else {
        !is_rule_match(node, rules)
    }
}

fn is_under(path: &str, dir: &str) -> bool {
    path.len() > dir.len() && path.starts_with(dir) && path.as_bytes()[dir.len()] == b'/'
}

fn matches_extension(name: &str, rules: &RuleSet) -> bool {
    rules.excluded_extensions.iter().any(|ext| {
        let ext = ext.trim_start_matches('.');
        !ext.is_empty() && name.ends_with(&format!(".{}", ext))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_files: usize,
    pub files_to_parse: usize,
}

/// File counts over the whole tree, recomputed per tree or rule-set change.
pub fn summarize(nodes: &[TreeNode], rules: &RuleSet) -> Summary {
    let mut summary = Summary {
        total_files: 0,
        files_to_parse: 0,
    };
    for node in nodes {
        count_node(node, rules, &mut summary);
    }
    summary
}

fn count_node(node: &TreeNode, rules: &RuleSet, summary: &mut Summary) {
    if node.kind == NodeKind::File {
        summary.total_files += 1;
        if is_selected(node, rules) {
            summary.files_to_parse += 1;
        }
    }
    for child in &node.children {
        count_node(child, rules, summary);
    }
}

/// The sorted paths of every file that will be parsed.
pub fn selected_paths(nodes: &[TreeNode], rules: &RuleSet) -> Vec<String> {
    let mut paths = Vec::new();
    collect_selected(nodes, rules, &mut paths);
    paths.sort();
    paths
}

fn collect_selected(nodes: &[TreeNode], rules: &RuleSet, out: &mut Vec<String>) {
    for node in nodes {
        if node.kind == NodeKind::File && is_selected(node, rules) {
            out.push(node.path.clone());
        }
        collect_selected(&node.children, rules, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{normalize, tree_from_paths};
    use proptest::prelude::*;

    fn sample_tree() -> Vec<TreeNode> {
        normalize(&tree_from_paths([
            "src/a.ts",
            "src/b.test.ts",
            "dist/bundle.js",
        ]))
    }

    fn file_node(path: &str) -> TreeNode {
        TreeNode {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_pattern_rules_exclude() {
        // exclude *.test.ts, default polarity
        let tree = sample_tree();
        let rules = RuleSet::new().with_file_pattern_added("*.test.ts");

        let summary = summarize(&tree, &rules);
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.files_to_parse, 2);
        assert_eq!(
            selected_paths(&tree, &rules),
            vec!["dist/bundle.js", "src/a.ts"]
        );
    }

    #[test]
    fn test_rooted_pattern_stays_rooted() {
        let tree = sample_tree();
        let rules = RuleSet::new().with_file_pattern_added("dist/*.js");
        assert_eq!(
            selected_paths(&tree, &rules),
            vec!["src/a.ts", "src/b.test.ts"]
        );

        let elsewhere = RuleSet::new().with_file_pattern_added("other/*.js");
        assert_eq!(summarize(&tree, &elsewhere).files_to_parse, 3);
    }

    #[test]
    fn test_directory_rule_and_restore() {
        let tree = sample_tree();
        let rules = RuleSet::new()
            .with_file_pattern_added("src/*.test.ts")
            .with_directory_added("dist");

        assert_eq!(summarize(&tree, &rules).files_to_parse, 1);
        assert_eq!(selected_paths(&tree, &rules), vec!["src/a.ts"]);

        let dist = crate::node::find(&tree, "dist").unwrap();
        let restored = rules.toggled(dist, true);
        assert_eq!(summarize(&tree, &restored).files_to_parse, 2);
    }

    #[test]
    fn test_directory_containment_is_segment_aware() {
        let rules = RuleSet::new().with_directory_added("dist");
        assert!(is_rule_match(&file_node("dist/deep/x.js"), &rules));
        assert!(!is_rule_match(&file_node("distx/x.js"), &rules));
    }

    #[test]
    fn test_directory_rule_matches_the_directory_node() {
        let tree = sample_tree();
        let rules = RuleSet::new().with_directory_added("dist");
        let dist = crate::node::find(&tree, "dist").unwrap();
        assert!(is_rule_match(dist, &rules));
    }

    #[test]
    fn test_include_mode_inverts_reading() {
        // scenario: include only src/a.ts
        let tree = sample_tree();
        let rules = RuleSet::new()
            .with_file_pattern_added("src/a.ts")
            .with_include_mode(true);

        let summary = summarize(&tree, &rules);
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.files_to_parse, 1);
        assert_eq!(selected_paths(&tree, &rules), vec!["src/a.ts"]);
    }

    #[test]
    fn test_directory_cascade_keeps_exclusion() {
        // a file entry under dist is folded into the directory rule but the
        // file stays unselected
        let tree = sample_tree();
        let rules = RuleSet::new().with_file_pattern_added("dist/bundle.js");
        let dist = crate::node::find(&tree, "dist").unwrap();

        let cascaded = rules.toggled(dist, false);
        assert!(!cascaded.excluded_files.contains("dist/bundle.js"));
        let bundle = crate::node::find(&tree, "dist/bundle.js").unwrap();
        assert!(!is_selected(bundle, &cascaded));
    }

    #[test]
    fn test_extension_normalization() {
        let with_dot = RuleSet::new().with_extension_added(".min.js");
        let without_dot = RuleSet::new().with_extension_added("min.js");
        let node = file_node("assets/a.min.js");

        assert!(is_rule_match(&node, &with_dot));
        assert!(is_rule_match(&node, &without_dot));
    }

    #[test]
    fn test_extension_needs_the_dot() {
        // a file named exactly like the extension has no dot to match
        let rules = RuleSet::new().with_extension_added("rs");
        assert!(is_rule_match(&file_node("src/main.rs"), &rules));
        assert!(!is_rule_match(&file_node("src/rs"), &rules));
    }

    #[test]
    fn test_extensions_ignore_directories() {
        let rules = RuleSet::new().with_extension_added("js");
        let dir = TreeNode {
            name: "x.js".to_string(),
            path: "x.js".to_string(),
            kind: NodeKind::Directory,
            children: Vec::new(),
        };
        assert!(!is_rule_match(&dir, &rules));
    }

    #[test]
    fn test_empty_path_never_matches() {
        let rules = RuleSet::new().with_file_pattern_added("**");
        let mut node = file_node("x");
        node.path = String::new();
        assert!(!is_rule_match(&node, &rules));
    }

    proptest! {
        #[test]
        fn prop_polarity_law(path in "[a-z]{1,8}(/[a-z]{1,8}){0,3}(\\.[a-z]{1,4})?") {
            let node = file_node(&path);
            let rules = RuleSet::new()
                .with_directory_added("src")
                .with_file_pattern_added("**/*.test.ts")
                .with_extension_added(".lock");

            let excluding = rules.with_include_mode(false);
            let including = rules.with_include_mode(true);
            prop_assert_eq!(
                is_selected(&node, &including),
                !is_selected(&node, &excluding)
            );
        }
    }
}
