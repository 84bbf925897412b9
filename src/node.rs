use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One entry of a raw tree listing, as fetched by the host. `path` may be
/// absent; normalization synthesizes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
}

/// A normalized tree node. `path` is canonical: `/`-joined, root-relative,
/// no leading or trailing slash. Directories that survive normalization
/// always have at least one file somewhere beneath them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Directory => "directory",
        }
    }
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Normalize a raw listing: assign canonical paths, then prune directories
/// left without any file descendant. The input is not mutated; running the
/// output back through is a no-op.
pub fn normalize(raw: &[RawNode]) -> Vec<TreeNode> {
    raw.iter().filter_map(|n| normalize_node(n, "")).collect()
}

fn normalize_node(raw: &RawNode, parent_path: &str) -> Option<TreeNode> {
    let path = match &raw.path {
        Some(p) => p.clone(),
        None if parent_path.is_empty() => raw.name.clone(),
        None => format!("{}/{}", parent_path, raw.name),
    };

    match raw.kind {
        NodeKind::File => Some(TreeNode {
            name: raw.name.clone(),
            path,
            kind: NodeKind::File,
            children: Vec::new(),
        }),
        NodeKind::Directory => {
            let children: Vec<TreeNode> = raw
                .children
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .filter_map(|c| normalize_node(c, &path))
                .collect();

            if children.is_empty() {
                return None;
            }

            Some(TreeNode {
                name: raw.name.clone(),
                path,
                kind: NodeKind::Directory,
                children,
            })
        }
    }
}

/// Build a raw nested tree from a flat list of `/`-separated file paths,
/// the shape `git ls-files` produces. Children come out ordered by name.
/// Blank entries are skipped.
pub fn tree_from_paths<I, S>(paths: I) -> Vec<RawNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    #[derive(Default)]
    struct Builder {
        dirs: BTreeMap<String, Builder>,
        files: Vec<String>,
    }

    fn insert(builder: &mut Builder, parts: &[&str]) {
        match parts {
            [] => {}
            [file] => builder.files.push((*file).to_string()),
            [dir, rest @ ..] => {
                insert(builder.dirs.entry((*dir).to_string()).or_default(), rest)
            }
        }
    }

    fn emit(builder: Builder) -> Vec<RawNode> {
        let mut nodes: Vec<RawNode> = builder
            .dirs
            .into_iter()
            .map(|(name, sub)| RawNode {
                name,
                path: None,
                kind: NodeKind::Directory,
                children: Some(emit(sub)),
            })
            .collect();
        let mut files = builder.files;
        files.sort();
        nodes.extend(files.into_iter().map(|name| RawNode {
            name,
            path: None,
            kind: NodeKind::File,
            children: None,
        }));
        nodes
    }

    let mut root = Builder::default();
    for path in paths {
        let path = path.as_ref().trim();
        if path.is_empty() {
            continue;
        }
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        insert(&mut root, &parts);
    }
    emit(root)
}

/// Pre-order traversal of every node, files and directories alike.
pub fn flatten(nodes: &[TreeNode]) -> Vec<&TreeNode> {
    let mut out = Vec::new();
    for node in nodes {
        push_node(node, &mut out);
    }
    out
}

fn push_node<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    out.push(node);
    for child in &node.children {
        push_node(child, out);
    }
}

/// Look up a node by its canonical path.
pub fn find<'a>(nodes: &'a [TreeNode], path: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.path == path {
            return Some(node);
        }
        if path.starts_with(&node.path) && path.as_bytes().get(node.path.len()) == Some(&b'/') {
            if let Some(found) = find(&node.children, path) {
                return Some(found);
            }
        }
    }
    None
}

impl From<&TreeNode> for RawNode {
    fn from(node: &TreeNode) -> Self {
        RawNode {
            name: node.name.clone(),
            path: Some(node.path.clone()),
            kind: node.kind,
            children: if node.is_dir() {
                Some(node.children.iter().map(RawNode::from).collect())
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn file(name: &str) -> RawNode {
        RawNode {
            name: name.to_string(),
            path: None,
            kind: NodeKind::File,
            children: None,
        }
    }

    fn dir(name: &str, children: Vec<RawNode>) -> RawNode {
        RawNode {
            name: name.to_string(),
            path: None,
            kind: NodeKind::Directory,
            children: Some(children),
        }
    }

    #[test]
    fn test_path_assignment() {
        let raw = vec![dir("src", vec![file("main.rs")]), file("README.md")];
        let tree = normalize(&raw);

        assert_eq!(tree[0].path, "src");
        assert_eq!(tree[0].children[0].path, "src/main.rs");
        assert_eq!(tree[1].path, "README.md");
    }

    #[test]
    fn test_existing_paths_kept() {
        let mut raw = vec![file("main.rs")];
        raw[0].path = Some("already/set.rs".to_string());
        let tree = normalize(&raw);
        assert_eq!(tree[0].path, "already/set.rs");
    }

    #[test]
    fn test_empty_directories_pruned() {
        let raw = vec![
            dir("empty", vec![]),
            dir("nested-empty", vec![dir("inner", vec![])]),
            dir("kept", vec![file("a.txt")]),
        ];
        let tree = normalize(&raw);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].path, "kept");
    }

    #[test]
    fn test_directory_without_children_field_pruned() {
        let raw = vec![RawNode {
            name: "bare".to_string(),
            path: None,
            kind: NodeKind::Directory,
            children: None,
        }];
        assert!(normalize(&raw).is_empty());
    }

    #[test]
    fn test_normalize_idempotent() {
        let raw = vec![
            dir("src", vec![file("a.rs"), dir("sub", vec![file("b.rs")])]),
            dir("empty", vec![]),
            file("README.md"),
        ];
        let once = normalize(&raw);
        let round_trip: Vec<RawNode> = once.iter().map(RawNode::from).collect();
        let twice = normalize(&round_trip);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tree_from_paths() {
        let tree = normalize(&tree_from_paths([
            "src/main.rs",
            "src/lib.rs",
            "docs/guide/intro.md",
            "README.md",
        ]));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree[0].path, "docs");
        assert_eq!(tree[0].children[0].path, "docs/guide");
        assert_eq!(tree[0].children[0].children[0].path, "docs/guide/intro.md");
        assert_eq!(tree[1].path, "src");
        assert_eq!(
            tree[1].children.iter().map(|n| n.path.as_str()).collect::<Vec<_>>(),
            vec!["src/lib.rs", "src/main.rs"]
        );
        assert_eq!(tree[2].path, "README.md");
    }

    #[test]
    fn test_tree_from_paths_skips_blanks() {
        assert!(tree_from_paths(["", "  "]).is_empty());
    }

    #[test]
    fn test_flatten_preorder() {
        let tree = normalize(&vec![
            dir("src", vec![file("a.rs"), file("b.rs")]),
            file("README.md"),
        ]);
        let flat: Vec<&str> = flatten(&tree).iter().map(|n| n.path.as_str()).collect();
        assert_eq!(flat, vec!["src", "src/a.rs", "src/b.rs", "README.md"]);
    }

    #[test]
    fn test_find() {
        let tree = normalize(&vec![dir(
            "src",
            vec![dir("sub", vec![file("deep.rs")]), file("a.rs")],
        )]);

        assert_eq!(find(&tree, "src/sub/deep.rs").unwrap().name, "deep.rs");
        assert_eq!(find(&tree, "src").unwrap().kind, NodeKind::Directory);
        assert!(find(&tree, "src/missing.rs").is_none());
        assert!(find(&tree, "srcx").is_none());
    }

    proptest! {
        #[test]
        fn prop_paths_follow_parents(
            paths in proptest::collection::vec("[a-z]{1,6}(/[a-z]{1,6}){0,4}", 1..20)
        ) {
            let tree = normalize(&tree_from_paths(paths.iter()));
            fn check(node: &TreeNode, parent: Option<&str>) {
                match parent {
                    None => assert_eq!(node.path, node.name),
                    Some(p) => assert_eq!(node.path, format!("{}/{}", p, node.name)),
                }
                assert!(!node.path.is_empty());
                for child in &node.children {
                    check(child, Some(&node.path));
                }
            }
            for node in &tree {
                check(node, None);
            }
        }

        #[test]
        fn prop_surviving_dirs_hold_files(
            paths in proptest::collection::vec("[a-z]{1,6}(/[a-z]{1,6}){0,4}", 1..20)
        ) {
            let tree = normalize(&tree_from_paths(paths.iter()));
            fn file_count(node: &TreeNode) -> usize {
                match node.kind {
                    NodeKind::File => 1,
                    NodeKind::Directory => node.children.iter().map(file_count).sum(),
                }
            }
            fn check(node: &TreeNode) {
                if node.is_dir() {
                    assert!(file_count(node) >= 1);
                    node.children.iter().for_each(check);
                }
            }
            tree.iter().for_each(check);
        }
    }
}
