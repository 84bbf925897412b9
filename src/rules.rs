use crate::node::{NodeKind, TreeNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User-authored filtering rules for one repository tree.
///
/// Entries are always stored exclusion-shaped; `include_mode` only flips how
/// they are read (false: "exclude these", true: "include only these"). Every
/// transition returns a fresh value, so a host holding the previous value can
/// rely on replacement rather than in-place mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub excluded_directories: BTreeSet<String>,
    #[serde(default)]
    pub excluded_files: BTreeSet<String>,
    #[serde(default)]
    pub excluded_extensions: BTreeSet<String>,
    #[serde(default)]
    pub include_mode: bool,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.excluded_directories.is_empty()
            && self.excluded_files.is_empty()
            && self.excluded_extensions.is_empty()
    }

    /// Apply a checkbox toggle. `checked` is the desired "will be parsed"
    /// state; under `include_mode` the stored entries mark the kept side, so
    /// the mapping to add/remove flips with the mode. Toggling a node with
    /// an empty path is a no-op.
    pub fn toggled(&self, node: &TreeNode, checked: bool) -> RuleSet {
        if node.path.is_empty() {
            return self.clone();
        }
        let should_match = if self.include_mode { checked } else { !checked };
        if should_match {
            self.with_entry_for(node)
        } else {
            self.without_entry_for(node)
        }
    }

    /// Record an entry for `node`. For directories every finer-grained entry
    /// underneath becomes redundant and is dropped before the directory
    /// itself is inserted.
    fn with_entry_for(&self, node: &TreeNode) -> RuleSet {
        let mut next = self.clone();
        match node.kind {
            NodeKind::Directory => {
                let prefix = format!("{}/", node.path);
                next.excluded_directories.retain(|d| !d.starts_with(&prefix));
                next.excluded_files.retain(|f| !f.starts_with(&prefix));
                next.excluded_directories.insert(node.path.clone());
            }
            NodeKind::File => {
                next.excluded_files.insert(node.path.clone());
            }
        }
        next
    }

    /// Drop the entry for `node`. For directories every descendant entry is
    /// dropped as well, so nothing finer-grained silently keeps part of the
    /// subtree on the other side.
    fn without_entry_for(&self, node: &TreeNode) -> RuleSet {
        let mut next = self.clone();
        match node.kind {
            NodeKind::Directory => {
                next.excluded_directories.remove(&node.path);
                let prefix = format!("{}/", node.path);
                next.excluded_directories.retain(|d| !d.starts_with(&prefix));
                next.excluded_files.retain(|f| !f.starts_with(&prefix));
            }
            NodeKind::File => {
                next.excluded_files.remove(&node.path);
            }
        }
        next
    }

    pub fn with_extension_added(&self, ext: &str) -> RuleSet {
        let ext = ext.trim();
        if ext.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.excluded_extensions.insert(ext.to_string());
        next
    }

    pub fn with_extension_removed(&self, ext: &str) -> RuleSet {
        let mut next = self.clone();
        next.excluded_extensions.remove(ext.trim());
        next
    }

    /// Commit a file glob pattern. Hosts should only offer this once a
    /// preview of the pattern matched something.
    pub fn with_file_pattern_added(&self, pattern: &str) -> RuleSet {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.excluded_files.insert(pattern.to_string());
        next
    }

    pub fn with_file_pattern_removed(&self, pattern: &str) -> RuleSet {
        let mut next = self.clone();
        next.excluded_files.remove(pattern.trim());
        next
    }

    pub fn with_directory_added(&self, dir: &str) -> RuleSet {
        let dir = dir.trim().trim_matches('/');
        if dir.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.excluded_directories.insert(dir.to_string());
        next
    }

    pub fn with_directory_removed(&self, dir: &str) -> RuleSet {
        let mut next = self.clone();
        next.excluded_directories.remove(dir.trim().trim_matches('/'));
        next
    }

    pub fn with_include_mode(&self, include_mode: bool) -> RuleSet {
        let mut next = self.clone();
        next.include_mode = include_mode;
        next
    }
}
