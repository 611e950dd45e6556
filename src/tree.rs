//! In-memory representation of a fixture tree.
//!
//! A node is a mapping from child identifier to child node. Nodes without
//! children are leaves and become source files; nodes with children become
//! directories.

use crate::error::{Error, Result};
use crate::naming::NameAllocator;
use indexmap::IndexMap;
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TreeNode {
    children: IndexMap<String, TreeNode>,
}

impl TreeNode {
    pub fn leaf() -> Self {
        Self::default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &IndexMap<String, TreeNode> {
        &self.children
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Adds a child, replacing any previous child with the same name.
    pub fn insert(&mut self, name: impl Into<String>, child: TreeNode) -> Option<TreeNode> {
        self.children.insert(name.into(), child)
    }

    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|child| if child.is_leaf() { 1 } else { child.leaf_count() })
            .sum()
    }

    /// Children that have children of their own, counted over the whole subtree.
    pub fn interior_count(&self) -> usize {
        self.children
            .values()
            .filter(|child| !child.is_leaf())
            .map(|child| 1 + child.interior_count())
            .sum()
    }

    /// Levels of nesting below this node; 0 for a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Paths of every leaf entry below `base`, joined by entry name.
    pub fn leaf_paths(&self, base: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for (name, child) in &self.children {
            let path = base.join(name);
            if child.is_leaf() {
                paths.push(path);
            } else {
                paths.extend(child.leaf_paths(&path));
            }
        }
        paths
    }
}

/// A tree wrapped in its single named root entry, e.g. `{"source": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    name: String,
    tree: TreeNode,
}

impl SourceTree {
    pub fn new(name: impl Into<String>, tree: TreeNode) -> Self {
        Self {
            name: name.into(),
            tree,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tree below the root entry.
    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for SourceTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(std::iter::once((&self.name, &self.tree)))
    }
}

/// Builds a tree `depth` interior levels deep below a root entry named `root_name`.
///
/// Level `i` nodes get `fanout[i]` children; levels past the end of `fanout`
/// reuse its last entry. With `depth == 0` the root entry itself is a leaf.
///
/// # Errors
/// * `Error::ConfigError` if `fanout` is empty while `depth > 0`, or holds a zero
/// * Any allocation error from [`NameAllocator::random_fileset`]
pub fn construct_tree<R: Rng>(
    root_name: &str,
    depth: usize,
    fanout: &[usize],
    allocator: &mut NameAllocator<R>,
) -> Result<SourceTree> {
    if fanout.contains(&0) {
        return Err(Error::ConfigError(
            "fan-out entries must be at least 1".to_string(),
        ));
    }
    let tree = build_node(depth, 0, fanout, allocator)?;
    debug!(
        "Constructed tree '{}': {} leaves, {} directories",
        root_name,
        tree.leaf_count(),
        tree.interior_count()
    );
    Ok(SourceTree::new(root_name, tree))
}

fn build_node<R: Rng>(
    depth: usize,
    level: usize,
    fanout: &[usize],
    allocator: &mut NameAllocator<R>,
) -> Result<TreeNode> {
    if depth == 0 {
        return Ok(TreeNode::leaf());
    }
    let count = fanout
        .get(level)
        .or_else(|| fanout.last())
        .copied()
        .ok_or_else(|| {
            Error::ConfigError("fan-out table is empty but depth is not zero".to_string())
        })?;

    let mut node = TreeNode::default();
    for name in allocator.random_fileset(count)? {
        let child = build_node(depth - 1, level + 1, fanout, allocator)?;
        node.insert(name, child);
    }
    Ok(node)
}
