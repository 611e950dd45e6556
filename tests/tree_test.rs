use std::collections::HashSet;
use std::path::Path;

use robogen::error::Error;
use robogen::naming::NameAllocator;
use robogen::tree::{construct_tree, TreeNode};

#[test]
fn test_default_tree_shape() {
    let mut allocator = NameAllocator::seeded(1).unwrap();
    let root = construct_tree("source", 3, &[2, 5, 8], &mut allocator).unwrap();

    assert_eq!(root.name(), "source");
    let tree = root.tree();
    assert_eq!(tree.children().len(), 2);
    for first in tree.children().values() {
        assert_eq!(first.children().len(), 5);
        for second in first.children().values() {
            assert_eq!(second.children().len(), 8);
            assert!(second.children().values().all(TreeNode::is_leaf));
        }
    }
    assert_eq!(tree.leaf_count(), 80);
    assert_eq!(tree.interior_count(), 2 + 10);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn test_depth_zero_is_single_leaf() {
    let mut allocator = NameAllocator::seeded(1).unwrap();
    let root = construct_tree("source", 0, &[2, 5, 8], &mut allocator).unwrap();
    assert!(root.tree().is_leaf());
    assert_eq!(root.to_json(), serde_json::json!({"source": {}}));
}

#[test]
fn test_deeper_tree_reuses_last_fanout() {
    let mut allocator = NameAllocator::seeded(2).unwrap();
    let root = construct_tree("source", 4, &[1, 2], &mut allocator).unwrap();
    assert_eq!(root.tree().depth(), 4);
    assert_eq!(root.tree().leaf_count(), 2 * 2 * 2);
}

#[test]
fn test_empty_fanout_rejected() {
    let mut allocator = NameAllocator::seeded(2).unwrap();
    assert!(matches!(
        construct_tree("source", 1, &[], &mut allocator),
        Err(Error::ConfigError(_))
    ));
    assert!(matches!(
        construct_tree("source", 2, &[3, 0], &mut allocator),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_leaf_paths_are_distinct() {
    let mut allocator = NameAllocator::seeded(9).unwrap();
    let root = construct_tree("source", 3, &[2, 5, 8], &mut allocator).unwrap();
    let paths = root.tree().leaf_paths(Path::new(root.name()));
    assert_eq!(paths.len(), 80);
    let distinct: HashSet<_> = paths.iter().collect();
    assert_eq!(distinct.len(), 80);
    assert!(paths.iter().all(|p| p.starts_with("source")));
}
