use std::fs;

use robogen::config::FixtureConfig;
use robogen::error::Error;
use robogen::fixtures::generate_fixtures;
use robogen::header::{is_header_block, HeaderSynthesizer};
use robogen::materializer::{ensure_directory, verify_source_tree, Materializer};
use robogen::naming::NameAllocator;
use robogen::renderer::MiniJinjaRenderer;
use robogen::tree::{SourceTree, TreeNode};
use tempfile::TempDir;
use walkdir::WalkDir;

fn fixture_config(temp_dir: &TempDir, seed: u64) -> FixtureConfig {
    FixtureConfig {
        output_dir: temp_dir.path().to_path_buf(),
        seed: Some(seed),
        ..FixtureConfig::default()
    }
}

#[test_log::test]
fn test_generate_default_tree() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let report = generate_fixtures(&fixture_config(&temp_dir, 17), &renderer).unwrap();

    assert_eq!(report.files.len(), 80);
    let source = temp_dir.path().join("source");

    let mut files = 0;
    let mut dirs_by_depth = [0usize; 4];
    for entry in WalkDir::new(&source).min_depth(1) {
        let entry = entry.unwrap();
        if entry.file_type().is_dir() {
            dirs_by_depth[entry.depth()] += 1;
        } else {
            files += 1;
            assert_eq!(entry.depth(), 3);
            let path = entry.path();
            assert_eq!(path.extension().unwrap(), "c");
            let stem = path.file_stem().unwrap().to_str().unwrap();
            assert!((4..=5).contains(&stem.len()));
            assert!(is_header_block(&fs::read_to_string(path).unwrap()));
        }
    }
    assert_eq!(files, 80);
    assert_eq!(dirs_by_depth[1], 2);
    assert_eq!(dirs_by_depth[2], 10);

    for path in report.tree.tree().leaf_paths(&source) {
        assert!(path.with_extension("c").is_file());
    }
}

#[test]
fn test_materialize_into_existing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let config = fixture_config(&temp_dir, 23);

    let first = generate_fixtures(&config, &renderer).unwrap();
    let unrelated = temp_dir.path().join("source").join("keep.txt");
    fs::write(&unrelated, "untouched").unwrap();

    let second = generate_fixtures(&config, &renderer).unwrap();
    assert_eq!(first.files, second.files);
    assert_eq!(fs::read_to_string(&unrelated).unwrap(), "untouched");
    assert_eq!(verify_source_tree(temp_dir.path(), "c").unwrap(), 80);
}

#[test]
fn test_ensure_directory_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("c");
    ensure_directory(&nested).unwrap();
    ensure_directory(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn test_depth_zero_writes_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let config = FixtureConfig {
        depth: 0,
        ..fixture_config(&temp_dir, 4)
    };
    let report = generate_fixtures(&config, &renderer).unwrap();
    assert_eq!(report.files, vec![temp_dir.path().join("source.c")]);
}

#[test]
fn test_generate_source_tree_on_hand_built_tree() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(HeaderSynthesizer::new(&renderer, 10), "c");
    let mut allocator = NameAllocator::seeded(3).unwrap();

    let mut dir = TreeNode::default();
    dir.insert("leaf", TreeNode::leaf());
    let mut top = TreeNode::default();
    top.insert("dir", dir);
    top.insert("other", TreeNode::leaf());

    let written = materializer
        .generate_source_tree(&top, temp_dir.path(), &mut allocator)
        .unwrap();
    assert_eq!(
        written,
        vec![
            temp_dir.path().join("dir").join("leaf.c"),
            temp_dir.path().join("other.c"),
        ]
    );

    let root = SourceTree::new("root", top);
    let written = materializer
        .materialize(&root, temp_dir.path(), &mut allocator)
        .unwrap();
    assert_eq!(written.len(), 2);
    assert!(temp_dir.path().join("root").join("other.c").is_file());
}

#[test]
fn test_file_in_place_of_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("source"), "not a directory").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let result = generate_fixtures(&fixture_config(&temp_dir, 5), &renderer);
    assert!(matches!(result, Err(Error::FileSystemError { .. })));
}

#[test]
fn test_verify_rejects_invalid_source() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.c");
    fs::write(&bad, "int main(void) { return 0; }\n").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

    match verify_source_tree(temp_dir.path(), "c") {
        Err(Error::HeaderError { path, .. }) => assert_eq!(path, bad),
        other => panic!("Expected HeaderError, got {:?}", other),
    }
}
