//! Writes an in-memory fixture tree to the file system.
//! Interior nodes become directories, leaves become source files that start
//! with a synthesized header block.

use crate::error::{Error, Result};
use crate::header::{check_header, HeaderSynthesizer};
use crate::naming::NameAllocator;
use crate::tree::{SourceTree, TreeNode};
use log::{debug, warn};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Creates `path` and any missing parents. Existing directories are left alone.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path).map_err(|e| Error::file_system(path, e))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        warn!("Overwriting existing file: {}", path.display());
    }
    fs::write(path, content).map_err(|e| Error::file_system(path, e))
}

/// Walks fixture trees and realizes them on disk.
pub struct Materializer<'a> {
    synthesizer: HeaderSynthesizer<'a>,
    extension: String,
}

impl<'a> Materializer<'a> {
    /// # Arguments
    /// * `synthesizer` - Produces the content of every source file
    /// * `extension` - Source file extension without the dot
    pub fn new(synthesizer: HeaderSynthesizer<'a>, extension: &str) -> Self {
        Self {
            synthesizer,
            extension: extension.to_string(),
        }
    }

    /// Materializes `root` below `base`, starting with the root entry's
    /// directory. Returns the paths of the written files.
    pub fn materialize<R: Rng>(
        &self,
        root: &SourceTree,
        base: &Path,
        allocator: &mut NameAllocator<R>,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        self.generate_entry(root.name(), root.tree(), base, allocator, &mut written)?;
        Ok(written)
    }

    /// Walks the children of `tree`. Leaf children become `<name>.<ext>` files
    /// in `path`; interior children recurse with `path/<name>`.
    ///
    /// # Errors
    /// * `Error::FileSystemError` if a directory cannot be created or a file
    ///   cannot be written
    pub fn generate_source_tree<R: Rng>(
        &self,
        tree: &TreeNode,
        path: &Path,
        allocator: &mut NameAllocator<R>,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (name, subtree) in tree.children() {
            self.generate_entry(name, subtree, path, allocator, &mut written)?;
        }
        Ok(written)
    }

    fn generate_entry<R: Rng>(
        &self,
        name: &str,
        subtree: &TreeNode,
        path: &Path,
        allocator: &mut NameAllocator<R>,
        written: &mut Vec<PathBuf>,
    ) -> Result<()> {
        if subtree.is_leaf() {
            ensure_directory(path)?;
            let source_path = path.join(format!("{}.{}", name, self.extension));
            let header = self.synthesizer.generate_header(allocator)?;
            write_file(&source_path, &header)?;
            debug!("Wrote source file: {}", source_path.display());
            written.push(source_path);
        } else {
            written.extend(self.generate_source_tree(subtree, &path.join(name), allocator)?);
        }
        Ok(())
    }
}

/// Checks every `*.<extension>` file below `dir` for a valid header block.
///
/// # Returns
/// * `Result<usize>` - Number of checked files
///
/// # Errors
/// * `Error::HeaderError` for the first file without a valid header
pub fn verify_source_tree(dir: &Path, extension: &str) -> Result<usize> {
    let mut checked = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            Error::file_system(path, e.into())
        })?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(extension)
        {
            continue;
        }
        let content = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
        check_header(&content).map_err(|reason| Error::HeaderError {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })?;
        checked += 1;
    }
    debug!("Verified {} source files in {}", checked, dir.display());
    Ok(checked)
}
