//! Header discovery
//!
//! Walks the header tree and produces the ordered list of candidate files,
//! minus the configured exclusions. Exclusions exist for headers that are
//! deliberately not self-sufficient: forward-declaration headers, or ones
//! meant to be included only after other headers establish required types.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur during discovery
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Error walking the tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Discovers candidate header files under a root directory
#[derive(Debug)]
pub struct Discovery {
    root: PathBuf,
    excluded_dirs: Vec<String>,
    excluded_files: Vec<String>,
}

impl Discovery {
    /// Create a discovery rooted at the given path
    pub fn new(
        root: impl AsRef<Path>,
        excluded_dirs: &[String],
        excluded_files: &[String],
    ) -> Result<Self, DiscoverError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(DiscoverError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(DiscoverError::NotADirectory(root));
        }

        Ok(Self {
            root,
            excluded_dirs: excluded_dirs.to_vec(),
            excluded_files: excluded_files.to_vec(),
        })
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All non-excluded files under the root, as paths relative to it,
    /// sorted for deterministic ordering
    pub fn files(&self) -> Result<Vec<PathBuf>, DiscoverError> {
        let root = &self.root;
        let mut found = Vec::new();

        for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
            // Don't filter the root directory itself
            if e.path() == root {
                return true;
            }
            // Excluded directories are pruned, not filtered per-file
            !(e.file_type().is_dir() && self.is_excluded_dir(e.path()))
        }) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();

            if self.is_excluded_file(&relative) {
                continue;
            }
            found.push(relative);
        }

        found.sort();
        Ok(found)
    }

    /// A directory is excluded when its path relative to the root matches
    /// an entry, or its bare name does (so "detail" skips detail/ anywhere)
    fn is_excluded_dir(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let name = path.file_name().map(|n| n.to_string_lossy());

        self.excluded_dirs
            .iter()
            .any(|d| Path::new(d) == relative || name.as_deref() == Some(d.as_str()))
    }

    fn is_excluded_file(&self, relative: &Path) -> bool {
        relative
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.excluded_files.iter().any(|f| f == name))
    }
}
