//! Checker run configuration
//!
//! Historically the checker ran with fixed values: the header tree one
//! level above it, `g++`, a `-I` flag pointing at the tree's parent so
//! that library-internal includes resolve, and a short list of
//! declaration-only headers skipped by name. Those values survive here as
//! defaults; the CLI may override any of them.

use std::path::{Path, PathBuf};

/// Compiler executable used when none is configured
pub const DEFAULT_COMPILER: &str = "g++";

/// File names skipped by the historical no-argument configuration:
/// headers that declare but deliberately do not define, so they are not
/// self-sufficient by design
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "forwards.h",
    "forwards.hpp",
    "iterators.h",
    "celltags.h",
    "domainconfiguration.h",
];

/// Configuration for a single checker run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Root of the header tree to scan
    pub root: PathBuf,
    /// Compiler executable, resolved from the search path
    pub compiler: String,
    /// Opaque compiler flags string, whitespace-split into arguments
    pub flags: String,
    /// Directories skipped during discovery (relative to the root, or a
    /// bare directory name matched at any depth)
    pub excluded_dirs: Vec<String>,
    /// File names skipped during discovery
    pub excluded_files: Vec<String>,
}

impl CheckConfig {
    /// Build a config for a header tree root with the historical defaults:
    /// `g++`, an include path at the root's parent, empty exclusion sets.
    #[must_use]
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let flags = include_parent_flag(&root);
        Self {
            root,
            compiler: DEFAULT_COMPILER.to_string(),
            flags,
            excluded_dirs: Vec::new(),
            excluded_files: Vec::new(),
        }
    }
}

impl Default for CheckConfig {
    /// The historical fixed configuration: the header tree sits one level
    /// above the directory the checker runs from, and the known
    /// declaration-only headers are skipped by name.
    fn default() -> Self {
        let mut config = Self::for_root("..");
        config.excluded_files = DEFAULT_EXCLUDED_FILES.iter().map(ToString::to_string).collect();
        config
    }
}

/// `-I` flag adding the root's parent to the include search path, so that
/// `#include "library/header.hpp"` style internal includes resolve.
fn include_parent_flag(root: &Path) -> String {
    format!("-I{}", root.join("..").display())
}
