//! Probe source generation
//!
//! A probe is the minimal translation unit used to test one header: a
//! quoted include of the candidate followed by an empty entry point. The
//! probe lives at a fixed path, overwritten per candidate, and is removed
//! again when the guard drops, including when a failed check aborts the
//! run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the generated probe translation unit
pub const PROBE_FILE_NAME: &str = "selfinc_probe.cpp";

/// Guard owning the on-disk probe source for one candidate header
#[derive(Debug)]
pub struct ProbeFile {
    path: PathBuf,
}

impl ProbeFile {
    /// Write a probe for `header` into `dir`, overwriting any previous
    /// probe. `dir` must be writable.
    pub fn create(dir: &Path, header: &Path) -> io::Result<Self> {
        let path = dir.join(PROBE_FILE_NAME);
        fs::write(&path, probe_source(header))?;
        Ok(Self { path })
    }

    /// Path of the probe source on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ProbeFile {
    fn drop(&mut self) {
        // Best effort; a stale probe is harmless
        let _ = fs::remove_file(&self.path);
    }
}

/// The two-line probe translation unit for a header path. The include is
/// quoted, not angle-bracketed, so the candidate path resolves from the
/// probe's own directory.
#[must_use]
pub fn probe_source(header: &Path) -> String {
    format!("#include \"{}\"\nint main() {{ return 0; }}\n", header.display())
}
