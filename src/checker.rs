//! Per-header self-sufficiency check
//!
//! Generates the probe for one header and compiles it. The verdict is a
//! typed per-header status; the fail-fast policy lives in the orchestration
//! loop, which stops at the first `Failed`, not in unwinding control flow.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::compiler::{CompileError, Compiler, Outcome};
use crate::config::CheckConfig;
use crate::probe::ProbeFile;

/// Errors that abort a check before any compiler verdict exists
#[derive(Debug, Error)]
pub enum CheckError {
    /// Probe source could not be written (working directory not writable)
    #[error("failed to write probe source: {0}")]
    Probe(#[from] std::io::Error),

    /// Compiler could not be invoked
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Verdict for a single header
#[derive(Debug)]
pub enum HeaderStatus {
    /// The probe compiled; the header stands on its own
    SelfSufficient,
    /// The probe failed to compile
    Failed {
        /// Merged compiler stdout/stderr, verbatim
        output: String,
    },
}

/// Checks headers of one tree against one compiler
#[derive(Debug)]
pub struct Checker {
    root: PathBuf,
    work_dir: PathBuf,
    compiler: Compiler,
}

impl Checker {
    /// Create a checker from a run configuration, writing probes into the
    /// current working directory
    #[must_use]
    pub fn new(config: &CheckConfig) -> Self {
        Self::with_work_dir(config, Path::new("."))
    }

    /// Create a checker writing probes into `work_dir` (must be writable)
    #[must_use]
    pub fn with_work_dir(config: &CheckConfig, work_dir: &Path) -> Self {
        Self {
            root: config.root.clone(),
            work_dir: work_dir.to_path_buf(),
            compiler: Compiler::new(&config.compiler, &config.flags),
        }
    }

    /// Probe one header (path relative to the tree root) and report
    /// whether it compiles standalone. The probe includes the root-joined
    /// path, so a relative root must be relative to the work directory.
    pub fn check_header(&self, header: &Path) -> Result<HeaderStatus, CheckError> {
        let include_target = self.root.join(header);
        let probe = ProbeFile::create(&self.work_dir, &include_target)?;

        match self.compiler.compile(probe.path())? {
            Outcome::Success => Ok(HeaderStatus::SelfSufficient),
            Outcome::Failure { output } => Ok(HeaderStatus::Failed { output }),
        }
    }
}
