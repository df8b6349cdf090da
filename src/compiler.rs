//! Compiler invocation
//!
//! The compiler is an external collaborator, not part of the checker: the
//! contract is an executable name resolved from the search path, an argv of
//! probe path plus flags, merged stdout/stderr capture, and an exit-code
//! check. Any standards-conformant compiler that fits that contract drops
//! in.

use std::path::Path;
use std::process::Command;

use log::debug;
use thiserror::Error;

/// Errors from invoking the compiler
#[derive(Debug, Error)]
pub enum CompileError {
    /// The compiler process could not be spawned at all (typically: the
    /// executable is not on the search path)
    #[error("failed to run compiler `{compiler}`: {source}")]
    Spawn {
        /// Executable that could not be started
        compiler: String,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of one probe compilation
#[derive(Debug)]
pub enum Outcome {
    /// Exit status zero; compiler output is discarded
    Success,
    /// Non-zero exit status
    Failure {
        /// Merged stdout/stderr text, verbatim
        output: String,
    },
}

/// An external compiler with a fixed flag set
#[derive(Debug, Clone)]
pub struct Compiler {
    executable: String,
    flags: Vec<String>,
}

impl Compiler {
    /// Create a compiler from an executable name and an opaque flags
    /// string, whitespace-split into individual arguments
    #[must_use]
    pub fn new(executable: &str, flags: &str) -> Self {
        Self {
            executable: executable.to_string(),
            flags: flags.split_whitespace().map(String::from).collect(),
        }
    }

    /// The executable name as given (resolved from the search path when
    /// the compiler runs)
    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Compile a probe source file, merging stdout and stderr into one
    /// diagnostic blob on failure
    pub fn compile(&self, probe: &Path) -> Result<Outcome, CompileError> {
        debug!("{} {} {}", self.executable, probe.display(), self.flags.join(" "));

        let output = Command::new(&self.executable)
            .arg(probe)
            .args(&self.flags)
            .output()
            .map_err(|source| CompileError::Spawn {
                compiler: self.executable.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(Outcome::Success);
        }

        let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
        merged.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(Outcome::Failure { output: merged })
    }
}
