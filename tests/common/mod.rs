//! Common test fixtures shared across integration tests
//!
//! Provides a temporary header tree, a separate working directory for the
//! checker process, and a stub compiler script that rejects headers
//! carrying the failure marker.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Marker that makes the stub compiler reject a header
pub const FAIL_MARKER: &str = "NOT_SELF_SUFFICIENT";

/// A temporary header tree plus a work directory to run the checker from
pub struct Fixture {
    temp: TempDir,
}

impl Fixture {
    /// Create an empty tree and work directory
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("tree")).unwrap();
        fs::create_dir(temp.path().join("work")).unwrap();
        Self { temp }
    }

    /// Absolute path of the header tree root
    pub fn tree(&self) -> PathBuf {
        self.temp.path().join("tree")
    }

    /// Absolute path of the directory the checker runs from (and writes
    /// its probe into)
    pub fn work_dir(&self) -> PathBuf {
        self.temp.path().join("work")
    }

    /// Write a header at a path relative to the tree root
    pub fn add_header(&self, relative: &str, content: &str) {
        let path = self.tree().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Stub compiler: reads the include out of the probe and fails with an
    /// error line when the included header contains [`FAIL_MARKER`]
    #[cfg(unix)]
    pub fn stub_compiler(&self) -> String {
        use std::os::unix::fs::PermissionsExt;

        let script = self.temp.path().join("cc-stub");
        let body = format!(
            concat!(
                "#!/bin/sh\n",
                "probe=\"$1\"\n",
                "header=$(sed -n 's/#include \"\\(.*\\)\"/\\1/p' \"$probe\")\n",
                "if grep -q {marker} \"$header\"; then\n",
                "  echo \"$header: error: unknown type name 'A'\"\n",
                "  exit 1\n",
                "fi\n",
                "exit 0\n"
            ),
            marker = FAIL_MARKER
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script.to_str().unwrap().to_string()
    }
}
