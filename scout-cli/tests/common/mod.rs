//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary working directory with helpers for driving the binary.
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create a file (and any parent directories) under the test root.
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Write a terms file and return its path.
    pub fn write_terms(&self, yaml: &str) -> PathBuf {
        self.write_file("terms.yml", yaml)
    }

    /// A `scout` command with the test root as working directory.
    pub fn scout(&self) -> Command {
        let mut cmd = Command::cargo_bin("scout").expect("binary built");
        cmd.current_dir(self.root.path());
        cmd
    }
}
