//! Common test utilities for CLI integration tests.
//!
//! Each test gets a throwaway workspace holding an org document and,
//! optionally, an `images/` directory next to it.

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary input/output layout for one CLI run.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn input(&self) -> PathBuf {
        self.root().join("deck.org")
    }

    pub fn output(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Write the org document.
    pub fn write_document(&self, content: &str) {
        fs::write(self.input(), content).expect("failed to write document");
    }

    /// Write an image into `images/` next to the document.
    pub fn write_image(&self, name: &str, bytes: &[u8]) {
        let dir = self.root().join("images");
        fs::create_dir_all(&dir).expect("failed to create images dir");
        fs::write(dir.join(name), bytes).expect("failed to write image");
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output().join(name))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", name, e))
    }

    /// Command for the binary with input and output already set.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("drill-export").expect("binary builds");
        cmd.arg(self.input())
            .arg(self.output())
            .env_remove("RUST_LOG")
            .env_remove("DRILL_IMAGES_DIR")
            .env_remove("DRILL_DECK_NAME")
            .env_remove("DRILL_DECK_TAGS")
            .env_remove("DRILL_CATEGORY_TAG")
            .env_remove("DRILL_TAG_PREFIX")
            .env_remove("DRILL_SAMPLE_COUNT");
        cmd
    }
}
