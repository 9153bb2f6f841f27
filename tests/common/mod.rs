//! Shared testing utilities for msgbox CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `msgbox` binary.
    ///
    /// stdin is not a terminal under test, so the binary uses line-based prompts.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("msgbox").expect("Failed to locate msgbox binary");
        cmd.current_dir(&self.work_dir).env_remove("MSGBOX_LOG");
        cmd
    }

    /// Write a config file into the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("msgbox.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Path of the marker file created by [`TestContext::marker_script`].
    pub fn marker_path(&self) -> PathBuf {
        self.root.path().join("launched.marker")
    }

    /// Write an executable script that creates the marker file when run.
    #[cfg(unix)]
    pub fn marker_script(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.root.path().join("touch-marker.sh");
        let body = format!("#!/bin/sh\ntouch '{}'\n", self.marker_path().display());
        fs::write(&script, body).expect("Failed to write marker script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to make marker script executable");
        script
    }

    /// Wait for the launched process to create the marker file.
    pub fn wait_for_marker(&self) -> bool {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if self.marker_path().exists() {
                return true;
            }
            thread::sleep(Duration::from_millis(25));
        }
        false
    }

    /// Assert that nothing was launched, giving a stray child a moment to show up.
    pub fn assert_not_launched(&self) {
        thread::sleep(Duration::from_millis(200));
        assert!(!self.marker_path().exists(), "executable should not have been launched");
    }
}
