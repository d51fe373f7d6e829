//! Common test support utilities and fixtures
//!
//! This module provides shared functionality to reduce code duplication
//! across integration and E2E tests.

#![allow(dead_code)]

use gitsync::config::RepositoryEntry;
use std::{fs, path::Path, path::PathBuf, process::Command};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A test workspace with temporary directory and config management
pub struct Workspace {
    pub root: TempDir,
    pub config_path: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a new temporary workspace
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let config_path = root.path().join(".gitsync.json");
        Self { root, config_path }
    }

    /// Write a `.gitsync.json` declaring the given (sourceDir, target) pairs
    pub fn write_repos<P: AsRef<Path>>(&self, repos: &[(&str, P)]) {
        let repos: Vec<serde_json::Value> = repos
            .iter()
            .map(|(source_dir, target)| {
                serde_json::json!({
                    "sourceDir": source_dir,
                    "target": target.as_ref().to_string_lossy(),
                })
            })
            .collect();
        let content = serde_json::json!({ "repos": repos });
        fs::write(&self.config_path, content.to_string()).expect("Failed to write config");
    }

    /// Get the workspace root path
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Get the config file path as string
    pub fn config_str(&self) -> &str {
        self.config_path.to_str().expect("Config path not UTF-8")
    }
}

/// Run the gitsync binary with given arguments
pub fn run_cli(args: &[&str], cwd: Option<&Path>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitsync"));
    cmd.arg("--no-color");
    cmd.args(args);

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute gitsync");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

fn git(path: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("Failed to execute git");
    assert!(
        status.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Initialize an empty git repository (no commits) with a local identity
pub fn init_git_repo(path: &Path) {
    fs::create_dir_all(path).expect("Failed to create repo directory");
    git(path, &["init"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Create `file` and commit it with the message `add <file>`
pub fn commit_file(path: &Path, file: &str) {
    fs::write(path.join(file), file).expect("Failed to write file");
    git(path, &["add", file]);
    git(path, &["commit", "-m", &format!("add {}", file)]);
}

/// Create a repository directory under `root` and its matching config entry
pub fn create_test_repo(root: &Path, name: &str, commit: Option<&str>) -> RepositoryEntry {
    let dir = root.join(name);
    init_git_repo(&dir);
    if let Some(file) = commit {
        commit_file(&dir, file);
    }
    RepositoryEntry::new(name, dir.to_string_lossy().to_string())
}
