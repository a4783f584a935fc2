//! Common test utilities and helpers
//!
//! Throwaway Python projects on disk and a thin wrapper for driving real git.

#![allow(dead_code)]

use poetry_version::config::Manifest;
use poetry_version::plugin::api::{
    BufferedIo, PackageModel, ResolvedVersion, VersionPlugin, VersionResult,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A project directory with a `pyproject.toml` and any extra files
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new(manifest: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pyproject.toml"), manifest).unwrap();
        Self { dir }
    }

    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("pyproject.toml")
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::load(&self.manifest_path()).unwrap()
    }

    /// Activate the plugin with the system git and a buffered output channel
    pub fn resolve(&self) -> (VersionResult<Option<ResolvedVersion>>, PackageModel, BufferedIo) {
        let mut host = PackageModel::default();
        let mut io = BufferedIo::new();
        let result = VersionPlugin::new().resolve(&self.manifest(), &mut host, &mut io);
        (result, host, io)
    }
}

/// Manifest text for a named package with the given plugin section body
pub fn manifest_with(name: &str, section: &str) -> String {
    format!(
        "[tool.poetry]\nname = \"{}\"\nversion = \"0\"\n\n[tool.poetry-version]\n{}\n",
        name, section
    )
}

pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Run git in `repo`, panicking with its stderr on failure
pub fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initialise a repository in `repo` with one commit of everything present
pub fn init_repo_with_commit(repo: &Path) {
    git(repo, &["init", "-q"]);
    git(repo, &["config", "user.name", "Test User"]);
    git(repo, &["config", "user.email", "test@example.com"]);
    git(repo, &["config", "commit.gpgsign", "false"]);
    git(repo, &["config", "tag.gpgsign", "false"]);
    git(repo, &["add", "."]);
    git(repo, &["commit", "-q", "-m", "Initial commit"]);
}
