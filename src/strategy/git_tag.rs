//! Exact git tag on HEAD

use crate::plugin::error::{VersionError, VersionResult};
use std::path::Path;
use std::process::{Command, Stdio};

/// `git describe` arguments that only succeed when HEAD itself is tagged
pub const DESCRIBE_EXACT_TAG_ARGS: [&str; 4] = ["describe", "--exact-match", "--tags", "HEAD"];

/// Captured result of a git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the exact-tag lookup; swapped out in tests
pub trait GitCommand {
    fn describe_exact_tag(&self, workdir: &Path) -> VersionResult<GitOutput>;
}

/// The `git` executable found on PATH
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitCommand for SystemGit {
    fn describe_exact_tag(&self, workdir: &Path) -> VersionResult<GitOutput> {
        let git = which::which("git").map_err(|source| VersionError::GitUnavailable { source })?;
        log::debug!(
            "Running {} {} in {}",
            git.display(),
            DESCRIBE_EXACT_TAG_ARGS.join(" "),
            workdir.display()
        );

        let output = Command::new(&git)
            .args(DESCRIBE_EXACT_TAG_ARGS)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| VersionError::io("running git describe", workdir, e))?;

        Ok(GitOutput {
            success: output.status.success(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Version from the tag pointing exactly at HEAD
pub fn resolve_git_tag_version(git: &dyn GitCommand, workdir: &Path) -> VersionResult<String> {
    let output = git.describe_exact_tag(workdir)?;

    if !output.success {
        log::debug!(
            "git describe exited with {:?}: {}",
            output.status,
            output.stderr.trim()
        );
        return Err(VersionError::NoTag {
            status: output.status,
        });
    }

    let tag = output.stdout.trim();
    if tag.is_empty() {
        return Err(VersionError::NoTag {
            status: output.status,
        });
    }
    Ok(tag.to_string())
}
