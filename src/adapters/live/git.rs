//! Live git adapter using `git` CLI commands.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

impl GitRepo for LiveGitRepo {
    fn toplevel(&self) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("git").args(["rev-parse", "--show-toplevel"]).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git rev-parse --show-toplevel failed: {stderr}").into());
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let root = stdout
            .split_whitespace()
            .next()
            .ok_or("git rev-parse --show-toplevel produced no output")?;
        Ok(PathBuf::from(root))
    }

    fn changed_files(
        &self,
        repo_root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "executing: git -C {} diff --name-only HEAD^ HEAD",
            repo_root.display()
        );
        let output = Command::new("git")
            .arg("-C")
            .arg(repo_root)
            .args(["diff", "--name-only", "HEAD^", "HEAD"])
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git diff --name-only HEAD^ HEAD failed: {stderr}").into());
        }
        let files =
            String::from_utf8_lossy(&output.stdout).split_whitespace().map(String::from).collect();
        Ok(files)
    }
}
