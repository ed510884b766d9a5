//! Live build runner using `std::process::Command`.

use std::path::Path;
use std::process::Command;

use crate::ports::make::BuildRunner;

/// Live runner that spawns `make` and inherits this process's streams.
pub struct LiveMakeRunner;

impl BuildRunner for LiveMakeRunner {
    fn run(
        &self,
        project_dir: &Path,
        target: &str,
        args: &[String],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // status() inherits stdout/stderr, so build output streams through
        // unbuffered, and blocks until the child exits. No timeout.
        let status =
            Command::new("make").arg("-C").arg(project_dir).arg(target).args(args).status()?;
        if !status.success() {
            return Err(format!("make exited with {status}").into());
        }
        Ok(())
    }
}
