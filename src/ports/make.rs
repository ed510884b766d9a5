//! Build runner port for launching the external build tool.

use std::path::Path;

/// Launches one project build and blocks until it exits.
///
/// Abstracting the build tool lets tests verify dry-run and fail-fast
/// behavior with a recording double instead of spawning processes.
pub trait BuildRunner: Send + Sync {
    /// Runs `make -C <project_dir> <target> <args..>`, forwarding the
    /// child's stdout and stderr to this process's own streams.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be spawned or exits non-zero.
    fn run(
        &self,
        project_dir: &Path,
        target: &str,
        args: &[String],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
