//! Fatal error kinds for a postsubmit run.

use thiserror::Error;

/// Errors that abort a postsubmit run.
///
/// None of these are retried: a failed version-control query is an
/// environment precondition failure, and the first failed build stops the
/// run before any remaining project is attempted.
#[derive(Debug, Error)]
pub enum PostsubmitError {
    /// The git root could not be discovered and `--git-root` was unset.
    #[error("error finding git root: {0}")]
    RootDiscovery(String),

    /// The changed-path query could not be executed or exited non-zero.
    /// Carries the raw diagnostic output from the query.
    #[error("error running git diff: {0}")]
    Resolution(String),

    /// A selected project's build exited non-zero.
    #[error("error building {project}: {message}")]
    Build {
        /// Identifier of the project whose build failed.
        project: String,
        /// Diagnostic from the build runner.
        message: String,
    },
}
