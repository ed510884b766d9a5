//! Git repository port for version-control queries.

use std::path::{Path, PathBuf};

/// Provides read access to the repository being orchestrated.
///
/// Abstracting git access keeps classification and the driving loop
/// testable without a real repository.
pub trait GitRepo: Send + Sync {
    /// Returns the repository's top-level directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is not inside a git
    /// repository or the query cannot be executed.
    fn toplevel(&self) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the paths that changed between the previous and current
    /// commit, in the order the diff query produced them.
    ///
    /// An empty list is a valid result (e.g. an empty commit).
    ///
    /// # Errors
    ///
    /// Returns an error, carrying the query's diagnostic output, if the
    /// diff cannot be computed.
    fn changed_files(
        &self,
        repo_root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
