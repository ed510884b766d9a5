//! Service context bundling the port trait objects.

use crate::ports::git::GitRepo;
use crate::ports::make::BuildRunner;

/// Bundles the external boundaries into a single context.
///
/// Constructors wire up different adapter implementations; tests supply
/// doubles directly.
pub struct ServiceContext {
    /// Git repository for version-control queries.
    pub git: Box<dyn GitRepo>,
    /// Runner launching the external build tool.
    pub builder: Box<dyn BuildRunner>,
}

impl ServiceContext {
    /// Creates a live context shelling out to `git` and `make`.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::git::LiveGitRepo;
        use crate::adapters::live::make::LiveMakeRunner;

        Self { git: Box::new(LiveGitRepo), builder: Box::new(LiveMakeRunner) }
    }
}
