//! Core library for the `postsubmit` CLI.
//!
//! After a merge, resolves the paths changed by the latest commit, maps
//! them onto the registry of vendored projects, and launches a build for
//! each affected project. A change to shared build infrastructure forces
//! a rebuild of every tracked project.

pub mod adapters;
pub mod classify;
pub mod cli;
pub mod context;
pub mod error;
pub mod invoke;
pub mod ports;
pub mod registry;

use tracing::info;

use crate::classify::GlobalTriggerRule;
use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::error::PostsubmitError;
use crate::invoke::{BuildInvoker, BuildParameters};
use crate::registry::ProjectRegistry;

/// Run a postsubmit pass with the given arguments and context.
///
/// Resolution, classification, and the build loop run sequentially in
/// this flow of control; each build blocks until its process exits.
///
/// # Errors
///
/// Returns an error when the git root cannot be discovered, the diff
/// query fails, or any selected project's build fails. The first build
/// failure aborts the remaining projects.
pub fn run(cli: &Cli, ctx: &ServiceContext) -> Result<(), PostsubmitError> {
    info!("running postsubmit - dry-run: {}", cli.dry_run);

    let repo_root = match &cli.git_root {
        Some(root) => root.clone(),
        None => {
            ctx.git.toplevel().map_err(|err| PostsubmitError::RootDiscovery(err.to_string()))?
        }
    };

    let changed_paths = ctx
        .git
        .changed_files(&repo_root)
        .map_err(|err| PostsubmitError::Resolution(err.to_string()))?;

    let registry = ProjectRegistry::standard();
    let selection = classify::classify(&changed_paths, &registry, &GlobalTriggerRule::standard());

    let invoker =
        BuildInvoker::new(ctx.builder.as_ref(), &repo_root, BuildParameters::from(cli), cli.dry_run);
    invoker.build_selection(&selection, &registry)
}
