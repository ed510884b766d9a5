//! Build invocation: parameter expansion and the driving loop.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::classify::Selection;
use crate::cli::Cli;
use crate::error::PostsubmitError;
use crate::ports::make::BuildRunner;
use crate::registry::ProjectRegistry;

/// The image tag is handed to the build tool as a literal template and
/// expanded by make, not by this orchestrator.
const IMAGE_TAG_ARG: &str = "IMAGE_TAG='$(GIT_TAG)-$(PULL_BASE_SHA)'";

/// Build-tool-facing configuration, fixed for the whole run.
#[derive(Debug, Clone)]
pub struct BuildParameters {
    /// Make target invoked for every selected project.
    pub target: String,
    /// Release branch under build.
    pub release_branch: String,
    /// Release number under build.
    pub release: String,
    /// Whether this is a development build.
    pub development: bool,
    /// AWS region.
    pub region: String,
    /// AWS account ID.
    pub account_id: String,
    /// Base container image.
    pub base_image: String,
    /// Container image repository.
    pub image_repo: String,
    /// go-runner image reference.
    pub go_runner_image: String,
    /// kube-proxy base image reference.
    pub kube_proxy_base: String,
    /// Artifact bucket; carried for the build tool's publish targets but
    /// never emitted into the make argument list.
    pub artifact_bucket: String,
}

impl From<&Cli> for BuildParameters {
    fn from(cli: &Cli) -> Self {
        Self {
            target: cli.target.clone(),
            release_branch: cli.release_branch.clone(),
            release: cli.release.clone(),
            development: cli.development,
            region: cli.region.clone(),
            account_id: cli.account_id.clone(),
            base_image: cli.base_image.clone(),
            image_repo: cli.image_repo.clone(),
            go_runner_image: cli.go_runner_image.clone(),
            kube_proxy_base: cli.kube_proxy_base.clone(),
            artifact_bucket: cli.artifact_bucket.clone(),
        }
    }
}

impl BuildParameters {
    /// Expands the ordered `KEY=VALUE` argument list passed to make.
    ///
    /// The order is fixed and the image-tag template is always last, so
    /// the list is byte-identical across invocations.
    #[must_use]
    pub fn make_args(&self) -> Vec<String> {
        vec![
            format!("RELEASE_BRANCH={}", self.release_branch),
            format!("RELEASE={}", self.release),
            format!("DEVELOPMENT={}", self.development),
            format!("AWS_REGION={}", self.region),
            format!("AWS_ACCOUNT_ID={}", self.account_id),
            format!("BASE_IMAGE={}", self.base_image),
            format!("IMAGE_REPO={}", self.image_repo),
            format!("GO_RUNNER_IMAGE={}", self.go_runner_image),
            format!("KUBE_PROXY_BASE_IMAGE={}", self.kube_proxy_base),
            IMAGE_TAG_ARG.to_string(),
        ]
    }
}

/// Launches builds for selected projects, one at a time.
pub struct BuildInvoker<'a> {
    runner: &'a dyn BuildRunner,
    repo_root: PathBuf,
    parameters: BuildParameters,
    dry_run: bool,
}

impl<'a> BuildInvoker<'a> {
    /// Creates an invoker over the given runner and configuration.
    #[must_use]
    pub fn new(
        runner: &'a dyn BuildRunner,
        repo_root: &Path,
        parameters: BuildParameters,
        dry_run: bool,
    ) -> Self {
        Self { runner, repo_root: repo_root.to_path_buf(), parameters, dry_run }
    }

    /// Builds one project: logs the expanded command line, then (unless
    /// dry-run) spawns the build tool and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns a build error naming the project if the tool cannot be
    /// spawned or exits non-zero.
    pub fn build(&self, project: &str) -> Result<(), PostsubmitError> {
        let project_dir = self.repo_root.join("projects").join(project);
        let args = self.parameters.make_args();
        info!(
            "executing: make -C {} {} {}",
            project_dir.display(),
            self.parameters.target,
            args.join(" ")
        );
        if self.dry_run {
            return Ok(());
        }
        self.runner.run(&project_dir, &self.parameters.target, &args).map_err(|err| {
            PostsubmitError::Build { project: project.to_string(), message: err.to_string() }
        })
    }

    /// Builds every project in the selection, in registry order, stopping
    /// at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first build error; remaining projects are not attempted.
    pub fn build_selection(
        &self,
        selection: &Selection,
        registry: &ProjectRegistry,
    ) -> Result<(), PostsubmitError> {
        let projects = selection.projects(registry);
        if projects.is_empty() {
            info!("no vendored projects affected; nothing to build");
            return Ok(());
        }
        for project in projects {
            self.build(project)?;
        }
        Ok(())
    }
}
