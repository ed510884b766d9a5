//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `postsubmit`.
///
/// Every option except `--git-root` and `--dry-run` is forwarded into the
/// build parameters handed to the external build tool.
#[derive(Debug, Parser)]
#[command(name = "postsubmit", version, about = "Rebuild vendored projects affected by a merge")]
pub struct Cli {
    /// Make target to invoke for each selected project.
    #[arg(long, default_value = "release")]
    pub target: String,

    /// Release branch to build.
    #[arg(long, default_value = "1-18")]
    pub release_branch: String,

    /// Release number to build.
    #[arg(long, default_value = "1")]
    pub release: String,

    /// Build as a development build.
    #[arg(long)]
    pub development: bool,

    /// AWS region to use.
    #[arg(long, default_value = "us-west-2")]
    pub region: String,

    /// AWS account ID to use.
    #[arg(long, default_value = "")]
    pub account_id: String,

    /// Base container image.
    #[arg(long, default_value = "")]
    pub base_image: String,

    /// Container image repository.
    #[arg(long, default_value = "")]
    pub image_repo: String,

    /// go-runner image.
    #[arg(long, default_value = "")]
    pub go_runner_image: String,

    /// kube-proxy base image.
    #[arg(long, default_value = "")]
    pub kube_proxy_base: String,

    /// S3 bucket receiving build artifacts (consumed by the build tool).
    #[arg(long, default_value = "")]
    pub artifact_bucket: String,

    /// Git root directory. Discovered via `git rev-parse` when unset.
    #[arg(long)]
    pub git_root: Option<PathBuf>,

    /// Log the commands that would run, but don't run them.
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_with_all_defaults() {
        let cli = Cli::parse_from(["postsubmit"]);
        assert_eq!(cli.target, "release");
        assert_eq!(cli.release_branch, "1-18");
        assert_eq!(cli.release, "1");
        assert!(!cli.development);
        assert_eq!(cli.region, "us-west-2");
        assert!(cli.git_root.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn parses_explicit_options() {
        let cli = Cli::parse_from([
            "postsubmit",
            "--release-branch",
            "1-21",
            "--account-id",
            "123456789012",
            "--git-root",
            "/repo",
            "--dry-run",
        ]);
        assert_eq!(cli.release_branch, "1-21");
        assert_eq!(cli.account_id, "123456789012");
        assert_eq!(cli.git_root.as_deref(), Some(std::path::Path::new("/repo")));
        assert!(cli.dry_run);
    }

    #[test]
    fn rejects_unknown_option() {
        let result = Cli::try_parse_from(["postsubmit", "--retries", "3"]);
        assert!(result.is_err());
    }
}
