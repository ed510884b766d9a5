//! Live adapters that shell out to the real tools.

pub mod git;
pub mod make;

pub use git::LiveGitRepo;
pub use make::LiveMakeRunner;
