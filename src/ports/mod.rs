//! Port traits for external boundaries.

pub mod git;
pub mod make;

pub use git::GitRepo;
pub use make::BuildRunner;
