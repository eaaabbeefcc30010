//! Domain models for repotidy
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CheckId`] - dotted `category.name` identifier
//! - [`Level`] / [`CheckKind`] - event levels and requirement kinds
//! - [`CheckResult`] / [`RunReport`] - what a run produces
//! - [`RepoInfo`] - the repository under check

mod check_id;
mod level;
mod repo_info;
mod report;

pub use check_id::CheckId;
pub use level::{CheckKind, Level};
pub use repo_info::{BuildSystem, ProjectLayout, RepoInfo};
pub use report::{CheckResult, FailReason, LogEvent, Outcome, RunReport, Tally};
