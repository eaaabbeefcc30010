//! Core framework for repotidy
//!
//! This module contains the check contract, the registry, the configuration
//! resolver and the execution engine. It performs no console output; all
//! external interactions go through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CheckId`, `CheckResult`, `RunReport`, `RepoInfo`)
//! - `ports/` - Trait definitions for external collaborators
//! - `check` - The four-call lifecycle every rule implements
//! - `registry` - Identifier to constructor map, frozen before a run
//! - `resolver` - Standard + registry + repository to bound checks
//! - `engine` - Runs bound checks and aggregates the report

pub mod check;
pub mod engine;
pub mod error;
pub mod file_target;
pub mod models;
pub mod ports;
pub mod registry;
pub mod resolver;
pub mod standard;
