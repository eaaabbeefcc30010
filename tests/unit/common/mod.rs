//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing repotidy components.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use repotidy::adapters::toml::{bundled, parse_str};
use repotidy::adapters::{NullSink, ReferenceDir};
use repotidy::core::engine::{Engine, RunMode};
use repotidy::core::models::{CheckResult, RepoInfo, RunReport};
use repotidy::core::ports::ReferenceLookup;
use repotidy::core::resolver::Resolver;
use repotidy::core::standard::Standard;
use repotidy::{paths, repo, rules};
use tempfile::TempDir;

/// README of a library that follows the bundled standard
pub const COMPLIANT_README: &str = r"# beman.exemplar: A Beman Library Exemplar

![Library Status](https://raw.githubusercontent.com/bemanproject/beman/refs/heads/main/images/badges/beman_badge-beman_library_under_development.svg) ![Standard Target](https://github.com/bemanproject/beman/blob/main/images/badges/cpp26.svg)

`beman.exemplar` is a minimal C++ library conforming to the Beman Standard.

**Implements**: [`std::identity` proposed in Standard Library Concepts (P0898R3)](https://wg21.link/P0898R3).

**Status**: [Under development and not yet ready for production use.](https://github.com/bemanproject/beman/blob/main/docs/beman_library_maturity_model.md#under-development-and-not-yet-ready-for-production-use)

[![Compiler Explorer Example](https://img.shields.io/badge/Try%20it%20on%20Compiler%20Explorer-grey?logo=compilerexplorer&logoColor=67c52a)](https://godbolt.org/z/4qEPK87va)

## Usage

Include `<beman/exemplar/identity.hpp>`.

## License

beman.exemplar is licensed under the Apache License v2.0 with LLVM Exceptions.
";

/// A test repository named `exemplar`
pub struct TestRepo {
    _dir: TempDir,
    root: PathBuf,
}

impl TestRepo {
    /// Create an empty repository directory named `exemplar`
    pub fn new() -> Self {
        Self::named("exemplar")
    }

    /// Create an empty repository directory with the given name
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir_all(&root).unwrap();
        Self { _dir: dir, root }
    }

    /// Create a repository that satisfies every check of the bundled standard:
    /// ```text
    /// exemplar/
    /// ├── .github/CODEOWNERS
    /// ├── CMakeLists.txt
    /// ├── LICENSE
    /// ├── README.md
    /// ├── examples/{CMakeLists.txt, identity_direct_usage.cpp}
    /// ├── include/beman/exemplar/identity.hpp
    /// ├── src/beman/exemplar/identity.cpp
    /// └── tests/beman/exemplar/{CMakeLists.txt, identity.test.cpp}
    /// ```
    pub fn compliant() -> Self {
        let repo = Self::new();
        repo.add_file(".github/CODEOWNERS", "* @bemanproject/core-reviewers\n");
        repo.add_file("CMakeLists.txt", "cmake_minimum_required(VERSION 3.25)\nproject(beman.exemplar)\n");
        repo.add_file("LICENSE", &reference_license());
        repo.add_file("README.md", COMPLIANT_README);
        repo.add_file("examples/CMakeLists.txt", "add_executable(identity_direct_usage)\n");
        repo.add_file("examples/identity_direct_usage.cpp", "int main() { return 0; }\n");
        repo.add_file("include/beman/exemplar/identity.hpp", "#pragma once\n");
        repo.add_file("src/beman/exemplar/identity.cpp", "#include <beman/exemplar/identity.hpp>\n");
        repo.add_file("tests/beman/exemplar/CMakeLists.txt", "add_executable(identity_test)\n");
        repo.add_file("tests/beman/exemplar/identity.test.cpp", "int main() { return 0; }\n");
        repo
    }

    /// Root path of the test repository
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Remove a file or directory
    pub fn remove(&self, path: &str) {
        let full_path = self.root.join(path);
        if full_path.is_dir() {
            fs::remove_dir_all(full_path).unwrap();
        } else {
            fs::remove_file(full_path).unwrap();
        }
    }

    /// Turn the directory into a git repository whose HEAD is `branch`
    pub fn init_git(&self, branch: &str) -> git2::Repository {
        let mut opts = git2::RepositoryInitOptions::new();
        opts.initial_head(branch);
        git2::Repository::init_opts(&self.root, &opts).unwrap()
    }

    /// Repository info as the scanner sees it, on branch `main`
    pub fn info(&self) -> RepoInfo {
        repo::scan(&self.root).unwrap().with_default_branch("main")
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Content of the bundled Apache-2.0 WITH LLVM-exception reference
pub fn reference_license() -> String {
    let (_, content) = paths::BUNDLED_REFERENCES
        .iter()
        .find(|(name, _)| *name == paths::APACHE_LLVM_LICENSE)
        .unwrap();
    String::from_utf8(content.to_vec()).unwrap()
}

/// Run `standard` against `info` with the built-in rules
pub fn run_standard(info: RepoInfo, standard: &Standard, mode: RunMode) -> RunReport {
    let registry = rules::registry().unwrap();
    let references: Arc<dyn ReferenceLookup> = Arc::new(ReferenceDir::bundled().unwrap());
    let bound = Resolver::new(&registry, Arc::new(info), references)
        .bind(standard)
        .unwrap();
    Engine::new(&NullSink, mode).run(&standard.meta.name, bound)
}

/// Run a standard given as TOML text
pub fn run_toml(repo: &TestRepo, toml: &str) -> RunReport {
    let standard = parse_str(toml, Path::new("test.toml")).unwrap();
    run_standard(repo.info(), &standard, RunMode::Check)
}

/// Run one check of the bundled standard with its bundled configuration
pub fn run_bundled(info: RepoInfo, id: &str, mode: RunMode) -> CheckResult {
    let standard = bundled().unwrap();
    let registry = rules::registry().unwrap();
    let references: Arc<dyn ReferenceLookup> = Arc::new(ReferenceDir::bundled().unwrap());
    let selection = [id.to_string()];
    let bound = Resolver::new(&registry, Arc::new(info), references)
        .bind_selected(&standard, Some(selection.as_slice()))
        .unwrap();
    let report = Engine::new(&NullSink, mode).run(&standard.meta.name, bound);
    report.results()[0].clone()
}

/// Run one check of the bundled standard against the test repository
pub fn check(repo: &TestRepo, id: &str) -> CheckResult {
    run_bundled(repo.info(), id, RunMode::Check)
}

/// Messages of a result's events
pub fn messages(result: &CheckResult) -> Vec<&str> {
    result.events.iter().map(|e| e.message.as_str()).collect()
}

/// Assert a rule failure whose every violation message links the check's docs
pub fn assert_violations_link_docs(result: &CheckResult) {
    let anchor = format!("beman_standard.md#{}{}", result.id.category(), result.id.name());
    assert_eq!(result.reason, Some(repotidy::core::models::FailReason::Rule), "{}", result.id);

    let violations: Vec<_> = result
        .events
        .iter()
        .filter(|e| e.level != repotidy::core::models::Level::Info)
        .collect();
    assert!(!violations.is_empty(), "{} reported nothing", result.id);
    for event in violations {
        assert!(event.message.contains(&anchor), "{}: {}", result.id, event.message);
    }
}
