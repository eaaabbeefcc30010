//! Tests for repository scanning and git discovery

use std::path::PathBuf;

use repotidy::adapters::git::discover;
use repotidy::repo::{RepoError, scan};

use crate::common::TestRepo;

#[test]
fn scan_lists_sorted_relative_files() {
    let repo = TestRepo::new();
    repo.add_file("src/b.cpp", "");
    repo.add_file("README.md", "");
    repo.add_file("include/a.hpp", "");

    let info = scan(repo.path()).unwrap();
    assert_eq!(info.name(), "exemplar");
    assert_eq!(info.default_branch(), None);
    assert_eq!(
        info.files(),
        &[
            PathBuf::from("README.md"),
            PathBuf::from("include/a.hpp"),
            PathBuf::from("src/b.cpp"),
        ]
    );
}

#[test]
fn scan_skips_git_directory() {
    let repo = TestRepo::new();
    repo.add_file(".git/config", "[core]\n");
    repo.add_file(".github/CODEOWNERS", "* @owner\n");

    let info = scan(repo.path()).unwrap();
    assert_eq!(info.files(), &[PathBuf::from(".github/CODEOWNERS")]);
}

#[test]
fn scan_missing_root() {
    let repo = TestRepo::new();
    let missing = repo.path().join("nowhere");
    assert!(matches!(scan(&missing), Err(RepoError::RootNotFound(_))));
}

#[test]
fn scan_file_is_not_a_directory() {
    let repo = TestRepo::new();
    repo.add_file("README.md", "x\n");
    assert!(matches!(scan(repo.path().join("README.md")), Err(RepoError::NotADirectory(_))));
}

// =============================================================================
// Git Discovery
// =============================================================================

#[test]
fn plain_directory_has_no_branch() {
    let repo = TestRepo::new();
    repo.add_file("README.md", "x\n");

    let info = discover(repo.path()).unwrap();
    assert_eq!(info.name(), "exemplar");
    assert_eq!(info.default_branch(), None);
}

#[test]
fn unborn_head_gives_default_branch() {
    let repo = TestRepo::new();
    repo.init_git("main");

    let info = discover(repo.path()).unwrap();
    assert_eq!(info.default_branch(), Some("main"));
    assert!(info.files().is_empty());
}

#[test]
fn origin_url_names_the_repository() {
    let repo = TestRepo::named("checkout");
    let git = repo.init_git("trunk");
    git.remote("origin", "https://github.com/bemanproject/optional.git").unwrap();

    let info = discover(repo.path()).unwrap();
    assert_eq!(info.name(), "optional");
    assert_eq!(info.default_branch(), Some("trunk"));
}

#[test]
fn discovery_from_subdirectory_uses_workdir() {
    let repo = TestRepo::new();
    repo.init_git("main");
    repo.add_file("src/beman/exemplar/identity.cpp", "\n");

    let info = discover(&repo.path().join("src")).unwrap();
    assert_eq!(info.files(), &[PathBuf::from("src/beman/exemplar/identity.cpp")]);
}
