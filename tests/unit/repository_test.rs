//! Tests for the `repository.*` rules and a full run of the bundled standard

use repotidy::adapters::toml::bundled;
use repotidy::core::engine::RunMode;
use repotidy::core::models::{CheckKind, Outcome};
use test_case::test_case;

use crate::common::{
    TestRepo, assert_violations_link_docs, check, messages, run_bundled, run_standard, run_toml,
};

// =============================================================================
// repository.name
// =============================================================================

#[test_case("exemplar", true ; "short name")]
#[test_case("optional_ref", true ; "snake case")]
#[test_case("beman.exemplar", false ; "with prefix")]
#[test_case("optional26", false ; "with cpp version")]
#[test_case("Exemplar", false ; "upper case")]
fn repository_name(name: &str, ok: bool) {
    let repo = TestRepo::named(name);
    let result = check(&repo, "repository.name");
    assert_eq!(result.outcome == Outcome::Pass, ok);
}

// =============================================================================
// repository.default_branch
// =============================================================================

#[test]
fn default_branch_matches() {
    let repo = TestRepo::new();
    assert_eq!(check(&repo, "repository.default_branch").outcome, Outcome::Pass);
}

#[test]
fn other_default_branch_fails() {
    let repo = TestRepo::new();
    let info = repo.info().with_default_branch("master");
    let result = run_bundled(info, "repository.default_branch", RunMode::Check);
    assert_eq!(result.outcome, Outcome::Fail);
    assert!(messages(&result)[0].contains("'master' vs 'main'"));
}

#[test]
fn unknown_default_branch_fails() {
    let repo = TestRepo::new();
    let info = repotidy::repo::scan(repo.path()).unwrap();
    let result = run_bundled(info, "repository.default_branch", RunMode::Check);
    assert_eq!(result.outcome, Outcome::Fail);
    assert!(messages(&result)[0].contains("Cannot determine"));
}

#[test]
fn branch_option_overrides_main() {
    let repo = TestRepo::new();
    let report = run_toml(
        &repo,
        "[[check]]\nid = \"repository.default_branch\"\nbranch = \"trunk\"\n",
    );
    assert!(!report.passed());
}

// =============================================================================
// repository.disallow_git_submodules
// =============================================================================

#[test]
fn no_gitmodules_passes() {
    let repo = TestRepo::new();
    assert_eq!(check(&repo, "repository.disallow_git_submodules").outcome, Outcome::Pass);
}

#[test]
fn wg21_submodule_is_allowed() {
    let repo = TestRepo::new();
    repo.add_file(
        ".gitmodules",
        "[submodule \"papers/wg21\"]\n\tpath = papers/wg21\n\turl = https://github.com/mpark/wg21.git\n",
    );
    assert_eq!(check(&repo, "repository.disallow_git_submodules").outcome, Outcome::Pass);
}

#[test]
fn other_submodule_fails() {
    let repo = TestRepo::new();
    repo.add_file(
        ".gitmodules",
        "[submodule \"infra\"]\n\tpath = infra\n\turl = https://github.com/bemanproject/infra.git\n",
    );
    let result = check(&repo, "repository.disallow_git_submodules");
    assert_eq!(result.outcome, Outcome::Fail);
    assert!(messages(&result)[0].contains("wg21"));
}

// =============================================================================
// Documentation Links
// =============================================================================

#[test_case(None ; "unknown branch")]
#[test_case(Some("master") ; "other branch")]
fn default_branch_violation_links_docs(branch: Option<&str>) {
    let repo = TestRepo::new();
    let mut info = repotidy::repo::scan(repo.path()).unwrap();
    if let Some(branch) = branch {
        info = info.with_default_branch(branch);
    }
    assert_violations_link_docs(&run_bundled(info, "repository.default_branch", RunMode::Check));
}

#[test_case("repository.name", "beman.exemplar", "README.md" ; "prefixed name")]
#[test_case("repository.disallow_git_submodules", "exemplar", ".gitmodules" ; "foreign submodule")]
#[test_case("directory.sources", "exemplar", "lib/identity.cpp" ; "forbidden source dir")]
#[test_case("directory.tests", "exemplar", "src/beman/exemplar/identity.test.cpp" ; "misplaced test")]
#[test_case("directory.examples", "exemplar", "examples/README.md" ; "examples without sources")]
#[test_case("directory.docs", "exemplar", "CONTRIBUTING.md" ; "stray markdown")]
#[test_case("directory.papers", "exemplar", "P2988/draft.tex" ; "stray paper")]
fn violation_links_docs(id: &str, name: &str, file: &str) {
    let repo = TestRepo::named(name);
    repo.add_file("tests/beman/exemplar/CMakeLists.txt", "add_executable(identity_test)\n");
    repo.add_file(file, "[submodule \"infra\"]\n\tpath = infra\n");
    assert_violations_link_docs(&check(&repo, id));
}

// =============================================================================
// Full Run
// =============================================================================

#[test]
fn compliant_repository_passes_bundled_standard() {
    let repo = TestRepo::compliant();
    let report = run_standard(repo.info(), &bundled().unwrap(), RunMode::Check);

    let failed: Vec<_> = report.results().iter().filter(|r| r.is_fail()).map(|r| r.id.to_string()).collect();
    assert!(failed.is_empty(), "failed: {failed:?}");
    assert!(report.passed());
    assert_eq!(report.results().len(), 26);
}

#[test]
fn empty_repository_fails_requirements_and_recommendations() {
    let repo = TestRepo::new();
    let report = run_standard(repo.info(), &bundled().unwrap(), RunMode::Check);

    assert!(!report.passed());
    assert!(report.tally(CheckKind::Requirement).failed > 0);
    assert!(report.result("readme.title").unwrap().is_fail());
    // Unverifiable rules never fail
    assert_eq!(report.result("release.notes").unwrap().outcome, Outcome::Skipped);
}
