//! Tests for the `license.*` and `toplevel.*` rules

use repotidy::core::engine::RunMode;
use repotidy::core::models::{FailReason, Level, Outcome};
use test_case::test_case;

use crate::common::{TestRepo, check, messages, reference_license, run_bundled, run_toml};

const DOCS: &str = "https://github.com/bemanproject/beman/blob/main/docs/beman_standard.md";

// =============================================================================
// license.approved
// =============================================================================

#[test_case("Apache License\nVersion 2.0, January 2004\n\n---- LLVM Exceptions to the Apache 2.0 License ----\n", "Apache License - Version 2.0 with LLVM Exceptions" ; "apache with llvm exceptions")]
#[test_case("Boost Software License - Version 1.0 - August 17th, 2003\n", "Boost Software License - Version 1.0" ; "boost")]
#[test_case("The MIT License (MIT)\n\nCopyright (c) 2025\n", "MIT License" ; "mit")]
fn approved_license_passes(content: &str, name: &str) {
    let repo = TestRepo::new();
    repo.add_file("LICENSE", content);

    let result = check(&repo, "license.approved");
    assert_eq!(result.outcome, Outcome::Pass);
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].level, Level::Info);
    assert!(result.events[0].message.contains(name));
}

#[test]
fn unapproved_license_fails_with_docs_link() {
    let repo = TestRepo::new();
    repo.add_file("LICENSE", "GNU GENERAL PUBLIC LICENSE\nVersion 3, 29 June 2007\n");

    let result = check(&repo, "license.approved");
    assert_eq!(result.outcome, Outcome::Fail);
    assert_eq!(result.reason, Some(FailReason::Rule));
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].level, Level::Error);
    assert!(result.events[0].message.contains(&format!("{DOCS}#licenseapproved")));
}

#[test]
fn missing_license_fails_precondition() {
    let repo = TestRepo::new();
    let result = check(&repo, "license.approved");
    assert_eq!(result.outcome, Outcome::Fail);
    assert_eq!(result.reason, Some(FailReason::Precondition));
    assert!(messages(&result)[0].contains("does not exist"));
}

#[test]
fn empty_license_fails_precondition() {
    let repo = TestRepo::new();
    repo.add_file("LICENSE", "\n  \n");
    let result = check(&repo, "license.approved");
    assert_eq!(result.reason, Some(FailReason::Precondition));
    assert!(messages(&result)[0].contains("is empty"));
}

#[test]
fn file_option_moves_the_target() {
    let repo = TestRepo::new();
    repo.add_file("LICENSE.txt", "MIT License\n");
    let report = run_toml(&repo, "[[check]]\nid = \"license.approved\"\nfile = \"LICENSE.txt\"\n");
    assert!(report.passed());
}

// =============================================================================
// license.apache_llvm
// =============================================================================

#[test]
fn reference_copy_passes() {
    let repo = TestRepo::new();
    repo.add_file("LICENSE", &reference_license());
    assert_eq!(check(&repo, "license.apache_llvm").outcome, Outcome::Pass);
}

#[test]
fn trailing_whitespace_breaks_byte_identity() {
    let repo = TestRepo::new();
    repo.add_file("LICENSE", &format!("{} ", reference_license()));

    let result = check(&repo, "license.apache_llvm");
    assert_eq!(result.outcome, Outcome::Fail);
    assert_eq!(result.reason, Some(FailReason::Rule));
    // Recommendation in the bundled standard
    assert_eq!(result.events[0].level, Level::Warning);
}

#[test]
fn missing_reference_is_internal_failure() {
    let repo = TestRepo::new();
    repo.add_file("LICENSE", "MIT License\n");
    let report = run_toml(
        &repo,
        "[[check]]\nid = \"license.apache_llvm\"\nreference = \"LICENSE.nowhere\"\n",
    );

    let result = &report.results()[0];
    assert_eq!(result.reason, Some(FailReason::Internal));
    assert!(messages(result)[0].contains("internal check error"));
}

// =============================================================================
// Unverifiable Rules
// =============================================================================

#[test_case("license.criteria")]
#[test_case("library.name")]
#[test_case("repository.code_review_rules")]
#[test_case("release.github")]
#[test_case("release.notes")]
#[test_case("readme.purpose")]
fn unverifiable_rules_are_skipped(id: &str) {
    let repo = TestRepo::new();
    let result = check(&repo, id);
    assert_eq!(result.outcome, Outcome::Skipped);
    assert_eq!(result.events.len(), 1);
    assert!(result.events[0].message.contains(DOCS));
}

// =============================================================================
// toplevel.*
// =============================================================================

#[test_case("toplevel.cmake", "CMakeLists.txt")]
#[test_case("toplevel.license", "LICENSE")]
#[test_case("toplevel.readme", "README.md")]
#[test_case("repository.codeowners", ".github/CODEOWNERS")]
fn required_file(id: &str, file: &str) {
    let repo = TestRepo::new();
    let result = check(&repo, id);
    assert_eq!(result.outcome, Outcome::Fail);
    assert_eq!(result.reason, Some(FailReason::Rule));

    repo.add_file(file, "content\n");
    assert_eq!(check(&repo, id).outcome, Outcome::Pass);
}

#[test]
fn missing_file_gets_guidance_in_fix_mode() {
    let repo = TestRepo::new();
    let result = run_bundled(repo.info(), "toplevel.cmake", RunMode::Fix);

    assert_eq!(result.outcome, Outcome::Fail);
    let guidance = result.events.last().unwrap();
    assert_eq!(guidance.level, Level::Info);
    assert!(guidance.message.contains(&format!("{DOCS}#toplevelcmake")));
    assert!(!repo.path().join("CMakeLists.txt").exists());
}
