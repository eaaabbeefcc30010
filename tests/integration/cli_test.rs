//! Integration tests for the repotidy command line
//!
//! Tests the complete flow:
//! 1. The repository is discovered (git metadata included)
//! 2. The standard is loaded and resolved
//! 3. Every check runs and the report decides the exit code

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use test_case::test_case;

use crate::common::TestRepo;

/// Helper to create a repotidy command in a directory
fn repotidy_in(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("repotidy").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// A compliant library checked out on `main`
fn compliant_checkout() -> TestRepo {
    let repo = TestRepo::compliant();
    repo.init_git("main");
    repo
}

fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn compliant_repository_passes() {
    let repo = compliant_checkout();

    repotidy_in(repo.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked against Beman Standard"))
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn failing_repository_exits_with_failure() {
    let repo = compliant_checkout();
    repo.remove("README.md");

    repotidy_in(repo.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("readme.title ... failed"))
        .stdout(predicate::str::contains("FAILED"));
}

#[test]
fn path_argument_selects_repository() {
    let repo = compliant_checkout();
    let elsewhere = TestRepo::named("elsewhere");

    repotidy_in(elsewhere.path())
        .arg("check")
        .arg(repo.path())
        .assert()
        .success();
}

#[test]
fn json_report_shape() {
    let repo = compliant_checkout();
    repo.remove("LICENSE");

    let output = repotidy_in(repo.path())
        .args(["--json", "check"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = json(&output);
    assert_eq!(report["standard"], "Beman Standard");
    assert_eq!(report["passed"], false);
    assert_eq!(report["results"].as_array().unwrap().len(), 26);
    assert_eq!(report["results"][0]["id"], "license.approved");
    assert_eq!(report["results"][0]["outcome"], "fail");
    assert_eq!(report["results"][0]["reason"], "precondition");
}

#[test]
fn selected_checks_run_alone() {
    let repo = TestRepo::new();
    repo.add_file("CMakeLists.txt", "project(x)\n");

    let output = repotidy_in(repo.path())
        .args(["--json", "check", "--checks", "toplevel.cmake,library.name"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = json(&output);
    let ids: Vec<_> = report["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    // Standard order, not selection order
    assert_eq!(ids, ["library.name", "toplevel.cmake"]);
}

#[test]
fn repo_name_override() {
    let repo = compliant_checkout();

    repotidy_in(repo.path())
        .args(["check", "--checks", "repository.name", "--repo-name", "beman.exemplar"])
        .assert()
        .code(1);
}

#[test]
fn fix_prints_guidance_without_changing_files() {
    let repo = TestRepo::new();

    repotidy_in(repo.path())
        .args(["--verbose", "check", "--fix", "--checks", "toplevel.cmake"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[info][toplevel.cmake]: Please add"));

    assert!(!repo.path().join("CMakeLists.txt").exists());
}

#[test]
fn repository_local_standard_is_used() {
    let repo = TestRepo::new();
    repo.add_file(
        ".repotidy.toml",
        "[standard]\nname = \"Local\"\n\n[[check]]\nid = \"toplevel.readme\"\n",
    );
    repo.add_file("README.md", "# hello\n");

    repotidy_in(repo.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked against Local"));
}

#[test]
fn bundled_reference_license_is_embedded() {
    let repo = compliant_checkout();
    let elsewhere = TestRepo::named("elsewhere");

    repotidy_in(elsewhere.path())
        .args(["check", "--checks", "license.apache_llvm"])
        .arg(repo.path())
        .assert()
        .success();
}

#[test]
fn references_dir_overrides_bundle() {
    let repo = TestRepo::new();
    repo.add_file("LICENSE", "Apache License 2.0 with LLVM Exceptions, house copy\n");
    let refs = TestRepo::named("refs");
    refs.add_file("LICENSE.apache-llvm", "Apache License 2.0 with LLVM Exceptions, house copy\n");

    repotidy_in(repo.path())
        .args(["check", "--checks", "license.apache_llvm", "--references"])
        .arg(refs.path())
        .assert()
        .success();

    repotidy_in(repo.path())
        .args(["check", "--checks", "license.apache_llvm"])
        .assert()
        .code(1);
}

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

#[test_case("[[check]]\nid = \"toplevel.nothing\"\n", "toplevel.nothing" ; "unknown check")]
#[test_case("[[check]]\nid = \"readme.badges\"\n", "badges" ; "missing option")]
#[test_case("[[check]]\nid = \"toplevel.cmake\"\nbranch = \"main\"\n", "branch" ; "unknown option")]
#[test_case("[[check]]\nid = \"toplevel\"\n", "toplevel" ; "malformed id")]
#[test_case("[[check]\n", "standard.toml" ; "not toml")]
fn bad_standard_is_a_config_error(content: &str, mentions: &str) {
    let repo = TestRepo::new();
    repo.add_file("standard.toml", content);

    repotidy_in(repo.path())
        .args(["check", "--standard", "standard.toml"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Checked against").not())
        .stderr(predicate::str::contains(mentions));
}

#[test]
fn unknown_selected_check_is_a_config_error() {
    let repo = TestRepo::new();

    repotidy_in(repo.path())
        .args(["check", "--checks", "readme.nothing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("readme.nothing"));
}

#[test]
fn json_config_error() {
    let repo = TestRepo::new();

    let output = repotidy_in(repo.path())
        .args(["--json", "check", "--standard", "missing.toml"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let error = json(&output);
    assert!(error["error"].as_str().unwrap().contains("missing.toml"));
}

// =============================================================================
// LIST / INIT / VERSION
// =============================================================================

#[test]
fn list_shows_registered_checks() {
    let repo = TestRepo::new();

    repotidy_in(repo.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checks (26 listed in Beman Standard)"))
        .stdout(predicate::str::contains("license.apache_llvm"))
        .stdout(predicate::str::contains("options: file, reference"));
}

#[test]
fn list_json() {
    let repo = TestRepo::new();

    let output = repotidy_in(repo.path())
        .args(["--json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing = json(&output);
    let checks = listing["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 26);
    assert_eq!(checks[0]["id"], "directory.docs");
}

#[test]
fn init_writes_bundled_standard() {
    let repo = TestRepo::new();

    repotidy_in(repo.path()).arg("init").assert().success();

    let written = fs::read_to_string(repo.path().join(".repotidy.toml")).unwrap();
    assert!(written.contains("[standard]"));
    assert!(written.contains("id = \"readme.badges\""));
}

#[test]
fn init_refuses_to_overwrite() {
    let repo = TestRepo::new();
    repo.add_file(".repotidy.toml", "# mine\n");

    repotidy_in(repo.path())
        .arg("init")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(repo.path().join(".repotidy.toml")).unwrap(), "# mine\n");

    repotidy_in(repo.path()).args(["init", "--force"]).assert().success();
    assert_ne!(fs::read_to_string(repo.path().join(".repotidy.toml")).unwrap(), "# mine\n");
}

#[test]
fn version_command() {
    let repo = TestRepo::new();

    repotidy_in(repo.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("repotidy v{}", env!("CARGO_PKG_VERSION"))));
}
