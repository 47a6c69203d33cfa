//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `irk` binary to verify that argument
//! parsing, output rendering and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("irk").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("det"))
        .stdout(predicate::str::contains("inverse"))
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("cramer"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("irk"));
}

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

#[test]
fn det_prints_result_and_steps() {
    cmd()
        .args(["det", "--matrix", "2 1; 1 1", "--method", "cofactor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("det(A) = 1.000000"))
        .stdout(predicate::str::contains("Steps:"))
        .stdout(predicate::str::contains("a11·a22 − a12·a21"));
}

#[test]
fn sarrus_on_two_by_two_fails() {
    cmd()
        .args(["det", "--matrix", "2 1; 1 1", "--method", "sarrus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3x3"));
}

#[test]
fn inverse_of_singular_matrix_fails() {
    cmd()
        .args(["inverse", "--matrix", "1 2; 0 0", "--method", "adjoint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Singular matrix"));
}

#[test]
fn inverse_without_steps() {
    cmd()
        .args(["inverse", "--matrix", "2 1; 1 1", "--no-steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inv(A) ="))
        .stdout(predicate::str::contains("[ -1.000000, 2.000000 ]"))
        .stdout(predicate::str::contains("Steps:").not());
}

#[test]
fn solve_reports_unique_solution() {
    cmd()
        .args(["solve", "-a", "2 1; 1 1", "-b", "3 2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique solution:"))
        .stdout(predicate::str::contains("x2 = 1.000000"))
        .stdout(predicate::str::contains("After pivot column 1"));
}

#[test]
fn solve_with_first_pivot_reports_inconsistency() {
    cmd()
        .args(["solve", "-a", "1 2; 2 4", "-b", "3 7", "--pivot", "first"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No solution (inconsistent). Found row [0 … 0 | 1.000000]",
        ));
}

#[test]
fn solve_requires_vector() {
    cmd().args(["solve", "-a", "1 0; 0 1"]).assert().failure();
}

#[test]
fn cramer_on_singular_system_is_inapplicable() {
    cmd()
        .args(["cramer", "-a", "1 2; 2 4", "-b", "3 6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cramer's rule does not apply"));
}

#[test]
fn json_output_contains_steps() {
    cmd()
        .args(["cramer", "-a", "2 1; 1 1", "-b", "3 2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"cramer\""))
        .stdout(predicate::str::contains("\"steps\""));
}

#[test]
fn unparseable_matrix_fails() {
    cmd()
        .args(["det", "--matrix", "1 x; 2 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse"));
}

// ---------------------------------------------------------------------------
// Problem files
// ---------------------------------------------------------------------------

#[test]
fn template_prints_problem_json() {
    cmd()
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"solve\""))
        .stdout(predicate::str::contains("\"matrix\""));
}

#[test]
fn run_evaluates_a_batch_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problems.json");
    std::fs::write(
        &path,
        r#"[
            {"operation": "determinant", "method": "sarrus", "matrix": [[1,2,3],[4,5,6],[7,8,10]]},
            {"operation": "inverse", "method": "adjoint", "matrix": [[2,1],[1,1]]}
        ]"#,
    )
    .unwrap();

    cmd()
        .args(["run", path.to_str().unwrap(), "--no-steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Problem 1 (determinant, sarrus) ===\ndet(A) = -3.000000",
        ))
        .stdout(predicate::str::contains("=== Problem 2 (inverse, adjoint) ==="));
}

#[test]
fn run_flags_override_problem_algorithms() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problems.json");
    std::fs::write(
        &path,
        r#"[
            {"operation": "determinant", "method": "sarrus", "matrix": [[1,2,3],[4,5,6],[7,8,10]]},
            {"operation": "inverse", "method": "adjoint", "matrix": [[2,1],[1,1]]},
            {"operation": "solve", "matrix": [[2,1],[1,1]], "vector": [3,2]}
        ]"#,
    )
    .unwrap();

    cmd()
        .args([
            "run",
            path.to_str().unwrap(),
            "--no-steps",
            "--det-method",
            "cofactor",
            "--inv-method",
            "gauss-jordan",
            "--pivot",
            "first",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Problem 1 (determinant, cofactor) ===\ndet(A) = -3.000000",
        ))
        .stdout(predicate::str::contains("=== Problem 2 (inverse, gauss-jordan) ==="))
        .stdout(predicate::str::contains("=== Problem 3 (solve, first) ==="));
}

#[test]
fn run_rejects_unknown_override_value() {
    cmd()
        .args(["run", "problems.json", "--det-method", "laplace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn non_finite_entries_are_rejected() {
    cmd()
        .args(["det", "-a", "nan 1; 1 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("finite"));
}

#[test]
fn run_fails_when_any_problem_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problems.json");
    std::fs::write(
        &path,
        r#"[{"operation": "inverse", "matrix": [[0,0],[0,0]]}, {"operation": "determinant", "matrix": [[3]]}]"#,
    )
    .unwrap();

    cmd()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("det(A) = 3.000000"));
}

#[test]
fn run_nonexistent_file_errors() {
    cmd()
        .args(["run", "/nonexistent/problems.json"])
        .assert()
        .failure();
}
