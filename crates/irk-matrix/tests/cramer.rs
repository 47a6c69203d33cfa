//! Integration tests for Cramer's rule.

use approx::assert_relative_eq;
use irk_matrix::cramer::{solve_cramer, CramerOutcome};
use irk_matrix::determinant::DetMethod;
use irk_matrix::{Matrix, MatrixError, Vector};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).expect("valid matrix")
}

fn v(values: &[f64]) -> Vector {
    Vector::from_vec(values.to_vec())
}

#[test]
fn two_by_two_with_row_reduction() {
    let res = solve_cramer(
        &m(&[&[2.0, 1.0], &[1.0, 1.0]]),
        &v(&[3.0, 2.0]),
        DetMethod::RowReduction,
    )
    .unwrap();

    let x = res.outcome.solution().expect("unique solution");
    assert!(x.approx_eq(&v(&[1.0, 1.0]), 1e-12));

    let lines = res.steps.lines();
    assert_eq!(lines[0], "== Compute det(A) ==");
    assert!(lines.contains(&"== Build A_1: replace column 1 of A with b ==".to_string()));
    assert!(lines.contains(
        &"x1 = det(A_1) / det(A) = 1.000000 / 1.000000 = 1.000000".to_string()
    ));
    assert_eq!(
        lines.last().unwrap(),
        "x2 = det(A_2) / det(A) = 1.000000 / 1.000000 = 1.000000"
    );
    assert_eq!(
        res.report(),
        "Solution (Cramer's rule):\nx1 = 1.000000\nx2 = 1.000000"
    );
}

#[test]
fn determinant_steps_are_embedded() {
    let res = solve_cramer(
        &m(&[&[2.0, 1.0], &[1.0, 1.0]]),
        &v(&[3.0, 2.0]),
        DetMethod::Cofactor,
    )
    .unwrap();
    let lines = res.steps.lines();
    assert_eq!(lines[1], "det(A) = a11·a22 − a12·a21 = 1.000000");
    // header + det(A) + 2 * (header + det(A_i) + division)
    assert_eq!(lines.len(), 8);
}

#[test]
fn sarrus_on_three_by_three() {
    let a = m(&[&[2.0, 1.0, -1.0], &[-3.0, -1.0, 2.0], &[-2.0, 1.0, 2.0]]);
    let b = v(&[8.0, -11.0, -3.0]);
    let res = solve_cramer(&a, &b, DetMethod::Sarrus).unwrap();
    let x = res.outcome.solution().expect("unique solution");
    assert_relative_eq!(x[0], 2.0, epsilon = 1e-9);
    assert_relative_eq!(x[1], 3.0, epsilon = 1e-9);
    assert_relative_eq!(x[2], -1.0, epsilon = 1e-9);
}

#[test]
fn sarrus_requires_three_by_three() {
    let err = solve_cramer(
        &m(&[&[2.0, 1.0], &[1.0, 1.0]]),
        &v(&[3.0, 2.0]),
        DetMethod::Sarrus,
    )
    .unwrap_err();
    assert!(matches!(err, MatrixError::AlgorithmPrecondition { .. }));
}

#[test]
fn singular_system_is_inapplicable_not_solved() {
    let res = solve_cramer(
        &m(&[&[1.0, 2.0], &[2.0, 4.0]]),
        &v(&[3.0, 6.0]),
        DetMethod::RowReduction,
    )
    .unwrap();
    assert!(matches!(
        res.outcome,
        CramerOutcome::Inapplicable { determinant } if determinant == 0.0
    ));
    assert!(res.outcome.solution().is_none());
    assert!(res
        .report()
        .starts_with("det(A) = 0.000000 → Cramer's rule does not apply."));
    assert!(!res
        .steps
        .lines()
        .iter()
        .any(|l| l.starts_with("== Build A_")));
}

#[test]
fn vector_length_must_match() {
    let err = solve_cramer(
        &m(&[&[2.0, 1.0], &[1.0, 1.0]]),
        &v(&[3.0, 2.0, 1.0]),
        DetMethod::Cofactor,
    )
    .unwrap_err();
    assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
}

#[test]
fn infinite_right_hand_side_is_rejected() {
    let err = solve_cramer(
        &m(&[&[2.0, 1.0], &[1.0, 1.0]]),
        &v(&[f64::INFINITY, 2.0]),
        DetMethod::RowReduction,
    )
    .unwrap_err();
    assert!(matches!(err, MatrixError::NonFinite { .. }));
}
