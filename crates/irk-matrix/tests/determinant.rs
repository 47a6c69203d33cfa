//! Integration tests for the three determinant algorithms.

use approx::assert_relative_eq;
use irk_matrix::determinant::{
    build_algorithm, determinant, determinant_cofactor, determinant_row_reduction,
    determinant_sarrus, DetMethod,
};
use irk_matrix::{Matrix, MatrixError};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).expect("valid matrix")
}

fn three_by_three() -> Matrix {
    m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 10.0]])
}

// ---------------------------------------------------------------------------
// Row reduction
// ---------------------------------------------------------------------------

#[test]
fn row_reduction_two_by_two() {
    let res = determinant_row_reduction(&m(&[&[2.0, 1.0], &[1.0, 1.0]])).unwrap();
    assert_relative_eq!(res.determinant, 1.0, epsilon = 1e-12);
    assert_eq!(
        res.steps.lines(),
        vec![
            "R2 ← R2 − 0.500000·R1  (determinant unchanged)",
            "det(A) = (-1)^0 × (∏ diagonal) = 1.000000",
        ]
    );
}

#[test]
fn row_reduction_swap_flips_sign() {
    let res = determinant_row_reduction(&m(&[&[0.0, 1.0], &[1.0, 0.0]])).unwrap();
    assert_relative_eq!(res.determinant, -1.0, epsilon = 1e-12);
    assert_eq!(
        res.steps.lines(),
        vec![
            "R1 ↔ R2  (determinant changes sign)",
            "det(A) = (-1)^1 × (∏ diagonal) = -1.000000",
        ]
    );
}

#[test]
fn row_reduction_stops_on_zero_pivot() {
    let res = determinant_row_reduction(&m(&[&[1.0, 2.0], &[2.0, 4.0]])).unwrap();
    assert_eq!(res.determinant, 0.0);
    assert_eq!(res.steps.len(), 3);
    assert_eq!(
        res.steps.last().unwrap().text(),
        "Pivot column 2 ≈ 0 → det(A) = 0"
    );
}

#[test]
fn row_reduction_three_by_three() {
    let res = determinant_row_reduction(&three_by_three()).unwrap();
    assert_relative_eq!(res.determinant, -3.0, epsilon = 1e-9);
}

#[test]
fn row_reduction_does_not_touch_input() {
    let a = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
    let before = a.clone();
    let _ = determinant_row_reduction(&a).unwrap();
    assert_eq!(a, before);
}

// ---------------------------------------------------------------------------
// Cofactor expansion
// ---------------------------------------------------------------------------

#[test]
fn cofactor_two_by_two_is_single_step() {
    let res = determinant_cofactor(&m(&[&[2.0, 1.0], &[1.0, 1.0]])).unwrap();
    assert_relative_eq!(res.determinant, 1.0);
    assert_eq!(
        res.steps.lines(),
        vec!["det(A) = a11·a22 − a12·a21 = 1.000000"]
    );
}

#[test]
fn cofactor_one_by_one() {
    let res = determinant_cofactor(&m(&[&[5.0]])).unwrap();
    assert_eq!(res.determinant, 5.0);
    assert_eq!(res.steps.lines(), vec!["det(A) = 5.000000"]);
}

#[test]
fn cofactor_three_by_three_indents_minors() {
    let res = determinant_cofactor(&three_by_three()).unwrap();
    assert_relative_eq!(res.determinant, -3.0, epsilon = 1e-12);

    let lines = res.steps.lines();
    assert_eq!(lines.len(), 11);
    assert_eq!(
        lines[0],
        "Cofactor expansion along row 1: det(A) = Σ a1j·C1j"
    );
    assert_eq!(
        lines[1],
        "  det(minor(1,1)) = a11·a22 − a12·a21 = 2.000000"
    );
    assert_eq!(lines[2], "C1,1 = (-1)^(1+1)·M1,1 = 2.000000");
    assert_eq!(lines[3], "a1,1·C1,1 = 1.000000·2.000000 = 2.000000");
    assert_eq!(lines[5], "C1,2 = (-1)^(1+2)·M1,2 = 2.000000");
    assert_eq!(lines[10], "det(A) = -3.000000");
}

#[test]
fn cofactor_four_by_four_recurses_two_levels() {
    let a = m(&[
        &[1.0, 0.0, 2.0, -1.0],
        &[3.0, 0.0, 0.0, 5.0],
        &[2.0, 1.0, 4.0, -3.0],
        &[1.0, 0.0, 5.0, 0.0],
    ]);
    let res = determinant_cofactor(&a).unwrap();
    assert_relative_eq!(res.determinant, 30.0, epsilon = 1e-9);
    assert!(res
        .steps
        .lines()
        .iter()
        .any(|l| l.starts_with("    det(minor(1,1)) =")));
}

// ---------------------------------------------------------------------------
// Sarrus
// ---------------------------------------------------------------------------

#[test]
fn sarrus_narrates_both_diagonal_sums() {
    let res = determinant_sarrus(&three_by_three()).unwrap();
    assert_relative_eq!(res.determinant, -3.0, epsilon = 1e-12);
    assert_eq!(
        res.steps.lines(),
        vec![
            "Σ descending diagonals = 50.000000 + 84.000000 + 96.000000",
            "Σ ascending diagonals  = 105.000000 + 48.000000 + 80.000000",
            "det(A) = (Σ descending) − (Σ ascending) = -3.000000",
        ]
    );
}

#[test]
fn sarrus_rejects_non_three_by_three() {
    let err = determinant_sarrus(&m(&[&[2.0, 1.0], &[1.0, 1.0]])).unwrap_err();
    assert!(matches!(err, MatrixError::AlgorithmPrecondition { .. }));
}

// ---------------------------------------------------------------------------
// Shape checks and dispatch
// ---------------------------------------------------------------------------

#[test]
fn non_square_input_is_a_dimension_mismatch() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    for method in [DetMethod::RowReduction, DetMethod::Cofactor] {
        let err = determinant(&a, method).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
    }
}

#[test]
fn empty_matrix_is_rejected() {
    let a = Matrix::from_rows(vec![]).unwrap();
    assert!(determinant_row_reduction(&a).is_err());
    assert!(determinant_cofactor(&a).is_err());
}

#[test]
fn factory_builds_requested_algorithm() {
    for method in [DetMethod::RowReduction, DetMethod::Cofactor, DetMethod::Sarrus] {
        assert_eq!(build_algorithm(method).method(), method);
    }
}

#[test]
fn det_method_parses_names() {
    assert_eq!("cofactor".parse::<DetMethod>().unwrap(), DetMethod::Cofactor);
    assert_eq!(
        "Row-Reduction".parse::<DetMethod>().unwrap(),
        DetMethod::RowReduction
    );
    assert_eq!("sarrus".parse::<DetMethod>().unwrap(), DetMethod::Sarrus);
    assert!("laplace".parse::<DetMethod>().is_err());
}
