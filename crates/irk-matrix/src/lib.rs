//! irk-matrix: step-narrating linear algebra for teaching.
//!
//! This crate computes determinants, inverses and solutions of small square
//! linear systems with several classical algorithms per operation. Every
//! algorithm records the row operations and intermediate values it performs in
//! a [`steps::StepTrace`] so a student can replay the derivation, not just read
//! the final answer.
//!
//! Engines never mutate caller data: each call clones its input into a private
//! working copy and returns an owned result together with its trace.
pub mod config;
pub mod cramer;
pub mod determinant;
pub mod error;
pub mod format;
pub mod inverse;
pub mod linear_system;
pub mod math;
pub mod operations;
pub mod steps;

pub use error::{MatrixError, Result};
pub use math::{Matrix, Vector, EPS};
pub use steps::{Step, StepTrace};
