//! irk-cli: library half of the `irk` binary.
//!
//! Turns command-line arguments and JSON problem files into engine calls and
//! renders the returned result and step trace for a terminal.
pub mod problem;
pub mod render;
