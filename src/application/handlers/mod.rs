//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod solve_problem;

pub use solve_problem::{
    SolveProblemCommand, SolveProblemError, SolveProblemHandler, SolveProblemResult,
};
