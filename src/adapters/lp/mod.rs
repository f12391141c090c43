//! LP Solver Adapters
//!
//! - **GoodLpSolver** - good_lp with the bundled microlp backend

mod good_lp_solver;

pub use good_lp_solver::GoodLpSolver;
