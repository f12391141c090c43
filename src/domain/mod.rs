//! Domain layer containing the ranking logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (alpha values, IDs, timestamps, errors)
//! - `dataset` - Decision matrix, criteria and preference relations
//! - `parameters` - Solve parameters and their validation
//! - `model` - Linear constraint model built from a dataset
//! - `ranking` - Ranks with tie-groups, per-alpha and final ranks
//! - `voting` - Borda and Copeland counts shared by aggregators and resolvers
//! - `aggregation` - From intermediate ranks to one final rank
//! - `tie_resolution` - Ordering the tie-groups of a final rank
//! - `solver` - Alpha-level optimizer and the solve entry point

pub mod aggregation;
pub mod dataset;
pub mod foundation;
pub mod model;
pub mod parameters;
pub mod ranking;
pub mod solver;
pub mod tie_resolution;
pub mod voting;
