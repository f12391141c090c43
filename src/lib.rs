//! ROR Engine - Robust Ordinal Regression ranking
//!
//! Ranks alternatives scored on several criteria, constrained by pairwise
//! preference statements. Every alpha robustness level yields one rank; the
//! family of ranks is aggregated into a final rank whose remaining ties can
//! be broken by voting.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
