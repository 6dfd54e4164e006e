//! Distance computation.
//!
//! Provides the Euclidean point distance and a dense distance matrix built
//! once per instance.

mod matrix;

pub use matrix::{euclidean, DistanceMatrix};
