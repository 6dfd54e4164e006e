//! Artificial Bee Colony (ABC) search.
//!
//! A hive of employed, onlooker, and scout bees explores the permutation
//! space with pair-swap moves:
//!
//! - employed bees each own a path and keep strictly improving swaps;
//! - a bee that fails `limit` times in a row, or ranks among the worst after
//!   the employed phase, turns scout and restarts from a random path;
//! - onlooker bees perturb the hive's global best and keep improvements.
//!
//! # References
//!
//! Karaboga, D. (2005). "An idea based on honey bee swarm for numerical
//! optimization", Technical Report TR06, Erciyes University.

mod bee;
mod config;
mod runner;

pub use bee::{Bee, Role};
pub use config::{AbcConfig, MutationKind};
pub use runner::{AbcResult, AbcRunner, Improvement};
