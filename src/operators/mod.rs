//! Permutation moves and random draws shared by the search drivers.
//!
//! - [`pair_swap`]: exchange two positions
//! - [`triple_rotate`]: cyclic rotation of three positions
//! - [`sample_positions`]: distinct sorted positions drawn without replacement

mod moves;
mod random;

pub use moves::{pair_swap, triple_rotate};
pub use random::{create_rng, ordered_path, random_path, sample_positions};
