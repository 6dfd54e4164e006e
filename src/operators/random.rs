//! Seedable random source and random path helpers.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// Creates the run's random source.
///
/// `Some(seed)` gives a reproducible stream; `None` seeds from the OS.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// The identity path `0..n`.
pub fn ordered_path(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// A uniformly random permutation of `0..n`.
pub fn random_path<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut path = ordered_path(n);
    path.shuffle(rng);
    path
}

/// Draws `K` distinct positions from `0..len` without replacement, sorted
/// ascending.
///
/// Returns `None` when `len < K`.
///
/// # Examples
///
/// ```
/// use u_hive::operators::{create_rng, sample_positions};
///
/// let mut rng = create_rng(Some(7));
/// let [i, j] = sample_positions::<_, 2>(5, &mut rng).unwrap();
/// assert!(i < j && j < 5);
/// assert!(sample_positions::<_, 3>(2, &mut rng).is_none());
/// ```
pub fn sample_positions<R: Rng + ?Sized, const K: usize>(
    len: usize,
    rng: &mut R,
) -> Option<[usize; K]> {
    if len < K {
        return None;
    }
    let mut picked = [0usize; K];
    for (slot, pos) in picked.iter_mut().zip(index::sample(rng, len, K)) {
        *slot = pos;
    }
    picked.sort_unstable();
    Some(picked)
}
