//! Neighborhood moves on a path.
//!
//! Both moves return a new path and leave the input untouched, so a search
//! driver can score a proposal before deciding to commit it.

/// Returns `path` with the elements at positions `i` and `j` exchanged.
///
/// Equivalent to the segment form
/// `path[..i] + [path[j]] + path[i+1..j] + [path[i]] + path[j+1..]`
/// for `i < j`; the segment between the two positions keeps its order.
/// Applying the same move twice restores the original path.
///
/// # Panics
///
/// Panics if either position is out of bounds.
///
/// # Examples
///
/// ```
/// use u_hive::operators::pair_swap;
///
/// assert_eq!(pair_swap(&[0, 1, 2, 3, 4], 1, 3), vec![0, 3, 2, 1, 4]);
/// ```
pub fn pair_swap(path: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut next = path.to_vec();
    next.swap(i, j);
    next
}

/// Returns `path` with positions `a < b < c` rotated so that the element at
/// `c` moves to `a`, the element at `a` moves to `b`, and the element at `b`
/// moves to `c`.
///
/// # Panics
///
/// Panics if any position is out of bounds.
///
/// # Examples
///
/// ```
/// use u_hive::operators::triple_rotate;
///
/// assert_eq!(triple_rotate(&[10, 11, 12, 13], 0, 1, 3), vec![13, 10, 12, 11]);
/// ```
pub fn triple_rotate(path: &[usize], a: usize, b: usize, c: usize) -> Vec<usize> {
    let mut next = path.to_vec();
    next[a] = path[c];
    next[b] = path[a];
    next[c] = path[b];
    next
}
