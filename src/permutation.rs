//! Lazy permutation enumeration in lexicographic order of input positions.
//!
//! The enumerator holds one index array and advances it in place with the classic
//! next-permutation step, so producing the next ordering is amortised O(1) and nothing
//! beyond the current ordering is ever materialised.

// ============================================================================
// Permutations
// ============================================================================

/// Iterator over all `n!` orderings of a slice.
///
/// Orderings come out in lexicographic order of the *positions* of `items`, starting with
/// the identity. Empty input yields exactly one empty ordering. Once exhausted, the iterator
/// stays exhausted.
#[derive(Clone, Debug)]
pub struct Permutations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    current: Vec<T>,
    started: bool,
    done: bool,
    yielded: usize,
}

impl<'a, T: Copy> Permutations<'a, T> {
    /// Creates the enumerator. Nothing is produced until the first call to `next`.
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            indices: (0..items.len()).collect(),
            current: items.to_vec(),
            started: false,
            done: false,
            yielded: 0,
        }
    }

    /// Total number of orderings, or `None` if `n!` overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        factorial(self.items.len())
    }

    /// Number of orderings produced so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Advances and lends the next ordering without allocating.
    pub fn next_slice(&mut self) -> Option<&[T]> {
        if self.done {
            return None;
        }
        if self.started {
            if !next_permutation(&mut self.indices) {
                self.done = true;
                return None;
            }
            for (slot, &i) in self.current.iter_mut().zip(&self.indices) {
                *slot = self.items[i];
            }
        } else {
            self.started = true;
        }
        self.yielded += 1;
        Some(&self.current)
    }
}

impl<T: Copy> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_slice().map(<[T]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.total() {
            Some(total) => {
                let remaining = total - self.yielded;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

impl<T: Copy> std::iter::FusedIterator for Permutations<'_, T> {}

/// Shorthand for [`Permutations::new`].
pub fn permutations<T: Copy>(items: &[T]) -> Permutations<'_, T> {
    Permutations::new(items)
}

// ============================================================================
// Internal
// ============================================================================

/// Rearranges `idx` into the next lexicographically greater ordering.
///
/// Returns `false` (leaving `idx` untouched) if `idx` is already the last ordering.
fn next_permutation(idx: &mut [usize]) -> bool {
    let n = idx.len();
    if n < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `i`.
    let mut i = n - 1;
    while i > 0 && idx[i - 1] >= idx[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;
    let mut j = n - 1;
    while idx[j] <= idx[pivot] {
        j -= 1;
    }
    idx.swap(pivot, j);
    idx[i..].reverse();
    true
}

fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, usize::checked_mul)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn empty_input_yields_one_empty_ordering() {
        let items: [u64; 0] = [];
        let all: Vec<Vec<u64>> = permutations(&items).collect();
        assert_eq!(all, vec![Vec::<u64>::new()]);
    }

    #[test]
    fn single_item() {
        let all: Vec<_> = permutations(&[7u64]).collect();
        assert_eq!(all, vec![vec![7]]);
    }

    #[test]
    fn three_items_in_positional_lexicographic_order() {
        let all: Vec<_> = permutations(&[30u64, 10, 20]).collect();
        assert_eq!(
            all,
            vec![
                vec![30, 10, 20],
                vec![30, 20, 10],
                vec![10, 30, 20],
                vec![10, 20, 30],
                vec![20, 30, 10],
                vec![20, 10, 30],
            ]
        );
    }

    #[test]
    fn order_matches_itertools_reference() {
        let items = [4u64, 1, 9, 2, 6];
        let ours: Vec<_> = permutations(&items).collect();
        let reference: Vec<Vec<u64>> = items.iter().copied().permutations(items.len()).collect();
        assert_eq!(ours, reference);
    }

    #[test]
    fn counts_are_factorial_and_unique() {
        for n in 0..=6usize {
            let items: Vec<u64> = (1..=n as u64).collect();
            let all: Vec<_> = permutations(&items).collect();
            assert_eq!(Some(all.len()), factorial(n));
            let unique: std::collections::HashSet<_> = all.iter().cloned().collect();
            assert_eq!(unique.len(), all.len());
        }
    }

    #[test]
    fn is_lazy_and_stays_exhausted() {
        let items: Vec<u64> = (1..=12).collect();
        let mut perms = permutations(&items);
        assert_eq!(perms.total(), Some(479_001_600));
        assert_eq!(perms.next_slice(), Some(&items[..]));
        assert_eq!(perms.yielded(), 1);

        let mut small = permutations(&[1u64, 2]);
        assert_eq!(small.by_ref().count(), 2);
        assert!(small.next().is_none());
        assert!(small.next_slice().is_none());
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let mut perms = permutations(&[1u64, 2, 3]);
        assert_eq!(perms.size_hint(), (6, Some(6)));
        perms.next();
        perms.next();
        assert_eq!(perms.size_hint(), (4, Some(4)));
        perms.by_ref().for_each(drop);
        assert_eq!(perms.size_hint(), (0, Some(0)));
    }

    #[test]
    fn next_permutation_reports_last() {
        let mut idx = vec![2, 1, 0];
        assert!(!next_permutation(&mut idx));
        assert_eq!(idx, vec![2, 1, 0]);
    }

    #[test]
    fn factorial_overflow_is_none() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(100), None);
    }
}
