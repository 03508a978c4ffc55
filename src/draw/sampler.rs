//! Shuffle and sampling over any [`RandomSource`].
//!
//! The sampler is the same code in live and seeded mode; only the source
//! differs. Both functions expect inputs already validated by the engine.

use crate::rng::RandomSource;

/// Fisher-Yates shuffle of `items`, then the first `count` elements.
///
/// For `i` from `len - 1` down to `1`, an index `j` in `[0, i]` is drawn and
/// positions `i` and `j` are swapped. The full list is always shuffled, so
/// the number of draws consumed depends only on `items.len()`. Winners are
/// pairwise distinct positions of the input.
pub fn shuffle_take<T, R>(items: &[T], count: usize, source: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut pool = items.to_vec();

    for i in (1..pool.len()).rev() {
        let j = source.index_below(i + 1);
        pool.swap(i, j);
    }

    pool.truncate(count);
    pool
}

/// `count` independent picks from `items`, in draw order.
///
/// The same element may be picked more than once.
pub fn sample_with_replacement<T, R>(items: &[T], count: usize, source: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    (0..count)
        .map(|_| items[source.index_below(items.len())].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of indices.
    struct Scripted(std::vec::IntoIter<usize>);

    impl RandomSource for Scripted {
        fn index_below(&mut self, bound: usize) -> usize {
            let index = self.0.next().expect("script exhausted");
            assert!(index < bound);
            index
        }
    }

    #[test]
    fn shuffle_swaps_from_the_back() {
        // i=3 j=0, i=2 j=2, i=1 j=0
        let mut source = Scripted(vec![0, 2, 0].into_iter());
        let shuffled = shuffle_take(&['a', 'b', 'c', 'd'], 4, &mut source);

        assert_eq!(shuffled, vec!['b', 'd', 'c', 'a']);
    }

    #[test]
    fn shuffle_consumes_len_minus_one_draws_regardless_of_count() {
        let mut source = Scripted(vec![1, 1, 1, 1].into_iter());
        let taken = shuffle_take(&[1, 2, 3, 4, 5], 1, &mut source);

        assert_eq!(taken.len(), 1);
        assert_eq!(source.0.len(), 0);
    }

    #[test]
    fn single_item_shuffle_draws_nothing() {
        let mut source = Scripted(Vec::new().into_iter());

        assert_eq!(shuffle_take(&["only"], 1, &mut source), vec!["only"]);
    }

    #[test]
    fn replacement_sampling_follows_draw_order() {
        let mut source = Scripted(vec![2, 2, 0].into_iter());
        let picks = sample_with_replacement(&['x', 'y', 'z'], 3, &mut source);

        assert_eq!(picks, vec!['z', 'z', 'x']);
    }
}
