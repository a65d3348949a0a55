use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Counts keyed by dense chronological rank.
pub type SequentialCounts = BTreeMap<usize, usize>;

/// Ranks the distinct keys in ascending order, starting at 0.
pub fn sequential_index<'a, K, I>(keys: I) -> BTreeMap<&'a K, usize>
where
    K: Ord + 'a,
    I: IntoIterator<Item = &'a K>,
{
    keys.into_iter()
        .sorted()
        .dedup()
        .enumerate()
        .map(|(rank, key)| (key, rank))
        .collect()
}

/// Relabels sparse bucket keys as `0..n`, keeping chronological order.
///
/// Counts landing on the same rank are summed. Returns the relabelled
/// counts and the number of distinct buckets.
pub fn to_sequential<K, S>(counts: &HashMap<K, usize, S>) -> (SequentialCounts, usize)
where
    K: Ord + Hash + Eq,
    S: BuildHasher,
{
    let index = sequential_index(counts.keys());
    let mut sequential = SequentialCounts::new();
    for (key, count) in counts {
        if let Some(&rank) = index.get(&key) {
            *sequential.entry(rank).or_insert(0) += *count;
        }
    }
    (sequential, index.len())
}
