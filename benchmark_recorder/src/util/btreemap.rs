//!
//! Utility functions for `BTreeMap`.
//!

use std::collections::BTreeMap;

/// Returns an iterator over the elements that are common to both `map1` and
/// `map2`.
///
/// # Arguments
///
/// * `map1` - A BTreeMap where the keys are compared.
/// * `map2` - A mutable BTreeMap from which matching keys are removed and their values paired with those from `map1`.
///
/// # Returns
///
/// An iterator over tuples `(K, V1, V2)` where:
/// * `K` is the common key.
/// * `V1` is the associated value from `map1`.
/// * `V2` is the associated value from `map2`.
///
/// The iterator only includes keys that are present in both maps.
///
/// # Example
///
/// ```rust
/// use benchmark_recorder::util::btreemap::intersect_keys;
///
/// let first = [("sender", 1), ("receiver", 2)];
/// let second = [("receiver", 20), ("retries", 30)];
/// let expected: Vec<_> = [("receiver", 2, 20)].into();
/// assert_eq!(
/// intersect_keys(first.into(), second.into()).collect::<Vec<_>>(),
/// expected
/// )
/// ```
pub fn intersect_keys<K, V1, V2>(
    map1: BTreeMap<K, V1>,
    mut map2: BTreeMap<K, V2>,
) -> impl Iterator<Item = (K, V1, V2)>
where
    K: Ord,
{
    map1.into_iter()
        .filter_map(move |(key, value1)| map2.remove(&key).map(|value2| (key, value1, value2)))
}
