use std::collections::HashMap;

/// Returns all keys of `input`, in an unspecified order, or None if `input` is absent.
pub fn keys<K: Clone, V, S>(input: Option<&HashMap<K, V, S>>) -> Option<Vec<K>> {
    input.map(|input| input.keys().cloned().collect())
}

/// Returns all values of `input`, in an unspecified order, or None if `input` is absent.
pub fn values<K, V: Clone, S>(input: Option<&HashMap<K, V, S>>) -> Option<Vec<V>> {
    input.map(|input| input.values().cloned().collect())
}

/// Returns a key of `input` whose value satisfies `predicate`, or None if there isn't one.
///
/// If several entries match, any one of them may be returned.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::maps;
/// let counts = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// assert_eq!(maps::find_key(Some(&counts), |v| *v == 2), Some(&"b"));
/// assert_eq!(maps::find_key(Some(&counts), |v| *v == 5), None);
/// ```
pub fn find_key<'a, K, V, S, F>(input: Option<&'a HashMap<K, V, S>>, mut predicate: F) -> Option<&'a K>
where
    F: FnMut(&V) -> bool,
{
    input?
        .iter()
        .find(|&(_, value)| predicate(value))
        .map(|(key, _)| key)
}

/// Returns every key of `input` whose value satisfies `predicate`, in an unspecified order.
///
/// No results are reported as None rather than an empty [`Vec`], so an absent map, an empty map
/// and a map with no matching values all return None.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::maps;
/// let counts = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// let mut odd = maps::find_all_keys(Some(&counts), |v| v % 2 == 1).unwrap();
/// odd.sort();
/// assert_eq!(odd, ["a", "c"]);
/// assert_eq!(maps::find_all_keys(Some(&counts), |v| *v > 10), None);
/// ```
pub fn find_all_keys<K, V, S, F>(input: Option<&HashMap<K, V, S>>, mut predicate: F) -> Option<Vec<K>>
where
    K: Clone,
    F: FnMut(&V) -> bool,
{
    let found: Vec<K> = input?
        .iter()
        .filter(|&(_, value)| predicate(value))
        .map(|(key, _)| key.clone())
        .collect();

    (!found.is_empty()).then_some(found)
}
