use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Creates a new map with the keys and values of `input` swapped (`k -> v` becomes `v -> k`).
///
/// If several keys share a value, exactly one of them survives and which one is unspecified. Use
/// [`invert_grouped`] to keep all of them.
///
/// Returns None if `input` is absent.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::maps;
/// let ids = HashMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(maps::invert(Some(&ids)), Some(HashMap::from([(1, "a"), (2, "b")])));
/// ```
pub fn invert<K, V, S>(input: Option<&HashMap<K, V, S>>) -> Option<HashMap<V, K, S>>
where
    K: Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    invert_by(input, V::clone)
}

/// Creates a new map from `key_of(v) -> k` for every entry `k -> v` of `input`.
///
/// Collisions are handled the same way as [`invert`]: one of the colliding keys survives.
///
/// Returns None if `input` is absent.
pub fn invert_by<K, V, J, S, F>(input: Option<&HashMap<K, V, S>>, mut key_of: F) -> Option<HashMap<J, K, S>>
where
    K: Clone,
    J: Hash + Eq,
    S: BuildHasher + Clone,
    F: FnMut(&V) -> J,
{
    let input = input?;

    let mut out = HashMap::with_capacity_and_hasher(input.len(), input.hasher().clone());
    for (key, value) in input {
        out.insert(key_of(value), key.clone());
    }

    Some(out)
}

/// Creates a new map from each distinct value of `input` to all of the keys that held it.
///
/// Unlike [`invert`], no key is ever lost: every key `k` ends up in exactly one group, the one for
/// `input[k]`. The order of keys within a group is unspecified.
///
/// Returns None if `input` is absent.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::maps;
/// let parity = HashMap::from([(1, "odd"), (2, "even"), (3, "odd")]);
/// let mut grouped = maps::invert_grouped(Some(&parity)).unwrap();
/// grouped.get_mut("odd").unwrap().sort();
/// assert_eq!(grouped["odd"], [1, 3]);
/// assert_eq!(grouped["even"], [2]);
/// ```
pub fn invert_grouped<K, V, S>(input: Option<&HashMap<K, V, S>>) -> Option<HashMap<V, Vec<K>, S>>
where
    K: Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    let input = input?;

    let mut out: HashMap<V, Vec<K>, S> =
        HashMap::with_capacity_and_hasher(input.len(), input.hasher().clone());
    for (key, value) in input {
        out.entry(value.clone()).or_default().push(key.clone());
    }

    Some(out)
}
