use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Creates a new map with the same keys as `input`, replacing every value with the result of
/// `convert(value, key, input)`.
///
/// Returns None if `input` is absent.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::maps;
/// let counts = HashMap::from([("a", 1), ("b", 2)]);
/// let doubled = maps::map(Some(&counts), |v, _, _| v * 2);
/// assert_eq!(doubled, Some(HashMap::from([("a", 2), ("b", 4)])));
/// ```
pub fn map<K, V, U, S, F>(input: Option<&HashMap<K, V, S>>, mut convert: F) -> Option<HashMap<K, U, S>>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&V, &K, &HashMap<K, V, S>) -> U,
{
    let input = input?;

    let mut out = HashMap::with_capacity_and_hasher(input.len(), input.hasher().clone());
    for (key, value) in input {
        out.insert(key.clone(), convert(value, key, input));
    }

    Some(out)
}

/// Creates a new map containing only the entries of `input` for which `filter(value, key, input)`
/// returns true.
///
/// Returns None if `input` is absent.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::maps;
/// let counts = HashMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
/// let even = maps::filter(Some(&counts), |v, _, _| v % 2 == 0);
/// assert_eq!(even, Some(HashMap::from([("b", 2), ("d", 4)])));
/// ```
pub fn filter<K, V, S, F>(input: Option<&HashMap<K, V, S>>, mut filter: F) -> Option<HashMap<K, V, S>>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    F: FnMut(&V, &K, &HashMap<K, V, S>) -> bool,
{
    let input = input?;

    let mut out = HashMap::with_capacity_and_hasher(input.len(), input.hasher().clone());
    for (key, value) in input {
        if filter(value, key, input) {
            out.insert(key.clone(), value.clone());
        }
    }

    Some(out)
}

/// Folds every entry of `input` into `acc` using `reduce(acc, value, key)`, in an unspecified
/// order.
///
/// If `input` is absent, `acc` is returned untouched.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::maps;
/// let counts = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// assert_eq!(maps::reduce(Some(&counts), |acc, v, _| acc + v, 0), 6);
/// ```
pub fn reduce<K, V, S, A, F>(input: Option<&HashMap<K, V, S>>, mut reduce: F, acc: A) -> A
where
    F: FnMut(A, &V, &K) -> A,
{
    input
        .into_iter()
        .flatten()
        .fold(acc, |acc, (key, value)| reduce(acc, value, key))
}

/// Calls `f(value, key)` once for every entry of `input`, in an unspecified order. Does nothing if
/// `input` is absent.
pub fn for_each<K, V, S, F>(input: Option<&HashMap<K, V, S>>, mut f: F)
where
    F: FnMut(&V, &K),
{
    for (key, value) in input.into_iter().flatten() {
        f(value, key);
    }
}

/// Creates a shallow copy of `input`. The copy owns its own bindings, but values are only
/// [`Clone`]d, so shared handles like [`Rc`](std::rc::Rc) still point at the same data.
///
/// Returns None if `input` is absent.
pub fn copy<K, V, S>(input: Option<&HashMap<K, V, S>>) -> Option<HashMap<K, V, S>>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    input.cloned()
}
