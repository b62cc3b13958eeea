use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::maps;
use crate::util::option::OptionExtension;

/// Method forms of the [`maps`] operations for a map that is known to be present.
///
/// Each method behaves exactly like the free function of the same operation called with
/// `Some(self)`.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_ops::traits::MapOps;
/// let counts = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// assert_eq!(counts.map_values(|v, _, _| v * 2)["c"], 6);
/// assert_eq!(counts.reduce_entries(|acc, v, _| acc + v, 0), 6);
/// assert_eq!(counts.invert()[&2], "b");
/// ```
pub trait MapOps<K, V, S>: Sized {
    /// See [`maps::map`].
    fn map_values<U>(&self, convert: impl FnMut(&V, &K, &Self) -> U) -> HashMap<K, U, S>;

    /// See [`maps::filter`].
    fn filter_entries(&self, filter: impl FnMut(&V, &K, &Self) -> bool) -> Self
    where
        V: Clone;

    /// See [`maps::reduce`].
    fn reduce_entries<A>(&self, reduce: impl FnMut(A, &V, &K) -> A, acc: A) -> A;

    /// See [`maps::for_each`].
    fn for_each_entry(&self, f: impl FnMut(&V, &K));

    /// See [`maps::copy`].
    fn shallow_copy(&self) -> Self
    where
        V: Clone;

    /// See [`maps::keys`].
    fn key_list(&self) -> Vec<K>;

    /// See [`maps::values`].
    fn value_list(&self) -> Vec<V>
    where
        V: Clone;

    /// See [`maps::find_key`].
    fn find_key(&self, predicate: impl FnMut(&V) -> bool) -> Option<&K>;

    /// See [`maps::find_all_keys`]. Like the free function, no matches yields None.
    fn find_all_keys(&self, predicate: impl FnMut(&V) -> bool) -> Option<Vec<K>>;

    /// See [`maps::invert`].
    fn invert(&self) -> HashMap<V, K, S>
    where
        V: Hash + Eq + Clone;

    /// See [`maps::invert_by`].
    fn invert_by<J: Hash + Eq>(&self, key_of: impl FnMut(&V) -> J) -> HashMap<J, K, S>;

    /// See [`maps::invert_grouped`].
    fn invert_grouped(&self) -> HashMap<V, Vec<K>, S>
    where
        V: Hash + Eq + Clone;
}

impl<K, V, S> MapOps<K, V, S> for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    fn map_values<U>(&self, convert: impl FnMut(&V, &K, &Self) -> U) -> HashMap<K, U, S> {
        maps::map(Some(self), convert).present()
    }

    fn filter_entries(&self, filter: impl FnMut(&V, &K, &Self) -> bool) -> Self
    where
        V: Clone,
    {
        maps::filter(Some(self), filter).present()
    }

    fn reduce_entries<A>(&self, reduce: impl FnMut(A, &V, &K) -> A, acc: A) -> A {
        maps::reduce(Some(self), reduce, acc)
    }

    fn for_each_entry(&self, f: impl FnMut(&V, &K)) {
        maps::for_each(Some(self), f)
    }

    fn shallow_copy(&self) -> Self
    where
        V: Clone,
    {
        maps::copy(Some(self)).present()
    }

    fn key_list(&self) -> Vec<K> {
        maps::keys(Some(self)).present()
    }

    fn value_list(&self) -> Vec<V>
    where
        V: Clone,
    {
        maps::values(Some(self)).present()
    }

    fn find_key(&self, predicate: impl FnMut(&V) -> bool) -> Option<&K> {
        maps::find_key(Some(self), predicate)
    }

    fn find_all_keys(&self, predicate: impl FnMut(&V) -> bool) -> Option<Vec<K>> {
        maps::find_all_keys(Some(self), predicate)
    }

    fn invert(&self) -> HashMap<V, K, S>
    where
        V: Hash + Eq + Clone,
    {
        maps::invert(Some(self)).present()
    }

    fn invert_by<J: Hash + Eq>(&self, key_of: impl FnMut(&V) -> J) -> HashMap<J, K, S> {
        maps::invert_by(Some(self), key_of).present()
    }

    fn invert_grouped(&self) -> HashMap<V, Vec<K>, S>
    where
        V: Hash + Eq + Clone,
    {
        maps::invert_grouped(Some(self)).present()
    }
}
