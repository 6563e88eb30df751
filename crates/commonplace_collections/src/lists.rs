//! Mapping, filtering, sorting, and grouping helpers.
//!
//! These never mutate their input. Borrowed slices are cloned into the
//! returned vector; owned iterators are consumed.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// Maps every item through `f`, collecting into a vector.
pub fn map<I, U, F>(items: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    items.into_iter().map(f).collect()
}

/// Returns clones of the items that satisfy `predicate`, in order.
#[must_use]
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Returns a copy of `items` sorted by the key `f` extracts.
///
/// The sort is stable: items with equal keys keep their relative order.
#[must_use]
pub fn sort_by_key<T, K, F>(items: &[T], f: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted = items.to_vec();
    sorted.sort_by_key(f);
    sorted
}

/// Groups items by the key `f` extracts.
///
/// Items keep their relative order within each group.
pub fn group_by<I, K, F>(items: I, mut f: F) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in items {
        groups.entry(f(&item)).or_default().push(item);
    }
    groups
}

/// Groups items by key, with groups ordered by key.
pub fn group_by_ordered<I, K, F>(items: I, mut f: F) -> BTreeMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: BTreeMap<K, Vec<I::Item>> = BTreeMap::new();
    for item in items {
        groups.entry(f(&item)).or_default().push(item);
    }
    groups
}

/// Returns `None` for an empty vector, the vector otherwise.
#[must_use]
pub fn none_if_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// Returns true if `items` is absent or has no elements.
#[must_use]
pub fn is_none_or_empty<T>(items: Option<&[T]>) -> bool {
    items.is_none_or(<[T]>::is_empty)
}

/// Returns true if any item satisfies `predicate`.
pub fn any_match<I, P>(items: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    items.into_iter().any(predicate)
}

/// Returns true if `items` contains `value`.
#[must_use]
pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.contains(value)
}

/// Returns a predicate that admits only the first item seen for each key.
///
/// Meant for [`Iterator::filter`]:
///
/// ```
/// use commonplace_collections::lists::distinct_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let firsts: Vec<_> = words
///     .iter()
///     .filter(distinct_by(|w: &&&str| w.chars().next()))
///     .collect();
/// assert_eq!(firsts, [&"apple", &"banana", &"cherry"]);
/// ```
pub fn distinct_by<T, K, F>(mut key_fn: F) -> impl FnMut(&T) -> bool
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    move |item: &T| seen.insert(key_fn(item))
}

/// Keeps the first item for every key, in order.
pub fn distinct_by_key<I, K, F>(items: I, key_fn: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut keep = distinct_by(key_fn);
    items.into_iter().filter(|item| keep(item)).collect()
}
