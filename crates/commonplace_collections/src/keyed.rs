//! Keyed lookup over borrowed sequences.
//!
//! A [`KeyedLookup`] finds the first element of a sequence whose extracted key
//! equals a query key. It borrows the sequence, so any collection whose shared
//! reference iterates `&T` can be searched: slices, `Vec`, `VecDeque`,
//! `BTreeSet`, `HashSet`, and so on.
//!
//! Lookups are built in two steps. [`KeyedLookup::of`] binds the sequence and
//! [`KeyedLookup::compare_with`] binds the key function. Only the second step
//! produces a type with [`KeyedLookup::next`], so a lookup without a key
//! function cannot be queried:
//!
//! ```compile_fail
//! use commonplace_collections::KeyedLookup;
//!
//! let ids = vec![1, 2, 3];
//! let lookup = KeyedLookup::of(&ids);
//! lookup.next(&1);
//! ```
//!
//! Every query is a linear scan. There is no setup cost, but repeated lookups
//! over a large sequence should build a `HashMap` instead.

use std::fmt;
use std::marker::PhantomData;

/// Key function slot of a lookup that has not been given one yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unkeyed;

/// A lookup bound to a sequence, without a key function.
pub type UnkeyedLookup<'a, S> = KeyedLookup<'a, S, (), Unkeyed>;

/// Finds elements of a borrowed sequence by an extracted key.
///
/// `K` is the key type produced by the key function `F`.
pub struct KeyedLookup<'a, S: ?Sized, K, F> {
    source: &'a S,
    key_fn: F,
    _key: PhantomData<fn() -> K>,
}

impl<'a, S: ?Sized> KeyedLookup<'a, S, (), Unkeyed> {
    /// Binds a lookup to `source`. The key function is set with
    /// [`compare_with`](Self::compare_with).
    #[must_use]
    pub fn of(source: &'a S) -> Self {
        Self {
            source,
            key_fn: Unkeyed,
            _key: PhantomData,
        }
    }
}

impl<'a, S: ?Sized, K, F> KeyedLookup<'a, S, K, F> {
    /// Returns a lookup over the same sequence keyed by `key_fn`.
    ///
    /// Any previously bound key function is replaced.
    #[must_use]
    pub fn compare_with<T, U, G>(&self, key_fn: G) -> KeyedLookup<'a, S, U, G>
    where
        &'a S: IntoIterator<Item = &'a T>,
        T: 'a,
        G: Fn(&T) -> U,
    {
        KeyedLookup {
            source: self.source,
            key_fn,
            _key: PhantomData,
        }
    }

    /// Returns the sequence this lookup searches.
    #[must_use]
    pub fn source(&self) -> &'a S {
        self.source
    }
}

impl<'a, S, T, K, F> KeyedLookup<'a, S, K, F>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: Fn(&T) -> K,
    K: PartialEq,
{
    /// Creates a lookup over `source` keyed by `key_fn` in one step.
    #[must_use]
    pub fn new(source: &'a S, key_fn: F) -> Self {
        Self {
            source,
            key_fn,
            _key: PhantomData,
        }
    }

    /// Returns the first element whose key equals `key`.
    ///
    /// Returns `None` when no element matches, including on an empty sequence.
    #[must_use]
    pub fn next(&self, key: &K) -> Option<&'a T> {
        self.source
            .into_iter()
            .find(|&item| (self.key_fn)(item) == *key)
    }

    /// Returns true if any element has the given key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.next(key).is_some()
    }

    /// Returns every element with the given key, in sequence order.
    pub fn all<'k>(&'k self, key: &'k K) -> impl Iterator<Item = &'a T> {
        self.source
            .into_iter()
            .filter(move |&item| (self.key_fn)(item) == *key)
    }
}

impl<S: ?Sized, K, F: Clone> Clone for KeyedLookup<'_, S, K, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            key_fn: self.key_fn.clone(),
            _key: PhantomData,
        }
    }
}

impl<S: ?Sized + fmt::Debug, K, F> fmt::Debug for KeyedLookup<'_, S, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedLookup")
            .field("source", &self.source)
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}
