//! The `Chain` wrapper type.

use std::cmp::Ordering;

use crate::capability::{AddToCollection, TypeConstructor};
use crate::collections;

/// A container wrapped for fluent, left-to-right application of the
/// collection operations.
///
/// Every chained call consumes the wrapper and returns a new one holding a
/// freshly computed value; nothing is evaluated lazily. Call
/// [`value`](Chain::value) to take the result out.
///
/// # Examples
///
/// ```rust
/// use underscore::chaining::chain;
///
/// let total = chain(vec![1, 2, 3])
///     .map(|element| element * 2)
///     .reduce(|memo, element| memo + element, 0)
///     .value();
/// assert_eq!(total, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Chain<C>(C);

impl<C> Chain<C> {
    /// Wraps `container`.
    #[inline]
    pub const fn new(container: C) -> Self {
        Self(container)
    }

    /// Ends the chain, returning the wrapped value.
    #[inline]
    pub fn value(self) -> C {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &C {
        &self.0
    }

    /// Calls `function` with every element of a copy of the container and
    /// returns the wrapper unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underscore::chaining::chain;
    ///
    /// let mut seen = Vec::new();
    /// let values = chain(vec![1, 2]).each(|element| seen.push(element)).value();
    /// assert_eq!(seen, values);
    /// ```
    #[must_use]
    pub fn each<F>(self, function: F) -> Self
    where
        C: Clone + IntoIterator,
        F: FnMut(C::Item),
    {
        collections::each(self.0.clone(), function);
        self
    }

    /// Maps every element, keeping the container kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use underscore::chaining::chain;
    ///
    /// let lengths = chain(BTreeSet::from(["a", "bb", "cc"])).map(str::len).value();
    /// assert_eq!(lengths, BTreeSet::from([1, 2]));
    /// ```
    pub fn map<B, F>(self, function: F) -> Chain<C::WithType<B>>
    where
        C: TypeConstructor + IntoIterator<Item = <C as TypeConstructor>::Inner>,
        F: FnMut(<C as TypeConstructor>::Inner) -> B,
        C::WithType<B>: Default + AddToCollection<B>,
    {
        Chain(collections::map(self.0, function))
    }

    /// Maps every element into a container of the caller's choosing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use underscore::chaining::chain;
    ///
    /// let remainders: HashSet<i32> = chain(vec![1, 4, 6]).map_into(|element| element % 3).value();
    /// assert_eq!(remainders, HashSet::from([0, 1]));
    /// ```
    pub fn map_into<R, B, F>(self, function: F) -> Chain<R>
    where
        C: IntoIterator,
        F: FnMut(C::Item) -> B,
        R: Default + AddToCollection<B>,
    {
        Chain(collections::map(self.0, function))
    }

    /// Folds the container from first to last, wrapping the memo.
    pub fn reduce<M, F>(self, function: F, memo: M) -> Chain<M>
    where
        C: IntoIterator,
        F: FnMut(M, C::Item) -> M,
    {
        Chain(collections::reduce(self.0, function, memo))
    }

    /// Folds the container from last to first, wrapping the memo.
    pub fn reduce_right<M, F>(self, function: F, memo: M) -> Chain<M>
    where
        C: IntoIterator,
        C::IntoIter: DoubleEndedIterator,
        F: FnMut(M, C::Item) -> M,
    {
        Chain(collections::reduce_right(self.0, function, memo))
    }

    /// Keeps the elements matching `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        C: IntoIterator + Default + AddToCollection<C::Item>,
        P: FnMut(&C::Item) -> bool,
    {
        Self(collections::filter(self.0, predicate))
    }

    /// Drops the elements matching `predicate`.
    #[must_use]
    pub fn reject<P>(self, predicate: P) -> Self
    where
        C: IntoIterator + Default + AddToCollection<C::Item>,
        P: FnMut(&C::Item) -> bool,
    {
        Self(collections::reject(self.0, predicate))
    }

    /// Sorts the elements ascending by `compare`.
    #[must_use]
    pub fn sort_by<F>(self, compare: F) -> Self
    where
        C: IntoIterator + FromIterator<C::Item>,
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        Self(collections::sort_by(self.0, compare))
    }

    /// Lets `function` inspect the whole wrapped value mid-chain.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&C),
    {
        function(&self.0);
        self
    }
}

impl<C> From<C> for Chain<C> {
    fn from(container: C) -> Self {
        Self::new(container)
    }
}

impl<C: IntoIterator> IntoIterator for Chain<C> {
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Wraps `container` to start a chain.
#[inline]
pub const fn chain<C>(container: C) -> Chain<C> {
    Chain::new(container)
}

/// Ends `chain`, returning its wrapped value.
#[inline]
pub fn value<C>(chain: Chain<C>) -> C {
    chain.value()
}
