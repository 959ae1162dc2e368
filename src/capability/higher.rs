//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Vec<_>` or `BTreeSet<_>` as type constructors
//! directly. [`TypeConstructor`] recovers "the same kind of container, holding
//! a different element type", which is what lets
//! [`Chain::map`](crate::chaining::Chain::map) keep the container kind without
//! the caller naming the result type.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use underscore::capability::TypeConstructor;
//!
//! fn empty_like<C: TypeConstructor>(_container: &C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: BTreeSet<i32> = [1, 2].into_iter().collect();
//! let names: BTreeSet<String> = empty_like(&numbers);
//! assert!(names.is_empty());
//! ```

use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The element type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F` itself.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same container kind holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for VecDeque<T> {
    type Inner = T;
    type WithType<B> = VecDeque<B>;
}

impl<T> TypeConstructor for LinkedList<T> {
    type Inner = T;
    type WithType<B> = LinkedList<B>;
}

impl<T, S> TypeConstructor for HashSet<T, S> {
    type Inner = T;
    type WithType<B> = HashSet<B, S>;
}

impl<T> TypeConstructor for BTreeSet<T> {
    type Inner = T;
    type WithType<B> = BTreeSet<B>;
}

impl<T> TypeConstructor for BinaryHeap<T> {
    type Inner = T;
    type WithType<B> = BinaryHeap<B>;
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> TypeConstructor for smallvec::SmallVec<[T; N]> {
    type Inner = T;
    type WithType<B> = smallvec::SmallVec<[B; N]>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Vec<i32>>();
    }

    #[rstest]
    fn hash_set_with_type_keeps_hasher() {
        fn assert_with_type<T, S, B>()
        where
            HashSet<T, S>: TypeConstructor<Inner = T, WithType<B> = HashSet<B, S>>,
        {
        }

        assert_with_type::<i32, std::hash::RandomState, String>();
    }

    #[rstest]
    fn btree_set_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<char>
        where
            T::WithType<char>: Default,
        {
            Default::default()
        }

        let result: BTreeSet<char> = transform(BTreeSet::from([1, 2, 3]));
        assert!(result.is_empty());
    }

    #[rstest]
    fn with_type_of_inner_is_identity() {
        let values: <Vec<u8> as TypeConstructor>::WithType<u8> = vec![1, 2];
        let same: Vec<u8> = values;
        assert_eq!(same, vec![1, 2]);

        let queue: <VecDeque<String> as TypeConstructor>::WithType<String> = VecDeque::new();
        let same: VecDeque<String> = queue;
        assert!(same.is_empty());
    }
}
