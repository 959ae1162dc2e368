//! Visiting, transforming and folding every element.

use crate::capability::AddToCollection;

/// Calls `function` once per element, in iteration order.
///
/// # Examples
///
/// ```rust
/// use underscore::collections::each;
///
/// let mut seen = Vec::new();
/// each(&vec![1, 2, 3], |element| seen.push(*element));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
#[inline]
pub fn each<C, F>(container: C, function: F)
where
    C: IntoIterator,
    F: FnMut(C::Item),
{
    container.into_iter().for_each(function);
}

/// Builds a new container from the results of `function`.
///
/// The result container is chosen by the caller and filled through
/// [`AddToCollection`], so mapping into a set may drop or reorder values.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use underscore::collections::map;
///
/// let doubled: Vec<i32> = map(vec![1, 2, 3], |element| element * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let parities: BTreeSet<bool> = map(&doubled, |element| element % 4 == 0);
/// assert_eq!(parities.len(), 2);
/// ```
pub fn map<R, C, F, B>(container: C, mut function: F) -> R
where
    C: IntoIterator,
    F: FnMut(C::Item) -> B,
    R: Default + AddToCollection<B>,
{
    let mut result = R::default();
    for element in container {
        result.add_to_collection(function(element));
    }
    result
}

/// Folds the elements from first to last into `memo`.
///
/// An empty container returns `memo` unchanged.
///
/// # Examples
///
/// ```rust
/// use underscore::collections::reduce;
///
/// let sum = reduce(vec![1, 2, 3], |memo, element| memo + element, 0);
/// assert_eq!(sum, 6);
/// ```
#[inline]
pub fn reduce<C, F, M>(container: C, function: F, memo: M) -> M
where
    C: IntoIterator,
    F: FnMut(M, C::Item) -> M,
{
    container.into_iter().fold(memo, function)
}

/// Folds the elements from last to first into `memo`.
///
/// # Examples
///
/// ```rust
/// use underscore::collections::reduce_right;
///
/// let joined = reduce_right(vec!["a", "b", "c"], |memo, element| memo + element, String::new());
/// assert_eq!(joined, "cba");
/// ```
#[inline]
pub fn reduce_right<C, F, M>(container: C, function: F, memo: M) -> M
where
    C: IntoIterator,
    C::IntoIter: DoubleEndedIterator,
    F: FnMut(M, C::Item) -> M,
{
    container.into_iter().rev().fold(memo, function)
}
