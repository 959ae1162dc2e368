//! Set-like combinations of two containers.
//!
//! Equality is `PartialEq`, so these work for element types that are
//! neither hashable nor ordered. The result keeps the left container's type.

use super::cleanup::without;
use crate::capability::AddToCollection;

/// Returns the distinct values of both containers, in order of first
/// appearance.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::union;
///
/// assert_eq!(union(vec![1, 2, 3], vec![101, 2, 1, 10]), vec![1, 2, 3, 101, 10]);
/// ```
pub fn union<C, O>(left: C, right: O) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
    O: IntoIterator<Item = C::Item>,
    C::Item: PartialEq + Clone,
{
    let mut seen: Vec<C::Item> = Vec::new();
    let mut result = C::default();
    for element in left.into_iter().chain(right) {
        if !seen.contains(&element) {
            seen.push(element.clone());
            result.add_to_collection(element);
        }
    }
    result
}

/// Returns the distinct values of `left` that also occur in `right`, in the
/// order of `left`.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::intersection;
///
/// assert_eq!(intersection(vec![1, 2, 3, 1], vec![101, 2, 1, 10]), vec![1, 2]);
/// ```
pub fn intersection<C, O>(left: C, right: O) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
    O: IntoIterator<Item = C::Item>,
    C::Item: PartialEq + Clone,
{
    let others: Vec<C::Item> = right.into_iter().collect();
    let mut seen: Vec<C::Item> = Vec::new();
    let mut result = C::default();
    for element in left {
        if others.contains(&element) && !seen.contains(&element) {
            seen.push(element.clone());
            result.add_to_collection(element);
        }
    }
    result
}

/// Returns the values of `left` that do not occur in `right`.
///
/// Duplicates within `left` are kept.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::difference;
///
/// assert_eq!(difference(vec![1, 2, 3, 4, 5, 2], vec![5, 2, 10]), vec![1, 3, 4]);
/// ```
pub fn difference<C, O>(left: C, right: O) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
    O: IntoIterator<Item = C::Item>,
    C::Item: PartialEq,
{
    let others: Vec<C::Item> = right.into_iter().collect();
    without(left, &others)
}
