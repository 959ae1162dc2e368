//! Pairing two containers element by element.

/// Pairs up the elements of two containers in order.
///
/// The result is as long as the shorter input; surplus elements of the
/// longer one are dropped.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::zip;
///
/// let pairs = zip(vec![1, 2, 3], vec!["a", "b"]);
/// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
/// ```
#[inline]
pub fn zip<L, R>(left: L, right: R) -> Vec<(L::Item, R::Item)>
where
    L: IntoIterator,
    R: IntoIterator,
{
    left.into_iter().zip(right).collect()
}
