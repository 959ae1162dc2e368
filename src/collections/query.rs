//! Questions asked of a container that do not build a new one.

/// Returns the position of the first element satisfying `predicate`.
///
/// `None` plays the role of the end-of-sequence marker: it means no element
/// matched, not that something went wrong.
///
/// # Examples
///
/// ```rust
/// use underscore::collections::find;
///
/// let values = vec![1, 2, 3, 4];
/// assert_eq!(find(&values, |element| **element > 2), Some(2));
/// assert_eq!(find(&values, |element| **element > 9), None);
/// ```
#[inline]
pub fn find<C, P>(container: C, mut predicate: P) -> Option<usize>
where
    C: IntoIterator,
    P: FnMut(&C::Item) -> bool,
{
    container.into_iter().position(|element| predicate(&element))
}

/// Returns the first element satisfying `predicate`, rather than its position.
///
/// # Examples
///
/// ```rust
/// use underscore::collections::find_value;
///
/// let words = vec!["apple", "banana", "cherry"];
/// assert_eq!(find_value(words, |word| word.starts_with('b')), Some("banana"));
/// ```
#[inline]
pub fn find_value<C, P>(container: C, predicate: P) -> Option<C::Item>
where
    C: IntoIterator,
    P: FnMut(&C::Item) -> bool,
{
    container.into_iter().find(predicate)
}

/// Returns `true` when every element satisfies `predicate`.
///
/// Vacuously `true` for an empty container. Stops at the first failure.
#[inline]
pub fn all<C, P>(container: C, mut predicate: P) -> bool
where
    C: IntoIterator,
    P: FnMut(&C::Item) -> bool,
{
    container.into_iter().all(|element| predicate(&element))
}

/// Returns `true` when at least one element satisfies `predicate`.
///
/// Always `false` for an empty container. Stops at the first success.
#[inline]
pub fn any<C, P>(container: C, mut predicate: P) -> bool
where
    C: IntoIterator,
    P: FnMut(&C::Item) -> bool,
{
    container.into_iter().any(|element| predicate(&element))
}

/// Returns `true` when some element equals `value`.
///
/// # Examples
///
/// ```rust
/// use underscore::collections::include;
///
/// let values = vec![1, 2, 3];
/// assert!(include(&values, &2));
/// assert!(!include(values, 5));
/// ```
#[inline]
pub fn include<C>(container: C, value: C::Item) -> bool
where
    C: IntoIterator,
    C::Item: PartialEq,
{
    container.into_iter().any(|element| element == value)
}

/// Returns the number of elements.
#[inline]
pub fn size<C>(container: C) -> usize
where
    C: IntoIterator,
{
    container.into_iter().count()
}
