//! Taking elements from either end of a container.

use crate::capability::AddToCollection;

/// Returns the first element, or `None` when empty.
#[inline]
pub fn first<C>(container: C) -> Option<C::Item>
where
    C: IntoIterator,
{
    container.into_iter().next()
}

/// Returns the last element, or `None` when empty.
#[inline]
pub fn last<C>(container: C) -> Option<C::Item>
where
    C: IntoIterator,
{
    container.into_iter().last()
}

/// Returns every element except the last.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::initial;
///
/// assert_eq!(initial(vec![1, 2, 3]), vec![1, 2]);
/// assert!(initial(vec![1]).is_empty());
/// ```
pub fn initial<C>(container: C) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
{
    let mut result = C::default();
    let mut elements = container.into_iter().peekable();
    while let Some(element) = elements.next() {
        if elements.peek().is_some() {
            result.add_to_collection(element);
        }
    }
    result
}

/// Returns every element except the first.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::rest;
///
/// assert_eq!(rest(vec![1, 2, 3]), vec![2, 3]);
/// ```
pub fn rest<C>(container: C) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
{
    let mut result = C::default();
    for element in container.into_iter().skip(1) {
        result.add_to_collection(element);
    }
    result
}
