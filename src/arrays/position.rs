//! Locating a value by equality.

/// Returns the position of the first element equal to `value`.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::{index_of, last_index_of};
///
/// let values = vec![1, 2, 3, 1, 2, 3];
/// assert_eq!(index_of(&values, &2), Some(1));
/// assert_eq!(last_index_of(&values, &2), Some(4));
/// assert_eq!(index_of(&values, &7), None);
/// ```
#[inline]
pub fn index_of<C>(container: C, value: C::Item) -> Option<usize>
where
    C: IntoIterator,
    C::Item: PartialEq,
{
    container.into_iter().position(|element| element == value)
}

/// Returns the position of the last element equal to `value`.
pub fn last_index_of<C>(container: C, value: C::Item) -> Option<usize>
where
    C: IntoIterator,
    C::Item: PartialEq,
{
    container
        .into_iter()
        .enumerate()
        .filter(|(_, element)| *element == value)
        .map(|(index, _)| index)
        .last()
}
