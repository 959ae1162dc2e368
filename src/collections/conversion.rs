//! Snapshotting a container into a plain buffer.

/// Copies every element into a freshly allocated fixed-size buffer.
///
/// The buffer is owned by the caller and released when it is dropped.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use underscore::collections::to_array;
///
/// let set = BTreeSet::from([3, 1, 2]);
/// let array: Box<[i32]> = to_array(set);
/// assert_eq!(&*array, &[1, 2, 3]);
/// ```
#[inline]
pub fn to_array<C>(container: C) -> Box<[C::Item]>
where
    C: IntoIterator,
{
    container.into_iter().collect()
}
