//! Removing unwanted elements and flattening nesting.

use crate::capability::AddToCollection;

/// Drops every `None`, unwrapping the rest into a container chosen by the
/// caller.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::compact;
///
/// let present: Vec<i32> = compact(vec![Some(1), None, Some(3)]);
/// assert_eq!(present, vec![1, 3]);
/// ```
pub fn compact<R, C, T>(container: C) -> R
where
    C: IntoIterator<Item = Option<T>>,
    R: Default + AddToCollection<T>,
{
    let mut result = R::default();
    for element in container.into_iter().flatten() {
        result.add_to_collection(element);
    }
    result
}

/// Flattens one level of nesting into a container chosen by the caller.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::flatten;
///
/// let flat: Vec<i32> = flatten(vec![vec![1, 2], vec![], vec![3]]);
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
pub fn flatten<R, C>(container: C) -> R
where
    C: IntoIterator,
    C::Item: IntoIterator,
    R: Default + AddToCollection<<C::Item as IntoIterator>::Item>,
{
    let mut result = R::default();
    for element in container.into_iter().flatten() {
        result.add_to_collection(element);
    }
    result
}

/// Removes every element equal to one of `values`.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::without;
///
/// assert_eq!(without(vec![1, 2, 1, 0, 3, 1, 4], &[0, 1]), vec![2, 3, 4]);
/// ```
pub fn without<C>(container: C, values: &[C::Item]) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
    C::Item: PartialEq,
{
    let mut result = C::default();
    for element in container {
        if !values.contains(&element) {
            result.add_to_collection(element);
        }
    }
    result
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::uniq;
///
/// assert_eq!(uniq(vec![1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniq<C>(container: C) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
    C::Item: PartialEq + Clone,
{
    let mut seen: Vec<C::Item> = Vec::new();
    let mut result = C::default();
    for element in container {
        if !seen.contains(&element) {
            seen.push(element.clone());
            result.add_to_collection(element);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeSet, LinkedList};

    #[rstest]
    fn compact_into_set() {
        let present: BTreeSet<&str> = compact(vec![Some("b"), None, Some("a"), Some("b")]);
        assert_eq!(present, BTreeSet::from(["a", "b"]));
    }

    #[rstest]
    fn compact_all_none_is_empty() {
        let present: Vec<u8> = compact(vec![None, None]);
        assert!(present.is_empty());
    }

    #[rstest]
    fn flatten_only_one_level() {
        let flat: Vec<Vec<i32>> = flatten(vec![vec![vec![1], vec![2]], vec![vec![3]]]);
        assert_eq!(flat, vec![vec![1], vec![2], vec![3]]);
    }

    #[rstest]
    fn flatten_strings_into_one() {
        let joined: String = flatten(vec!["ab".chars(), "cd".chars()]);
        assert_eq!(joined, "abcd");
    }

    #[rstest]
    fn without_nothing_keeps_everything() {
        assert_eq!(without(vec![1, 2], &[]), vec![1, 2]);
    }

    #[rstest]
    fn uniq_on_linked_list_keeps_order() {
        let values: LinkedList<char> = "mississippi".chars().collect();
        let unique = uniq(values);
        assert_eq!(unique.into_iter().collect::<String>(), "misp");
    }
}
