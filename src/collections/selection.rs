//! Keeping or dropping elements by predicate.
//!
//! Both operations build a fresh container of the same type as the input
//! through [`AddToCollection`], so they work the same way for sequences and
//! for sets.

use crate::capability::AddToCollection;

/// Keeps the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use underscore::collections::filter;
///
/// assert_eq!(filter(vec![1, 2, 3, 4], |element| element % 2 == 0), vec![2, 4]);
///
/// let set = BTreeSet::from([1, 2, 3, 4]);
/// assert_eq!(filter(set, |element| *element > 2), BTreeSet::from([3, 4]));
/// ```
pub fn filter<C, P>(container: C, mut predicate: P) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    let mut result = C::default();
    for element in container {
        if predicate(&element) {
            result.add_to_collection(element);
        }
    }
    result
}

/// Drops the elements for which `predicate` returns `true`.
///
/// The logical complement of [`filter`].
///
/// # Examples
///
/// ```rust
/// use underscore::collections::reject;
///
/// assert_eq!(reject(vec![1, 2, 3, 4], |element| element % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<C, P>(container: C, mut predicate: P) -> C
where
    C: IntoIterator + Default + AddToCollection<C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    filter(container, |element| !predicate(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{HashMap, HashSet, LinkedList, VecDeque};

    #[rstest]
    fn filter_preserves_order() {
        let values = VecDeque::from(vec![9, 2, 7, 4, 5]);
        assert_eq!(
            filter(values, |element| *element > 3),
            VecDeque::from(vec![9, 7, 4, 5])
        );
    }

    #[rstest]
    fn filter_on_empty_is_empty() {
        assert!(filter(Vec::<i32>::new(), |_| true).is_empty());
    }

    #[rstest]
    fn reject_is_complement_of_filter() {
        let values = vec![1, 2, 3, 4, 5, 6];
        let kept = filter(values.clone(), |element| element % 3 == 0);
        let dropped = reject(values, |element| element % 3 == 0);
        assert_eq!(kept, vec![3, 6]);
        assert_eq!(dropped, vec![1, 2, 4, 5]);
    }

    #[rstest]
    fn filter_on_hash_set() {
        let values = HashSet::from([1, 2, 3]);
        assert_eq!(filter(values, |element| *element != 2), HashSet::from([1, 3]));
    }

    #[rstest]
    fn reject_on_map_entries() {
        let stock = HashMap::from([("apple", 0), ("pear", 4)]);
        let available = reject(stock, |(_, count)| *count == 0);
        assert_eq!(available, HashMap::from([("pear", 4)]));
    }

    #[rstest]
    fn filter_on_linked_list() {
        let values: LinkedList<char> = "a1b2c3".chars().collect();
        let letters = filter(values, |letter| letter.is_alphabetic());
        assert_eq!(letters.into_iter().collect::<String>(), "abc");
    }
}
