//! Ordering-based operations: extremes and sorting.

use std::cmp::Ordering;

use crate::error::CollectionError;

/// Walks the container once, keeping the position of the element that
/// `replaces` prefers. Ties keep the earlier element.
fn extremum<C, F>(
    container: C,
    operation: &'static str,
    mut replaces: F,
) -> Result<usize, CollectionError>
where
    C: IntoIterator,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut elements = container.into_iter().enumerate();
    let (mut best_index, mut best) = elements
        .next()
        .ok_or_else(|| CollectionError::empty(operation))?;
    for (index, element) in elements {
        if replaces(&element, &best) {
            best_index = index;
            best = element;
        }
    }
    Ok(best_index)
}

macro_rules! define_extremum {
    ($name:ident, $ordering:ident, $adjective:literal) => {
        paste::paste! {
            #[doc = "Returns the position of the first " $adjective " element."]
            ///
            /// Elements that cannot be compared (such as `NaN`) never replace
            /// the current candidate.
            ///
            /// # Errors
            ///
            /// Returns [`CollectionError::EmptyCollection`] when the container
            /// has no elements.
            pub fn $name<C>(container: C) -> Result<usize, CollectionError>
            where
                C: IntoIterator,
                C::Item: PartialOrd,
            {
                extremum(container, stringify!($name), |candidate, current| {
                    candidate.partial_cmp(current) == Some(Ordering::$ordering)
                })
            }

            #[doc = "Returns the position of the first " $adjective " element according to `compare`."]
            ///
            /// # Errors
            ///
            /// Returns [`CollectionError::EmptyCollection`] when the container
            /// has no elements.
            pub fn [<$name _by>]<C, F>(container: C, mut compare: F) -> Result<usize, CollectionError>
            where
                C: IntoIterator,
                F: FnMut(&C::Item, &C::Item) -> Ordering,
            {
                extremum(container, concat!(stringify!($name), "_by"), |candidate, current| {
                    compare(candidate, current) == Ordering::$ordering
                })
            }
        }
    };
}

define_extremum!(max, Greater, "greatest");
define_extremum!(min, Less, "least");

/// Returns a container of the same type with its elements sorted by
/// `compare`, ascending.
///
/// The result is rebuilt through [`FromIterator`]; for a container that
/// orders its own elements (such as a `BTreeSet`) the container's order wins.
///
/// # Examples
///
/// ```rust
/// use underscore::collections::sort_by;
///
/// assert_eq!(sort_by(vec![3, 1, 2], |left, right| left.cmp(right)), vec![1, 2, 3]);
/// assert_eq!(sort_by(vec![3, 1, 2], |left, right| right.cmp(left)), vec![3, 2, 1]);
/// ```
pub fn sort_by<C, F>(container: C, compare: F) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut elements: Vec<C::Item> = container.into_iter().collect();
    elements.sort_by(compare);
    elements.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::VecDeque;

    #[rstest]
    fn max_and_min_of_small_vec() {
        let values = vec![3, 1, 2];
        assert_eq!(max(&values), Ok(0));
        assert_eq!(min(&values), Ok(1));
    }

    #[rstest]
    fn ties_keep_first_position() {
        let values = vec![1, 5, 0, 5, 0];
        assert_eq!(max(&values), Ok(1));
        assert_eq!(min(&values), Ok(2));
    }

    #[rstest]
    #[case::max(max(Vec::<i32>::new()), "max")]
    #[case::min(min(Vec::<i32>::new()), "min")]
    #[case::max_by(max_by(Vec::<i32>::new(), Ord::cmp), "max_by")]
    #[case::min_by(min_by(Vec::<i32>::new(), Ord::cmp), "min_by")]
    fn empty_input_is_reported(
        #[case] result: Result<usize, CollectionError>,
        #[case] operation: &'static str,
    ) {
        assert_eq!(result, Err(CollectionError::EmptyCollection { operation }));
    }

    #[rstest]
    fn nan_never_wins() {
        let values = vec![1.0, f64::NAN, 3.0];
        assert_eq!(max(&values), Ok(2));
    }

    #[rstest]
    fn max_by_uses_comparator() {
        let words = vec!["kiwi", "banana", "fig"];
        assert_eq!(max_by(&words, |left, right| left.len().cmp(&right.len())), Ok(1));
        assert_eq!(min_by(&words, |left, right| left.len().cmp(&right.len())), Ok(2));
    }

    #[rstest]
    fn sort_by_keeps_container_type() {
        let values = VecDeque::from(vec!["pear", "fig", "apple"]);
        let sorted = sort_by(values, |left, right| left.cmp(right));
        assert_eq!(sorted, VecDeque::from(vec!["apple", "fig", "pear"]));
    }

    #[rstest]
    fn sort_by_on_empty() {
        assert!(sort_by(Vec::<i32>::new(), Ord::cmp).is_empty());
    }
}
