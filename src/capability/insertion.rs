//! The two primitive insertion capabilities a result container can offer.
//!
//! - [`Appendable`]: sequence semantics, the new value goes at the end.
//! - [`Insertable`]: associative semantics, the container decides where the
//!   value lives (and whether a duplicate replaces or is dropped).
//!
//! Neither trait is used directly by the collection operations. They are
//! reached through [`AddToCollection`](super::AddToCollection), which picks
//! one of them per container type at compile time.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Containers that can push a value onto their end.
///
/// # Examples
///
/// ```rust
/// use underscore::capability::Appendable;
///
/// let mut values = vec![1, 2];
/// values.append_value(3);
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub trait Appendable<T> {
    /// Appends `value` after the current last element.
    fn append_value(&mut self, value: T);
}

/// Containers that insert a value by key or ordering rather than position.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use underscore::capability::Insertable;
///
/// let mut values = BTreeSet::new();
/// values.insert_value(3);
/// values.insert_value(1);
/// values.insert_value(3);
/// assert_eq!(values.into_iter().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub trait Insertable<T> {
    /// Inserts `value`, letting the container choose its position.
    fn insert_value(&mut self, value: T);
}

// =============================================================================
// Sequence containers
// =============================================================================

impl<T> Appendable<T> for Vec<T> {
    #[inline]
    fn append_value(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> Appendable<T> for VecDeque<T> {
    #[inline]
    fn append_value(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T> Appendable<T> for LinkedList<T> {
    #[inline]
    fn append_value(&mut self, value: T) {
        self.push_back(value);
    }
}

impl Appendable<char> for String {
    #[inline]
    fn append_value(&mut self, value: char) {
        self.push(value);
    }
}

impl<'a> Appendable<&'a str> for String {
    #[inline]
    fn append_value(&mut self, value: &'a str) {
        self.push_str(value);
    }
}

impl Appendable<String> for String {
    #[inline]
    fn append_value(&mut self, value: String) {
        self.push_str(&value);
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Appendable<A::Item> for smallvec::SmallVec<A> {
    #[inline]
    fn append_value(&mut self, value: A::Item) {
        self.push(value);
    }
}

// =============================================================================
// Associative containers
// =============================================================================

impl<T: Eq + Hash, S: BuildHasher> Insertable<T> for HashSet<T, S> {
    #[inline]
    fn insert_value(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Ord> Insertable<T> for BTreeSet<T> {
    #[inline]
    fn insert_value(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Ord> Insertable<T> for BinaryHeap<T> {
    #[inline]
    fn insert_value(&mut self, value: T) {
        self.push(value);
    }
}

/// A later entry with an existing key replaces the earlier value.
impl<K: Eq + Hash, V, S: BuildHasher> Insertable<(K, V)> for HashMap<K, V, S> {
    #[inline]
    fn insert_value(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

/// A later entry with an existing key replaces the earlier value.
impl<K: Ord, V> Insertable<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn insert_value(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_appends_at_end() {
        let mut values = vec![1];
        values.append_value(2);
        values.append_value(3);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[rstest]
    fn vec_deque_appends_at_back() {
        let mut values = VecDeque::from(vec![1]);
        values.append_value(2);
        assert_eq!(values.back(), Some(&2));
    }

    #[rstest]
    fn linked_list_appends_at_back() {
        let mut values = LinkedList::new();
        values.append_value('a');
        values.append_value('b');
        assert_eq!(values.into_iter().collect::<String>(), "ab");
    }

    #[rstest]
    fn string_appends_chars_and_slices() {
        let mut text = String::new();
        text.append_value('a');
        text.append_value("bc");
        text.append_value(String::from("d"));
        assert_eq!(text, "abcd");
    }

    #[rstest]
    fn hash_set_drops_duplicates() {
        let mut values = HashSet::new();
        values.insert_value(1);
        values.insert_value(1);
        assert_eq!(values.len(), 1);
    }

    #[rstest]
    fn btree_set_keeps_order() {
        let mut values = BTreeSet::new();
        values.insert_value(5);
        values.insert_value(2);
        assert_eq!(values.into_iter().collect::<Vec<_>>(), vec![2, 5]);
    }

    #[rstest]
    fn binary_heap_keeps_duplicates() {
        let mut values = BinaryHeap::new();
        values.insert_value(1);
        values.insert_value(1);
        assert_eq!(values.len(), 2);
    }

    #[rstest]
    fn maps_keep_later_value_for_same_key() {
        let mut hashed = HashMap::new();
        hashed.insert_value(("a", 1));
        hashed.insert_value(("a", 2));
        assert_eq!(hashed.get("a"), Some(&2));

        let mut ordered = BTreeMap::new();
        ordered.insert_value((1, "first"));
        ordered.insert_value((1, "second"));
        assert_eq!(ordered.get(&1), Some(&"second"));
    }
}
