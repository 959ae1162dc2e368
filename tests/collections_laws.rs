#![cfg(feature = "collections")]
//! Property-based tests for the collection operations.
//!
//! - **Partition**: `filter(c, p)` and `reject(c, p)` split `c` with no
//!   element lost or duplicated, each side in original relative order
//! - **Count**: `reduce(c, |m, _| m + 1, 0) == size(c)`
//! - **Round trip**: mapping with a bijection then its inverse is the identity
//! - **Fold direction**: `reduce_right` equals `reduce` for commutative
//!   functions and reverses the result for concatenation

use std::collections::BTreeSet;

use proptest::prelude::*;
use underscore::collections::{
    all, any as any_match, filter, find, include, map, max, min, reduce, reduce_right, reject, size,
    sort_by, to_array,
};

proptest! {
    #[test]
    fn prop_filter_reject_partition(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let kept = filter(values.clone(), |element| element % 3 == 0);
        let dropped = reject(values.clone(), |element| element % 3 == 0);

        prop_assert_eq!(kept.len() + dropped.len(), values.len());

        let expected_kept: Vec<i32> = values.iter().copied().filter(|element| element % 3 == 0).collect();
        let expected_dropped: Vec<i32> = values.iter().copied().filter(|element| element % 3 != 0).collect();
        prop_assert_eq!(kept, expected_kept);
        prop_assert_eq!(dropped, expected_dropped);
    }

    #[test]
    fn prop_filter_constant_predicates(values in prop::collection::vec(any::<u8>(), 0..50)) {
        prop_assert_eq!(size(filter(values.clone(), |_| true)), size(&values));
        prop_assert_eq!(size(filter(values, |_| false)), 0);
    }

    #[test]
    fn prop_filter_reject_partition_sets(values in prop::collection::btree_set(any::<i16>(), 0..50)) {
        let positive = filter(values.clone(), |element| *element > 0);
        let rest = reject(values.clone(), |element| *element > 0);
        let union: BTreeSet<i16> = positive.union(&rest).copied().collect();
        prop_assert!(positive.is_disjoint(&rest));
        prop_assert_eq!(union, values);
    }

    #[test]
    fn prop_reduce_counts_like_size(values in prop::collection::vec(any::<String>(), 0..30)) {
        prop_assert_eq!(reduce(&values, |memo: usize, _| memo + 1, 0), size(&values));
    }

    #[test]
    fn prop_map_inverse_round_trip(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let forward: Vec<i32> = map(values.clone(), |element| element.wrapping_add(17));
        let back: Vec<i32> = map(forward, |element| element.wrapping_sub(17));
        prop_assert_eq!(back, values);
    }

    #[test]
    fn prop_reduce_right_commutative(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let left = reduce(&values, |memo: i64, element| memo.wrapping_add(*element), 0);
        let right = reduce_right(&values, |memo: i64, element| memo.wrapping_add(*element), 0);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_reduce_right_concatenation_reverses(values in prop::collection::vec(any::<char>(), 0..40)) {
        let forward = reduce(&values, |mut memo: String, element| { memo.push(*element); memo }, String::new());
        let backward = reduce_right(&values, |mut memo: String, element| { memo.push(*element); memo }, String::new());
        prop_assert_eq!(backward, forward.chars().rev().collect::<String>());
    }

    #[test]
    fn prop_all_any_duality(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let all_positive = all(&values, |element| **element > 0);
        let any_non_positive = any_match(&values, |element| **element <= 0);
        prop_assert_eq!(all_positive, !any_non_positive);
    }

    #[test]
    fn prop_find_agrees_with_include(values in prop::collection::vec(0u8..10, 0..30), target in 0u8..10) {
        prop_assert_eq!(find(&values, |element| **element == target).is_some(), include(&values, &target));
    }

    #[test]
    fn prop_max_min_positions_hold_extremes(values in prop::collection::vec(any::<i32>(), 1..50)) {
        let largest = values[max(&values).unwrap()];
        let smallest = values[min(&values).unwrap()];
        prop_assert_eq!(Some(&largest), values.iter().max());
        prop_assert_eq!(Some(&smallest), values.iter().min());
    }

    #[test]
    fn prop_sort_by_matches_std_sort(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let sorted = sort_by(values.clone(), |left, right| left.cmp(right));
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_to_array_preserves_elements(values in prop::collection::vec(any::<u16>(), 0..100)) {
        let array = to_array(values.clone());
        prop_assert_eq!(array.into_vec(), values);
    }
}
