//! Generic sequence operations.
//!
//! Every function here is written once against [`IntoIterator`], so it
//! accepts owned containers, borrowed views (`&Vec<T>`, `&BTreeSet<T>`) and
//! plain iterators alike. None of them mutate their input; operations that
//! produce a container build a fresh one.
//!
//! | Operation | Result |
//! |---|---|
//! | [`each`] | side effects only |
//! | [`map`] | new container chosen by the caller |
//! | [`reduce`], [`reduce_right`] | final memo |
//! | [`find`], [`find_value`] | first match position / element |
//! | [`filter`], [`reject`] | new container of the input's type |
//! | [`all`], [`any`], [`include`] | `bool` |
//! | [`max`], [`min`], [`max_by`], [`min_by`] | position, or an error when empty |
//! | [`sort_by`] | new container of the input's type |
//! | [`to_array`] | owned `Box<[T]>` |
//! | [`size`] | element count |
//!
//! # Examples
//!
//! ```rust
//! use underscore::collections::{filter, map, reduce};
//!
//! let values = vec![1, 2, 3, 4, 5];
//! let evens = filter(values, |element| element % 2 == 0);
//! let squares: Vec<i32> = map(evens, |element| element * element);
//! assert_eq!(reduce(squares, |memo, element| memo + element, 0), 20);
//! ```

mod conversion;
mod iteration;
mod ordering;
mod query;
mod selection;

pub use conversion::to_array;
pub use iteration::{each, map, reduce, reduce_right};
pub use ordering::{max, max_by, min, min_by, sort_by};
pub use query::{all, any, find, find_value, include, size};
pub use selection::{filter, reject};
