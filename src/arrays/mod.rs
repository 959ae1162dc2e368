//! Array-oriented helpers.
//!
//! [`zip`] pairs two containers; the rest take or drop elements by position
//! or value, or combine two containers like sets. Helpers that return a
//! container either keep the input's type ([`initial`], [`rest`],
//! [`without`], [`uniq`], [`union`], [`intersection`], [`difference`]) or let
//! the caller pick it ([`compact`], [`flatten`]), building it through
//! [`AddToCollection`](crate::capability::AddToCollection).
//!
//! # Examples
//!
//! ```rust
//! use underscore::arrays::{first, rest, uniq, zip};
//!
//! let names = uniq(vec!["ada", "grace", "ada", "linus"]);
//! assert_eq!(first(&names), Some(&"ada"));
//! assert_eq!(rest(names.clone()), vec!["grace", "linus"]);
//! assert_eq!(zip(names, 1..), vec![("ada", 1), ("grace", 2), ("linus", 3)]);
//! ```

mod cleanup;
mod combination;
mod pairing;
mod position;
mod range;
mod slicing;

pub use cleanup::{compact, flatten, uniq, without};
pub use combination::{difference, intersection, union};
pub use pairing::zip;
pub use position::{index_of, last_index_of};
pub use range::range;
pub use slicing::{first, initial, last, rest};
