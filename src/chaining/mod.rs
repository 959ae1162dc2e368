//! Fluent chaining over a single wrapped container.
//!
//! [`chain`] wraps a container in a [`Chain`]; each chained method applies the
//! matching function from [`collections`](crate::collections) right away and
//! returns a new `Chain`. [`value`] (or [`Chain::value`]) ends the chain.
//!
//! # Examples
//!
//! ```rust
//! use underscore::chaining::{chain, value};
//!
//! let evens = chain(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|element| element % 2 == 0)
//!     .map(|element| element * element);
//! assert_eq!(value(evens), vec![4, 16, 36]);
//! ```

mod wrapper;

pub use wrapper::{Chain, chain, value};
