//! # underscore
//!
//! A functional collection toolkit for Rust: the classic `each`, `map`,
//! `reduce`, `filter` family written once and usable with any container.
//!
//! ## Overview
//!
//! - **Capability Detection**: picks, at compile time, how a result container
//!   accepts new elements (append at end, or associative insert)
//! - **Collections**: each, map, reduce, `reduce_right`, find, filter, reject,
//!   all, any, include, max, min, `sort_by`, `to_array`, size
//! - **Arrays**: zip, first, last, initial, rest, compact, flatten, without,
//!   uniq, `index_of`, `last_index_of`, range
//! - **Chaining**: a fluent wrapper applying the operations left to right
//!
//! ## Feature Flags
//!
//! - `capability`: Insertion capabilities and strategy selection
//! - `collections`: Generic sequence operations
//! - `arrays`: Array helpers
//! - `chaining`: The `Chain` wrapper
//! - `serde`: Serialize and deserialize `Chain` as its wrapped value
//! - `smallvec`: `SmallVec` as a result container
//! - `tracing`: Debug events when an operation reports an error
//! - `full`: Enable all of the above except `tracing`
//!
//! ## Example
//!
//! ```rust
//! use underscore::prelude::*;
//!
//! let words = vec!["apple", "fig", "banana", "kiwi"];
//! let short: Vec<&str> = filter(words.clone(), |word| word.len() <= 4);
//! assert_eq!(short, vec!["fig", "kiwi"]);
//!
//! let longest = max_by(&words, |left, right| left.len().cmp(&right.len()));
//! assert_eq!(longest, Ok(2));
//!
//! let letters = chain(words).map(str::len).reduce(|memo, length| memo + length, 0).value();
//! assert_eq!(letters, 18);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use underscore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;

    #[cfg(feature = "capability")]
    pub use crate::capability::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "arrays")]
    pub use crate::arrays::*;

    #[cfg(feature = "chaining")]
    pub use crate::chaining::*;
}

mod error;

pub use error::CollectionError;

#[cfg(feature = "capability")]
pub mod capability;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "arrays")]
pub mod arrays;

#[cfg(feature = "chaining")]
pub mod chaining;
