//! Capability detection for result containers.
//!
//! The operations that build a new container (`map`, `filter`, `reject`, and
//! the array helpers) are written once, generically, against a single
//! "add one element" primitive: [`AddToCollection`]. This module decides at
//! compile time how that primitive is carried out for a given container:
//!
//! - [`Appendable`]: end-append, for sequences such as `Vec` and `VecDeque`
//! - [`Insertable`]: associative insert, for sets, heaps and maps
//!
//! When a container declares both, appending wins. When it declares neither,
//! it cannot be used as a build target and the program does not compile.
//!
//! ## Declaring a custom container
//!
//! ```rust
//! use underscore::capabilities;
//! use underscore::capability::Insertable;
//! use underscore::collections::filter;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tally(Vec<u32>);
//!
//! impl Insertable<u32> for Tally {
//!     fn insert_value(&mut self, value: u32) {
//!         let position = self.0.partition_point(|existing| *existing < value);
//!         self.0.insert(position, value);
//!     }
//! }
//!
//! impl IntoIterator for Tally {
//!     type Item = u32;
//!     type IntoIter = std::vec::IntoIter<u32>;
//!     fn into_iter(self) -> Self::IntoIter {
//!         self.0.into_iter()
//!     }
//! }
//!
//! capabilities! {
//!     impl for Tally { insert };
//! }
//!
//! let tally = Tally(vec![1, 4, 9, 16]);
//! assert_eq!(filter(tally, |value| value % 2 == 0), Tally(vec![4, 16]));
//! ```

mod dispatch;
mod flag;
mod higher;
mod insertion;

pub use dispatch::{
    AddToCollection, AppendAtEnd, AssociativeInsert, Capabilities, Insertion, InsertionKind,
    Strategy, Unsupported, add_to_collection,
};
pub use flag::{Absent, Flag, Present};
pub use higher::TypeConstructor;
pub use insertion::{Appendable, Insertable};
