//! Compile-time selection of the insertion strategy for a result container.
//!
//! Every container that can be the target of `map`, `filter` or `reject`
//! declares two flags through [`Capabilities`]: whether it can append at the
//! end, and whether it can insert associatively. [`Strategy`] turns those
//! flags into exactly one strategy type:
//!
//! | `Append`  | `Insert`  | Strategy              |
//! |-----------|-----------|-----------------------|
//! | `Present` | any       | [`AppendAtEnd`]       |
//! | `Absent`  | `Present` | [`AssociativeInsert`] |
//! | `Absent`  | `Absent`  | [`Unsupported`]       |
//!
//! [`Unsupported`] implements no [`Insertion`], so a container declaring
//! neither capability never satisfies [`AddToCollection`] and is rejected
//! when the program is compiled.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use underscore::capability::{add_to_collection, Capabilities, InsertionKind};
//!
//! let mut sequence = Vec::new();
//! add_to_collection(&mut sequence, 2);
//! add_to_collection(&mut sequence, 1);
//! assert_eq!(sequence, vec![2, 1]);
//!
//! let mut set = BTreeSet::new();
//! add_to_collection(&mut set, 2);
//! add_to_collection(&mut set, 1);
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2]);
//!
//! assert_eq!(<Vec<i32>>::insertion_kind(), Some(InsertionKind::Append));
//! assert_eq!(<BTreeSet<i32>>::insertion_kind(), Some(InsertionKind::Insert));
//! ```

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

use super::flag::Flag;
use super::insertion::{Appendable, Insertable};

/// The insertion strategy a container ends up using, as a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionKind {
    /// Values are pushed onto the end, preserving input order.
    Append,
    /// Values are inserted associatively; input order may not survive.
    Insert,
}

/// Declares which insertion capabilities a container type has.
///
/// Prefer the [`capabilities!`](crate::capabilities) macro over writing the
/// impl by hand.
pub trait Capabilities {
    /// [`Present`](super::Present) when the type implements [`Appendable`].
    type Append: Flag;

    /// [`Present`](super::Present) when the type implements [`Insertable`].
    type Insert: Flag;

    /// Reports the strategy [`AddToCollection`] selects for this type.
    ///
    /// Returns `None` when the type declares neither capability.
    fn insertion_kind() -> Option<InsertionKind> {
        if <Self::Append as Flag>::VALUE {
            Some(InsertionKind::Append)
        } else if <Self::Insert as Flag>::VALUE {
            Some(InsertionKind::Insert)
        } else {
            None
        }
    }
}

/// A way of adding one value of type `T` to a container of type `C`.
pub trait Insertion<C: ?Sized, T> {
    /// Adds `value` to `container`.
    fn add(container: &mut C, value: T);
}

/// Sequence semantics: delegates to [`Appendable::append_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AppendAtEnd;

/// Set and map semantics: delegates to [`Insertable::insert_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AssociativeInsert;

/// Selected for containers with no insertion capability. Has no
/// [`Insertion`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unsupported;

impl<C: Appendable<T> + ?Sized, T> Insertion<C, T> for AppendAtEnd {
    #[inline]
    fn add(container: &mut C, value: T) {
        container.append_value(value);
    }
}

impl<C: Insertable<T> + ?Sized, T> Insertion<C, T> for AssociativeInsert {
    #[inline]
    fn add(container: &mut C, value: T) {
        container.insert_value(value);
    }
}

/// The strategy type selected for container `C`. Append wins when both
/// capabilities are declared.
pub type Strategy<C> = <<C as Capabilities>::Append as Flag>::If<
    AppendAtEnd,
    <<C as Capabilities>::Insert as Flag>::If<AssociativeInsert, Unsupported>,
>;

/// The uniform "add one element" primitive used to build result containers.
///
/// Implemented automatically for every [`Capabilities`] type whose selected
/// [`Strategy`] can insert a `T`.
pub trait AddToCollection<T> {
    /// Adds `value` using the container's selected strategy.
    fn add_to_collection(&mut self, value: T);
}

impl<C, T> AddToCollection<T> for C
where
    C: Capabilities,
    Strategy<C>: Insertion<C, T>,
{
    #[inline]
    fn add_to_collection(&mut self, value: T) {
        <Strategy<C> as Insertion<C, T>>::add(self, value);
    }
}

/// Adds `value` to `container` with whichever strategy the container type
/// selects.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use underscore::capability::add_to_collection;
///
/// let mut seen = HashSet::new();
/// add_to_collection(&mut seen, "a");
/// add_to_collection(&mut seen, "a");
/// assert_eq!(seen.len(), 1);
/// ```
#[inline]
pub fn add_to_collection<C, T>(container: &mut C, value: T)
where
    C: AddToCollection<T>,
{
    container.add_to_collection(value);
}

/// Implements [`Capabilities`] for one or more container types.
///
/// Each entry lists the capabilities the type has: `append`, `insert`, or
/// both. Capabilities left out are declared absent.
///
/// # Examples
///
/// ```rust
/// use underscore::capabilities;
/// use underscore::capability::{add_to_collection, Appendable, Capabilities, InsertionKind};
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// impl Appendable<String> for Log {
///     fn append_value(&mut self, value: String) {
///         self.0.push(value);
///     }
/// }
///
/// capabilities! {
///     impl for Log { append };
/// }
///
/// let mut log = Log::default();
/// add_to_collection(&mut log, String::from("started"));
/// assert_eq!(log.0, vec!["started"]);
/// assert_eq!(Log::insertion_kind(), Some(InsertionKind::Append));
/// ```
#[macro_export]
macro_rules! capabilities {
    (@flag $wanted:ident;) => { $crate::capability::Absent };
    (@flag append; append $(, $rest:ident)*) => { $crate::capability::Present };
    (@flag insert; insert $(, $rest:ident)*) => { $crate::capability::Present };
    (@flag $wanted:ident; $other:ident $(, $rest:ident)*) => {
        $crate::capabilities!(@flag $wanted; $($rest),*)
    };
    ($(impl $(<$($generic:ident),*>)? for $container:ty { $($capability:ident),* };)+) => {
        $(
            impl $(<$($generic),*>)? $crate::capability::Capabilities for $container {
                type Append = $crate::capabilities!(@flag append; $($capability),*);
                type Insert = $crate::capabilities!(@flag insert; $($capability),*);
            }
        )+
    };
}

capabilities! {
    impl<T> for Vec<T> { append };
    impl<T> for VecDeque<T> { append };
    impl<T> for LinkedList<T> { append };
    impl for String { append };
    impl<T, S> for HashSet<T, S> { insert };
    impl<T> for BTreeSet<T> { insert };
    impl<T> for BinaryHeap<T> { insert };
    impl<K, V, S> for HashMap<K, V, S> { insert };
    impl<K, V> for BTreeMap<K, V> { insert };
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Capabilities for smallvec::SmallVec<A> {
    type Append = super::Present;
    type Insert = super::Absent;
}

static_assertions::assert_impl_all!(Vec<i32>: AddToCollection<i32>);
static_assertions::assert_impl_all!(String: AddToCollection<char>, AddToCollection<&'static str>);
static_assertions::assert_impl_all!(BTreeMap<u8, String>: AddToCollection<(u8, String)>);
static_assertions::assert_not_impl_any!(Vec<i32>: AddToCollection<String>);
static_assertions::assert_not_impl_any!(Option<i32>: AddToCollection<i32>);
static_assertions::assert_not_impl_any!(Box<[i32]>: AddToCollection<i32>);
