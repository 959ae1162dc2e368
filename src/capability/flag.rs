//! Type-level booleans used to record which insertion capabilities a
//! container declares.

/// A boolean known at compile time.
///
/// `If<Then, Else>` selects one of two types without any runtime branch,
/// which is what lets [`Strategy`](super::Strategy) pick an insertion
/// strategy purely from a container's declared flags.
pub trait Flag: 'static {
    /// The runtime value of the flag.
    const VALUE: bool;

    /// `Then` when the flag is [`Present`], `Else` when it is [`Absent`].
    type If<Then, Else>;
}

/// The capability is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Present;

/// The capability is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl Flag for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Flag for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}
