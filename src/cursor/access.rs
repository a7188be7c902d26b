mod sealed {
    pub trait Sealed {}
}

/// Access level of a [`BasicCursor`] over the elements of the list.
///
/// * [`Mutable`] cursors may hand out mutable references to the element they point at.
/// * [`Immutable`] cursors only hand out shared references.
///
/// The trait is sealed; these two markers are its only implementors.
///
/// [`BasicCursor`]: crate::BasicCursor
pub trait Access: sealed::Sealed + 'static {}

/// Access marker of a cursor allowed to mutate the element it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mutable;

/// Access marker of a read-only cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Immutable;

impl sealed::Sealed for Mutable {}
impl sealed::Sealed for Immutable {}

impl Access for Mutable {}
impl Access for Immutable {}
