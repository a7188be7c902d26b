use core::fmt::{Debug, Display};

/// Error cases of a cursor that cannot be used for the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// End => The cursor is the past-the-end (or default constructed) cursor.
    /// It can neither be dereferenced, advanced nor used as an insertion or removal position.
    End,
    /// BeforeBegin => The cursor points at the position before the first element.
    /// It is a valid position to insert or erase after, but it does not hold a value.
    BeforeBegin,
    /// NotInList => The cursor does not point at a node of this list.
    /// This might be due to either of the following:
    /// * the cursor has been created from a different list,
    /// * the node it pointed at has been removed from the list; this is detected even if a
    ///   new node has since been allocated at the same address.
    NotInList,
    /// NoSuccessor => The cursor points at the last position of the list,
    /// hence there is no element after it to erase.
    NoSuccessor,
}

impl Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <CursorError as Debug>::fmt(self, f)
    }
}

impl core::error::Error for CursorError {}
