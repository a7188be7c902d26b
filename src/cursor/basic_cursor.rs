use super::access::{Access, Immutable, Mutable};
use crate::{
    LinkedList,
    node::{Link, Node},
};
use core::{fmt::Debug, hash::Hash, marker::PhantomData, ptr::NonNull};

/// A forward cursor, or iterator in the STL sense, pointing at a position of a [`LinkedList`].
///
/// A cursor points at one of:
/// * the before-first position, obtained by [`before_begin`] or [`cbefore_begin`];
///   it is a valid position to insert or erase after, but it cannot be dereferenced;
/// * an element of the list;
/// * the past-the-end position, obtained by [`end`], [`cend`] or `Default::default()`;
///   it can neither be dereferenced nor advanced.
///
/// Cursors are non-owning `Copy` handles which do not borrow the list.
/// This allows to pass them back into the mutating methods of the list, such as
/// [`insert_after`] and [`erase_after`]; but it also means that the compiler cannot
/// prevent a cursor from outliving the node it points at.
/// Removing a node invalidates cursors pointing at it; cursors pointing at other nodes
/// remain valid.
///
/// Besides the address of the node, a cursor keeps the identity of the node it was created
/// for. A node allocated later at the address of a removed node has a different identity;
/// therefore, the checked methods of the list reject cursors to removed nodes even when
/// their memory has been reused.
///
/// Two cursors are equal if and only if they point at the same position.
/// Comparison is allowed between [`Cursor`]s and [`ConstCursor`]s.
///
/// [`before_begin`]: LinkedList::before_begin
/// [`cbefore_begin`]: LinkedList::cbefore_begin
/// [`end`]: LinkedList::end
/// [`cend`]: LinkedList::cend
/// [`insert_after`]: LinkedList::insert_after
/// [`erase_after`]: LinkedList::erase_after
pub struct BasicCursor<T, A: Access> {
    node: Link<T>,
    id: usize,
    phantom: PhantomData<A>,
}

/// Cursor which can be used to mutate the element it points at.
///
/// Converts into a [`ConstCursor`] pointing at the same position; the reverse is not possible.
pub type Cursor<T> = BasicCursor<T, Mutable>;

/// Read-only cursor.
pub type ConstCursor<T> = BasicCursor<T, Immutable>;

// Only the pointer is copied, so "T" does not need to be copy itself.
impl<T, A: Access> Copy for BasicCursor<T, A> {}

impl<T, A: Access> Clone for BasicCursor<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Access> Default for BasicCursor<T, A> {
    /// Creates the null cursor which is equal to the end cursor of any list.
    fn default() -> Self {
        Self {
            node: None,
            id: 0,
            phantom: PhantomData,
        }
    }
}

impl<T, A: Access, B: Access> PartialEq<BasicCursor<T, B>> for BasicCursor<T, A> {
    fn eq(&self, other: &BasicCursor<T, B>) -> bool {
        self.node == other.node && self.id == other.id
    }
}

impl<T, A: Access> Eq for BasicCursor<T, A> {}

impl<T, A: Access> Hash for BasicCursor<T, A> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.node.hash(state);
        self.id.hash(state);
    }
}

impl<T, A: Access> Debug for BasicCursor<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ptr = self.node.map_or(core::ptr::null_mut(), NonNull::as_ptr);
        f.debug_struct("Cursor")
            .field("ptr", &ptr)
            .field("id", &self.id)
            .finish()
    }
}

impl<T> From<Cursor<T>> for ConstCursor<T> {
    fn from(value: Cursor<T>) -> Self {
        value.into_const()
    }
}

impl<T, A: Access> BasicCursor<T, A> {
    /// Creates a cursor pointing at `node`; the end cursor if `node` is None.
    ///
    /// # Safety
    ///
    /// `node` must be None or a live node of a list.
    #[inline(always)]
    pub(crate) unsafe fn new(node: Link<T>) -> Self {
        let id = node.map_or(0, |x| unsafe { Node::id(x) });
        Self {
            node,
            id,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn node(&self) -> Link<T> {
        self.node
    }

    #[inline(always)]
    pub(crate) fn id(&self) -> usize {
        self.id
    }

    /// Returns a read-only cursor pointing at the same position.
    #[inline(always)]
    pub fn into_const(self) -> ConstCursor<T> {
        BasicCursor {
            node: self.node,
            id: self.id,
            phantom: PhantomData,
        }
    }

    /// Returns true if this is the past-the-end, or a default constructed, cursor.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns true if:
    ///
    /// * this is the past-the-end cursor, or
    /// * it points at the before-first position of the `list`, or
    /// * it points at one of the elements currently in the `list`;
    ///
    /// false otherwise.
    ///
    /// The unsafe methods of the cursor are safe to use when `is_valid_for(list)` returns
    /// true and the cursor is not the end cursor.
    ///
    /// This check walks the list; hence, it is linear in the position of the cursor.
    pub fn is_valid_for(&self, list: &LinkedList<T>) -> bool {
        self.is_end() || list.position(self).is_ok()
    }

    /// Returns a reference to the element that the cursor points at.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    ///
    /// * the cursor is neither the end cursor nor the before-first cursor, and
    /// * the list that this cursor is created from is still alive, and
    /// * the node that the cursor points at has not been removed since the cursor was created, and
    /// * the element is not mutated through a mutable reference while the returned reference is alive.
    ///
    /// See [`LinkedList::get`] for the checked alternative.
    pub unsafe fn get<'a>(&self) -> &'a T {
        debug_assert!(!self.is_end(), "end cursor cannot be dereferenced");
        let data = unsafe { Node::data(self.node.unwrap_unchecked()) };
        debug_assert!(data.is_some(), "before-first cursor cannot be dereferenced");
        unsafe { data.unwrap_unchecked() }
    }

    /// Moves the cursor to the next position, which is the end position if the cursor
    /// points at the last element; and returns a reference to itself.
    ///
    /// This is the pre-increment of the cursor. Advancing the before-first cursor
    /// lands on the first element.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    ///
    /// * the cursor is not the end cursor, and
    /// * the list that this cursor is created from is still alive, and
    /// * the node that the cursor points at has not been removed since the cursor was created.
    ///
    /// See [`LinkedList::next_cursor`] for the checked alternative.
    pub unsafe fn advance(&mut self) -> &mut Self {
        debug_assert!(!self.is_end(), "end cursor cannot be advanced");
        *self = unsafe { Self::new(Node::next(self.node.unwrap_unchecked())) };
        self
    }

    /// Moves the cursor to the next position and returns the cursor as it was before advancing.
    ///
    /// This is the post-increment of the cursor.
    ///
    /// # Safety
    ///
    /// Same as [`BasicCursor::advance`].
    pub unsafe fn post_advance(&mut self) -> Self {
        let current = *self;
        unsafe { self.advance() };
        current
    }
}

impl<T> Cursor<T> {
    /// Returns a mutable reference to the element that the cursor points at.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    ///
    /// * the cursor is neither the end cursor nor the before-first cursor, and
    /// * the list that this cursor is created from is still alive, and
    /// * the node that the cursor points at has not been removed since the cursor was created, and
    /// * no other reference to the element is alive while the returned reference is alive.
    ///
    /// See [`LinkedList::get_mut`] for the checked alternative.
    pub unsafe fn get_mut<'a>(&self) -> &'a mut T {
        debug_assert!(!self.is_end(), "end cursor cannot be dereferenced");
        let data = unsafe { Node::data_mut(self.node.unwrap_unchecked()) };
        debug_assert!(data.is_some(), "before-first cursor cannot be dereferenced");
        unsafe { data.unwrap_unchecked() }
    }
}
