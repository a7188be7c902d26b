use crate::{
    cursor::{Access, BasicCursor, ConstCursor, Cursor, CursorError},
    iter::{Iter, IterMut},
    node::{Link, Node},
};
use alloc::boxed::Box;
use core::{marker::PhantomData, ptr::NonNull};

/// A singly linked list owning a chain of heap allocated nodes.
///
/// The list keeps a permanent sentinel node in front of the first element.
/// The cursor pointing at the sentinel, [`before_begin`], is a regular position to insert or
/// erase after; this makes operating at the front of the list the same as operating after
/// any element:
///
/// * [`insert_after`] inserts a new element right after the position of a cursor, and
/// * [`erase_after`] removes the element right after the position of a cursor.
///
/// Positional methods come in two flavors:
/// * checked methods validate that the cursor belongs to this list and return a
///   [`CursorError`] otherwise; validation walks the list up to the position;
/// * `_unchecked` methods are constant time, and it is the caller's responsibility to
///   provide a valid cursor.
///
/// [`before_begin`]: LinkedList::before_begin
/// [`insert_after`]: LinkedList::insert_after
/// [`erase_after`]: LinkedList::erase_after
///
/// # Examples
///
/// ```
/// use orx_forward_list::*;
///
/// let mut list = LinkedList::new();
/// list.push_front(3);
/// list.push_front(2);
/// list.push_front(1);
/// assert_eq!(list, LinkedList::from([1, 2, 3]));
///
/// let first = list.begin();
/// let inserted = list.insert_after(first, 99).unwrap();
/// assert_eq!(list.get(inserted), Ok(&99));
/// assert_eq!(list, LinkedList::from([1, 99, 2, 3]));
///
/// list.erase_after(list.cbefore_begin()).unwrap();
/// assert_eq!(list, LinkedList::from([99, 2, 3]));
/// assert_eq!(list.len(), 3);
/// ```
pub struct LinkedList<T> {
    head: NonNull<Node<T>>,
    len: usize,
    phantom: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedList<T> {}

unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        unsafe { Node::free(self.head) };
    }
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            head: Node::sentinel(),
            len: 0,
            phantom: PhantomData,
        }
    }

    // get

    /// Returns the number of elements in the list; constant time.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not the list is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element; None if the list is empty.
    pub fn front(&self) -> Option<&T> {
        let first = self.first()?;
        unsafe { Node::data(first) }
    }

    /// Returns a mutable reference to the first element; None if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.first()?;
        unsafe { Node::data_mut(first) }
    }

    /// Returns an iterator over references to the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first(), self.len)
    }

    /// Returns an iterator over mutable references to the elements from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.first(), self.len)
    }

    // cursors

    /// Returns the cursor pointing at the position before the first element.
    ///
    /// It is a valid position for [`insert_after`] and [`erase_after`]; but it must not be
    /// dereferenced.
    ///
    /// [`insert_after`]: LinkedList::insert_after
    /// [`erase_after`]: LinkedList::erase_after
    pub fn before_begin(&mut self) -> Cursor<T> {
        unsafe { BasicCursor::new(Some(self.head)) }
    }

    /// Returns the read-only cursor pointing at the position before the first element.
    pub fn cbefore_begin(&self) -> ConstCursor<T> {
        unsafe { BasicCursor::new(Some(self.head)) }
    }

    /// Returns the cursor pointing at the first element; equal to [`end`] if the list is empty.
    ///
    /// [`end`]: LinkedList::end
    pub fn begin(&mut self) -> Cursor<T> {
        unsafe { BasicCursor::new(self.first()) }
    }

    /// Returns the read-only cursor pointing at the first element; equal to [`cend`] if the
    /// list is empty.
    ///
    /// [`cend`]: LinkedList::cend
    pub fn cbegin(&self) -> ConstCursor<T> {
        unsafe { BasicCursor::new(self.first()) }
    }

    /// Returns the past-the-end cursor.
    ///
    /// It is the same null position for every list regardless of its contents and it must
    /// not be dereferenced.
    pub fn end(&mut self) -> Cursor<T> {
        Cursor::default()
    }

    /// Returns the read-only past-the-end cursor.
    pub fn cend(&self) -> ConstCursor<T> {
        ConstCursor::default()
    }

    // checked positional access

    /// Returns a reference to the element that the cursor `pos` points at.
    ///
    /// Validating `pos` walks the list from the front up to `pos`; hence, this method is
    /// linear in the position of `pos`. See [`BasicCursor::get`] for constant time access.
    ///
    /// # Errors
    ///
    /// * [`CursorError::End`] if `pos` is the end cursor,
    /// * [`CursorError::BeforeBegin`] if `pos` is the before-first cursor,
    /// * [`CursorError::NotInList`] if `pos` does not point at an element of this list.
    pub fn get(&self, pos: impl Into<ConstCursor<T>>) -> Result<&T, CursorError> {
        let pos: ConstCursor<T> = pos.into();
        let node = self.position(&pos)?;
        let data = unsafe { Node::data(node) };
        data.ok_or(CursorError::BeforeBegin)
    }

    /// Returns a mutable reference to the element that the cursor `pos` points at.
    ///
    /// Only a mutable [`Cursor`] grants mutable access.
    /// Linear in the position of `pos`, see [`Cursor::get_mut`] for constant time access.
    ///
    /// # Errors
    ///
    /// Same as [`LinkedList::get`].
    pub fn get_mut(&mut self, pos: Cursor<T>) -> Result<&mut T, CursorError> {
        let node = self.position(&pos)?;
        let data = unsafe { Node::data_mut(node) };
        data.ok_or(CursorError::BeforeBegin)
    }

    /// Returns the cursor following `pos`, keeping its access level.
    ///
    /// The cursor following the last element is the end cursor; the one following the
    /// before-first cursor is [`begin`].
    /// Linear in the position of `pos`, see [`BasicCursor::advance`] for the constant time
    /// increment.
    ///
    /// [`begin`]: LinkedList::begin
    ///
    /// # Errors
    ///
    /// * [`CursorError::End`] if `pos` is the end cursor,
    /// * [`CursorError::NotInList`] if `pos` does not point at a position of this list.
    pub fn next_cursor<A: Access>(
        &self,
        pos: BasicCursor<T, A>,
    ) -> Result<BasicCursor<T, A>, CursorError> {
        let node = self.position(&pos)?;
        Ok(unsafe { BasicCursor::new(Node::next(node)) })
    }

    // mut

    /// Removes all elements of the list.
    ///
    /// Nodes are released one at a time, so that dropping a long list does not recurse.
    pub fn clear(&mut self) {
        let mut next = self.first();
        unsafe { Node::set_next(self.head, None) };
        self.len = 0;

        while let Some(node) = next {
            next = unsafe { Node::next(node) };
            drop(unsafe { Node::free(node) });
        }
    }

    /// Inserts `value` as the new first element.
    pub fn push_front(&mut self, value: T) {
        unsafe { Node::insert_next(self.head, value) };
        self.len += 1;
    }

    /// Removes the first element and returns it; returns None if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let popped = unsafe { Node::remove_next(self.head) }?;
        self.len -= 1;
        Some(popped)
    }

    /// Inserts `value` right after the position of the cursor `pos` and returns the cursor
    /// pointing at the inserted element.
    ///
    /// Inserting after [`before_begin`] pushes to the front.
    ///
    /// Validating `pos` walks the list from the front up to `pos`; hence, this method is
    /// linear in the position of `pos`, and repeatedly appending after a tail cursor is
    /// quadratic in total. [`insert_after_unchecked`] inserts in constant time.
    ///
    /// [`before_begin`]: LinkedList::before_begin
    /// [`insert_after_unchecked`]: LinkedList::insert_after_unchecked
    ///
    /// # Errors
    ///
    /// * [`CursorError::End`] if `pos` is the end cursor,
    /// * [`CursorError::NotInList`] if `pos` does not point at a position of this list.
    ///
    /// The list is not changed and `value` is dropped in case of an error.
    pub fn insert_after(
        &mut self,
        pos: impl Into<ConstCursor<T>>,
        value: T,
    ) -> Result<Cursor<T>, CursorError> {
        let pos: ConstCursor<T> = pos.into();
        let node = self.position(&pos)?;
        let inserted = unsafe { Node::insert_next(node, value) };
        self.len += 1;
        Ok(unsafe { BasicCursor::new(Some(inserted)) })
    }

    /// Inserts `value` right after the position of the cursor `pos` in constant time, and
    /// returns the cursor pointing at the inserted element.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `pos` is the before-first cursor of this list or points at
    /// an element currently in this list; i.e., `pos` is not the end cursor and
    /// `pos.is_valid_for(self)` holds.
    ///
    /// See [`LinkedList::insert_after`] for the checked alternative.
    pub unsafe fn insert_after_unchecked(
        &mut self,
        pos: impl Into<ConstCursor<T>>,
        value: T,
    ) -> Cursor<T> {
        let pos: ConstCursor<T> = pos.into();
        debug_assert!(!pos.is_end(), "cannot insert after the end cursor");
        debug_assert!(pos.is_valid_for(self), "cursor does not belong to the list");
        let node = unsafe { pos.node().unwrap_unchecked() };
        let inserted = unsafe { Node::insert_next(node, value) };
        self.len += 1;
        unsafe { BasicCursor::new(Some(inserted)) }
    }

    /// Removes the element right after the position of the cursor `pos` and returns the
    /// cursor pointing at the element which now follows `pos`; or the end cursor if there
    /// is no such element.
    ///
    /// Erasing after [`before_begin`] pops the front.
    ///
    /// Validating `pos` walks the list from the front up to `pos`; hence, this method is
    /// linear in the position of `pos`. [`erase_after_unchecked`] erases in constant time.
    ///
    /// [`before_begin`]: LinkedList::before_begin
    /// [`erase_after_unchecked`]: LinkedList::erase_after_unchecked
    ///
    /// # Errors
    ///
    /// * [`CursorError::End`] if `pos` is the end cursor,
    /// * [`CursorError::NotInList`] if `pos` does not point at a position of this list,
    /// * [`CursorError::NoSuccessor`] if `pos` points at the last position.
    ///
    /// The list is not changed in case of an error.
    pub fn erase_after(&mut self, pos: impl Into<ConstCursor<T>>) -> Result<Cursor<T>, CursorError> {
        let (removed, following) = self.take_after(pos.into())?;
        drop(removed);
        Ok(following)
    }

    /// Removes the element right after the position of the cursor `pos` and returns it.
    ///
    /// Linear in the position of `pos`, as [`LinkedList::erase_after`].
    ///
    /// # Errors
    ///
    /// Same as [`LinkedList::erase_after`].
    pub fn remove_after(&mut self, pos: impl Into<ConstCursor<T>>) -> Result<T, CursorError> {
        self.take_after(pos.into()).map(|(removed, _)| removed)
    }

    /// Removes the element right after the position of the cursor `pos` in constant time, and
    /// returns the cursor pointing at the element which now follows `pos`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `pos` is the before-first cursor of this list or points at
    /// an element currently in this list; and that `pos` is not the last position of the list.
    ///
    /// See [`LinkedList::erase_after`] for the checked alternative.
    pub unsafe fn erase_after_unchecked(&mut self, pos: impl Into<ConstCursor<T>>) -> Cursor<T> {
        let pos: ConstCursor<T> = pos.into();
        debug_assert!(!pos.is_end(), "cannot erase after the end cursor");
        debug_assert!(pos.is_valid_for(self), "cursor does not belong to the list");
        let node = unsafe { pos.node().unwrap_unchecked() };
        let removed = unsafe { Node::remove_next(node) };
        debug_assert!(removed.is_some(), "there is no element after the cursor");
        if removed.is_some() {
            self.len -= 1;
        }
        unsafe { BasicCursor::new(Node::next(node)) }
    }

    /// Swaps the elements of this list with those of `other` in constant time.
    ///
    /// Nodes are neither copied nor moved; cursors pointing at elements follow their
    /// elements into the other list, while before-first cursors stay with their own list.
    pub fn swap(&mut self, other: &mut Self) {
        let first = self.first();
        unsafe {
            Node::set_next(self.head, other.first());
            Node::set_next(other.head, first);
        }
        core::mem::swap(&mut self.len, &mut other.len);
    }

    // helpers

    #[inline(always)]
    fn first(&self) -> Link<T> {
        unsafe { Node::next(self.head) }
    }

    /// Appends `values` to this list which must be empty, preserving their order.
    ///
    /// Each node is linked as soon as it is built; if producing a value panics, the list
    /// contains the values produced so far and is in a valid state.
    pub(crate) fn fill_empty<I: IntoIterator<Item = T>>(&mut self, values: I) {
        debug_assert!(self.is_empty(), "can only fill an empty list");
        self.append_values(values);
    }

    /// Appends `values` at the back, preserving their order.
    pub(crate) fn append_values<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut tail = self.head;
        while let Some(next) = unsafe { Node::next(tail) } {
            tail = next;
        }

        for value in values {
            tail = unsafe { Node::insert_next(tail, value) };
            self.len += 1;
        }
    }

    fn take_after(&mut self, pos: ConstCursor<T>) -> Result<(T, Cursor<T>), CursorError> {
        let node = self.position(&pos)?;
        let removed = unsafe { Node::remove_next(node) }.ok_or(CursorError::NoSuccessor)?;
        self.len -= 1;
        let following = unsafe { BasicCursor::new(Node::next(node)) };
        Ok((removed, following))
    }

    /// Returns the node that `pos` points at if it is the sentinel or an element of this list.
    ///
    /// Only the addresses and identities of the nodes of this list are read; `pos` itself is
    /// never dereferenced.
    pub(crate) fn position<A: Access>(
        &self,
        pos: &BasicCursor<T, A>,
    ) -> Result<NonNull<Node<T>>, CursorError> {
        let target = pos.node().ok_or(CursorError::End)?;

        let mut current = Some(self.head);
        while let Some(node) = current {
            if node == target && unsafe { Node::id(node) } == pos.id() {
                return Ok(node);
            }
            current = unsafe { Node::next(node) };
        }
        Err(CursorError::NotInList)
    }
}

/// Swaps the elements of the two lists in constant time; same as `lhs.swap(rhs)`.
pub fn swap<T>(lhs: &mut LinkedList<T>, rhs: &mut LinkedList<T>) {
    lhs.swap(rhs);
}
