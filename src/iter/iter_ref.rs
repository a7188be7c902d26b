use crate::node::{Link, Node};
use core::{iter::FusedIterator, marker::PhantomData};

/// Iterator over references to the elements of a [`LinkedList`], from front to back.
///
/// [`LinkedList`]: crate::LinkedList
pub struct Iter<'a, T> {
    next: Link<T>,
    len: usize,
    phantom: PhantomData<&'a T>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> Iter<'_, T> {
    pub(crate) fn new(front: Link<T>, len: usize) -> Self {
        Self {
            next: front,
            len,
            phantom: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.next, self.len)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = unsafe { Node::next(node) };
        self.len -= 1;
        unsafe { Node::data(node) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
