use crate::node::{Link, Node};
use core::{iter::FusedIterator, marker::PhantomData};

/// Iterator over mutable references to the elements of a [`LinkedList`], from front to back.
///
/// [`LinkedList`]: crate::LinkedList
pub struct IterMut<'a, T> {
    next: Link<T>,
    len: usize,
    phantom: PhantomData<&'a mut T>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(front: Link<T>, len: usize) -> Self {
        Self {
            next: front,
            len,
            phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = unsafe { Node::next(node) };
        self.len -= 1;
        unsafe { Node::data_mut(node) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
