use crate::LinkedList;

impl<T: Clone> Clone for LinkedList<T> {
    /// Creates a deep copy of the list with the elements in the same order.
    ///
    /// If cloning an element panics, the partially built copy is dropped and `self` is
    /// not affected.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.fill_empty(self.iter().cloned());
        copy
    }

    /// Replaces the elements of `self` with clones of the elements of `source`.
    ///
    /// The copy is built aside and swapped in only once it is complete; hence, if cloning an
    /// element panics, `self` keeps its prior elements.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}
