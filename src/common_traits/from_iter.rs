use crate::LinkedList;

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.fill_empty(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends the elements of `iter` to the back of the list in order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_values(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_values(iter.into_iter().copied());
    }
}
