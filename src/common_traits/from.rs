use crate::LinkedList;

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    /// Creates a list iterating over `values` in the given order.
    ///
    /// Values are pushed to the front starting from the last one.
    fn from(values: [T; N]) -> Self {
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}
