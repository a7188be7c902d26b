use crate::LinkedList;
use core::cmp::Ordering;

impl<T: PartialEq> PartialEq for LinkedList<T> {
    /// Two lists are equal iff they have the same length and pairwise equal elements.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    /// Compares the lists lexicographically.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    /// Compares the lists lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}
