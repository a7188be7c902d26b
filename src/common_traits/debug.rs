use crate::LinkedList;
use core::fmt::Debug;

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;
    use alloc::format;

    #[test]
    fn debug_empty() {
        let list = LinkedList::<char>::new();
        assert_eq!(format!("{:?}", list), "[]");
    }

    #[test]
    fn debug_list() {
        let list = LinkedList::from(['a', 'b', 'c']);
        assert_eq!(format!("{:?}", list), "['a', 'b', 'c']");
    }
}
