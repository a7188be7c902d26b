use alloc::boxed::Box;
use core::{
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Link to the next node; None at the tail.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Cell of the forward list.
///
/// The sentinel is a node without data; every other node holds exactly one value.
///
/// Nodes are heap allocated and owned by the list; they are only reached through the
/// pointer returned at allocation, never through a reference to their owner. Every node
/// gets an `id` which is not shared with any other node of the program, so that a node can
/// be told apart from a later node allocated at the same address.
pub(crate) struct Node<T> {
    data: Option<T>,
    next: Link<T>,
    id: usize,
}

impl<T> Node<T> {
    fn allocate(data: Option<T>) -> NonNull<Self> {
        let node = Box::new(Self {
            data,
            next: None,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        });
        NonNull::from(Box::leak(node))
    }

    /// Allocates the data-less node placed before the first element.
    pub fn sentinel() -> NonNull<Self> {
        Self::allocate(None)
    }

    /// Allocates an unlinked node holding `data`.
    pub fn new(data: T) -> NonNull<Self> {
        Self::allocate(Some(data))
    }

    /// Deallocates the node and returns its data.
    ///
    /// # Safety
    ///
    /// `ptr` must be a live node which is no longer linked; it must not be used afterwards.
    pub unsafe fn free(ptr: NonNull<Self>) -> Option<T> {
        let node = unsafe { Box::from_raw(ptr.as_ptr()) };
        node.data
    }

    // The accessors below read or write a single field through the raw pointer, without
    // creating a reference to the entire node.
    // The caller must ensure that `ptr` points at a live node.

    #[inline(always)]
    pub unsafe fn next(ptr: NonNull<Self>) -> Link<T> {
        unsafe { (*ptr.as_ptr()).next }
    }

    #[inline(always)]
    pub unsafe fn set_next(ptr: NonNull<Self>, next: Link<T>) {
        unsafe { (*ptr.as_ptr()).next = next };
    }

    #[inline(always)]
    pub unsafe fn id(ptr: NonNull<Self>) -> usize {
        unsafe { (*ptr.as_ptr()).id }
    }

    /// Returns a reference to the data of the node; None for the sentinel.
    ///
    /// # Safety
    ///
    /// The node must outlive `'a` and its data must not be mutated meanwhile.
    #[inline(always)]
    pub unsafe fn data<'a>(ptr: NonNull<Self>) -> Option<&'a T> {
        unsafe { (*ptr.as_ptr()).data.as_ref() }
    }

    /// Returns a mutable reference to the data of the node; None for the sentinel.
    ///
    /// # Safety
    ///
    /// The node must outlive `'a` and no other reference to its data may exist meanwhile.
    #[inline(always)]
    pub unsafe fn data_mut<'a>(ptr: NonNull<Self>) -> Option<&'a mut T> {
        unsafe { (*ptr.as_ptr()).data.as_mut() }
    }

    /// Allocates a node holding `data` and links it right after the node at `ptr`.
    ///
    /// The new node is fully built before it is spliced in.
    pub unsafe fn insert_next(ptr: NonNull<Self>, data: T) -> NonNull<Self> {
        let inserted = Self::new(data);
        unsafe {
            Self::set_next(inserted, Self::next(ptr));
            Self::set_next(ptr, Some(inserted));
        }
        inserted
    }

    /// Unlinks the node following `ptr`, relinks around it, deallocates it and returns its data.
    ///
    /// Returns None if the node at `ptr` is the tail.
    pub unsafe fn remove_next(ptr: NonNull<Self>) -> Option<T> {
        let removed = unsafe { Self::next(ptr) }?;
        unsafe {
            Self::set_next(ptr, Self::next(removed));
            let data = Self::free(removed);
            debug_assert!(data.is_some(), "sentinel is never linked after a node");
            data
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, string::ToString};

    #[test]
    fn sentinel_has_no_data() {
        let sentinel = Node::<String>::sentinel();
        unsafe {
            assert_eq!(Node::data(sentinel), None);
            assert!(Node::next(sentinel).is_none());
            assert_eq!(Node::free(sentinel), None);
        }
    }

    #[test]
    fn insert_next_links_between() {
        let head = Node::sentinel();

        unsafe {
            let b = Node::insert_next(head, 'b');
            let a = Node::insert_next(head, 'a');

            assert_eq!(Node::next(head), Some(a));
            assert_eq!(Node::data(a), Some(&'a'));
            assert_eq!(Node::next(a), Some(b));
            assert_eq!(Node::next(b), None);

            assert_eq!(Node::remove_next(head), Some('a'));
            assert_eq!(Node::remove_next(head), Some('b'));
            Node::free(head);
        }
    }

    #[test]
    fn remove_next() {
        let head = Node::sentinel();

        unsafe {
            Node::insert_next(head, 2.to_string());
            Node::insert_next(head, 1.to_string());

            assert_eq!(Node::remove_next(head), Some(1.to_string()));
            let first = Node::next(head).expect("linked");
            assert_eq!(Node::data(first), Some(&2.to_string()));

            assert_eq!(Node::remove_next(head), Some(2.to_string()));
            assert!(Node::next(head).is_none());

            assert_eq!(Node::remove_next(head), None);
            Node::free(head);
        }
    }

    #[test]
    fn data_mut() {
        let node = Node::new(1);
        unsafe {
            *Node::data_mut(node).expect("active") += 10;
            assert_eq!(Node::data(node), Some(&11));
            assert_eq!(Node::free(node), Some(11));
        }
    }

    #[test]
    fn ids_are_not_reused() {
        let first = Node::new('a');
        let first_id = unsafe { Node::id(first) };
        unsafe { Node::free(first) };

        for _ in 0..100 {
            let node = Node::new('b');
            assert_ne!(unsafe { Node::id(node) }, first_id);
            unsafe { Node::free(node) };
        }

        let sentinel = Node::<char>::sentinel();
        let node = Node::new('c');
        assert_ne!(unsafe { Node::id(sentinel) }, unsafe { Node::id(node) });
        unsafe {
            Node::free(node);
            Node::free(sentinel);
        }
    }
}
