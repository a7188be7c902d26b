#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Cursors pointing at positions of the list.
pub mod cursor;
/// Iterators over the elements of the list.
pub mod iter;

mod common_traits;
mod list;
mod node;

pub use cursor::{Access, BasicCursor, ConstCursor, Cursor, CursorError, Immutable, Mutable};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{LinkedList, swap};
