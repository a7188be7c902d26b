mod into_iter;
mod iter_mut;
mod iter_ref;

pub use into_iter::IntoIter;
pub use iter_mut::IterMut;
pub use iter_ref::Iter;
