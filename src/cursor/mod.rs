mod access;
mod basic_cursor;
mod cursor_error;

pub use access::{Access, Immutable, Mutable};
pub use basic_cursor::{BasicCursor, ConstCursor, Cursor};
pub use cursor_error::CursorError;
