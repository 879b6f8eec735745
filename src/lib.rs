mod book;
mod catalog;
mod cursor;
mod errors;

pub use book::Book;
pub use catalog::Catalog;
pub use cursor::{BookCursor, FilteredCursor};
pub use errors::{Error, Result};
