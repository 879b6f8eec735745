use std::fs;
use std::path::Path;

use log::debug;

use crate::book::Book;
use crate::cursor::FilteredCursor;
use crate::{Error, Result};

/// An ordered, caller-owned shelf of books.
///
/// The catalog never reorders its books; cursors handed out by
/// [`Catalog::cursor`] see the insertion order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// load a catalog from a JSON array of book records
    pub fn from_json(buf: &[u8]) -> Result<Self> {
        let books: Vec<Book> = serde_json::from_slice(buf)
            .map_err(|e| Error::Corrupt(format!("cannot deserialize catalog: {e}")))?;
        debug!("loaded catalog with {} books", books.len());
        Ok(Self { books })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let buf = fs::read(path)?;
        Self::from_json(&buf)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// a forward-only cursor over this catalog accepting books per `accept`
    ///
    /// The returned cursor borrows the catalog, so the catalog cannot be
    /// mutated until the traversal is dropped.
    pub fn cursor<'a, P>(&'a self, accept: P) -> FilteredCursor<'a>
    where
        P: Fn(&Book) -> bool + 'a,
    {
        FilteredCursor::new(&self.books, accept)
    }

    pub fn cursor_over_category(&self, category: impl Into<String>) -> FilteredCursor<'_> {
        FilteredCursor::with_category(&self.books, category)
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}
