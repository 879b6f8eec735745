use crate::book::Book;

/// this is a cursor abstraction for traversing a shelf of books
/// for now it is a forward-only, single-pass cursor
pub trait BookCursor<'a> {
    /// scan forward for the next accepted book and consume it
    fn advance(&mut self) -> Option<&'a Book>;
    /// the book sitting at the cursor position, accepted or not
    fn current(&self) -> Option<&'a Book>;
    /// whether any accepted book remains from the current position onward
    fn is_exhausted(&self) -> bool;
}

/// Forward-only filtered traversal over a borrowed, ordered book sequence.
///
/// The cursor borrows the sequence for its whole lifetime, so the owner
/// cannot structurally mutate it while a traversal is live. The position
/// only moves forward; there is no reset.
pub struct FilteredCursor<'a> {
    books: &'a [Book],
    accept: Box<dyn Fn(&Book) -> bool + 'a>,
    position: usize,
}

impl<'a> FilteredCursor<'a> {
    pub fn new<P>(books: &'a [Book], accept: P) -> Self
    where
        P: Fn(&Book) -> bool + 'a,
    {
        Self {
            books,
            accept: Box::new(accept),
            position: 0,
        }
    }

    /// cursor accepting exactly the books whose category equals `category`
    pub fn with_category(books: &'a [Book], category: impl Into<String>) -> Self {
        let category = category.into();
        Self::new(books, move |book| book.category() == category)
    }
}

impl<'a> BookCursor<'a> for FilteredCursor<'a> {
    fn advance(&mut self) -> Option<&'a Book> {
        let mut found = None;
        while self.position < self.books.len() {
            let book = &self.books[self.position];
            self.position += 1;
            if (self.accept)(book) {
                found = Some(book);
                break;
            }
        }
        // after a failed scan the position parks at the end of the sequence,
        // so current() reports nothing rather than a stale rejected book
        found
    }

    fn current(&self) -> Option<&'a Book> {
        self.books.get(self.position)
    }

    fn is_exhausted(&self) -> bool {
        !self.books[self.position..].iter().any(|book| (self.accept)(book))
    }
}

impl<'a> Iterator for FilteredCursor<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
