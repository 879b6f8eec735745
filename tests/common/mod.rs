use bookshelf::Book;
use rand::{prelude::StdRng, Rng, SeedableRng};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub const CATEGORIES: [&str; 3] = ["Fiction", "NonFiction", "Poetry"];

/// build `n` books with categories drawn from `CATEGORIES` by the seeded rng
pub fn random_shelf(rng: &mut StdRng, n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            Book::new(format!("book-{i}"), category)
        })
        .collect()
}
