pub mod google_books;
mod lenient;
pub mod open_library;

pub use google_books::{GOOGLE_BOOKS_URL, GoogleBooksClient};
pub use open_library::{OPEN_LIBRARY_URL, OpenLibraryClient};
