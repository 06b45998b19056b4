pub mod books;
pub mod health;

pub use books::{all_books, delete_book, get_book, update_book, upload_book};
pub use health::health_check;
