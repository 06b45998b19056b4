pub mod books;

pub use books::{BookListParams, InsertBookResponse, MessageResponse, UpdateBookResponse};
