pub mod filter_books_cmd;
pub mod get_book_cmd;
