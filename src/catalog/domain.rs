pub mod filter;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::filter::BookFilter;
use crate::core::library::ShopResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn all_books(&self) -> ShopResult<Vec<BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> ShopResult<BookDto>;
    async fn find_books_by_category(&self, category: &str) -> ShopResult<Vec<BookDto>>;
    async fn filter_books(&self, filter: &BookFilter) -> ShopResult<Vec<BookDto>>;
}
