use async_trait::async_trait;
use tracing::debug;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::BookFilter;
use crate::core::library::{ShopError, ShopResult};

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn all_books(&self) -> ShopResult<Vec<BookDto>> {
        let res = self.book_repository.all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> ShopResult<BookDto> {
        if isbn.trim().is_empty() {
            return Err(ShopError::validation("isbn must not be blank", Some("blank_isbn".to_string())));
        }
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_books_by_category(&self, category: &str) -> ShopResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_category(category).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn filter_books(&self, filter: &BookFilter) -> ShopResult<Vec<BookDto>> {
        let candidates = match filter.category.as_deref() {
            Some(category) if !category.is_empty() => self.find_books_by_category(category).await?,
            _ => self.all_books().await?,
        };
        let books: Vec<BookDto> = candidates
            .into_iter()
            .filter(|b| filter.matches(b))
            .collect();
        debug!(search = filter.search.as_str(), category = filter.category_tag(),
            matched = books.len(), "filtered catalog");
        Ok(books)
    }
}
