use std::collections::HashMap;

use async_trait::async_trait;
use lazy_static::lazy_static;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{ShopError, ShopResult};
use crate::core::repository::Repository;

lazy_static! {
    // The catalog shipped with the storefront, in display order.
    pub static ref CATALOG_BOOKS: Vec<BookEntity> = vec![
        BookEntity::new("9780743273565", "The Art of not Overthinking", "Shaurya Kapoor",
                        2001, 1299, 25, "fiction"),
        BookEntity::new("9780062316097", "Sapiens: A Brief History of Humankind", "Yuval Noah Harari",
                        2011, 1550, 18, "non-fiction"),
        BookEntity::new("9780747532743", "Harry Potter and the Philosopher's Stone", "J.K. Rowling",
                        1997, 1099, 32, "children"),
        BookEntity::new("9780441172719", "Dune", "Frank Herbert",
                        1965, 1425, 12, "science-fiction"),
    ];
}

#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }

    pub fn with_catalog() -> Self {
        Self::new(CATALOG_BOOKS.clone())
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn get(&self, id: &str) -> ShopResult<BookEntity> {
        self.books.iter()
            .find(|b| b.isbn == id)
            .cloned()
            .ok_or_else(|| ShopError::not_found(format!("book with isbn {} not found", id).as_str()))
    }

    async fn all(&self) -> ShopResult<Vec<BookEntity>> {
        Ok(self.books.clone())
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> ShopResult<Vec<BookEntity>> {
        Ok(self.books.iter()
            .filter(|b| predicate.iter().all(|(k, v)| b.attribute(k).as_deref() == Some(v.as_str())))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_category(&self, category: &str) -> ShopResult<Vec<BookEntity>> {
        self.query(&HashMap::from([("category".to_string(), category.to_string())])).await
    }
}
