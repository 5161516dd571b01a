use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for the catalog and cart services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub price_cents: u64,
    pub stock: u32,
    pub category: String,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, year: i32,
               price_cents: u64, stock: u32, category: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            price_cents,
            stock,
            category: category.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn stock(&self) -> u32 {
        self.stock
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn price_cents(&self) -> u64 {
        self.price_cents
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            price_cents: other.price_cents,
            stock: other.stock,
            category: other.category.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            price_cents: other.price_cents,
            stock: other.stock,
            category: other.category.to_string(),
        }
    }
}
