use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity abstracts a catalog title; stock is the number of physical copies on hand
// and is never changed by cart activity.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub price_cents: u64,
    pub stock: u32,
    pub category: String,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, year: i32,
               price_cents: u64, stock: u32, category: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            price_cents,
            stock,
            category: category.to_string(),
        }
    }

    // lookup by attribute name, used by repository queries
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "isbn" => Some(self.isbn.to_string()),
            "title" => Some(self.title.to_string()),
            "author" => Some(self.author.to_string()),
            "year" => Some(self.year.to_string()),
            "category" => Some(self.category.to_string()),
            _ => None,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
