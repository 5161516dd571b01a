use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;
use crate::core::library::AddToCartOutcome;
use crate::utils::date::serializer;

// CartLineEntity is a snapshot of the book taken when it was first added, plus the
// number of copies the shopper intends to buy. quantity never exceeds stock.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CartLineEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub price_cents: u64,
    pub stock: u32,
    pub category: String,
    pub quantity: u32,
    #[serde(with = "serializer")]
    pub added_at: NaiveDateTime,
}

impl CartLineEntity {
    pub fn new(book: &BookDto) -> Self {
        Self {
            isbn: book.isbn.to_string(),
            title: book.title.to_string(),
            author: book.author.to_string(),
            year: book.year,
            price_cents: book.price_cents(),
            stock: book.stock(),
            category: book.category.to_string(),
            quantity: 1,
            added_at: Utc::now().naive_utc(),
        }
    }

    pub fn line_total_cents(&self) -> u64 {
        self.price_cents * self.quantity as u64
    }

    pub fn book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str(), self.year,
                     self.price_cents, self.stock, self.category.as_str())
    }
}

impl Identifiable for CartLineEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

// Cart keeps one line per isbn in the order books were first added.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLineEntity>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, isbn: &str) -> Option<&CartLineEntity> {
        self.lines.iter().find(|l| l.isbn == isbn)
    }

    pub fn quantity(&self, isbn: &str) -> u32 {
        self.find(isbn).map_or(0, |l| l.quantity)
    }

    /// Adds one copy of `book`. A line that already holds every copy in stock is
    /// left untouched and `Unchanged` is returned; this is not an error.
    pub fn add(&mut self, book: &BookDto) -> AddToCartOutcome {
        let isbn = book.id();
        match self.lines.iter_mut().find(|l| l.isbn == isbn) {
            Some(line) => {
                if line.quantity < book.stock() {
                    line.quantity += 1;
                    AddToCartOutcome::Incremented
                } else {
                    AddToCartOutcome::Unchanged
                }
            }
            None => {
                self.lines.push(CartLineEntity::new(book));
                AddToCartOutcome::Added
            }
        }
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    pub fn total_cents(&self) -> u64 {
        self.lines.iter().map(CartLineEntity::line_total_cents).sum()
    }
}
