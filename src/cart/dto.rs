use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::cart::domain::model::{Cart, CartLineEntity};
use crate::utils::money::format_price;

// CartLineDto exposes a cart line together with the copies still available to add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineDto {
    pub book: BookDto,
    pub quantity: u32,
    pub remaining_stock: u32,
}

impl From<&CartLineEntity> for CartLineDto {
    fn from(other: &CartLineEntity) -> Self {
        Self {
            book: other.book(),
            quantity: other.quantity,
            remaining_stock: other.stock.saturating_sub(other.quantity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummaryDto {
    pub item_count: u64,
    pub total_cents: u64,
    pub total: String,
}

impl CartSummaryDto {
    pub fn new(item_count: u64, total_cents: u64) -> Self {
        Self {
            item_count,
            total_cents,
            total: format_price(total_cents),
        }
    }
}

impl From<&Cart> for CartSummaryDto {
    fn from(other: &Cart) -> Self {
        CartSummaryDto::new(other.item_count(), other.total_cents())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::cart::domain::model::Cart;
    use crate::cart::dto::{CartLineDto, CartSummaryDto};

    #[tokio::test]
    async fn test_should_summarize_empty_cart() {
        let summary = CartSummaryDto::from(&Cart::new());
        assert_eq!(0, summary.item_count);
        assert_eq!("0.00", summary.total.as_str());
    }

    #[tokio::test]
    async fn test_should_build_line_with_remaining_stock() {
        let mut cart = Cart::new();
        let book = BookDto::new("isbn", "title", "author", 2000, 1425, 12, "science-fiction");
        cart.add(&book);
        cart.add(&book);
        let line = CartLineDto::from(&cart.lines[0]);
        assert_eq!(2, line.quantity);
        assert_eq!(10, line.remaining_stock);
        assert_eq!(book, line.book);
    }
}
