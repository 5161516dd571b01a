pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::cart::domain::model::Cart;
use crate::cart::dto::{CartLineDto, CartSummaryDto};
use crate::core::library::{AddToCartOutcome, ShopResult};

#[async_trait]
pub trait CartService: Sync + Send {
    async fn add_to_cart(&self, book: &BookDto) -> ShopResult<AddToCartOutcome>;
    async fn cart_quantity(&self, isbn: &str) -> ShopResult<u32>;
    async fn summary(&self) -> ShopResult<CartSummaryDto>;
    async fn lines(&self) -> ShopResult<Vec<CartLineDto>>;
    async fn snapshot(&self) -> ShopResult<Cart>;
}
