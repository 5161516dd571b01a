use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::cart::dto::CartSummaryDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::AddToCartOutcome;

// AddToCartCommand resolves the isbn against the catalog and hands the full book to the cart.
pub struct AddToCartCommand {
    catalog_service: Arc<dyn CatalogService>,
    cart_service: Arc<dyn CartService>,
}

impl AddToCartCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, cart_service: Arc<dyn CartService>) -> Self {
        Self {
            catalog_service,
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddToCartCommandRequest {
    pub isbn: String,
}

impl AddToCartCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddToCartCommandResponse {
    pub isbn: String,
    pub outcome: AddToCartOutcome,
    pub quantity: u32,
    pub remaining_stock: u32,
    pub summary: CartSummaryDto,
}

#[async_trait]
impl Command<AddToCartCommandRequest, AddToCartCommandResponse> for AddToCartCommand {
    async fn execute(&self, req: AddToCartCommandRequest) -> Result<AddToCartCommandResponse, CommandError> {
        let book = self.catalog_service.find_book_by_isbn(req.isbn.as_str()).await?;
        let outcome = self.cart_service.add_to_cart(&book).await?;
        let quantity = self.cart_service.cart_quantity(book.isbn.as_str()).await?;
        let summary = self.cart_service.summary().await?;
        Ok(AddToCartCommandResponse {
            isbn: book.isbn,
            outcome,
            quantity,
            remaining_stock: book.stock.saturating_sub(quantity),
            summary,
        })
    }
}
