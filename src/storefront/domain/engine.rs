use std::sync::Arc;
use tracing::info;
use crate::books::dto::BookDto;
use crate::cart::domain::CartService;
use crate::cart::dto::CartSummaryDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::BookFilter;
use crate::core::domain::Configuration;
use crate::core::library::{AddToCartOutcome, ShopResult};
use crate::storefront::render::{render_books, render_cart_summary, render_page};

// StorefrontView is everything the page shows for one set of filters.
#[derive(Debug, Clone)]
pub struct StorefrontView {
    pub filter: BookFilter,
    pub books: Vec<BookDto>,
    pub summary: CartSummaryDto,
    pub listing: String,
}

impl StorefrontView {
    pub fn summary_text(&self) -> String {
        render_cart_summary(&self.summary)
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Owns the catalog and the single cart and derives every view from them.
/// Each interaction recomputes the filtered listing and the cart readout from scratch.
pub struct StorefrontEngine {
    config: Configuration,
    catalog_service: Arc<dyn CatalogService>,
    cart_service: Arc<dyn CartService>,
}

impl StorefrontEngine {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>,
               cart_service: Arc<dyn CartService>) -> Self {
        Self {
            config: config.clone(),
            catalog_service,
            cart_service,
        }
    }

    pub fn catalog_service(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    pub fn cart_service(&self) -> Arc<dyn CartService> {
        self.cart_service.clone()
    }

    pub async fn view(&self, filter: &BookFilter) -> ShopResult<StorefrontView> {
        let books = self.catalog_service.filter_books(filter).await?;
        let cart = self.cart_service.snapshot().await?;
        let listing = render_books(&books, &cart, filter);
        Ok(StorefrontView {
            filter: filter.clone(),
            books,
            summary: CartSummaryDto::from(&cart),
            listing,
        })
    }

    /// Adds one copy of the book with `isbn` and re-renders the whole view. Adding past
    /// the stock leaves the cart unchanged and still returns a fresh view.
    pub async fn add_to_cart(&self, isbn: &str, filter: &BookFilter) -> ShopResult<(AddToCartOutcome, StorefrontView)> {
        let book = self.catalog_service.find_book_by_isbn(isbn).await?;
        let outcome = self.cart_service.add_to_cart(&book).await?;
        info!(isbn, outcome = %outcome, "add to cart");
        let view = self.view(filter).await?;
        Ok((outcome, view))
    }

    pub async fn page(&self, filter: &BookFilter) -> ShopResult<String> {
        let view = self.view(filter).await?;
        Ok(self.render(&view))
    }

    pub fn render(&self, view: &StorefrontView) -> String {
        render_page(&self.config, &view.filter, &view.listing, &view.summary)
    }
}
