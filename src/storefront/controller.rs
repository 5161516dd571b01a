use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::debug;
use crate::cart::controller as cart_api;
use crate::catalog::controller as catalog_api;
use crate::catalog::domain::filter::BookFilter;
use crate::core::controller::{AppState, ServerError};

// Posted by the add-to-cart control on each card; carries the filters so the shopper lands back on the same listing.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub isbn: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
}

impl AddToCartForm {
    pub fn filter(&self) -> BookFilter {
        BookFilter::new(self.search.as_str(), self.category.as_str())
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/books", get(books_fragment))
        .route("/cart", post(add_to_cart))
        .route("/cart/summary", get(cart_summary_fragment))
        .route("/api/books", get(catalog_api::filter_books))
        .route("/api/books/:isbn", get(catalog_api::find_book_by_isbn))
        .route("/api/cart", get(cart_api::get_cart).post(cart_api::add_to_cart))
        .with_state(state)
}

pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>) -> Result<Html<String>, ServerError> {
    let page = state.engine.page(&filter.normalized()).await?;
    Ok(Html(page))
}

pub async fn books_fragment(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>) -> Result<Html<String>, ServerError> {
    let view = state.engine.view(&filter.normalized()).await?;
    Ok(Html(view.listing))
}

pub async fn cart_summary_fragment(
    State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let view = state.engine.view(&BookFilter::default()).await?;
    Ok(Html(view.summary_text()))
}

// Answers with 303 See Other so reloading the resulting page does not post the form again.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>) -> Result<Redirect, ServerError> {
    let filter = form.filter();
    let (outcome, _) = state.engine.add_to_cart(form.isbn.as_str(), &filter).await?;
    debug!(isbn = form.isbn.as_str(), outcome = %outcome, "redirecting after add to cart");
    Ok(Redirect::to(filter.location()?.as_str()))
}
