use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use crate::catalog::command::filter_books_cmd::{FilterBooksCommand, FilterBooksCommandRequest, FilterBooksCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::domain::filter::BookFilter;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

pub async fn filter_books(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>) -> Result<Json<FilterBooksCommandResponse>, ServerError> {
    let req = FilterBooksCommandRequest::new(filter);
    let res = FilterBooksCommand::new(state.engine.catalog_service()).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn.as_str());
    let res = GetBookCommand::new(state.engine.catalog_service()).execute(req).await?;
    Ok(Json(res))
}
