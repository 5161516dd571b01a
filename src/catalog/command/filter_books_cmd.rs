use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::BookFilter;
use crate::core::command::{Command, CommandError};

pub struct FilterBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FilterBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FilterBooksCommandRequest {
    pub filter: BookFilter,
}

impl FilterBooksCommandRequest {
    pub fn new(filter: BookFilter) -> Self {
        Self {
            filter: filter.normalized(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct FilterBooksCommandResponse {
    pub filter: BookFilter,
    pub books: Vec<BookDto>,
}

impl FilterBooksCommandResponse {
    pub fn new(filter: BookFilter, books: Vec<BookDto>) -> Self {
        Self {
            filter,
            books,
        }
    }
}

#[async_trait]
impl Command<FilterBooksCommandRequest, FilterBooksCommandResponse> for FilterBooksCommand {
    async fn execute(&self, req: FilterBooksCommandRequest) -> Result<FilterBooksCommandResponse, CommandError> {
        let books = self.catalog_service.filter_books(&req.filter).await.map_err(CommandError::from)?;
        Ok(FilterBooksCommandResponse::new(req.filter, books))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::filter_books_cmd::{FilterBooksCommand, FilterBooksCommandRequest};
    use crate::catalog::domain::filter::BookFilter;
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_filter_books() {
        let cmd = FilterBooksCommand::new(Arc::from(factory::create_catalog_service()));
        let res = cmd.execute(FilterBooksCommandRequest::new(BookFilter::new("rowling", "children")))
            .await.expect("should filter books");
        assert_eq!(1, res.books.len());
        assert_eq!("9780747532743", res.books[0].isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_normalize_request_filter() {
        let req = FilterBooksCommandRequest::new(BookFilter { search: "".to_string(), category: Some("".to_string()) });
        assert_eq!(None, req.filter.category);
    }
}
