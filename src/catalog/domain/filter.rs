use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::library::{ShopError, ShopResult};

// BookFilter holds the two listing inputs: free-text search and category selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl BookFilter {
    pub fn new(search: &str, category: &str) -> Self {
        Self {
            search: search.to_string(),
            category: Some(category.to_string()),
        }.normalized()
    }

    // An empty category selection means no category constraint.
    pub fn normalized(mut self) -> Self {
        if self.category.as_deref().map_or(false, str::is_empty) {
            self.category = None;
        }
        self
    }

    pub fn category_tag(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    // Location of the listing for these filters, e.g. `/?search=dune&category=fiction`.
    pub fn location(&self) -> ShopResult<String> {
        let query = serde_urlencoded::to_string(self)
            .map_err(|err| ShopError::serialization(format!("filter encoding {:?}", err).as_str()))?;
        Ok(format!("/?{}", query))
    }

    /// Title or author contains the search term ignoring case, and the category
    /// tag matches exactly when one is selected.
    pub fn matches(&self, book: &BookDto) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = book.title.to_lowercase().contains(term.as_str()) ||
            book.author.to_lowercase().contains(term.as_str());
        let matches_category = match self.category_tag() {
            "" => true,
            tag => book.category() == tag,
        };
        matches_search && matches_category
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::library::{ShopError, ShopResult};
    use crate::catalog::domain::filter::BookFilter;

    fn dune() -> BookDto {
        BookDto::new("9780441172719", "Dune", "Frank Herbert", 1965, 1425, 12, "science-fiction")
    }

    #[tokio::test]
    async fn test_should_match_everything_when_empty() {
        assert!(BookFilter::default().matches(&dune()));
        assert!(BookFilter::new("", "").matches(&dune()));
    }

    #[tokio::test]
    async fn test_should_match_title_or_author_ignoring_case() {
        assert!(BookFilter::new("DUNE", "").matches(&dune()));
        assert!(BookFilter::new("herb", "").matches(&dune()));
        assert!(!BookFilter::new("sapiens", "").matches(&dune()));
    }

    #[tokio::test]
    async fn test_should_match_category_exactly() {
        assert!(BookFilter::new("", "science-fiction").matches(&dune()));
        assert!(!BookFilter::new("", "Science-Fiction").matches(&dune()));
        assert!(!BookFilter::new("", "fiction").matches(&dune()));
        assert!(!BookFilter::new("dune", "children").matches(&dune()));
    }

    #[tokio::test]
    async fn test_should_normalize_empty_category() {
        let filter = BookFilter { search: "x".to_string(), category: Some("".to_string()) }.normalized();
        assert_eq!(None, filter.category);
        assert_eq!("", filter.category_tag());
    }

    #[tokio::test]
    async fn test_should_build_listing_location() {
        assert_eq!("/?search=", BookFilter::default().location().expect("should encode"));
        assert_eq!("/?search=dune", BookFilter::new("dune", "").location().expect("should encode"));
        assert_eq!("/?search=the+art%26co&category=fiction",
                   BookFilter::new("the art&co", "fiction").location().expect("should encode"));
    }
}
