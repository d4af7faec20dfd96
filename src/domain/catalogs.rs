//! Seams for the two external book catalogs.
//!
//! The pipelines in `application::services` only see these traits; the HTTP
//! adapters live in `infrastructure::catalogs`, and tests substitute the
//! mocks at the bottom of this file.

use async_trait::async_trait;

use super::details::BookDetails;
use super::errors::CatalogError;
use super::suggestions::CatalogRecord;

/// Records requested per text search.
pub const SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub text: String,
    pub language: Option<String>,
    pub limit: usize,
}

impl CatalogQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            limit: SEARCH_LIMIT,
        }
    }

    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Library-style search index (Open Library).
#[async_trait]
pub trait LibraryCatalog: Send + Sync {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Subject and work description for the best title/author match.
    async fn lookup_details(&self, title: &str, author: &str)
    -> Result<BookDetails, CatalogError>;
}

/// Commercial volumes index (Google Books).
#[async_trait]
pub trait VolumeCatalog: Send + Sync {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError>;

    async fn lookup_isbn(&self, isbn: &str) -> Result<Option<CatalogRecord>, CatalogError>;

    async fn lookup_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<CatalogRecord>, CatalogError>;

    /// Details extracted from each matching volume, in catalog order.
    async fn lookup_details(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Vec<BookDetails>, CatalogError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_language_hint_is_dropped() {
        let query = CatalogQuery::new("dune").with_language(Some("  "));
        assert_eq!(query.language, None);
        assert_eq!(query.limit, SEARCH_LIMIT);
    }

    #[test]
    fn limit_can_be_narrowed() {
        let query = CatalogQuery::new("9780451524935").with_limit(1);
        assert_eq!(query.limit, 1);
    }
}
