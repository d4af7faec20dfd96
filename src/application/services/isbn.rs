use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::catalogs::{CatalogQuery, LibraryCatalog, VolumeCatalog};
use crate::domain::suggestions::{BookSuggestion, CatalogRecord};

/// Resolves a scanned ISBN: volumes catalog first, library search for whatever is still missing.
#[derive(Clone)]
pub struct IsbnResolver {
    library: Arc<dyn LibraryCatalog>,
    volumes: Arc<dyn VolumeCatalog>,
}

impl IsbnResolver {
    pub fn new(library: Arc<dyn LibraryCatalog>, volumes: Arc<dyn VolumeCatalog>) -> Self {
        Self { library, volumes }
    }

    /// `None` when neither catalog knows the title, author or cover.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, isbn: &str) -> Option<BookSuggestion> {
        let mut record = match self.volumes.lookup_isbn(isbn).await {
            Ok(found) => found.unwrap_or_default(),
            Err(err) => {
                warn!(isbn, error = %err, "volume lookup failed, trying library search");
                CatalogRecord::default()
            }
        };

        if record.cover_url.is_none() || record.title.is_none() {
            // the library search index returns a cover id for most scans
            let query = CatalogQuery::new(isbn).with_limit(1);
            match self.library.search(&query).await {
                Ok(docs) => {
                    if let Some(doc) = docs.into_iter().next() {
                        record.fill_missing(doc);
                    }
                }
                Err(err) => warn!(isbn, error = %err, "library search fallback failed"),
            }
        }

        if record.is_blank() {
            info!(isbn, "isbn not found");
            return None;
        }

        Some(BookSuggestion {
            title: record.title.unwrap_or_default(),
            author: record.author.unwrap_or_default(),
            cover_url: record.cover_url,
        })
    }
}
