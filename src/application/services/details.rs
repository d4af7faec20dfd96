use std::sync::Arc;

use tracing::warn;

use crate::domain::catalogs::{LibraryCatalog, VolumeCatalog};
use crate::domain::details::BookDetails;

#[derive(Clone)]
pub struct DetailsService {
    library: Arc<dyn LibraryCatalog>,
    volumes: Arc<dyn VolumeCatalog>,
}

impl DetailsService {
    pub fn new(library: Arc<dyn LibraryCatalog>, volumes: Arc<dyn VolumeCatalog>) -> Self {
        Self { library, volumes }
    }

    /// Synopsis, genre and year for a title. Catalog failures yield empty details.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, title: &str, author: &str) -> BookDetails {
        match self.volumes.lookup_details(title, author).await {
            Ok(volumes) => {
                if let Some(details) = volumes.into_iter().find(|d| !d.is_empty()) {
                    return details;
                }
            }
            Err(err) => warn!(title, error = %err, "volume details lookup failed"),
        }

        match self.library.lookup_details(title, author).await {
            Ok(details) if details.description.is_some() || details.genre.is_some() => details,
            Ok(_) => BookDetails::default(),
            Err(err) => {
                warn!(title, error = %err, "library details lookup failed");
                BookDetails::default()
            }
        }
    }
}
