use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::application::services::{DetailsService, IsbnResolver, LanguageHints, SuggestionService};
use crate::domain::catalogs::{LibraryCatalog, VolumeCatalog};
use crate::domain::covers::CoverSize;
use crate::domain::ranking::DEFAULT_LIMIT;
use crate::infrastructure::catalogs::{GoogleBooksClient, OpenLibraryClient};
use crate::infrastructure::http::{DEFAULT_TIMEOUT, build_http_client};

/// Everything that varies between production and test environments.
/// Catalog clients and services are created from it.
#[derive(Debug, Clone)]
pub struct AppStateConfig {
    pub open_library_url: Url,
    pub google_books_url: Url,
    pub catalog_timeout: Duration,
    pub languages: LanguageHints,
    pub suggestion_limit: usize,
    pub cover_size: CoverSize,
}

impl AppStateConfig {
    pub fn new(open_library_url: Url, google_books_url: Url) -> Self {
        Self {
            open_library_url,
            google_books_url,
            catalog_timeout: DEFAULT_TIMEOUT,
            languages: LanguageHints::default(),
            suggestion_limit: DEFAULT_LIMIT,
            cover_size: CoverSize::default(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub suggestion_service: SuggestionService,
    pub isbn_resolver: IsbnResolver,
    pub details_service: DetailsService,
}

impl AppState {
    /// Build the catalog clients over one shared HTTP client.
    pub fn from_config(config: AppStateConfig) -> Result<Self, reqwest::Error> {
        let http = build_http_client()?;

        let library: Arc<dyn LibraryCatalog> = Arc::new(OpenLibraryClient::new(
            http.clone(),
            config.open_library_url,
            config.catalog_timeout,
        ));
        let volumes: Arc<dyn VolumeCatalog> = Arc::new(
            GoogleBooksClient::new(http, config.google_books_url, config.catalog_timeout)
                .with_cover_size(config.cover_size),
        );

        Ok(Self::from_catalogs(
            library,
            volumes,
            config.languages,
            config.suggestion_limit,
        ))
    }

    pub fn from_catalogs(
        library: Arc<dyn LibraryCatalog>,
        volumes: Arc<dyn VolumeCatalog>,
        languages: LanguageHints,
        suggestion_limit: usize,
    ) -> Self {
        let suggestion_service = SuggestionService::new(Arc::clone(&library), Arc::clone(&volumes))
            .with_languages(languages)
            .with_limit(suggestion_limit);
        let isbn_resolver = IsbnResolver::new(Arc::clone(&library), Arc::clone(&volumes));
        let details_service = DetailsService::new(library, volumes);

        Self {
            suggestion_service,
            isbn_resolver,
            details_service,
        }
    }
}
