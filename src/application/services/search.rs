use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, info};

use crate::application::services::settle::{first_some, settle_all};
use crate::domain::catalogs::{CatalogQuery, LibraryCatalog, VolumeCatalog};
use crate::domain::errors::CatalogError;
use crate::domain::ranking::{DEFAULT_LIMIT, rank};
use crate::domain::suggestions::{BookSuggestion, CatalogRecord, RichCandidate};

pub const DEFAULT_LIBRARY_LANGUAGE: &str = "ger";
pub const DEFAULT_VOLUME_LANGUAGE: &str = "de";

type Search<'a> = BoxFuture<'a, Result<Vec<CatalogRecord>, CatalogError>>;
type CoverAttempt<'a> = BoxFuture<'a, Result<Option<String>, CatalogError>>;

/// Secondary language restriction applied alongside each unrestricted search.
/// `None` skips that catalog's restricted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageHints {
    pub library: Option<String>,
    pub volumes: Option<String>,
}

impl Default for LanguageHints {
    fn default() -> Self {
        Self {
            library: Some(DEFAULT_LIBRARY_LANGUAGE.to_string()),
            volumes: Some(DEFAULT_VOLUME_LANGUAGE.to_string()),
        }
    }
}

impl LanguageHints {
    pub fn none() -> Self {
        Self {
            library: None,
            volumes: None,
        }
    }
}

/// Free-text autofill: fan out to both catalogs, rank, then backfill covers.
#[derive(Clone)]
pub struct SuggestionService {
    library: Arc<dyn LibraryCatalog>,
    volumes: Arc<dyn VolumeCatalog>,
    languages: LanguageHints,
    limit: usize,
}

impl SuggestionService {
    pub fn new(library: Arc<dyn LibraryCatalog>, volumes: Arc<dyn VolumeCatalog>) -> Self {
        Self {
            library,
            volumes,
            languages: LanguageHints::default(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_languages(mut self, languages: LanguageHints) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Vec<BookSuggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let candidates = self.gather(query).await;
        let pool = candidates.len();
        let ranked = rank(candidates, query, self.limit);
        let suggestions: Vec<BookSuggestion> = self
            .backfill_covers(ranked)
            .await
            .into_iter()
            .map(RichCandidate::into_suggestion)
            .collect();

        info!(
            pool,
            returned = suggestions.len(),
            with_cover = suggestions.iter().filter(|s| s.has_cover()).count(),
            "suggestions ranked"
        );
        suggestions
    }

    /// Run every configured search concurrently and pool what succeeded.
    async fn gather(&self, query: &str) -> Vec<RichCandidate> {
        let global = CatalogQuery::new(query);
        let library_local = self
            .languages
            .library
            .as_deref()
            .map(|language| CatalogQuery::new(query).with_language(Some(language)));
        let volumes_local = self
            .languages
            .volumes
            .as_deref()
            .map(|language| CatalogQuery::new(query).with_language(Some(language)));

        let mut searches: Vec<Search<'_>> = Vec::with_capacity(4);
        searches.push(self.library.search(&global));
        if let Some(local) = &library_local {
            searches.push(self.library.search(local));
        }
        searches.push(self.volumes.search(&global));
        if let Some(local) = &volumes_local {
            searches.push(self.volumes.search(local));
        }

        settle_all(searches)
            .await
            .into_iter()
            .flatten()
            .map(RichCandidate::from)
            .collect()
    }

    /// Look up covers for the ranked entries that still lack one.
    async fn backfill_covers(&self, ranked: Vec<RichCandidate>) -> Vec<RichCandidate> {
        let lookups = ranked.iter().map(|candidate| async move {
            if candidate.has_cover() {
                None
            } else {
                self.find_cover(candidate).await
            }
        });
        let covers = futures::future::join_all(lookups).await;

        ranked
            .into_iter()
            .zip(covers)
            .map(|(mut candidate, cover)| {
                if let Some(cover_url) = cover {
                    debug!(title = %candidate.title, "cover backfilled");
                    candidate.cover_url = Some(cover_url);
                }
                candidate
            })
            .collect()
    }

    async fn find_cover(&self, candidate: &RichCandidate) -> Option<String> {
        let mut attempts: Vec<CoverAttempt<'_>> = Vec::with_capacity(2);
        if let Some(isbn) = candidate.isbn.as_deref() {
            attempts.push(
                self.volumes
                    .lookup_isbn(isbn)
                    .map(|found| found.map(cover_of))
                    .boxed(),
            );
        }
        if candidate.has_known_author() {
            attempts.push(
                self.volumes
                    .lookup_title_author(&candidate.title, &candidate.author)
                    .map(|found| found.map(cover_of))
                    .boxed(),
            );
        }
        if attempts.is_empty() {
            return None;
        }
        first_some(attempts).await
    }
}

fn cover_of(record: Option<CatalogRecord>) -> Option<String> {
    record.and_then(|record| record.cover_url)
}
