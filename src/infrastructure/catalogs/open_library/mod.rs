mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::domain::catalogs::{CatalogQuery, LibraryCatalog};
use crate::domain::details::BookDetails;
use crate::domain::errors::CatalogError;
use crate::domain::suggestions::CatalogRecord;
use crate::infrastructure::http::{get_json, join, with_trailing_slash};

use dto::{SearchResponse, WorkResponse};

pub const OPEN_LIBRARY_URL: &str = "https://openlibrary.org/";

const CATALOG: &str = "open_library";
const SEARCH_FIELDS: &str = "title,author_name,cover_i,cover_edition_key,isbn";
const DETAIL_FIELDS: &str = "key,subject";

pub struct OpenLibraryClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
}

impl OpenLibraryClient {
    pub fn new(http: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
            timeout,
        }
    }

    pub async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        let url = join(&self.base_url, "search.json", CATALOG)?;
        let limit = query.limit.to_string();
        let mut params = vec![
            ("q", query.text.as_str()),
            ("fields", SEARCH_FIELDS),
            ("limit", limit.as_str()),
        ];
        if let Some(language) = query.language.as_deref() {
            params.push(("language", language));
        }

        let response: SearchResponse = get_json(
            self.http.get(url).query(&params).timeout(self.timeout),
            CATALOG,
        )
        .await?;

        let records: Vec<CatalogRecord> = response
            .docs
            .into_iter()
            .map(dto::SearchDoc::into_record)
            .filter(|record| !record.is_blank())
            .collect();
        debug!(
            query = %query.text,
            language = query.language.as_deref().unwrap_or("any"),
            results = records.len(),
            "open library search"
        );
        Ok(records)
    }

    /// Genre from the first subject of the best match, description from its work record.
    pub async fn lookup_details(
        &self,
        title: &str,
        author: &str,
    ) -> Result<BookDetails, CatalogError> {
        let url = join(&self.base_url, "search.json", CATALOG)?;
        let mut params = vec![("title", title)];
        if !author.trim().is_empty() {
            params.push(("author", author));
        }
        params.extend([("fields", DETAIL_FIELDS), ("limit", "1")]);

        let response: SearchResponse = get_json(
            self.http.get(url).query(&params).timeout(self.timeout),
            CATALOG,
        )
        .await?;

        let Some(doc) = response.docs.into_iter().next() else {
            return Ok(BookDetails::default());
        };

        let mut details = BookDetails {
            genre: doc.first_subject(),
            ..BookDetails::default()
        };

        if let Some(key) = doc.key.as_deref().filter(|k| !k.is_empty()) {
            match self.work(key).await {
                Ok(work) => details.description = work.description(),
                Err(err) => warn!(key, error = %err, "failed to fetch open library work"),
            }
        }

        Ok(details)
    }

    async fn work(&self, key: &str) -> Result<WorkResponse, CatalogError> {
        let path = format!("{}.json", key.trim_start_matches('/'));
        let url = join(&self.base_url, &path, CATALOG)?;
        get_json(self.http.get(url).timeout(self.timeout), CATALOG).await
    }
}

#[async_trait]
impl LibraryCatalog for OpenLibraryClient {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.search(query).await
    }

    async fn lookup_details(
        &self,
        title: &str,
        author: &str,
    ) -> Result<BookDetails, CatalogError> {
        self.lookup_details(title, author).await
    }
}
