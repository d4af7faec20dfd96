mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::catalogs::{CatalogQuery, VolumeCatalog};
use crate::domain::covers::CoverSize;
use crate::domain::details::BookDetails;
use crate::domain::errors::CatalogError;
use crate::domain::suggestions::CatalogRecord;
use crate::infrastructure::http::{get_json, join, with_trailing_slash};

use dto::VolumesResponse;

pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/";

const CATALOG: &str = "google_books";
const DETAIL_VOLUMES: usize = 5;

pub struct GoogleBooksClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
    cover_size: CoverSize,
}

impl GoogleBooksClient {
    pub fn new(http: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
            timeout,
            cover_size: CoverSize::default(),
        }
    }

    pub fn with_cover_size(mut self, size: CoverSize) -> Self {
        self.cover_size = size;
        self
    }

    pub async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        let response = self
            .volumes(&query.text, query.limit, query.language.as_deref())
            .await?;
        let records: Vec<CatalogRecord> = response
            .infos()
            .map(|info| info.record(self.cover_size))
            .filter(|record| !record.is_blank())
            .collect();
        debug!(
            query = %query.text,
            language = query.language.as_deref().unwrap_or("any"),
            results = records.len(),
            "google books search"
        );
        Ok(records)
    }

    pub async fn lookup_isbn(&self, isbn: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        let response = self.volumes(&format!("isbn:{isbn}"), 1, None).await?;
        Ok(self.first_record(&response))
    }

    pub async fn lookup_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<CatalogRecord>, CatalogError> {
        let response = self.volumes(&title_author_query(title, author), 1, None).await?;
        Ok(self.first_record(&response))
    }

    pub async fn lookup_details(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Vec<BookDetails>, CatalogError> {
        let response = self
            .volumes(&title_author_query(title, author), DETAIL_VOLUMES, None)
            .await?;
        Ok(response.infos().map(dto::VolumeInfo::details).collect())
    }

    fn first_record(&self, response: &VolumesResponse) -> Option<CatalogRecord> {
        response
            .infos()
            .next()
            .map(|info| info.record(self.cover_size))
            .filter(|record| !record.is_blank())
    }

    async fn volumes(
        &self,
        q: &str,
        max_results: usize,
        language: Option<&str>,
    ) -> Result<VolumesResponse, CatalogError> {
        let url = join(&self.base_url, "volumes", CATALOG)?;
        let max_results = max_results.to_string();
        let mut params = vec![("q", q), ("maxResults", max_results.as_str())];
        if let Some(language) = language {
            params.push(("langRestrict", language));
        }
        get_json(
            self.http.get(url).query(&params).timeout(self.timeout),
            CATALOG,
        )
        .await
    }
}

fn title_author_query(title: &str, author: &str) -> String {
    if author.trim().is_empty() {
        format!("intitle:\"{title}\"")
    } else {
        format!("intitle:\"{title}\" inauthor:\"{author}\"")
    }
}

#[async_trait]
impl VolumeCatalog for GoogleBooksClient {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.search(query).await
    }

    async fn lookup_isbn(&self, isbn: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        self.lookup_isbn(isbn).await
    }

    async fn lookup_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<CatalogRecord>, CatalogError> {
        self.lookup_title_author(title, author).await
    }

    async fn lookup_details(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Vec<BookDetails>, CatalogError> {
        self.lookup_details(title, author).await
    }
}
