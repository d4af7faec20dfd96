use anyhow::Result;
use reqwest::StatusCode;

use super::BookshelfClient;
use crate::domain::details::BookDetails;
use crate::domain::suggestions::BookSuggestion;

pub struct CatalogClient<'a> {
    client: &'a BookshelfClient,
}

impl<'a> CatalogClient<'a> {
    pub fn new(client: &'a BookshelfClient) -> Self {
        Self { client }
    }

    pub async fn suggestions(&self, query: &str) -> Result<Vec<BookSuggestion>> {
        let mut url = self.client.endpoint("api/v1/suggestions")?;
        url.query_pairs_mut().append_pair("q", query);
        let response = self.client.get(url).send().await?;
        self.client.handle_response(response).await
    }

    /// `None` when the server could not resolve the barcode.
    pub async fn isbn(&self, isbn: &str) -> Result<Option<BookSuggestion>> {
        let url = self.client.endpoint(&format!("api/v1/isbn/{isbn}"))?;
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.client.handle_response(response).await.map(Some)
    }

    pub async fn details(&self, title: &str, author: Option<&str>) -> Result<BookDetails> {
        let mut url = self.client.endpoint("api/v1/details")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("title", title);
            if let Some(author) = author {
                pairs.append_pair("author", author);
            }
        }
        let response = self.client.get(url).send().await?;
        self.client.handle_response(response).await
    }
}
