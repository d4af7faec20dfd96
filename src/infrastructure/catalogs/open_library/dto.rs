use serde::Deserialize;

use crate::domain::covers::{CoverRef, open_library_cover_url};
use crate::domain::details::clean_description;
use crate::domain::isbn::preferred_isbn;
use crate::domain::suggestions::CatalogRecord;
use crate::infrastructure::catalogs::lenient::{lenient, lenient_vec};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "lenient_vec")]
    pub docs: Vec<SearchDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchDoc {
    #[serde(deserialize_with = "lenient")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub author_name: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub cover_i: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub cover_edition_key: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub isbn: Vec<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub subject: Vec<String>,
}

impl SearchDoc {
    /// Cover id first, then edition key, then the first listed identifier.
    pub fn cover_ref(&self) -> Option<CoverRef<'_>> {
        if let Some(id) = self.cover_i.filter(|id| *id > 0) {
            return Some(CoverRef::Id(id));
        }
        if let Some(olid) = self.cover_edition_key.as_deref().filter(|k| !k.is_empty()) {
            return Some(CoverRef::EditionKey(olid));
        }
        self.isbn
            .first()
            .map(String::as_str)
            .filter(|isbn| !isbn.is_empty())
            .map(CoverRef::Isbn)
    }

    pub fn into_record(self) -> CatalogRecord {
        let cover_url = self.cover_ref().map(open_library_cover_url);
        let isbn = preferred_isbn(self.isbn.iter().map(String::as_str)).map(str::to_string);
        CatalogRecord::new(
            self.title,
            self.author_name.into_iter().next(),
            cover_url,
            isbn,
        )
    }

    pub fn first_subject(&self) -> Option<String> {
        self.subject
            .first()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkResponse {
    #[serde(deserialize_with = "lenient")]
    pub description: Option<WorkDescription>,
}

/// Work descriptions arrive either bare or as a typed text block.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WorkDescription {
    Text(String),
    Typed { value: String },
}

impl WorkResponse {
    pub fn description(&self) -> Option<String> {
        match self.description.as_ref()? {
            WorkDescription::Text(text) | WorkDescription::Typed { value: text } => {
                clean_description(text)
            }
        }
    }
}
