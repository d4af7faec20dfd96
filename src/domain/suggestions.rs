use serde::{Deserialize, Serialize};

/// Author placeholder used when a catalog names no author for a search hit.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A book offered to the caller as an autofill candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSuggestion {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl BookSuggestion {
    pub fn has_cover(&self) -> bool {
        self.cover_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// A search hit moving through ranking and cover backfill.
///
/// The ISBN only exists to drive the backfill lookups and is dropped by
/// [`RichCandidate::into_suggestion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichCandidate {
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
    pub isbn: Option<String>,
}

impl RichCandidate {
    pub fn has_cover(&self) -> bool {
        self.cover_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    pub fn has_known_author(&self) -> bool {
        !self.author.trim().is_empty() && self.author != UNKNOWN_AUTHOR
    }

    /// Case-insensitive, trimmed title used as the deduplication key.
    pub fn title_key(&self) -> String {
        normalize_title(&self.title)
    }

    pub fn into_suggestion(self) -> BookSuggestion {
        BookSuggestion {
            title: self.title,
            author: self.author,
            cover_url: self.cover_url,
        }
    }
}

pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// One record as parsed out of a catalog response.
///
/// Every field the catalog omitted (or sent as an empty string) is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    pub cover_url: Option<String>,
    pub isbn: Option<String>,
}

impl CatalogRecord {
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        cover_url: Option<String>,
        isbn: Option<String>,
    ) -> Self {
        Self {
            title: non_empty(title),
            author: non_empty(author),
            cover_url: non_empty(cover_url),
            isbn: non_empty(isbn),
        }
    }

    /// True when the record carries none of title, author or cover.
    pub fn is_blank(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.cover_url.is_none()
    }

    /// Take fields from `other` only where this record has none.
    pub fn fill_missing(&mut self, other: CatalogRecord) {
        if self.title.is_none() {
            self.title = other.title;
        }
        if self.author.is_none() {
            self.author = other.author;
        }
        if self.cover_url.is_none() {
            self.cover_url = other.cover_url;
        }
        if self.isbn.is_none() {
            self.isbn = other.isbn;
        }
    }
}

impl From<CatalogRecord> for RichCandidate {
    fn from(record: CatalogRecord) -> Self {
        Self {
            title: record.title.unwrap_or_default(),
            author: record.author.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            cover_url: record.cover_url,
            isbn: record.isbn,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
