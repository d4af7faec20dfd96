use std::cmp::Reverse;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::suggestions::{BookSuggestion, UNKNOWN_AUTHOR};

const MAX_TITLE_CHARS: usize = 500;
const MAX_AUTHOR_CHARS: usize = 500;
const MAX_GENRE_CHARS: usize = 200;
const MAX_NOTES_CHARS: usize = 10_000;
const MAX_COVER_URL_CHARS: usize = 2_000;
const EARLIEST_READ_YEAR: i32 = 1450;

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadStatus {
    #[default]
    Read,
    ToRead,
}

impl ReadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadStatus::Read => "read",
            ReadStatus::ToRead => "to_read",
        }
    }
}

impl FromStr for ReadStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "read" => Ok(ReadStatus::Read),
            "to_read" => Ok(ReadStatus::ToRead),
            _ => Err(()),
        }
    }
}

/// When a book was read: 1-12 are calendar months, 13-16 the seasons
/// Spring, Summer, Fall and Winter for readers who only remember roughly.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ReadMonth(u8);

impl ReadMonth {
    pub const SPRING: ReadMonth = ReadMonth(13);
    pub const SUMMER: ReadMonth = ReadMonth(14);
    pub const FALL: ReadMonth = ReadMonth(15);
    pub const WINTER: ReadMonth = ReadMonth(16);

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (1..=16).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(
                "month",
                format!("must be 1-12 or a season code 13-16, got {value}"),
            ))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_season(self) -> bool {
        self.0 > 12
    }

    pub fn short_label(self) -> &'static str {
        self.calendar_index()
            .map_or_else(|| self.season_label(), |i| SHORT_MONTHS[i])
    }

    pub fn long_label(self) -> &'static str {
        self.calendar_index()
            .map_or_else(|| self.season_label(), |i| LONG_MONTHS[i])
    }

    /// Position within a year for newest-first ordering; seasons sit at their
    /// middle month (Winter, spanning December to February, counts as January).
    pub fn sort_key(self) -> u8 {
        match self.0 {
            13 => 4,
            14 => 7,
            15 => 10,
            16 => 1,
            month => month,
        }
    }

    fn calendar_index(self) -> Option<usize> {
        (!self.is_season()).then(|| usize::from(self.0 - 1))
    }

    fn season_label(self) -> &'static str {
        match self.0 {
            13 => "Spring",
            14 => "Summer",
            15 => "Fall",
            _ => "Winter",
        }
    }
}

impl TryFrom<u8> for ReadMonth {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReadMonth> for u8 {
    fn from(month: ReadMonth) -> Self {
        month.0
    }
}

/// Sort key for an optional month; unknown months sort last.
pub fn month_sort_key(month: Option<ReadMonth>) -> u8 {
    month.map_or(0, ReadMonth::sort_key)
}

/// A book on a user's shelf, as owned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: i32,
    pub month: Option<ReadMonth>,
    pub rating: u8,
    pub notes: Option<String>,
    pub cover_url: Option<String>,
    pub status: ReadStatus,
    pub created_at: DateTime<Utc>,
}

/// Order books newest year first, then latest month, then most recently added.
pub fn sort_books(books: &mut [BookRecord]) {
    books.sort_by_key(|book| {
        (
            Reverse(book.year),
            Reverse(month_sort_key(book.month)),
            Reverse(book.created_at),
        )
    });
}

/// A book being drafted by the add/edit flows before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookRecord {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub month: Option<ReadMonth>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub status: ReadStatus,
}

impl NewBookRecord {
    /// Start a draft from a picked suggestion. The rating is left for the reader to set.
    pub fn draft_from(suggestion: BookSuggestion, year: i32) -> Self {
        let author = if suggestion.author == UNKNOWN_AUTHOR {
            String::new()
        } else {
            suggestion.author
        };
        Self {
            title: suggestion.title,
            author,
            genre: None,
            year,
            month: None,
            rating: 0,
            notes: None,
            cover_url: suggestion.cover_url,
            status: ReadStatus::Read,
        }
    }

    /// Draft for the reading list, which carries no year or rating.
    pub fn to_read_from(suggestion: BookSuggestion) -> Self {
        Self {
            status: ReadStatus::ToRead,
            ..Self::draft_from(suggestion, 0)
        }
    }

    pub fn normalize(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.author = self.author.trim().to_string();
        self.genre = normalize_optional_field(self.genre);
        self.notes = normalize_optional_field(self.notes);
        self.cover_url = normalize_optional_field(self.cover_url);
        self
    }

    /// Check field limits. Year and rating are only enforced for books already read.
    pub fn validate(&self, current_year: i32) -> Result<(), ValidationError> {
        let title_len = self.title.trim().chars().count();
        if title_len == 0 {
            return Err(ValidationError::new("title", "title is required"));
        }
        check_max("title", &self.title, MAX_TITLE_CHARS)?;
        check_max("author", &self.author, MAX_AUTHOR_CHARS)?;
        if let Some(genre) = &self.genre {
            check_max("genre", genre, MAX_GENRE_CHARS)?;
        }
        if let Some(notes) = &self.notes {
            check_max("notes", notes, MAX_NOTES_CHARS)?;
        }
        if let Some(cover_url) = self.cover_url.as_deref().filter(|s| !s.is_empty()) {
            check_max("cover_url", cover_url, MAX_COVER_URL_CHARS)?;
            url::Url::parse(cover_url)
                .map_err(|e| ValidationError::new("cover_url", format!("invalid URL: {e}")))?;
        }

        if self.status == ReadStatus::Read {
            let latest = current_year + 1;
            if !(EARLIEST_READ_YEAR..=latest).contains(&self.year) {
                return Err(ValidationError::new(
                    "year",
                    format!("must be between {EARLIEST_READ_YEAR} and {latest}"),
                ));
            }
            if !(1..=5).contains(&self.rating) {
                return Err(ValidationError::new("rating", "must be between 1 and 5"));
            }
        }

        Ok(())
    }
}

fn check_max(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

fn normalize_optional_field(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
