use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const OPEN_LIBRARY_COVERS_URL: &str = "https://covers.openlibrary.org/b";

const SIZE_HINT_KEY: &str = "fife";
const ZOOM_KEY: &str = "zoom";
const MAX_DETAIL_ZOOM: &str = "0";

/// Width hint appended to Google Books cover links.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverSize {
    /// Autocomplete and list thumbnails.
    #[default]
    Card,
    /// Full-width detail hero.
    Hero,
}

impl CoverSize {
    pub fn as_str(self) -> &'static str {
        match self {
            CoverSize::Card => "card",
            CoverSize::Hero => "hero",
        }
    }

    pub fn width_hint(self) -> &'static str {
        match self {
            CoverSize::Card => "w600",
            CoverSize::Hero => "w1200",
        }
    }
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "card" => Ok(CoverSize::Card),
            "hero" => Ok(CoverSize::Hero),
            other => Err(format!("unknown cover size '{other}' (expected card or hero)")),
        }
    }
}

/// Rewrite a raw Google Books image link into its high-resolution HTTPS form.
///
/// Upgrades `http:` to `https:`, forces every numeric `zoom` to `0`, removes
/// all existing `fife` size hints and appends exactly one for `size`.
/// Applying it again yields the same string.
pub fn normalize_cover_url(raw: &str, size: CoverSize) -> String {
    let upgraded = match raw.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => raw.to_string(),
    };

    let (base, query, has_query) = match upgraded.split_once('?') {
        Some((base, query)) => (base, query, true),
        None => match upgraded.split_once('&') {
            Some((base, rest)) => (base, rest, false),
            None => (upgraded.as_str(), "", false),
        },
    };

    let params: Vec<String> = query
        .split('&')
        .filter(|param| !param.is_empty() && !is_param(param, SIZE_HINT_KEY))
        .map(force_max_zoom)
        .collect();

    let mut normalized = String::with_capacity(upgraded.len() + 12);
    normalized.push_str(base);
    if has_query {
        normalized.push('?');
        for param in &params {
            normalized.push_str(param);
            normalized.push('&');
        }
    } else {
        for param in &params {
            normalized.push('&');
            normalized.push_str(param);
        }
        normalized.push('&');
    }
    normalized.push_str(SIZE_HINT_KEY);
    normalized.push('=');
    normalized.push_str(size.width_hint());
    normalized
}

fn is_param(param: &str, key: &str) -> bool {
    param
        .strip_prefix(key)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
}

fn force_max_zoom(param: &str) -> String {
    match param.split_once('=') {
        Some((ZOOM_KEY, value))
            if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!("{ZOOM_KEY}={MAX_DETAIL_ZOOM}")
        }
        _ => param.to_string(),
    }
}

/// An Open Library cover identifier, in the order the search flow prefers them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CoverRef<'a> {
    Id(i64),
    EditionKey(&'a str),
    Isbn(&'a str),
}

pub fn open_library_cover_url(cover: CoverRef<'_>) -> String {
    match cover {
        CoverRef::Id(id) => format!("{OPEN_LIBRARY_COVERS_URL}/id/{id}-L.jpg"),
        CoverRef::EditionKey(olid) => format!("{OPEN_LIBRARY_COVERS_URL}/olid/{olid}-L.jpg"),
        CoverRef::Isbn(isbn) => format!("{OPEN_LIBRARY_COVERS_URL}/isbn/{isbn}-L.jpg"),
    }
}
