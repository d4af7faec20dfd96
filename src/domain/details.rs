use serde::{Deserialize, Serialize};

/// Descriptions this short are usually placeholders rather than a synopsis.
const MIN_DESCRIPTION_CHARS: usize = 30;

/// Synopsis, genre and publication year gathered for a known title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<String>,
}

impl BookDetails {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.genre.is_none() && self.published_year.is_none()
    }
}

/// Keep a description only if it is long enough, with markup removed.
pub fn clean_description(raw: &str) -> Option<String> {
    if raw.chars().count() <= MIN_DESCRIPTION_CHARS {
        return None;
    }
    Some(strip_html(raw)).filter(|s| !s.is_empty())
}

/// First segment of a hierarchical category such as `"Fiction / Science Fiction"`.
pub fn genre_from_category(category: &str) -> Option<String> {
    category
        .split(" / ")
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Leading four characters of a published date (`"1965-08-01"`, `"1965"`).
pub fn year_from_published(date: &str) -> Option<String> {
    let year: String = date.trim().chars().take(4).collect();
    Some(year).filter(|y| !y.is_empty())
}

/// Remove tags and decode the few entities catalogs tend to embed.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}
