use serde::Deserialize;

use crate::domain::covers::{CoverSize, normalize_cover_url};
use crate::domain::details::{BookDetails, clean_description, genre_from_category, year_from_published};
use crate::domain::suggestions::CatalogRecord;
use crate::infrastructure::catalogs::lenient::{lenient, lenient_vec};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VolumesResponse {
    #[serde(deserialize_with = "lenient_vec")]
    pub items: Vec<Volume>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volume {
    #[serde(deserialize_with = "lenient")]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub published_date: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_links: Option<ImageLinks>,
    #[serde(deserialize_with = "lenient_vec")]
    pub industry_identifiers: Vec<IndustryIdentifier>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(deserialize_with = "lenient")]
    pub extra_large: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub large: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub medium: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
}

impl ImageLinks {
    /// Richest variant present, largest first.
    pub fn best(&self) -> Option<&str> {
        [
            &self.extra_large,
            &self.large,
            &self.medium,
            &self.thumbnail,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|link| !link.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndustryIdentifier {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub identifier: Option<String>,
}

impl VolumeInfo {
    pub fn cover_url(&self, size: CoverSize) -> Option<String> {
        self.image_links
            .as_ref()
            .and_then(ImageLinks::best)
            .map(|raw| normalize_cover_url(raw, size))
    }

    /// ISBN-13 when listed, else ISBN-10.
    pub fn isbn(&self) -> Option<String> {
        self.identifier("ISBN_13")
            .or_else(|| self.identifier("ISBN_10"))
            .map(str::to_string)
    }

    fn identifier(&self, kind: &str) -> Option<&str> {
        self.industry_identifiers
            .iter()
            .find(|id| id.kind.as_deref() == Some(kind))
            .and_then(|id| id.identifier.as_deref())
            .filter(|id| !id.is_empty())
    }

    pub fn record(&self, size: CoverSize) -> CatalogRecord {
        CatalogRecord::new(
            self.title.clone(),
            self.authors.first().cloned(),
            self.cover_url(size),
            self.isbn(),
        )
    }

    pub fn details(&self) -> BookDetails {
        BookDetails {
            description: self.description.as_deref().and_then(clean_description),
            genre: self
                .categories
                .first()
                .and_then(|category| genre_from_category(category)),
            published_year: self.published_date.as_deref().and_then(year_from_published),
        }
    }
}

impl VolumesResponse {
    pub fn infos(&self) -> impl Iterator<Item = &VolumeInfo> {
        self.items.iter().filter_map(|item| item.volume_info.as_ref())
    }
}
