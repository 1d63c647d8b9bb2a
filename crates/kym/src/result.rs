// ABOUTME: Result types for scraped data: SearchHit, MemeDetails, Section, and ContentItem.
// ABOUTME: All types serialize to JSON; ContentItem carries a "kind" discriminant per variant.

use serde::{Deserialize, Serialize};

/// An image reference with its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

/// A single result row from the site search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub thumbnail: ImageRef,
}

/// One piece of content inside an entry section, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    /// An HTML fragment with citation markers stripped.
    Text { html: String },
    Image { url: String, alt: String },
    Video { url: String },
    SocialPost { url: String },
}

/// A titled slice of the entry body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Section {
    pub title: String,
    pub contents: Vec<ContentItem>,
}

/// Everything extracted from a single entry page.
///
/// Fields the page does not provide come back empty rather than failing the
/// whole extraction. `views` stays `None` when the counter is missing or
/// non-numeric; a page that really shows zero views yields `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MemeDetails {
    pub title: String,
    pub link: String,
    pub image: ImageRef,
    pub views: Option<u64>,
    pub sections: Vec<Section>,
    pub trends_url: String,
    pub types: Vec<String>,
    pub year: String,
    pub origin: String,
    pub region: String,
    pub tags: Vec<String>,
}

impl MemeDetails {
    /// Returns true if the extraction found no meaningful entry data.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.sections.is_empty()
    }

    /// Returns true if the entry has a hero image.
    pub fn has_image(&self) -> bool {
        !self.image.url.is_empty()
    }
}
