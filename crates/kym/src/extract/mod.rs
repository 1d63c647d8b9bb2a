// ABOUTME: Extraction strategies for the two page shapes the site serves.
// ABOUTME: Every submodule is a pure transform over an already-parsed document.

//! Extraction module.
//!
//! Pure transforms over a parsed document, split by concern:
//! - `select`: cached selectors and small query helpers.
//! - `sanitize`: citation-marker stripping.
//! - `media`: media-block classification into content items.
//! - `sections`: the body walker producing titled sections.
//! - `meta`: fixed-path entry metadata lookups.
//! - `search`: the listing-page walk.

pub mod media;
pub mod meta;
pub mod sanitize;
pub mod search;
pub mod sections;
pub(crate) mod select;
