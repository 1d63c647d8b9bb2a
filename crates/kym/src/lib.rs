// ABOUTME: Main library entry point for the memedex KnowYourMeme scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, result types, and errors.

//! Structured meme data from KnowYourMeme pages.
//!
//! This crate fetches and parses the site's search listings and entry
//! pages, turning them into typed records: titled body sections with
//! their text, images, videos, and social posts, plus the entry's
//! classification sidebar and tags.
//!
//! # Example
//!
//! ```no_run
//! use memedex_kym::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder().build();
//!
//!     for hit in client.search("doge", 5).await {
//!         println!("{}: {}", hit.title, hit.link);
//!     }
//!
//!     if let Some(meme) = client.get_meme("https://knowyourmeme.com/memes/doge").await {
//!         println!("{} ({} sections)", meme.title, meme.sections.len());
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod options;
pub mod resource;
pub mod result;
pub mod urls;

pub use crate::client::{Client, DEFAULT_SEARCH_MAX};
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::options::{ClientBuilder, Options, DEFAULT_USER_AGENT, SITE_ORIGIN};
pub use crate::result::{ContentItem, ImageRef, MemeDetails, SearchHit, Section};
