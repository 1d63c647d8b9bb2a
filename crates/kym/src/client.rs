// ABOUTME: The main Client struct handling site search and entry page lookups.
// ABOUTME: Public search/get_meme never fail; try_ variants surface ScrapeError for callers that care.

use scraper::Html;
use tracing::warn;

use crate::error::ScrapeError;
use crate::extract::{meta, search, sections};
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::{MemeDetails, SearchHit};
use crate::urls;

/// Number of search hits returned when the caller has no particular cap.
pub const DEFAULT_SEARCH_MAX: usize = 10;

/// The main memedex client.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// A ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Construct a Client from the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Search the site for entries matching `query`, returning at most
    /// `max` hits.
    ///
    /// Never fails: network and markup problems are logged and yield an
    /// empty list.
    pub async fn search(&self, query: &str, max: usize) -> Vec<SearchHit> {
        match self.try_search(query, max).await {
            Ok(hits) => hits,
            Err(err) => {
                warn!("search {:?} failed: {}", query, err);
                Vec::new()
            }
        }
    }

    /// Fallible variant of [`search`](Self::search).
    pub async fn try_search(
        &self,
        query: &str,
        max: usize,
    ) -> Result<Vec<SearchHit>, ScrapeError> {
        let url = urls::search_url(&self.opts.base_url, query).ok_or_else(|| {
            ScrapeError::invalid_url(
                &self.opts.base_url,
                "Search",
                Some(anyhow::anyhow!("origin does not parse as a URL")),
            )
        })?;
        let fetched = fetch(&self.http_client, &url, &self.fetch_options()).await?;
        Ok(self.search_from_html(&fetched.text(), max))
    }

    /// Extract search hits from an already-fetched listing page.
    pub fn search_from_html(&self, html: &str, max: usize) -> Vec<SearchHit> {
        let doc = Html::parse_document(html);
        search::collect_hits(&doc, &self.opts.base_url, max)
    }

    /// Fetch and extract one entry page.
    ///
    /// Returns `None` (with a logged diagnostic) when the URL is not under
    /// the site origin or the fetch fails. Extraction itself never fails;
    /// missing fields degrade to empty values.
    pub async fn get_meme(&self, url: &str) -> Option<MemeDetails> {
        match self.try_get_meme(url).await {
            Ok(details) => Some(details),
            Err(err) => {
                warn!("{}", err);
                None
            }
        }
    }

    /// Fallible variant of [`get_meme`](Self::get_meme).
    ///
    /// The origin precondition is checked before any I/O happens.
    pub async fn try_get_meme(&self, url: &str) -> Result<MemeDetails, ScrapeError> {
        let trimmed = url.trim();
        if !trimmed.starts_with(&self.opts.base_url) {
            return Err(ScrapeError::invalid_url(
                url,
                "GetMeme",
                Some(anyhow::anyhow!("expected a {} URL", self.opts.base_url)),
            ));
        }
        let fetched = fetch(&self.http_client, trimmed, &self.fetch_options()).await?;
        Ok(self.meme_from_html(&fetched.text(), trimmed))
    }

    /// Extract entry details from an already-fetched page.
    pub fn meme_from_html(&self, html: &str, url: &str) -> MemeDetails {
        let doc = Html::parse_document(html);
        let stats = meta::entry_stats(&doc);
        MemeDetails {
            title: meta::title(&doc),
            link: url.trim().to_string(),
            image: meta::hero_image(&doc),
            views: meta::views(&doc),
            sections: sections::body_sections(&doc),
            trends_url: meta::trends_url(&doc),
            types: stats.types,
            year: stats.year,
            origin: stats.origin,
            region: stats.region,
            tags: meta::tags(&doc),
        }
    }

    fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            headers: self.opts.headers.clone(),
        }
    }
}
