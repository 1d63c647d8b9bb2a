// ABOUTME: Configuration options for the memedex client including Options and ClientBuilder.
// ABOUTME: The builder covers timeouts, headers, the User-Agent, and the site origin.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// The origin every entry URL must live under.
pub const SITE_ORIGIN: &str = "https://knowyourmeme.com";

/// Default User-Agent. The site serves a degraded page to obvious bots,
/// so requests identify as a desktop browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Settings a Client is constructed from.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub base_url: String,
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Accept-Language".to_string(),
            "en-US,en;q=0.9".to_string(),
        );
        headers.insert(
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        );
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: SITE_ORIGIN.to_string(),
            headers,
            http_client: None,
        }
    }
}

/// Fluent builder for Client instances.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Start from the default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Override the User-Agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Override the site origin. Entry URLs are validated against this and
    /// search requests are issued under it. Mainly useful for tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        self.opts.base_url = base.trim_end_matches('/').to_string();
        self
    }

    /// Attach an extra header to every request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Supply a pre-built reqwest client, skipping the one build() would make.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Finish and construct the Client.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_carry_browser_profile() {
        let opts = Options::default();
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.base_url, SITE_ORIGIN);
        assert_eq!(opts.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(
            opts.headers.get("Accept-Language").map(String::as_str),
            Some("en-US,en;q=0.9")
        );
        assert!(opts.headers.contains_key("Accept"));
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let builder = ClientBuilder::new().base_url("http://127.0.0.1:9000/");
        assert_eq!(builder.opts.base_url, "http://127.0.0.1:9000");
    }
}
