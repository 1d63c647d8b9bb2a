// ABOUTME: URL helpers for site links, search queries, video embeds, and social post links.
// ABOUTME: Centralizes every URL normalization rule so extractors stay selector-focused.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Matches the start offset inside a lite-youtube params attribute.
static START_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"start=(\d+)").expect("start param regex must compile"));

/// Hosts whose links inside quote blocks count as social posts.
const SOCIAL_HOSTS: &[&str] = &["twitter.com", "x.com"];

/// Build the search URL for a query under the given origin.
///
/// The query is percent-encoded by the url crate; `None` only when the
/// origin itself does not parse.
pub fn search_url(base: &str, query: &str) -> Option<String> {
    let url = Url::parse_with_params(&format!("{}/search", base), &[("q", query)]).ok()?;
    Some(url.to_string())
}

/// Resolve an anchor target against the site origin.
///
/// Handles relative paths and already-absolute links alike; falls back to
/// plain concatenation if the origin does not parse.
pub fn absolute_site_link(base: &str, href: &str) -> String {
    match Url::parse(base).and_then(|b| b.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base, href),
    }
}

/// Build a YouTube watch URL from a lite-youtube embed.
///
/// Appends `&start=N` when the embed's params carry a start offset.
pub fn watch_url(video_id: &str, params: Option<&str>) -> String {
    let mut url = format!("https://www.youtube.com/watch?v={}", video_id);
    if let Some(params) = params {
        if let Some(caps) = START_PARAM_RE.captures(params) {
            url.push_str("&start=");
            url.push_str(&caps[1]);
        }
    }
    url
}

/// Returns true if the link target points at a known social platform.
pub fn is_social_post(href: &str) -> bool {
    Url::parse(href.trim())
        .ok()
        .and_then(|u| u.host_str().map(is_social_host))
        .unwrap_or(false)
}

fn is_social_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    SOCIAL_HOSTS.iter().any(|h| match host.strip_suffix(h) {
        Some(prefix) => prefix.is_empty() || prefix.ends_with('.'),
        None => false,
    })
}

/// Canonical form of a social post link: tracking query stripped, twitter
/// hosts rewritten to x.com. Unparseable links pass through trimmed.
pub fn canonical_post_url(href: &str) -> String {
    let trimmed = href.trim();
    let Ok(mut url) = Url::parse(trimmed) else {
        return trimmed.to_string();
    };
    url.set_query(None);
    if url.host_str().map(is_social_host).unwrap_or(false)
        && url.set_host(Some("x.com")).is_err()
    {
        return trimmed.to_string();
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_url_encodes_query() {
        let url = search_url("https://knowyourmeme.com", "doge meme").unwrap();
        assert_eq!(url, "https://knowyourmeme.com/search?q=doge+meme");
    }

    #[test]
    fn absolute_site_link_joins_relative_paths() {
        assert_eq!(
            absolute_site_link("https://knowyourmeme.com", "/memes/doge"),
            "https://knowyourmeme.com/memes/doge"
        );
    }

    #[test]
    fn absolute_site_link_keeps_absolute_targets() {
        assert_eq!(
            absolute_site_link("https://knowyourmeme.com", "https://i.kym-cdn.com/a.jpg"),
            "https://i.kym-cdn.com/a.jpg"
        );
    }

    #[test]
    fn watch_url_without_start() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ", None),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn watch_url_extracts_start_offset() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ", Some("controls=0&start=42&rel=0")),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=42"
        );
    }

    #[test]
    fn watch_url_ignores_params_without_start() {
        assert_eq!(
            watch_url("abc123", Some("controls=0&rel=0")),
            "https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn social_post_detection() {
        assert!(is_social_post("https://twitter.com/user/status/1"));
        assert!(is_social_post("https://www.twitter.com/user/status/1"));
        assert!(is_social_post("https://mobile.twitter.com/user/status/1"));
        assert!(is_social_post("https://x.com/user/status/1"));
        assert!(!is_social_post("https://facebook.com/post/1"));
        assert!(!is_social_post("https://nottwitter.com/status/1"));
        assert!(!is_social_post("/memes/doge"));
    }

    #[test]
    fn canonical_post_url_strips_query_and_rewrites_host() {
        assert_eq!(
            canonical_post_url("https://twitter.com/user/status/123?s=20&t=abc"),
            "https://x.com/user/status/123"
        );
        assert_eq!(
            canonical_post_url("https://x.com/user/status/123"),
            "https://x.com/user/status/123"
        );
    }

    #[test]
    fn canonical_post_url_passes_through_unparseable_links() {
        assert_eq!(canonical_post_url("  not a url  "), "not a url");
    }
}
