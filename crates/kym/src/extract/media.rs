// ABOUTME: Classifies a media block into content items: video embeds or linked images.
// ABOUTME: Checks run in priority order; the first embed family found claims the whole block.

use scraper::ElementRef;

use crate::extract::select::{all_in, attr_chain, first_in};
use crate::result::ContentItem;
use crate::urls::watch_url;

/// Produce the content items for one media block.
///
/// Priority order: lite-youtube embeds, then a lite-tiktok embed, then
/// anchor-wrapped images. A block matching an earlier family never falls
/// through to a later one. Embeds missing their URL-bearing attributes are
/// skipped rather than emitted with junk URLs.
pub fn classify(block: ElementRef<'_>) -> Vec<ContentItem> {
    let youtube = all_in(block, "lite-youtube");
    if !youtube.is_empty() {
        return youtube
            .into_iter()
            .filter_map(|embed| {
                let id = attr_chain(embed, &["videoid"])?;
                let params = embed.value().attr("params");
                Some(ContentItem::Video {
                    url: watch_url(&id, params),
                })
            })
            .collect();
    }

    if let Some(tiktok) = first_in(block, "lite-tiktok") {
        let url = first_in(tiktok, "blockquote")
            .and_then(|quote| attr_chain(quote, &["cite"]))
            .or_else(|| {
                first_in(tiktok, "a").and_then(|anchor| attr_chain(anchor, &["href"]))
            });
        return match url {
            Some(url) => vec![ContentItem::Video { url }],
            None => Vec::new(),
        };
    }

    all_in(block, "a img")
        .into_iter()
        .filter_map(|img| {
            let url = attr_chain(img, &["data-src", "src"])?;
            let alt = img.value().attr("alt").unwrap_or_default().to_string();
            Some(ContentItem::Image { url, alt })
        })
        .collect()
}
