// ABOUTME: Search listing extractor: walks gallery grids into SearchHit records.
// ABOUTME: Stops at the requested cap; items without a link target are skipped outright.

use scraper::{ElementRef, Html};

use crate::extract::select::{all, all_in, attr_chain, first_in_any};
use crate::result::{ImageRef, SearchHit};
use crate::urls::absolute_site_link;

const GALLERY_SELECTOR: &str = "section.gallery";
const ITEM_SELECTOR: &str = "div.groups a.item";

/// Thumbnail lookup tolerates layout drift: the grid wrapper first, then
/// any image under the item.
const THUMBNAIL_SELECTORS: &[&str] = &["div.not-vertical-only img", "img"];

/// Collect up to `max` hits from a listing document, in document order.
pub fn collect_hits(doc: &Html, origin: &str, max: usize) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    for gallery in all(doc, GALLERY_SELECTOR) {
        for item in all_in(gallery, ITEM_SELECTOR) {
            if hits.len() >= max {
                return hits;
            }
            let Some(link) = attr_chain(item, &["href"]) else {
                continue;
            };
            hits.push(SearchHit {
                title: item
                    .value()
                    .attr("data-title")
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
                link: absolute_site_link(origin, &link),
                thumbnail: thumbnail(item),
            });
        }
    }
    hits
}

fn thumbnail(item: ElementRef<'_>) -> ImageRef {
    match first_in_any(item, THUMBNAIL_SELECTORS) {
        Some(img) => ImageRef {
            url: attr_chain(img, &["data-image", "src"]).unwrap_or_default(),
            alt: img.value().attr("alt").unwrap_or_default().trim().to_string(),
        },
        None => ImageRef::default(),
    }
}
