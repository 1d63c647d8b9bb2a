// ABOUTME: The body walker: folds an entry's child nodes into titled sections of typed content.
// ABOUTME: Headings open sections, the sentinel heading halts, everything before a heading is dropped.

use scraper::{ElementRef, Html};

use crate::extract::media;
use crate::extract::sanitize::strip_footnotes;
use crate::extract::select::{all_in, first, inner_text};
use crate::result::{ContentItem, Section};
use crate::urls::{canonical_post_url, is_social_post};

/// Heading text that marks the start of the trend-chart block; nothing at
/// or after it belongs to the extractable body.
pub const SENTINEL_HEADING: &str = "Search Interest";

const BODY_SELECTOR: &str = "article.entry > div.c > section.bodycopy";

/// Recognized kinds among the body container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Heading,
    Paragraph,
    MediaBlock,
    Quote,
    Other,
}

impl NodeKind {
    fn of(el: ElementRef<'_>) -> Self {
        match el.value().name() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => NodeKind::Heading,
            "p" => NodeKind::Paragraph,
            "center" => NodeKind::MediaBlock,
            "blockquote" => NodeKind::Quote,
            _ => NodeKind::Other,
        }
    }
}

/// Walker accumulator: the section still collecting items, the finished
/// sections, and whether the sentinel heading halted the walk.
#[derive(Debug, Default)]
struct Walk {
    open: Option<Section>,
    done: Vec<Section>,
    halted: bool,
}

impl Walk {
    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            self.done.push(open);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.done
    }
}

/// Extract the body sections of an entry document.
///
/// Returns an empty list when the body container is absent.
pub fn body_sections(doc: &Html) -> Vec<Section> {
    match first(doc, BODY_SELECTOR) {
        Some(body) => walk(body),
        None => Vec::new(),
    }
}

/// Fold the container's child elements into sections, in document order.
pub fn walk(body: ElementRef<'_>) -> Vec<Section> {
    body.children()
        .filter_map(ElementRef::wrap)
        .fold(Walk::default(), step)
        .finish()
}

fn step(mut walk: Walk, el: ElementRef<'_>) -> Walk {
    if walk.halted {
        return walk;
    }
    match NodeKind::of(el) {
        NodeKind::Heading => {
            let title = inner_text(el);
            walk.flush();
            if title.trim() == SENTINEL_HEADING {
                walk.halted = true;
            } else {
                walk.open = Some(Section {
                    title,
                    contents: Vec::new(),
                });
            }
        }
        NodeKind::Paragraph => {
            if let Some(open) = walk.open.as_mut() {
                if !inner_text(el).is_empty() {
                    open.contents.push(ContentItem::Text {
                        html: strip_footnotes(el.inner_html().trim()),
                    });
                }
            }
        }
        NodeKind::MediaBlock => {
            if let Some(open) = walk.open.as_mut() {
                open.contents.extend(media::classify(el));
            }
        }
        NodeKind::Quote => {
            if let Some(open) = walk.open.as_mut() {
                if let Some(item) = quote_item(el) {
                    open.contents.push(item);
                }
            }
        }
        NodeKind::Other => {}
    }
    walk
}

/// A quote with any text becomes either a social-post reference (first
/// social link wins) or the sanitized quoted markup. Empty quotes vanish.
fn quote_item(quote: ElementRef<'_>) -> Option<ContentItem> {
    if inner_text(quote).is_empty() {
        return None;
    }
    let social = all_in(quote, "a")
        .into_iter()
        .filter_map(|anchor| anchor.value().attr("href"))
        .find(|href| is_social_post(href));
    match social {
        Some(href) => Some(ContentItem::SocialPost {
            url: canonical_post_url(href),
        }),
        None => Some(ContentItem::Text {
            html: strip_footnotes(quote.inner_html().trim()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sections_of(body_inner: &str) -> Vec<Section> {
        let html = format!(
            r#"<article class="entry"><div class="c"><section class="bodycopy">{}</section></div></article>"#,
            body_inner
        );
        let doc = Html::parse_document(&html);
        body_sections(&doc)
    }

    #[test]
    fn one_section_per_heading_in_order() {
        let sections = sections_of(
            "<h2>About</h2><p>First.</p><h2>Origin</h2><p>Second.</p><h2>Spread</h2>",
        );
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["About", "Origin", "Spread"]);
        assert_eq!(sections[0].contents.len(), 1);
        assert_eq!(sections[1].contents.len(), 1);
        assert!(sections[2].contents.is_empty());
    }

    #[test]
    fn any_heading_level_opens_a_section() {
        let sections = sections_of("<h3>Notable Examples</h3><p>Example.</p>");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Notable Examples");
    }

    #[test]
    fn content_before_first_heading_is_discarded() {
        let sections = sections_of(
            r#"<p>stray intro</p><center><a href="/x"><img src="/stray.jpg"></a></center><h2>About</h2><p>Kept.</p>"#,
        );
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].contents,
            vec![ContentItem::Text {
                html: "Kept.".to_string()
            }]
        );
    }

    #[test]
    fn sentinel_heading_halts_the_walk() {
        let sections = sections_of(
            r#"<h2>About</h2><p>Kept.</p><h2>Search Interest</h2><center><a href="/x"><img src="/after.jpg"></a></center><h2>External References</h2><p>Never seen.</p>"#,
        );
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "About");
        assert_eq!(sections[0].contents.len(), 1);
    }

    #[test]
    fn sentinel_flushes_the_open_section() {
        let sections = sections_of("<h2>Spread</h2><p>Everywhere.</p><h2>Search Interest</h2>");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Spread");
    }

    #[test]
    fn sentinel_as_first_heading_yields_nothing() {
        let sections = sections_of("<h2>Search Interest</h2><h2>About</h2><p>Never seen.</p>");
        assert!(sections.is_empty());
    }

    #[test]
    fn paragraph_markup_is_kept_and_footnotes_stripped() {
        let sections = sections_of(
            r#"<h2>About</h2><p>Spread on <a href="/sites/tumblr">Tumblr</a>[5] quickly.</p>"#,
        );
        assert_eq!(
            sections[0].contents,
            vec![ContentItem::Text {
                html: r#"Spread on <a href="/sites/tumblr">Tumblr</a> quickly."#.to_string()
            }]
        );
    }

    #[test]
    fn empty_paragraphs_are_skipped() {
        let sections = sections_of("<h2>About</h2><p>   </p><p></p><p>Real.</p>");
        assert_eq!(sections[0].contents.len(), 1);
        assert_eq!(
            sections[0].contents[0],
            ContentItem::Text {
                html: "Real.".to_string()
            }
        );
    }

    #[test]
    fn media_blocks_append_their_items_in_order() {
        let sections = sections_of(
            r#"<h2>Spread</h2>
               <center><lite-youtube videoid="vid1" params="start=10"></lite-youtube></center>
               <center><a href="/p"><img src="/a.jpg" alt="a"></a><a href="/q"><img src="/b.jpg" alt="b"></a></center>"#,
        );
        assert_eq!(
            sections[0].contents,
            vec![
                ContentItem::Video {
                    url: "https://www.youtube.com/watch?v=vid1&start=10".to_string()
                },
                ContentItem::Image {
                    url: "/a.jpg".to_string(),
                    alt: "a".to_string()
                },
                ContentItem::Image {
                    url: "/b.jpg".to_string(),
                    alt: "b".to_string()
                },
            ]
        );
    }

    #[test]
    fn quote_with_social_link_becomes_canonical_post() {
        let sections = sections_of(
            r#"<h2>Spread</h2><blockquote>big if true <a href="https://twitter.com/user/status/99?s=20">tweet</a></blockquote>"#,
        );
        assert_eq!(
            sections[0].contents,
            vec![ContentItem::SocialPost {
                url: "https://x.com/user/status/99".to_string()
            }]
        );
    }

    #[test]
    fn quote_without_social_link_becomes_text() {
        let sections = sections_of(
            r#"<h2>Origin</h2><blockquote>just a saying[2] here</blockquote>"#,
        );
        assert_eq!(
            sections[0].contents,
            vec![ContentItem::Text {
                html: "just a saying here".to_string()
            }]
        );
    }

    #[test]
    fn empty_quote_is_skipped_even_with_a_link() {
        let sections = sections_of(
            r#"<h2>Origin</h2><blockquote><a href="https://twitter.com/u/status/1"></a></blockquote>"#,
        );
        assert!(sections[0].contents.is_empty());
    }

    #[test]
    fn unrecognized_nodes_are_ignored() {
        let sections = sections_of(
            "<h2>About</h2><div>navigation junk</div><ul><li>list</li></ul><p>Kept.</p>",
        );
        assert_eq!(sections[0].contents.len(), 1);
    }

    #[test]
    fn missing_body_container_yields_no_sections() {
        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(body_sections(&doc).is_empty());
    }
}
