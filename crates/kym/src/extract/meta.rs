// ABOUTME: Fixed-path metadata lookups for entry pages: title, hero image, views, stats, tags.
// ABOUTME: Classification labels are resolved through a declarative label-to-rule table.

use scraper::{ElementRef, Html};

use crate::extract::select::{all_in, attr_chain, first, inner_text, next_sibling_element};
use crate::result::ImageRef;

const TITLE_SELECTOR: &str = "article.entry > div.desktop-only > header.rel > section.info > h1";
const HERO_SELECTOR: &str = "article.entry > div.desktop-only > header.rel > a";
const VIEWS_SELECTOR: &str = "article.entry header.rel aside.stats dd.views a";
const STATS_ASIDE_SELECTOR: &str = "article.entry > div.c > aside";
const TAG_LIST_SELECTOR: &str = "dl#entry_tags";
const TRENDS_SELECTOR: &str =
    "article.entry > div.c > section.bodycopy > iframe.google-trends-iframe";

/// How a classification value is read out of its `dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatRule {
    /// Every linked value's text.
    LinkTexts,
    /// The first linked value's text.
    LinkText,
    /// The dd's own text content.
    OwnText,
}

/// Label-keyed lookup rules for the classification block. Labels must match
/// the dt text exactly, trailing colon included where the site renders one.
const STAT_FIELDS: &[(&str, StatRule)] = &[
    ("Type:", StatRule::LinkTexts),
    ("Year", StatRule::LinkText),
    ("Origin", StatRule::OwnText),
    ("Region", StatRule::LinkText),
];

/// Classification values from the entry's stats aside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryStats {
    pub types: Vec<String>,
    pub year: String,
    pub origin: String,
    pub region: String,
}

/// The entry title, empty when the header heading is missing.
pub fn title(doc: &Html) -> String {
    first(doc, TITLE_SELECTOR).map(inner_text).unwrap_or_default()
}

/// The hero image reference: the header anchor's target and alt text.
pub fn hero_image(doc: &Html) -> ImageRef {
    match first(doc, HERO_SELECTOR) {
        Some(anchor) => ImageRef {
            url: attr_chain(anchor, &["href"]).unwrap_or_default(),
            alt: anchor.value().attr("alt").unwrap_or_default().trim().to_string(),
        },
        None => ImageRef::default(),
    }
}

/// The view counter with thousands separators removed.
///
/// `None` when the counter is missing or non-numeric; never conflated
/// with a real zero.
pub fn views(doc: &Html) -> Option<u64> {
    let text = inner_text(first(doc, VIEWS_SELECTOR)?);
    text.replace(',', "").parse::<u64>().ok()
}

/// The trends widget source, empty when the iframe is absent.
pub fn trends_url(doc: &Html) -> String {
    first(doc, TRENDS_SELECTOR)
        .and_then(|iframe| attr_chain(iframe, &["data-src"]))
        .unwrap_or_default()
}

/// All tag anchor texts in document order, duplicates kept.
pub fn tags(doc: &Html) -> Vec<String> {
    match first(doc, TAG_LIST_SELECTOR) {
        Some(list) => all_in(list, "dd a")
            .into_iter()
            .map(inner_text)
            .filter(|text| !text.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Read every classification field through the `STAT_FIELDS` table.
pub fn entry_stats(doc: &Html) -> EntryStats {
    let Some(aside) = first(doc, STATS_ASIDE_SELECTOR) else {
        return EntryStats::default();
    };
    EntryStats {
        types: stat_values(aside, "Type:"),
        year: first_stat_value(aside, "Year"),
        origin: first_stat_value(aside, "Origin"),
        region: first_stat_value(aside, "Region"),
    }
}

fn first_stat_value(aside: ElementRef<'_>, label: &str) -> String {
    stat_values(aside, label).into_iter().next().unwrap_or_default()
}

/// Values for one label, read per its table rule.
///
/// The label's dt must be immediately followed by a dd sibling. A missing
/// or unknown label yields an empty list, never an error.
fn stat_values(aside: ElementRef<'_>, label: &str) -> Vec<String> {
    let Some(rule) = STAT_FIELDS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, rule)| *rule)
    else {
        return Vec::new();
    };

    for dt in all_in(aside, "dl > dt") {
        if inner_text(dt) != label {
            continue;
        }
        let Some(dd) =
            next_sibling_element(dt).filter(|el| el.value().name() == "dd")
        else {
            continue;
        };
        return match rule {
            StatRule::LinkTexts | StatRule::LinkText => {
                let mut texts: Vec<String> = all_in(dd, "a")
                    .into_iter()
                    .map(inner_text)
                    .filter(|text| !text.is_empty())
                    .collect();
                if rule == StatRule::LinkText {
                    texts.truncate(1);
                }
                texts
            }
            StatRule::OwnText => {
                let text = inner_text(dd);
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text]
                }
            }
        };
    }
    Vec::new()
}
