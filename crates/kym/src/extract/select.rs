// ABOUTME: Pre-compiled CSS selector cache and small DOM query helpers.
// ABOUTME: Fallback chains (selector lists, attribute lists) are tried in order, first hit wins.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors, keyed by their source string. Reads vastly outnumber
/// writes once the fixed selector set has warmed up, hence the RwLock.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Compile a selector once and reuse it on every later call.
///
/// Invalid selectors cache as `None` so they are not re-parsed either.
pub(crate) fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Another thread may have raced the write lock; keep its entry.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// First element in the document matching the selector.
pub(crate) fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = get_or_compile(css)?;
    doc.select(&selector).next()
}

/// All elements in the document matching the selector.
pub(crate) fn all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match get_or_compile(css) {
        Some(selector) => doc.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// First descendant of `scope` matching the selector.
pub(crate) fn first_in<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = get_or_compile(css)?;
    scope.select(&selector).next()
}

/// All descendants of `scope` matching the selector.
pub(crate) fn all_in<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match get_or_compile(css) {
        Some(selector) => scope.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Selectors tried in order; first one with a match wins.
pub(crate) fn first_in_any<'a>(
    scope: ElementRef<'a>,
    selectors: &[&str],
) -> Option<ElementRef<'a>> {
    selectors.iter().copied().find_map(|css| first_in(scope, css))
}

/// Attributes tried in order; first present non-empty value wins, trimmed.
pub(crate) fn attr_chain(el: ElementRef<'_>, attrs: &[&str]) -> Option<String> {
    attrs.iter().copied().find_map(|attr| {
        el.value()
            .attr(attr)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}

/// The element's text content with runs of whitespace collapsed.
pub(crate) fn inner_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The next sibling that is an element, skipping text and comment nodes.
pub(crate) fn next_sibling_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().filter_map(ElementRef::wrap).next()
}
