use anyhow::{anyhow, Result};
use scraper::{ElementRef, Selector};

pub fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector '{}': {:?}", css, e))
}

/// Whole text content of the element, trimmed at both ends.
pub fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Every text fragment trimmed, empty fragments dropped, joined with no separator.
pub fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}
