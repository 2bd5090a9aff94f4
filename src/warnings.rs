//! Weather Warnings Scraper
//!
//! Pulls the `weatherWarnings` block out of the upstream warnings page.
//! The upstream page has no contract with us; a missing block is an empty
//! result, not an error.

use regex::Regex;
use std::sync::OnceLock;

use crate::upstream::{Fetcher, UpstreamError};

/// Body returned when the page has no warnings block
pub const NO_WARNINGS_HTML: &str = "<p>No warnings found</p>";

/// Body returned when the page could not be fetched
pub const FETCH_FAILED_TEXT: &str = "Error fetching weather data";

fn warnings_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?s)<div class="weatherWarnings">(.*?)</div>"#)
            .expect("warnings pattern is valid")
    })
}

/// First `<div class="weatherWarnings">…</div>` in the page, tags included.
///
/// The match is lazy, so it ends at the first closing `</div>`.
pub fn extract_warnings(html: &str) -> Option<&str> {
    warnings_pattern().find(html).map(|m| m.as_str())
}

/// Outcome of one scrape
#[derive(Debug, Clone, PartialEq)]
pub enum Warnings {
    Found(String),
    Absent,
}

impl Warnings {
    /// HTML body served to the page
    pub fn into_html(self) -> String {
        match self {
            Warnings::Found(fragment) => fragment,
            Warnings::Absent => NO_WARNINGS_HTML.to_string(),
        }
    }
}

/// Fetch the warnings page and extract the block.
///
/// Any upstream status is scanned; only transport and body failures error.
pub async fn scrape(fetcher: &dyn Fetcher, source_url: &str) -> Result<Warnings, UpstreamError> {
    let page = fetcher.get(source_url, &[]).await?;

    if !page.is_success() {
        tracing::warn!(status = page.status, "Warnings page returned non-success status");
    }

    Ok(match extract_warnings(&page.body) {
        Some(fragment) => Warnings::Found(fragment.to_string()),
        None => Warnings::Absent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::testing::StubFetcher;

    #[test]
    fn test_extract_present() {
        let html = r#"<html><body><div class="weatherWarnings">ALERT</div></body></html>"#;
        assert_eq!(
            extract_warnings(html),
            Some(r#"<div class="weatherWarnings">ALERT</div>"#)
        );
    }

    #[test]
    fn test_extract_spans_newlines() {
        let html = "<div class=\"weatherWarnings\">\n  <b>Heavy rain</b>\n</div>";
        assert_eq!(extract_warnings(html), Some(html));
    }

    #[test]
    fn test_extract_stops_at_first_close() {
        let html = r#"<div class="weatherWarnings"><p>one</p></div><div>tail</div>"#;
        assert_eq!(
            extract_warnings(html),
            Some(r#"<div class="weatherWarnings"><p>one</p></div>"#)
        );
    }

    #[test]
    fn test_extract_first_of_many() {
        let html = r#"<div class="weatherWarnings">A</div><div class="weatherWarnings">B</div>"#;
        assert_eq!(
            extract_warnings(html),
            Some(r#"<div class="weatherWarnings">A</div>"#)
        );
    }

    #[test]
    fn test_extract_absent() {
        assert_eq!(extract_warnings("<div class=\"forecast\">sunny</div>"), None);
        assert_eq!(extract_warnings(""), None);
    }

    #[test]
    fn test_into_html() {
        assert_eq!(Warnings::Absent.into_html(), NO_WARNINGS_HTML);
        assert_eq!(Warnings::Found("x".into()).into_html(), "x");
    }

    #[tokio::test]
    async fn test_scrape_non_success_still_scanned() {
        let stub = StubFetcher::new().respond(
            "https://warnings.test",
            503,
            r#"<div class="weatherWarnings">STORM</div>"#,
        );

        let result = scrape(&stub, "https://warnings.test/phuket").await.unwrap();
        assert_eq!(
            result,
            Warnings::Found(r#"<div class="weatherWarnings">STORM</div>"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_scrape_fetch_error() {
        let stub = StubFetcher::new().fail("https://warnings.test", "connection refused");
        assert!(scrape(&stub, "https://warnings.test/phuket").await.is_err());
    }

    #[tokio::test]
    async fn test_scrape_page_without_block() {
        let stub = StubFetcher::new().respond("https://warnings.test", 200, "<p>calm</p>");

        let result = scrape(&stub, "https://warnings.test/phuket").await.unwrap();
        assert_eq!(result, Warnings::Absent);
    }
}
