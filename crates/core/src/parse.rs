//! HTML parsing for metadata and article text extraction.
//!
//! [`Document`] wraps a parsed page and exposes CSS selector queries. It is
//! only used on the collaborator side of the pipeline; the analyzers work on
//! plain text.
//!
//! # Example
//!
//! ```rust
//! use credence_core::parse::Document;
//!
//! let doc = Document::parse("<html><head><title>Budget vote</title></head><body></body></html>");
//! assert_eq!(doc.title(), Some("Budget vote".to_string()));
//! ```

use scraper::{Html, Selector};
use url::Url;

use crate::{CredenceError, Result};

const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "nav", "header", "footer"];

/// A parsed HTML page, optionally tied to the URL it came from.
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parses HTML from a string. Parsing is lenient and never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html), base_url: None }
    }

    /// Parses HTML and remembers the page URL, used as a publisher fallback.
    pub fn parse_with_url(html: &str, url: &str) -> Self {
        Self { html: Html::parse_document(html), base_url: Url::parse(url).ok() }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| CredenceError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Text of the first `<title>` element.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Every non-blank text node in the document, joined with single spaces.
    pub fn text_content(&self) -> String {
        self.html
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A single element of a [`Document`].
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl Element<'_> {
    /// Text of all descendant text nodes, joined with single spaces.
    pub fn text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Like [`Element::text`] but skips text inside scripts, styles and page
    /// chrome (navigation, headers, footers).
    pub fn visible_text(&self) -> String {
        self.element
            .descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let hidden = node
                    .ancestors()
                    .any(|a| a.value().as_element().is_some_and(|e| HIDDEN_TAGS.contains(&e.name())));
                (!hidden).then_some(&**text)
            })
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <title> Council Approves Budget </title>
        </head>
        <body>
            <h1>Council Approves Budget</h1>
            <p class="lede">The vote passed <em>seven</em> to two.</p>
            <p class="lede">Debate lasted hours.</p>
            <a href="https://example.com/budget">Full text</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_title_is_trimmed() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(doc.title(), Some("Council Approves Budget".to_string()));
    }

    #[test]
    fn test_missing_title() {
        let doc = Document::parse("<html><body><p>No title</p></body></html>");
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML);
        let elements = doc.select("p.lede").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "The vote passed seven to two.");
    }

    #[test]
    fn test_element_attributes() {
        let doc = Document::parse(SAMPLE_HTML);
        let links = doc.select("a").unwrap();
        assert_eq!(links[0].attr("href"), Some("https://example.com/budget"));
    }

    #[test]
    fn test_visible_text_skips_chrome() {
        let html = r#"<html><body>
            <nav>Home | World</nav>
            <p>Storm hits coast.</p>
            <script>var x = 1;</script>
            <footer>Copyright</footer>
        </body></html>"#;
        let doc = Document::parse(html);
        let body = doc.select("body").unwrap();
        assert_eq!(body[0].visible_text(), "Storm hits coast.");
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(matches!(doc.select("[[invalid"), Err(CredenceError::HtmlParseError(_))));
    }

    #[test]
    fn test_base_url() {
        let doc = Document::parse_with_url(SAMPLE_HTML, "https://www.example.com/news/1");
        assert_eq!(doc.base_url().and_then(|u| u.host_str()), Some("www.example.com"));
        assert!(Document::parse_with_url(SAMPLE_HTML, "not a url").base_url().is_none());
    }

    #[test]
    fn test_text_content() {
        let doc = Document::parse(SAMPLE_HTML);
        let text = doc.text_content();
        assert!(text.contains("Debate lasted hours."));
    }
}
