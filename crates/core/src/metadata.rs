//! Article metadata extraction.
//!
//! Source reputation gets a small boost when a page names its author and
//! publication date. The extractors here read those fields from JSON-LD,
//! meta tags and a few common elements, in that order of preference.

use serde::Serialize;

use crate::Document;

const MIN_AUTHOR_CHARS: usize = 3;

/// Metadata of a fetched article. Unknown fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleMetadata {
    pub title: String,
    pub author: String,
    pub date: String,
    pub publisher: String,
}

impl ArticleMetadata {
    /// True for a named author; one to three characters (initials, wire
    /// codes like "AP") don't count.
    pub fn has_author(&self) -> bool {
        self.author.trim().chars().count() > MIN_AUTHOR_CHARS
    }

    pub fn has_date(&self) -> bool {
        !self.date.trim().is_empty()
    }
}

impl Document {
    /// Extract title with priority fallback:
    /// 1. JSON-LD `headline`
    /// 2. Open Graph `og:title`
    /// 3. `<title>` element
    pub fn extract_title(&self) -> Option<String> {
        if let Some(json_ld) = self.extract_json_ld()
            && let Some(value) = json_ld.get("headline").and_then(|h| h.as_str())
        {
            return Some(value.trim().to_string());
        }

        self.get_meta_content("og:title").or_else(|| self.title())
    }

    /// Extract author with priority fallback:
    /// 1. JSON-LD `author` (string, object or array)
    /// 2. Meta `author` / `article:author`
    /// 3. `[rel="author"]` text
    pub fn extract_author(&self) -> Option<String> {
        if let Some(json_ld) = self.extract_json_ld()
            && let Some(author) = json_ld.get("author")
            && let Some(name) = author_from_json_ld(author)
        {
            return Some(name);
        }

        if let Some(author) = self.get_meta_content("author") {
            return Some(author);
        }
        if let Some(author) = self.get_meta_content("article:author") {
            return Some(author);
        }

        self.first_text("[rel=\"author\"]")
    }

    /// Extract date with priority fallback:
    /// 1. JSON-LD `datePublished`
    /// 2. Meta `article:published_time` / `publication-date`
    /// 3. `<time datetime="">` element
    pub fn extract_date(&self) -> Option<String> {
        if let Some(json_ld) = self.extract_json_ld()
            && let Some(value) = json_ld.get("datePublished").and_then(|d| d.as_str())
        {
            return Some(value.to_string());
        }

        if let Some(date) = self.get_meta_content("article:published_time") {
            return Some(date);
        }
        if let Some(date) = self.get_meta_content("publication-date") {
            return Some(date);
        }

        if let Ok(elements) = self.select("time[datetime]")
            && let Some(datetime) = elements.first().and_then(|el| el.attr("datetime"))
            && !datetime.trim().is_empty()
        {
            return Some(datetime.trim().to_string());
        }

        None
    }

    /// Extract publisher with priority fallback:
    /// 1. JSON-LD `publisher.name`
    /// 2. Open Graph `og:site_name`
    /// 3. Meta `publisher`
    /// 4. Domain of the page URL without `www.`
    pub fn extract_publisher(&self) -> Option<String> {
        if let Some(json_ld) = self.extract_json_ld()
            && let Some(publisher) = json_ld.get("publisher")
        {
            let name = publisher.as_str().or_else(|| publisher.get("name").and_then(|n| n.as_str()));
            if let Some(name) = name {
                return Some(name.to_string());
            }
        }

        if let Some(site) = self.get_meta_content("og:site_name") {
            return Some(site);
        }
        if let Some(site) = self.get_meta_content("publisher") {
            return Some(site);
        }

        self.base_url()
            .and_then(|url| url.host_str())
            .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
    }

    /// Extract all metadata at once.
    pub fn extract_metadata(&self) -> ArticleMetadata {
        ArticleMetadata {
            title: self.extract_title().unwrap_or_default(),
            author: self.extract_author().unwrap_or_default(),
            date: self.extract_date().unwrap_or_default(),
            publisher: self.extract_publisher().unwrap_or_default(),
        }
    }

    /// Get meta tag content by name or property attribute
    fn get_meta_content(&self, attr: &str) -> Option<String> {
        ["name", "property"].iter().find_map(|kind| {
            let selector = format!("meta[{}=\"{}\"]", kind, attr);
            self.select(&selector)
                .ok()?
                .first()
                .and_then(|el| el.attr("content"))
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        })
    }

    fn first_text(&self, selector: &str) -> Option<String> {
        let elements = self.select(selector).ok()?;
        let text = elements.first()?.text();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// First JSON-LD block that parses. `@graph` wrappers are unwrapped to
    /// their first article-like node.
    fn extract_json_ld(&self) -> Option<serde_json::Value> {
        let elements = self.select("script[type=\"application/ld+json\"]").ok()?;
        for el in elements.iter() {
            let Ok(value) = serde_json::from_str::<serde_json::Value>(el.text().trim()) else {
                continue;
            };

            if let Some(graph) = value.get("@graph").and_then(|g| g.as_array())
                && let Some(node) = graph.iter().find(|n| n.get("headline").is_some())
            {
                return Some(node.clone());
            }

            if let Some(first) = value.as_array().and_then(|arr| arr.first()) {
                return Some(first.clone());
            }

            return Some(value);
        }
        None
    }
}

/// Handles string, object and array forms of the JSON-LD author field.
fn author_from_json_ld(author: &serde_json::Value) -> Option<String> {
    if let Some(name) = author.as_str() {
        return Some(name.to_string());
    }

    if let Some(name) = author.get("name").and_then(|n| n.as_str()) {
        return Some(name.to_string());
    }

    author.as_array().and_then(|arr| arr.first()).and_then(author_from_json_ld)
}
