//! Content fetching from URLs, files, and stdin.
//!
//! The free functions return raw page bodies. [`ContentFetcher`] is the seam
//! the analyzer uses to turn a URL into article text; [`HttpContentFetcher`]
//! and [`HttpMetadataFetcher`] are the network-backed implementations.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

use async_trait::async_trait;
#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::parse::{Document, Element};
#[cfg(feature = "fetch")]
use crate::{ArticleMetadata, MetadataFetcher};
use crate::{CredenceError, Result};

/// Containers tried in order when looking for the article body.
const CONTENT_CONTAINERS: &[&str] = &["article", "main", ".content", "#content", ".post", ".article", ".story"];

/// Container text shorter than this falls back to the whole body.
const MIN_CONTAINER_CHARS: usize = 100;

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: "Mozilla/5.0 (compatible; Credence/0.1)".to_string() }
    }
}

/// Turns a URL into plain article text.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches HTML content from a URL.
///
/// Performs a single HTTP GET with the configured timeout and user agent.
/// Non-success statuses are errors.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| CredenceError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(CredenceError::InvalidUrl(format!("unsupported scheme: {}", parsed_url.scheme())));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(CredenceError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| map_request_error(e, config.timeout))?;

    let content = response.error_for_status()?.text().await?;

    Ok(content)
}

#[cfg(feature = "fetch")]
pub(crate) fn map_request_error(e: reqwest::Error, timeout: u64) -> CredenceError {
    if e.is_timeout() { CredenceError::Timeout { timeout } } else { CredenceError::HttpError(e) }
}

/// Reads content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(CredenceError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(CredenceError::from)
    }
}

/// Reads all of standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CredenceError::from)?;

    Ok(buffer)
}

/// Extracts readable article text from an HTML page.
///
/// The first common article container with text wins. When it holds fewer
/// than 100 characters the whole body is used instead, and a page with no
/// visible body text falls back to all of its text. Whitespace runs are
/// collapsed to single spaces.
pub fn extract_text(html: &str) -> String {
    let doc = Document::parse(html);

    let container = CONTENT_CONTAINERS.iter().find_map(|selector| {
        let elements = doc.select(selector).ok()?;
        let text = elements.first()?.visible_text();
        (!text.is_empty()).then_some(text)
    });

    let text = match container {
        Some(text) if text.chars().count() >= MIN_CONTAINER_CHARS => text,
        fallback => doc
            .select("body")
            .ok()
            .and_then(|elements| elements.first().map(Element::visible_text))
            .filter(|body| !body.is_empty())
            .or(fallback)
            .unwrap_or_else(|| doc.text_content()),
    };

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Adds `https://` to URLs typed without a scheme.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") { url.to_string() } else { format!("https://{url}") }
}

/// Downloads pages and extracts their article text.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpContentFetcher {
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpContentFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "fetch")]
#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = normalize_url(url);
        let html = fetch_url(&url, &self.config).await?;
        let text = extract_text(&html);
        tracing::debug!(url = %url, chars = text.len(), "extracted article text");
        Ok(text)
    }
}

/// Downloads pages and reads their [`ArticleMetadata`].
///
/// Failures are logged and produce empty metadata.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpMetadataFetcher {
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpMetadataFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "fetch")]
#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn get_metadata(&self, url: &str) -> ArticleMetadata {
        match fetch_url(url, &self.config).await {
            Ok(html) => Document::parse_with_url(&html, url).extract_metadata(),
            Err(e) => {
                tracing::warn!(url, error = %e, "metadata fetch failed");
                ArticleMetadata::default()
            }
        }
    }
}
