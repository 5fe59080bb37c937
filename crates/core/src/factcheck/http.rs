//! HTTP clients for the Google Fact Check Tools and NewsAPI services.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ClaimReview, FactCheckService, NewsArticle, NewsSearchService};
use crate::fetch::map_request_error;
use crate::{CredenceError, Result};

const FACT_CHECK_API_URL: &str = "https://factchecktools.googleapis.com/v1alpha1/claims:search";
const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
const DEFAULT_TIMEOUT: u64 = 10;

/// Articles requested per source kept, to leave room for deduplication.
const NEWS_PAGE_FACTOR: usize = 2;
const NEWS_MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Default, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<ClaimEntry>,
}

#[derive(Debug, Deserialize)]
struct ClaimEntry {
    claimant: Option<String>,
    #[serde(rename = "claimReview", default)]
    claim_review: Vec<ReviewEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewEntry {
    publisher: Option<Publisher>,
    url: Option<String>,
    title: Option<String>,
    textual_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    status: String,
    #[serde(default)]
    articles: Vec<NewsEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsEntry {
    source: Option<NewsSource>,
    title: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsSource {
    name: Option<String>,
}

fn build_client(timeout: u64) -> Result<Client> {
    Client::builder().timeout(Duration::from_secs(timeout)).build().map_err(CredenceError::HttpError)
}

/// Client for `factchecktools.googleapis.com` claim search.
#[derive(Debug, Clone)]
pub struct GoogleFactCheckClient {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout: u64,
}

impl GoogleFactCheckClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: impl Into<String>, timeout: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key: api_key.into(),
            endpoint: FACT_CHECK_API_URL.to_string(),
            timeout,
        })
    }

    /// Points the client at another endpoint, e.g. a local mock.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl FactCheckService for GoogleFactCheckClient {
    async fn search(&self, claim: &str) -> Result<Vec<ClaimReview>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("key", self.api_key.as_str()), ("query", claim), ("languageCode", "en")])
            .send()
            .await
            .map_err(|e| map_request_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CredenceError::ServiceStatus { service: "Fact Check API", status: status.as_u16() });
        }

        let body: ClaimSearchResponse = response.json().await?;
        Ok(reviews_from_response(body))
    }
}

/// First review of every claim entry that has one.
fn reviews_from_response(body: ClaimSearchResponse) -> Vec<ClaimReview> {
    body.claims
        .into_iter()
        .filter_map(|entry| {
            let review = entry.claim_review.into_iter().next()?;
            Some(ClaimReview {
                claimant: entry.claimant,
                rating: review.textual_rating,
                publisher_name: review.publisher.and_then(|p| p.name),
                url: review.url,
                title: review.title,
            })
        })
        .collect()
}

/// Client for the NewsAPI `everything` endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout: u64,
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: impl Into<String>, timeout: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key: api_key.into(),
            endpoint: NEWS_API_URL.to_string(),
            timeout,
        })
    }

    /// Points the client at another endpoint, e.g. a local mock.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl NewsSearchService for NewsApiClient {
    async fn search(&self, terms: &[String], domains: &[&str], count: usize) -> Result<Vec<NewsArticle>> {
        let query = terms.join(" OR ");
        let domains = domains.join(",");
        let page_size = news_page_size(count).to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.as_str()),
                ("apiKey", self.api_key.as_str()),
                ("language", "en"),
                ("sortBy", "relevancy"),
                ("pageSize", page_size.as_str()),
                ("domains", domains.as_str()),
            ])
            .send()
            .await
            .map_err(|e| map_request_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CredenceError::ServiceStatus { service: "News API", status: status.as_u16() });
        }

        let body: NewsResponse = response.json().await?;
        Ok(articles_from_response(body))
    }
}

fn news_page_size(count: usize) -> usize {
    (count * NEWS_PAGE_FACTOR).clamp(1, NEWS_MAX_PAGE_SIZE)
}

fn articles_from_response(body: NewsResponse) -> Vec<NewsArticle> {
    if body.status != "ok" {
        tracing::debug!(status = %body.status, "news search returned no articles");
        return Vec::new();
    }

    body.articles
        .into_iter()
        .map(|entry| NewsArticle {
            title: entry.title.unwrap_or_default(),
            url: entry.url.unwrap_or_default(),
            source_name: entry.source.and_then(|s| s.name).unwrap_or_else(|| "Unknown".to_string()),
            published_at: entry.published_at.unwrap_or_default(),
        })
        .collect()
}
