//! Fact-check orchestration.
//!
//! [`FactChecker`] extracts claims from a text, asks a [`FactCheckService`]
//! about the first few, and looks up coverage of the same topic through a
//! [`NewsSearchService`]. Both services are optional. When one is missing or
//! fails, the [`Simulator`] fills in clearly flagged placeholder results so
//! the rest of the pipeline always has something to score.

#[cfg(feature = "fetch")]
mod http;
mod simulate;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use serde::Serialize;

use crate::Result;
use crate::claims::extract_claims;
use crate::rating::Rating;

#[cfg(feature = "fetch")]
pub use http::{GoogleFactCheckClient, NewsApiClient};
pub use simulate::Simulator;

/// Reputable domains searched for alternative coverage.
pub const REPUTABLE_NEWS_DOMAINS: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "npr.org",
    "bbc.com",
    "bbc.co.uk",
    "wsj.com",
    "nytimes.com",
    "washingtonpost.com",
    "economist.com",
    "time.com",
    "theatlantic.com",
    "theguardian.com",
    "cnn.com",
    "nbcnews.com",
    "cbsnews.com",
    "abcnews.go.com",
    "politico.com",
    "bloomberg.com",
    "ft.com",
    "nature.com",
    "sciencemag.org",
    "scientificamerican.com",
];

/// Date format of [`AlternativeSource::published`].
pub const PUBLISHED_FORMAT: &str = "%b %d, %Y";

const PSEUDO_CLAIM_MIN_CHARS: usize = 30;
const PSEUDO_CLAIM_CHARS: usize = 150;
const SEARCH_DOMAIN_LIMIT: usize = 10;
const SEARCH_TERM_LIMIT: usize = 3;
const ALTERNATIVE_KEYWORD_LIMIT: usize = 5;

pub(crate) const NO_SERVICE_ERROR: &str = "API key not available";

/// One fact-check verdict about a claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactCheckResult {
    pub claim: String,
    pub claimant: String,
    /// Free-form verdict as published.
    pub rating: String,
    /// Organization that published the verdict.
    pub source: String,
    pub url: String,
    pub explanation: String,
}

impl FactCheckResult {
    /// The verdict mapped onto the fixed [`Rating`] taxonomy.
    pub fn rating_class(&self) -> Rating {
        Rating::parse(&self.rating)
    }
}

/// A related article from a reputable outlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativeSource {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published: String,
}

/// Everything the fact-check step found about one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FactCheckReport {
    pub claims: Vec<FactCheckResult>,
    pub alternative_sources: Vec<AlternativeSource>,
    /// A fact-check service was configured and queried.
    pub api_used: bool,
    /// `claims` holds simulated verdicts, not real ones.
    pub fallback_used: bool,
    /// Last collaborator error, if any.
    pub error: Option<String>,
}

/// A review returned by a fact-check service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimReview {
    pub claimant: Option<String>,
    pub rating: Option<String>,
    pub publisher_name: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
}

/// An article returned by a news search service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source_name: String,
    /// RFC 3339 timestamp, as reported by the service.
    pub published_at: String,
}

/// Looks up published fact checks about a claim.
#[async_trait]
pub trait FactCheckService: Send + Sync {
    async fn search(&self, claim: &str) -> Result<Vec<ClaimReview>>;
}

/// Searches news coverage on reputable domains. `count` is the number of
/// distinct outlets the caller will keep; implementations may return more.
#[async_trait]
pub trait NewsSearchService: Send + Sync {
    async fn search(&self, terms: &[String], domains: &[&str], count: usize) -> Result<Vec<NewsArticle>>;
}

/// Limits applied by [`FactChecker`].
#[derive(Debug, Clone)]
pub struct FactCheckConfig {
    /// Claims sent to the fact-check service.
    pub max_claims_checked: usize,
    /// Reviews kept per claim.
    pub reviews_per_claim: usize,
    /// Delay between fact-check service calls.
    pub pacing: Duration,
    /// Alternative sources returned.
    pub alternative_source_count: usize,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            max_claims_checked: 3,
            reviews_per_claim: 2,
            pacing: Duration::from_millis(500),
            alternative_source_count: 3,
        }
    }
}

impl FactCheckConfig {
    pub fn builder() -> FactCheckConfigBuilder {
        FactCheckConfigBuilder::new()
    }
}

/// Builder for FactCheckConfig.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use credence_core::factcheck::FactCheckConfig;
///
/// let config = FactCheckConfig::builder()
///     .max_claims_checked(2)
///     .pacing(Duration::ZERO)
///     .build();
/// assert_eq!(config.reviews_per_claim, 2);
/// ```
#[derive(Debug, Clone)]
pub struct FactCheckConfigBuilder {
    config: FactCheckConfig,
}

impl FactCheckConfigBuilder {
    pub fn new() -> Self {
        Self { config: FactCheckConfig::default() }
    }

    pub fn max_claims_checked(mut self, value: usize) -> Self {
        self.config.max_claims_checked = value;
        self
    }

    pub fn reviews_per_claim(mut self, value: usize) -> Self {
        self.config.reviews_per_claim = value;
        self
    }

    pub fn pacing(mut self, value: Duration) -> Self {
        self.config.pacing = value;
        self
    }

    pub fn alternative_source_count(mut self, value: usize) -> Self {
        self.config.alternative_source_count = value;
        self
    }

    pub fn build(self) -> FactCheckConfig {
        self.config
    }
}

impl Default for FactCheckConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks claims and finds alternative coverage for one text at a time.
pub struct FactChecker {
    fact_check_service: Option<Arc<dyn FactCheckService>>,
    news_service: Option<Arc<dyn NewsSearchService>>,
    simulator: Arc<Simulator>,
    config: FactCheckConfig,
}

impl FactChecker {
    pub fn new(config: FactCheckConfig) -> Self {
        Self { fact_check_service: None, news_service: None, simulator: Arc::new(Simulator::new()), config }
    }

    pub fn with_fact_check_service(mut self, service: Arc<dyn FactCheckService>) -> Self {
        self.fact_check_service = Some(service);
        self
    }

    pub fn with_news_service(mut self, service: Arc<dyn NewsSearchService>) -> Self {
        self.news_service = Some(service);
        self
    }

    pub fn with_simulator(mut self, simulator: Arc<Simulator>) -> Self {
        self.simulator = simulator;
        self
    }

    pub fn config(&self) -> &FactCheckConfig {
        &self.config
    }

    /// Fact-checks the claims of `text` and collects alternative sources
    /// for `keywords`.
    ///
    /// Never fails: service errors are logged, recorded in
    /// [`FactCheckReport::error`] and replaced by simulated results.
    pub async fn check_facts(&self, text: &str, keywords: &[String]) -> FactCheckReport {
        let claims = claims_to_check(text);
        let mut report = FactCheckReport::default();

        match &self.fact_check_service {
            Some(service) => {
                report.api_used = true;
                self.query_service(service.as_ref(), &claims, &mut report).await;
            }
            None => {
                tracing::warn!("no fact-check service configured, using simulated results");
                report.error = Some(NO_SERVICE_ERROR.to_string());
            }
        }

        if report.claims.is_empty() && report.error.is_some() {
            let checked = &claims[..claims.len().min(self.config.max_claims_checked)];
            report.claims = self.simulator.fact_checks(checked);
            report.fallback_used = true;
        }

        let keywords = &keywords[..keywords.len().min(ALTERNATIVE_KEYWORD_LIMIT)];
        report.alternative_sources = self.find_alternative_sources(keywords).await;

        report
    }

    async fn query_service(&self, service: &dyn FactCheckService, claims: &[String], report: &mut FactCheckReport) {
        let checked = claims.iter().take(self.config.max_claims_checked).collect::<Vec<_>>();

        for (index, claim) in checked.iter().enumerate() {
            match service.search(claim).await {
                Ok(reviews) => {
                    tracing::debug!(claim = %claim, reviews = reviews.len(), "fact-check lookup");
                    report.claims.extend(
                        reviews.into_iter().take(self.config.reviews_per_claim).map(|r| review_to_result(claim, r)),
                    );

                    if index + 1 < checked.len() && !self.config.pacing.is_zero() {
                        tokio::time::sleep(self.config.pacing).await;
                    }
                }
                Err(e) => {
                    tracing::warn!(claim = %claim, error = %e, "fact-check lookup failed");
                    report.error = Some(e.to_string());
                }
            }
        }
    }

    /// Up to `alternative_source_count` articles on the same topic, one per
    /// outlet, newest first.
    ///
    /// Falls back to simulated suggestions when no news service is
    /// configured, the service fails, or it finds nothing.
    pub async fn find_alternative_sources(&self, keywords: &[String]) -> Vec<AlternativeSource> {
        if keywords.is_empty() {
            return Vec::new();
        }

        let count = self.config.alternative_source_count;

        let Some(service) = &self.news_service else {
            tracing::warn!("no news search service configured, using simulated sources");
            return self.simulator.alternative_sources(keywords, count);
        };

        let terms = &keywords[..keywords.len().min(SEARCH_TERM_LIMIT)];
        let domains = &REPUTABLE_NEWS_DOMAINS[..SEARCH_DOMAIN_LIMIT];

        match service.search(terms, domains, count).await {
            Ok(articles) => {
                let sources = select_sources(articles, count);
                if sources.is_empty() {
                    tracing::warn!("news search found nothing, using simulated sources");
                    self.simulator.alternative_sources(keywords, count)
                } else {
                    sources
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "news search failed, using simulated sources");
                self.simulator.alternative_sources(keywords, count)
            }
        }
    }
}

impl Default for FactChecker {
    fn default() -> Self {
        Self::new(FactCheckConfig::default())
    }
}

/// Claims of `text`, or its first 150 characters when it has none and is
/// long enough to say something.
pub fn claims_to_check(text: &str) -> Vec<String> {
    let claims = extract_claims(text);
    if !claims.is_empty() {
        return claims;
    }

    if text.chars().count() > PSEUDO_CLAIM_MIN_CHARS {
        vec![text.chars().take(PSEUDO_CLAIM_CHARS).collect()]
    } else {
        Vec::new()
    }
}

fn review_to_result(claim: &str, review: ClaimReview) -> FactCheckResult {
    FactCheckResult {
        claim: claim.to_string(),
        claimant: review.claimant.unwrap_or_else(|| "Unknown".to_string()),
        rating: review.rating.unwrap_or_else(|| Rating::Unverified.label().to_string()),
        source: review.publisher_name.unwrap_or_else(|| "Unknown".to_string()),
        url: review.url.unwrap_or_default(),
        explanation: review.title.unwrap_or_else(|| "No explanation provided".to_string()),
    }
}

/// Newest first, one article per outlet, at most `count`.
fn select_sources(mut articles: Vec<NewsArticle>, count: usize) -> Vec<AlternativeSource> {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let mut seen = std::collections::HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.source_name.clone()))
        .take(count)
        .map(|article| AlternativeSource {
            published: format_published(&article.published_at),
            title: article.title,
            url: article.url,
            source: article.source_name,
        })
        .collect()
}

/// Reformats RFC 3339 timestamps as `"Jan 05, 2024"`; anything else is kept.
pub fn format_published(published: &str) -> String {
    DateTime::parse_from_rfc3339(published)
        .map(|date| date.format(PUBLISHED_FORMAT).to_string())
        .unwrap_or_else(|_| published.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CredenceError;
    use parking_lot::Mutex;

    const CLAIM_TEXT: &str = "Officials said the bridge will reopen in May. \
        Unemployment fell by 2 percent last year. \
        A study shows coffee improves memory. \
        The mayor announced a new transit plan.";

    /// Answers from a script, one entry per call.
    struct ScriptedFactChecks {
        responses: Mutex<Vec<Result<Vec<ClaimReview>>>>,
        queries: Mutex<Vec<String>>,
    }

    impl ScriptedFactChecks {
        fn new(responses: Vec<Result<Vec<ClaimReview>>>) -> Self {
            Self { responses: Mutex::new(responses), queries: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl FactCheckService for ScriptedFactChecks {
        async fn search(&self, claim: &str) -> Result<Vec<ClaimReview>> {
            self.queries.lock().push(claim.to_string());
            let mut responses = self.responses.lock();
            if responses.is_empty() { Ok(Vec::new()) } else { responses.remove(0) }
        }
    }

    struct FixedNews {
        articles: Result<Vec<NewsArticle>>,
        requested: Mutex<Vec<usize>>,
    }

    impl FixedNews {
        fn new(articles: Result<Vec<NewsArticle>>) -> Self {
            Self { articles, requested: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl NewsSearchService for FixedNews {
        async fn search(&self, terms: &[String], domains: &[&str], count: usize) -> Result<Vec<NewsArticle>> {
            assert!(terms.len() <= 3);
            assert_eq!(domains.len(), 10);
            self.requested.lock().push(count);
            match &self.articles {
                Ok(articles) => Ok(articles.clone()),
                Err(_) => Err(CredenceError::ServiceStatus { service: "News API", status: 500 }),
            }
        }
    }

    fn review(rating: &str) -> ClaimReview {
        ClaimReview {
            claimant: Some("City Hall".to_string()),
            rating: Some(rating.to_string()),
            publisher_name: Some("PolitiFact".to_string()),
            url: Some("https://www.politifact.com/x".to_string()),
            title: Some("Checking the bridge claim".to_string()),
        }
    }

    fn article(source: &str, published: &str) -> NewsArticle {
        NewsArticle {
            title: format!("{source} story"),
            url: format!("https://{}.example/story", source.to_lowercase()),
            source_name: source.to_string(),
            published_at: published.to_string(),
        }
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn checker() -> FactChecker {
        let config = FactCheckConfig::builder().pacing(Duration::ZERO).build();
        FactChecker::new(config).with_simulator(Arc::new(Simulator::with_seed(7)))
    }

    #[test]
    fn test_config_defaults() {
        let config = FactCheckConfig::default();
        assert_eq!(config.max_claims_checked, 3);
        assert_eq!(config.reviews_per_claim, 2);
        assert_eq!(config.pacing, Duration::from_millis(500));
        assert_eq!(config.alternative_source_count, 3);
    }

    #[test]
    fn test_pseudo_claim() {
        let text = "Nothing here matches any indicator at all, it just rambles along the page.";
        assert_eq!(claims_to_check(text), vec![text.to_string()]);
        assert!(claims_to_check("Too short to check.").is_empty());

        let long = "It rained. ".repeat(20);
        let claims = claims_to_check(&long);
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].chars().count(), 150);
        assert!(long.starts_with(&claims[0]));
    }

    #[tokio::test]
    async fn test_without_service_uses_simulation() {
        let report = checker().check_facts(CLAIM_TEXT, &keywords(&["bridge"])).await;

        assert!(!report.api_used);
        assert!(report.fallback_used);
        assert_eq!(report.error.as_deref(), Some("API key not available"));
        assert_eq!(report.claims.len(), 3);
        for result in &report.claims {
            assert_eq!(result.claimant, "Source in article");
            assert_eq!(result.url, "#");
            assert_ne!(result.rating_class(), Rating::Unrated);
        }
    }

    #[tokio::test]
    async fn test_service_results_are_mapped() {
        let service = Arc::new(ScriptedFactChecks::new(vec![
            Ok(vec![review("False"), review("Mostly False"), review("True")]),
            Ok(vec![ClaimReview::default()]),
            Ok(Vec::new()),
        ]));
        let report = checker().with_fact_check_service(service.clone()).check_facts(CLAIM_TEXT, &[]).await;

        assert!(report.api_used);
        assert!(!report.fallback_used);
        assert!(report.error.is_none());
        assert_eq!(service.queries.lock().len(), 3);

        assert_eq!(report.claims.len(), 3);
        assert_eq!(report.claims[0].claim, "Officials said the bridge will reopen in May.");
        assert_eq!(report.claims[0].rating, "False");
        assert_eq!(report.claims[1].rating, "Mostly False");

        let defaulted = &report.claims[2];
        assert_eq!(defaulted.claimant, "Unknown");
        assert_eq!(defaulted.rating, "Unverified");
        assert_eq!(defaulted.source, "Unknown");
        assert_eq!(defaulted.explanation, "No explanation provided");
    }

    #[tokio::test]
    async fn test_failed_claim_is_skipped() {
        let service = Arc::new(ScriptedFactChecks::new(vec![
            Err(CredenceError::ServiceStatus { service: "Fact Check API", status: 503 }),
            Ok(vec![review("True")]),
        ]));
        let report = checker().with_fact_check_service(service).check_facts(CLAIM_TEXT, &[]).await;

        assert!(!report.fallback_used);
        assert_eq!(report.claims.len(), 1);
        assert_eq!(report.claims[0].claim, "Unemployment fell by 2 percent last year.");
        assert_eq!(report.error.as_deref(), Some("Fact Check API returned status 503"));
    }

    #[tokio::test]
    async fn test_all_failures_fall_back() {
        let failure = || Err(CredenceError::ServiceStatus { service: "Fact Check API", status: 500 });
        let service = Arc::new(ScriptedFactChecks::new(vec![failure(), failure(), failure()]));
        let report = checker().with_fact_check_service(service).check_facts(CLAIM_TEXT, &[]).await;

        assert!(report.api_used);
        assert!(report.fallback_used);
        assert_eq!(report.claims.len(), 3);
    }

    #[tokio::test]
    async fn test_no_matches_without_errors_stays_empty() {
        let service = Arc::new(ScriptedFactChecks::new(Vec::new()));
        let report = checker().with_fact_check_service(service).check_facts(CLAIM_TEXT, &[]).await;

        assert!(report.claims.is_empty());
        assert!(!report.fallback_used);
    }

    #[tokio::test]
    async fn test_no_keywords_no_sources() {
        assert!(checker().find_alternative_sources(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn test_news_results_deduplicated_newest_first() {
        let news = FixedNews::new(Ok(vec![
            article("Reuters", "2024-03-01T10:00:00Z"),
            article("NPR", "2024-03-05T09:00:00Z"),
            article("Reuters", "2024-03-06T09:00:00Z"),
            article("BBC News", "2024-02-20T09:00:00Z"),
            article("Time", "2024-01-01T09:00:00Z"),
        ]));
        let sources = checker()
            .with_news_service(Arc::new(news))
            .find_alternative_sources(&keywords(&["budget", "council", "vote", "city"]))
            .await;

        let outlets: Vec<&str> = sources.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(outlets, vec!["Reuters", "NPR", "BBC News"]);
        assert_eq!(sources[0].published, "Mar 06, 2024");
    }

    #[tokio::test]
    async fn test_news_search_asks_for_configured_count() {
        let news = Arc::new(FixedNews::new(Ok(vec![article("Reuters", "2024-03-01T10:00:00Z")])));
        let config = FactCheckConfig::builder().alternative_source_count(5).build();
        FactChecker::new(config)
            .with_simulator(Arc::new(Simulator::with_seed(3)))
            .with_news_service(news.clone())
            .find_alternative_sources(&keywords(&["budget"]))
            .await;

        assert_eq!(*news.requested.lock(), vec![5]);
    }

    #[tokio::test]
    async fn test_news_failure_falls_back() {
        let news = FixedNews::new(Err(CredenceError::Dataset(String::new())));
        let sources = checker()
            .with_news_service(Arc::new(news))
            .find_alternative_sources(&keywords(&["budget", "council"]))
            .await;

        assert_eq!(sources.len(), 2);
        assert!(sources.iter().all(|s| s.url == "#"));
    }

    #[tokio::test]
    async fn test_empty_news_falls_back() {
        let sources = checker()
            .with_news_service(Arc::new(FixedNews::new(Ok(Vec::new()))))
            .find_alternative_sources(&keywords(&["budget"]))
            .await;

        assert_eq!(sources.len(), 1);
        assert!(sources[0].title.ends_with("budget"));
    }

    #[test]
    fn test_format_published() {
        assert_eq!(format_published("2024-01-05T08:30:00Z"), "Jan 05, 2024");
        assert_eq!(format_published("yesterday"), "yesterday");
        assert_eq!(format_published(""), "");
    }
}
